// src/gui/router.rs
use crate::config::state::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::add_cat::PAGE,
    &pages::view_cats::PAGE,
    &pages::statistics::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        AddCat     => &pages::add_cat::PAGE,
        ViewCats   => &pages::view_cats::PAGE,
        Statistics => &pages::statistics::PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_routes_to_its_page() {
        for page in all_pages() {
            assert_eq!(page_for(page.kind()).kind(), page.kind());
        }
        assert_eq!(all_pages().len(), 3);
    }
}
