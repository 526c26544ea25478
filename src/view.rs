// src/view.rs
//
// Search and sort for the cat list. Purely derived: takes the stored
// records, returns the order to show them in. Never touches the store.

use std::cmp::Ordering;

use crate::cat::Cat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    OwnerAsc,
    OwnerDesc,
    #[default]
    NewestFirst,
    OldestFirst,
}

pub const SORT_KEYS: [SortKey; 6] = [
    SortKey::NameAsc,
    SortKey::NameDesc,
    SortKey::OwnerAsc,
    SortKey::OwnerDesc,
    SortKey::NewestFirst,
    SortKey::OldestFirst,
];

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc     => "Name (A-Z)",
            SortKey::NameDesc    => "Name (Z-A)",
            SortKey::OwnerAsc    => "Owner (A-Z)",
            SortKey::OwnerDesc   => "Owner (Z-A)",
            SortKey::NewestFirst => "Newest First",
            SortKey::OldestFirst => "Oldest First",
        }
    }

    /// `field-order` form, e.g. `catName-asc`.
    pub fn key(self) -> &'static str {
        match self {
            SortKey::NameAsc     => "catName-asc",
            SortKey::NameDesc    => "catName-desc",
            SortKey::OwnerAsc    => "ownerFullName-asc",
            SortKey::OwnerDesc   => "ownerFullName-desc",
            SortKey::NewestFirst => "createdAt-desc",
            SortKey::OldestFirst => "createdAt-asc",
        }
    }

    pub fn parse(s: &str) -> Option<SortKey> {
        let s = s.trim();
        SORT_KEYS.iter().copied().find(|k| k.key().eq_ignore_ascii_case(s))
    }

    fn field(self, cat: &Cat) -> &str {
        match self {
            SortKey::NameAsc | SortKey::NameDesc => &cat.display_name,
            SortKey::OwnerAsc | SortKey::OwnerDesc => &cat.owner_name,
            SortKey::NewestFirst | SortKey::OldestFirst => &cat.created_at,
        }
    }

    fn descending(self) -> bool {
        matches!(self, SortKey::NameDesc | SortKey::OwnerDesc | SortKey::NewestFirst)
    }

    pub fn compare(self, a: &Cat, b: &Cat) -> Ordering {
        let ord = compare_text(self.field(a), self.field(b));
        if self.descending() { ord.reverse() } else { ord }
    }
}

/// Case-insensitive first, then exact, so "alice" and "Alice" sit together
/// but the order is still total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Case-insensitive substring match on name, physical and medical text.
/// A blank query matches everything.
pub fn matches(cat: &Cat, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    [&cat.display_name, &cat.physical_description, &cat.medical_notes]
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
}

/// Indices into `cats` that pass the query, in display order.
/// The sort is stable, so ties keep stored order.
pub fn filter_sorted(cats: &[Cat], query: &str, sort: SortKey) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..cats.len()).filter(|&i| matches(&cats[i], query)).collect();
    ix.sort_by(|&a, &b| sort.compare(&cats[a], &cats[b]));
    ix
}
