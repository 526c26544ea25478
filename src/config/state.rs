// src/config/state.rs
use super::options::AppOptions;
use crate::cat::CatDraft;
use crate::view::SortKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    AddCat,
    ViewCats,
    Statistics,
}

/// An in-progress edit of one stored record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    pub id: String,
    pub draft: CatDraft,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_page: PageKind,

    /// Add form contents; survive tab switches until saved or cleared
    pub draft: CatDraft,

    /// View tab: search box + sort selector
    pub search_query: String,
    pub sort: SortKey,

    /// View tab: record being edited, if any
    pub editing: Option<EditState>,

    /// View tab: import/export path fields
    pub import_path_text: String,
    pub export_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page: PageKind::AddCat,
            draft: CatDraft::default(),
            search_query: s!(),
            sort: SortKey::default(),
            editing: None,
            import_path_text: s!(),
            export_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
