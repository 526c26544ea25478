// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::PageKind;
use crate::gui::app::App;

pub mod add_cat;
pub mod view_cats;
pub mod statistics;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Draw the whole tab body.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    /// Default: pick up changes another process may have written.
    fn on_enter(&self, app: &mut App) {
        app.reload();
    }
}
