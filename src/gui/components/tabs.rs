// src/gui/components/tabs.rs
//
// Top tab strip. Switching only flips the active page; each page reloads
// what it needs in `on_enter`.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.heading("🐱 Cat Tracker");
        ui.separator();

        let cur = app.state.gui.current_page;
        for page in router::all_pages() {
            let selected = page.kind() == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                app.switch_page(page.kind());
            }
        }
    });
}
