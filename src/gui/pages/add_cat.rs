// src/gui/pages/add_cat.rs
use eframe::egui;

use crate::{
    config::state::PageKind,
    gui::{actions, app::App, components::cat_form},
};

use super::Page;

pub struct AddCatPage;
pub static PAGE: AddCatPage = AddCatPage;

impl Page for AddCatPage {
    fn kind(&self) -> PageKind { PageKind::AddCat }
    fn title(&self) -> &'static str { "Add Cat" }

    // The draft survives tab switches; nothing to reload.
    fn on_enter(&self, _app: &mut App) {}

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Add New Cat");
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            cat_form::draw(ui, &mut app.state.gui.draft, "add");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Save Cat").clicked() {
                    actions::save_new(app);
                }
                if ui.button("Clear Form").clicked() {
                    app.state.gui.draft.clear();
                    logd!("UI: Add form cleared");
                }
            });
            ui.label(egui::RichText::new("* required").small().weak());
        });
    }
}
