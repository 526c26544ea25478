// src/gui/components/transfer_bar.rs
//
// Export / import controls on the View tab, plus the shelter buttons.

use eframe::egui;

use crate::gui::{actions, app::{App, Pending}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("transfer_bar")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Export to:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.export_path_text)
                    .hint_text("cats-export-YYYY-MM-DD.csv (file or folder/)")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(360.0),
            );
            if ui.button("Export CSV").clicked() {
                actions::export(app);
            }
            ui.end_row();

            ui.label("Import from:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.import_path_text)
                    .hint_text("path/to/cats.csv")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(360.0),
            );
            let can_import = !app.state.gui.import_path_text.trim().is_empty();
            if ui
                .add_enabled(can_import, egui::Button::new("Import CSV"))
                .on_hover_text("Replaces all current cats")
                .clicked()
            {
                app.pending = Some(Pending::ImportCsv);
            }
            ui.end_row();
        });

    ui.horizontal(|ui| {
        if ui
            .button("Import Shelter Cats")
            .on_hover_text("Adds the shelter's available cats to your list")
            .clicked()
        {
            actions::import_shelter(app);
        }
        if ui
            .button("Scrape Shelter Photos")
            .on_hover_text(format!(
                "Writes {} and saves photos into {}/",
                app.state.options.scrape.manifest.display(),
                app.state.options.scrape.image_dir.display()
            ))
            .clicked()
        {
            actions::scrape_photos(app);
        }
    });
}
