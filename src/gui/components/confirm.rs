// src/gui/components/confirm.rs
//
// Modal-ish confirmation for delete and CSV import.

use eframe::egui;

use crate::gui::{actions, app::{App, Pending}};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(pending) = app.pending.clone() else { return };

    let (title, question) = match &pending {
        Pending::Delete { name, .. } => ("Delete cat", format!("Are you sure you want to delete {name}?")),
        Pending::ImportCsv => (
            "Import CSV",
            s!("This will replace all existing cats. Continue?"),
        ),
    };

    let mut answer: Option<bool> = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(question);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() { answer = Some(true); }
                if ui.button("Cancel").clicked() { answer = Some(false); }
            });
        });

    match answer {
        Some(true) => {
            app.pending = None;
            match pending {
                Pending::Delete { id, .. } => actions::delete(app, &id),
                Pending::ImportCsv => actions::import_csv(app),
            }
        }
        Some(false) => {
            logd!("UI: {:?} cancelled", pending);
            app.pending = None;
        }
        None => {}
    }
}
