// src/gui/components/cat_form.rs
//
// The record form, shared by the Add tab and the inline editor.

use eframe::egui;

use crate::cat::{CatDraft, DEFAULT_SPRITES};

const LABEL_W: f32 = 150.0;

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(f32::INFINITY));
    ui.end_row();
}

fn area_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}

/// Draws the fields. Returns true if anything was edited this frame.
pub fn draw(ui: &mut egui::Ui, draft: &mut CatDraft, id_salt: &str) -> bool {
    let before = draft.clone();

    egui::Grid::new(("cat_form", id_salt))
        .num_columns(2)
        .min_col_width(LABEL_W)
        .spacing([12.0, 8.0])
        .striped(false)
        .show(ui, |ui| {
            text_row(ui, "Cat ID *", &mut draft.external_code, "e.g. CAT001");
            text_row(ui, "Cat Name *", &mut draft.display_name, "e.g. Mochi");
            text_row(ui, "Owner Full Name *", &mut draft.owner_name, "e.g. Jane Doe");
            area_row(ui, "Physical Description", &mut draft.physical_description, "Color, markings, size…");
            area_row(ui, "Medical Notes", &mut draft.medical_notes, "Vaccinations, conditions…");
            area_row(ui, "Additional Notes", &mut draft.additional_notes, "Temperament, habits…");

            ui.label("Sprite");
            let shown = if draft.sprite_reference.is_empty() { "(default)" } else { draft.sprite_reference.as_str() };
            egui::ComboBox::from_id_salt(("sprite", id_salt))
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.sprite_reference, s!(), "(default)");
                    for sprite in DEFAULT_SPRITES {
                        ui.selectable_value(&mut draft.sprite_reference, s!(*sprite), *sprite);
                    }
                });
            ui.end_row();

            text_row(ui, "Photo URL", &mut draft.photo_reference, "https://… or leave blank");
        });

    *draft != before
}
