// src/gui/components/cat_table.rs
//
// The cat list. Purely a view over `app.cats` / `app.row_ix`; row buttons are
// collected during the draw and acted on afterwards.

use chrono::{DateTime, Local};
use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{cat, gui::{actions, app::App}};

const HEADERS: [&str; 9] =
    ["Sprite", "Cat ID", "Name", "Owner", "Physical", "Medical", "Photo", "Added", ""];
const WIDTHS: [f32; 9] = [130.0, 90.0, 120.0, 140.0, 160.0, 160.0, 50.0, 90.0, 110.0];

enum RowAction {
    Edit(String),
    Delete(String, String),
}

/// `createdAt` as a local date; raw text if it doesn't parse.
pub fn added_label(stamp: &str) -> String {
    match DateTime::parse_from_rfc3339(stamp.trim()) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        Err(_) => s!(stamp),
    }
}

fn photo_hover(reference: &str) -> String {
    if cat::is_inline_image(reference) { s!("inline image") } else { s!(reference) }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.row_ix.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let msg = if app.cats.is_empty() { "No cats added yet" } else { "No cats match your search" };
            ui.label(RichText::new(msg).italics());
        });
        return;
    }

    let mut action: Option<RowAction> = None;

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .auto_shrink([false, false]);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    let cats = &app.cats;
    let row_ix = &app.row_ix;

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(24.0, row_ix.len(), |mut row| {
                let Some(c) = row_ix.get(row.index()).and_then(|&i| cats.get(i)) else { return };

                let cells = [
                    c.sprite(),
                    c.external_code.as_str(),
                    c.display_name.as_str(),
                    c.owner_name.as_str(),
                    c.physical_description.as_str(),
                    c.medical_notes.as_str(),
                ];
                for text in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(text).on_hover_text(text);
                    });
                }
                row.col(|ui| {
                    if c.has_photo() {
                        ui.label("📷").on_hover_text(photo_hover(&c.photo_reference));
                    }
                });
                row.col(|ui| { ui.label(added_label(&c.created_at)); });
                row.col(|ui| {
                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            action = Some(RowAction::Edit(c.id.clone()));
                        }
                        if ui.small_button("Delete").clicked() {
                            action = Some(RowAction::Delete(c.id.clone(), c.display_name.clone()));
                        }
                    });
                });
            });
        });

    match action {
        Some(RowAction::Edit(id)) => actions::start_edit(app, &id),
        Some(RowAction::Delete(id, name)) => actions::request_delete(app, id, name),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_label_falls_back_to_raw() {
        assert_eq!(added_label("yesterday-ish"), "yesterday-ish");
        assert_eq!(added_label("2024-03-09T12:00:00.000Z").len(), 10);
    }
}
