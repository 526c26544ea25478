// src/gui/pages/view_cats.rs
use eframe::egui;

use crate::{
    config::state::PageKind,
    gui::{
        actions,
        app::App,
        components::{cat_form, cat_table, transfer_bar},
    },
    view::SORT_KEYS,
};

use super::Page;

pub struct ViewCatsPage;
pub static PAGE: ViewCatsPage = ViewCatsPage;

fn draw_editor(ui: &mut egui::Ui, app: &mut App) {
    let Some(edit) = app.state.gui.editing.as_mut() else { return };

    let mut save = false;
    let mut cancel = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(format!("Editing {}", edit.draft.display_name));
        cat_form::draw(ui, &mut edit.draft, "edit");
        ui.horizontal(|ui| {
            save = ui.button("Save Changes").clicked();
            cancel = ui.button("Cancel").clicked();
        });
    });

    if save {
        actions::save_edit(app);
    } else if cancel {
        actions::cancel_edit(app);
    }
}

impl Page for ViewCatsPage {
    fn kind(&self) -> PageKind { PageKind::ViewCats }
    fn title(&self) -> &'static str { "View Cats" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Search:");
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut app.state.gui.search_query)
                        .hint_text("name, physical or medical")
                        .desired_width(240.0),
                )
                .changed();

            ui.label("Sort:");
            let sort = &mut app.state.gui.sort;
            let before = *sort;
            egui::ComboBox::from_id_salt("sort")
                .selected_text(sort.label())
                .show_ui(ui, |ui| {
                    for key in SORT_KEYS {
                        ui.selectable_value(sort, key, key.label());
                    }
                });
            if *sort != before {
                logf!("UI: Sort → {}", sort.key());
                changed = true;
            }

            ui.label(format!("{} of {} cats", app.row_ix.len(), app.cats.len()));
        });

        if changed {
            app.rebuild_view();
        }

        ui.separator();
        transfer_bar::draw(ui, app);
        ui.separator();

        draw_editor(ui, app);
        if app.state.gui.editing.is_some() {
            ui.separator();
        }

        cat_table::draw(ui, app);
    }
}
