// src/gui/actions/records.rs
use crate::{
    cat::{CatDraft, CatPatch},
    config::state::EditState,
    gui::app::{App, Pending},
};

pub fn save_new(app: &mut App) {
    let cat = match app.state.gui.draft.build() {
        Ok(c) => c,
        Err(missing) => {
            logd!("UI: Add rejected, missing {:?}", missing.0);
            app.status(missing.to_string());
            return;
        }
    };

    let name = cat.display_name.clone();
    match app.store.create(cat) {
        Ok(()) => {
            logf!("Store: Added {}", name);
            app.state.gui.draft.clear();
            app.reload();
            app.status("Cat added successfully!");
        }
        Err(e) => {
            loge!("Store: Add failed: {}", e);
            app.status(format!("Error saving cat: {e}"));
        }
    }
}

pub fn start_edit(app: &mut App, id: &str) {
    match app.cats.iter().find(|c| c.id == id) {
        Some(cat) => {
            logd!("UI: Edit {}", id);
            app.state.gui.editing = Some(EditState { id: s!(id), draft: CatDraft::from_cat(cat) });
        }
        None => app.status("That cat no longer exists"),
    }
}

pub fn cancel_edit(app: &mut App) {
    app.state.gui.editing = None;
}

pub fn save_edit(app: &mut App) {
    let Some(edit) = app.state.gui.editing.as_ref() else { return };

    let missing = edit.draft.missing_fields();
    if !missing.is_empty() {
        app.status(format!("Please fill in required fields ({})", missing.join(", ")));
        return;
    }

    let id = edit.id.clone();
    let patch = CatPatch::from_draft(&edit.draft);
    match app.store.update(&id, &patch) {
        Ok(()) => {
            logf!("Store: Updated {}", id);
            app.state.gui.editing = None;
            app.reload();
            app.status("Cat updated successfully!");
        }
        Err(e) => {
            loge!("Store: Update failed {}: {}", id, e);
            app.status(format!("Error updating cat: {e}"));
        }
    }
}

pub fn request_delete(app: &mut App, id: String, name: String) {
    app.pending = Some(Pending::Delete { id, name });
}

pub fn delete(app: &mut App, id: &str) {
    match app.store.delete(id) {
        Ok(()) => {
            logf!("Store: Deleted {}", id);
            if app.state.gui.editing.as_ref().is_some_and(|e| e.id == id) {
                app.state.gui.editing = None;
            }
            app.reload();
            app.status("Cat deleted");
        }
        Err(e) => {
            loge!("Store: Delete failed {}: {}", id, e);
            app.status(format!("Error deleting cat: {e}"));
        }
    }
}
