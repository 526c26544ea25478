// src/gui/actions/transfer.rs
//
// Bulk moves in and out of the store. All run on the UI thread; the shelter
// calls block until the HTTP client returns or times out.

use std::path::PathBuf;

use crate::{
    file,
    gui::{app::App, progress::GuiProgress},
    import,
    scrape,
    shelter::ShelterClient,
};

pub fn export(app: &mut App) {
    let export = &mut app.state.options.export;
    export.set_path(&app.state.gui.export_path_text);

    match file::export_cats(export, &app.cats) {
        Ok(path) => app.status(format!("CSV exported successfully! ({})", path.display())),
        Err(e) => {
            loge!("Export: failed: {}", e);
            app.status(format!("Error exporting CSV: {e}"));
        }
    }
}

pub fn import_csv(app: &mut App) {
    let path = PathBuf::from(app.state.gui.import_path_text.trim());
    logf!("Import: CSV from {}", path.display());

    match import::import_csv_file(&app.store, &path) {
        Ok(outcome) => {
            app.state.gui.editing = None;
            app.reload();
            app.status(format!("Imported {} cats successfully!", outcome.added));
        }
        Err(e) => app.status(e.to_string()),
    }
}

pub fn import_shelter(app: &mut App) {
    app.status("Fetching shelter cats...");

    let client = match ShelterClient::new(app.state.options.shelter.clone()) {
        Ok(c) => c,
        Err(e) => {
            loge!("Import: HTTP client init failed: {}", e);
            app.status(format!("Error fetching shelter cats: {e}"));
            return;
        }
    };

    match import::import_from_shelter(&app.store, &client) {
        Ok(outcome) => {
            app.reload();
            app.status(format!("Imported {} shelter cats!", outcome.added));
        }
        Err(e) => app.status(e.to_string()),
    }
}

pub fn scrape_photos(app: &mut App) {
    let mut prog = GuiProgress::new(app.status.clone());
    match scrape::run(&app.state.options, Some(&mut prog)) {
        Ok(summary) => {
            logf!("Scrape: OK cats={} photos={}", summary.cats, summary.photos_saved);
            app.status(format!(
                "Saved {} ({} cats, {} photos, {} failed)",
                summary.manifest.display(), summary.cats, summary.photos_saved, summary.photos_failed
            ));
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
