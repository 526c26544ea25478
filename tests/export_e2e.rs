// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use cat_tracker::cat::Cat;
use cat_tracker::config::options::AppOptions;
use cat_tracker::file;
use cat_tracker::import;
use cat_tracker::store::{CatStore, MemoryStorage};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cat_tracker_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn cat(id: &str, name: &str) -> Cat {
    Cat {
        id: id.into(),
        external_code: format!("CAT{id}"),
        display_name: name.into(),
        owner_name: "Jane Doe".into(),
        additional_notes: "likes boxes, hates baths".into(),
        created_at: "2024-03-09T12:00:00.000Z".into(),
        ..Default::default()
    }
}

#[test]
fn export_to_directory_uses_dated_name() {
    let dir = tmp_dir("dated");
    let mut opts = AppOptions::default();
    opts.export.set_path(&format!("{}/", dir.display()));

    let written = file::export_cats(&opts.export, &[cat("1", "Mochi")]).unwrap();
    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("cats-export-"));
    assert!(name.ends_with(".csv"));
    assert_eq!(name.len(), "cats-export-YYYY-MM-DD.csv".len());
    assert!(written.starts_with(&dir));
}

#[test]
fn export_creates_parents_and_reimports() {
    let dir = tmp_dir("reimport");
    let target = dir.join("nested").join("backup.csv");
    let mut opts = AppOptions::default();
    opts.export.set_path(target.to_str().unwrap());

    let cats = vec![cat("1", "Mochi"), cat("2", "Tofu")];
    let written = file::export_cats(&opts.export, &cats).unwrap();
    assert_eq!(written, target);

    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("9", "Old")]).unwrap();
    let outcome = import::import_csv_file(&store, &written).unwrap();
    assert_eq!(outcome.added, 2);
    assert_eq!(store.list_all(), cats);
}

#[test]
fn importing_a_missing_file_is_a_read_error() {
    let dir = tmp_dir("missing");
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("1", "Mochi")]).unwrap();

    let err = import::import_csv_file(&store, &dir.join("nope.csv")).unwrap_err();
    assert!(err.to_string().starts_with("Error importing CSV"));
    assert_eq!(store.list_all().len(), 1);
}
