// tests/store_merge.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cat_tracker::cat::{Cat, CatPatch};
use cat_tracker::csv::to_csv;
use cat_tracker::import::{self, ImportError};
use cat_tracker::shelter::{Animal, AnimalSource, parse_response};
use cat_tracker::store::{CatStore, JsonFileStorage, MemoryStorage};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cat_tracker_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn cat(id: &str, name: &str) -> Cat {
    Cat {
        id: id.into(),
        external_code: format!("CODE-{id}"),
        display_name: name.into(),
        owner_name: "Jane".into(),
        created_at: "2024-01-01T00:00:00.000Z".into(),
        ..Default::default()
    }
}

fn ids(store: &CatStore<MemoryStorage>) -> Vec<String> {
    store.list_all().into_iter().map(|c| c.id).collect()
}

struct FixedSource(Vec<Animal>);

impl AnimalSource for FixedSource {
    fn fetch_animals(&self) -> Result<Vec<Animal>, Box<dyn Error>> {
        Ok(self.0.clone())
    }
}

struct DownSource;

impl AnimalSource for DownSource {
    fn fetch_animals(&self) -> Result<Vec<Animal>, Box<dyn Error>> {
        Err("HTTP error! status: 503 Service Unavailable".into())
    }
}

fn shelter_source() -> FixedSource {
    let body = r#"{"response":[
        {"AnimalId":501,"Name":"Pepper","AnimalType":"Cat","Sex":"Female"},
        {"AnimalId":502,"Name":"Rex","AnimalType":"Dog"}
    ]}"#;
    FixedSource(parse_response(body).unwrap())
}

#[test]
fn file_import_overwrites() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha"), cat("B", "Beta")]).unwrap();

    let text = to_csv(&[cat("C", "Gamma"), cat("D", "Delta")]);
    let outcome = import::import_csv_text(&store, &text).unwrap();

    assert_eq!(outcome.added, 2);
    assert_eq!(ids(&store), vec!["C", "D"]);
}

#[test]
fn file_import_fills_missing_identity() {
    let store = CatStore::new(MemoryStorage::new());
    import::import_csv_text(&store, "catId,catName,ownerFullName\nX1,Mochi,Jane").unwrap();

    let all = store.list_all();
    assert_eq!(all.len(), 1);
    assert!(!all[0].id.is_empty());
    assert!(all[0].created_at.ends_with('Z'));
}

#[test]
fn header_only_csv_leaves_store_alone() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha")]).unwrap();

    let err = import::import_csv_text(&store, &to_csv(&[])).unwrap_err();
    assert!(matches!(err, ImportError::NoCsvRecords));
    assert_eq!(err.to_string(), "No valid cats found in CSV");
    assert_eq!(ids(&store), vec!["A"]);
}

#[test]
fn shelter_import_appends_with_prefixes_and_duplicates() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha"), cat("B", "Beta")]).unwrap();

    let source = shelter_source();
    let outcome = import::import_from_shelter(&store, &source).unwrap();
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.total, 3);

    let all = store.list_all();
    assert_eq!(all[0].id, "A");
    assert_eq!(all[1].id, "B");
    let e = &all[2];
    assert!(e.id.starts_with("shelter-501-"));
    assert_eq!(e.external_code, "SHELTER-501");
    assert_eq!(e.owner_name, "Shelter");
    assert_eq!(e.display_name, "Pepper");

    // no dedup: a second run appends the same cat again
    import::import_from_shelter(&store, &source).unwrap();
    let all = store.list_all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[3].external_code, "SHELTER-501");
    assert_ne!(all[2].id, all[3].id);
}

#[test]
fn shelter_failures_leave_store_alone() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha")]).unwrap();

    let err = import::import_from_shelter(&store, &FixedSource(Vec::new())).unwrap_err();
    assert_eq!(err.to_string(), "No cats found from shelter API");

    let err = import::import_from_shelter(&store, &DownSource).unwrap_err();
    assert!(matches!(err, ImportError::Fetch(_)));

    assert_eq!(ids(&store), vec!["A"]);
}

#[test]
fn unknown_ids_are_no_ops() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha")]).unwrap();
    let before = store.storage().blob();

    let patch = CatPatch { display_name: Some("Zed".into()), ..Default::default() };
    store.update("nonexistent", &patch).unwrap();
    store.delete("nonexistent").unwrap();

    assert_eq!(store.storage().blob(), before);
}

#[test]
fn update_touches_only_patched_fields() {
    let store = CatStore::new(MemoryStorage::new());
    store.replace_all(&[cat("A", "Alpha"), cat("B", "Beta")]).unwrap();

    let patch = CatPatch { medical_notes: Some("vaccinated".into()), ..Default::default() };
    store.update("B", &patch).unwrap();

    let b = store.get("B").unwrap();
    assert_eq!(b.medical_notes, "vaccinated");
    assert_eq!(b.display_name, "Beta");
    assert_eq!(b.created_at, "2024-01-01T00:00:00.000Z");
    assert_eq!(store.get("A").unwrap(), cat("A", "Alpha"));

    store.delete("A").unwrap();
    assert_eq!(ids(&store), vec!["B"]);
}

#[test]
fn json_file_storage_persists_and_reads_legacy_names() {
    let dir = tmp_dir("json_file");
    let store = CatStore::open(&dir);
    store.create(cat("A", "Alpha")).unwrap();
    assert!(dir.join("retro-chibi-cats.json").is_file());

    // a fresh handle on the same dir sees the write
    assert_eq!(CatStore::open(&dir).list_all(), vec![cat("A", "Alpha")]);

    // blob written by the browser version
    let legacy = r#"[{"id":"7","catId":"CAT007","catName":"Tofu","ownerFullName":"Sam",
        "medical":null,"photoDataURL":"data:image/png;base64,AAAA","createdAt":"2023-05-01T00:00:00.000Z"}]"#;
    let storage = JsonFileStorage::new(&dir);
    fs::write(storage.path(), legacy).unwrap();

    let all = CatStore::new(storage).list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].external_code, "CAT007");
    assert_eq!(all[0].display_name, "Tofu");
    assert_eq!(all[0].owner_name, "Sam");
    assert_eq!(all[0].medical_notes, "");
    assert!(all[0].has_photo());
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tmp_dir("corrupt");
    let storage = JsonFileStorage::new(&dir);
    fs::write(storage.path(), "[{\"id\": ").unwrap();
    assert!(CatStore::new(storage).list_all().is_empty());
}

#[test]
fn legacy_record_with_both_photo_keys_survives_a_write() {
    let legacy = r#"[
        {"id":"1","catId":"CAT001","catName":"Mochi","ownerFullName":"Jane",
         "photoDataURL":"data:image/png;base64,AAAA","photoUrl":"https://photos.example/m.jpg",
         "createdAt":"2023-05-01T00:00:00.000Z"},
        {"id":"2","catId":"CAT002","catName":"Tofu","ownerFullName":"Sam",
         "photoUrl":"https://photos.example/t.jpg","createdAt":"2023-05-02T00:00:00.000Z"}
    ]"#;
    let store = CatStore::new(MemoryStorage::with_blob(legacy));

    let all = store.list_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].photo_reference, "data:image/png;base64,AAAA");
    assert_eq!(all[1].photo_reference, "https://photos.example/t.jpg");

    store.create(cat("3", "Pepper")).unwrap();
    let all = store.list_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].display_name, "Mochi");
    assert_eq!(all[1].display_name, "Tofu");

    let blob = store.storage().blob().unwrap();
    assert!(blob.contains("\"photoReference\":\"data:image/png;base64,AAAA\""));
    assert!(!blob.contains("photoUrl"));
}
