// src/store.rs
//
// Record store: the canonical cat list, persisted as one JSON blob.
//
// Every mutation re-reads the whole blob, applies the change and writes the
// whole blob back. There is no in-memory cache, so two front ends sharing a
// store dir see each other's writes (last writer wins).

use std::{
    cell::RefCell,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::cat::{Cat, CatPatch};
use crate::config::consts::STORAGE_KEY;
use crate::file::ensure_directory;

/// Where the blob lives. `load` returns `Ok(None)` when nothing was saved yet.
pub trait Storage {
    fn load(&self) -> Result<Option<String>, Box<dyn Error>>;
    fn save(&self, blob: &str) -> Result<(), Box<dyn Error>>;
}

/// `<dir>/<key>.json` on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self { path: dir.as_ref().join(format!("{key}.json")) }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<String>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn save(&self, blob: &str) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory blob, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }

    /// Start from a raw blob (may be invalid JSON on purpose).
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: RefCell::new(Some(blob.into())) }
    }

    pub fn blob(&self) -> Option<String> { self.blob.borrow().clone() }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), Box<dyn Error>> {
        *self.blob.borrow_mut() = Some(s!(blob));
        Ok(())
    }
}

pub struct CatStore<S: Storage> {
    storage: S,
}

impl CatStore<JsonFileStorage> {
    /// Store backed by `<dir>/retro-chibi-cats.json`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(JsonFileStorage::new(dir))
    }
}

impl<S: Storage> CatStore<S> {
    pub fn new(storage: S) -> Self { Self { storage } }

    pub fn storage(&self) -> &S { &self.storage }

    /// All records in insertion order. Missing or unreadable data is logged
    /// and reads as an empty list.
    pub fn list_all(&self) -> Vec<Cat> {
        let blob = match self.storage.load() {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                loge!("Store: load failed: {}", e);
                return Vec::new();
            }
        };
        if blob.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Vec<Cat>>(&blob) {
            Ok(cats) => cats,
            Err(e) => {
                loge!("Store: unparseable blob ({} bytes): {}", blob.len(), e);
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Cat> {
        self.list_all().into_iter().find(|c| c.id == id)
    }

    /// Append one record. Duplicate ids are not checked.
    pub fn create(&self, cat: Cat) -> Result<(), Box<dyn Error>> {
        let mut cats = self.list_all();
        logd!("Store: create id={} code={}", cat.id, cat.external_code);
        cats.push(cat);
        self.replace_all(&cats)
    }

    /// Apply `patch` to the record with `id`. Unknown id is a no-op.
    pub fn update(&self, id: &str, patch: &CatPatch) -> Result<(), Box<dyn Error>> {
        let mut cats = self.list_all();
        let Some(cat) = cats.iter_mut().find(|c| c.id == id) else {
            logd!("Store: update skipped, no id={}", id);
            return Ok(());
        };
        patch.apply(cat);
        logd!("Store: update id={}", id);
        self.replace_all(&cats)
    }

    /// Remove the record with `id`. Unknown id is a no-op.
    pub fn delete(&self, id: &str) -> Result<(), Box<dyn Error>> {
        let mut cats = self.list_all();
        let before = cats.len();
        cats.retain(|c| c.id != id);
        if cats.len() == before {
            logd!("Store: delete skipped, no id={}", id);
            return Ok(());
        }
        logd!("Store: delete id={}", id);
        self.replace_all(&cats)
    }

    /// Overwrite the whole collection.
    pub fn replace_all(&self, cats: &[Cat]) -> Result<(), Box<dyn Error>> {
        let blob = serde_json::to_string(cats)?;
        self.storage.save(&blob).map_err(|e| {
            loge!("Store: save failed: {}", e);
            e
        })
    }
}
