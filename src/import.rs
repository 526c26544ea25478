// src/import.rs
//
// The two ways records enter the store in bulk, with deliberately different
// merge rules:
// - CSV file import overwrites the whole collection.
// - Shelter import appends to it, without dedup.
//
// Either path leaves the store untouched when it yields zero records.

use std::{error::Error, fmt, path::Path};

use crate::cat::Cat;
use crate::csv;
use crate::file;
use crate::shelter::{self, AnimalSource};
use crate::store::{CatStore, Storage};

#[derive(Debug)]
pub enum ImportError {
    /// The CSV had no data rows.
    NoCsvRecords,
    /// The shelter returned no cats.
    NoShelterCats,
    /// The import file could not be read.
    Read(Box<dyn Error>),
    /// Request failed, non-success status, or unparseable body.
    Fetch(Box<dyn Error>),
    /// The merged collection could not be written.
    Save(Box<dyn Error>),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::NoCsvRecords  => write!(f, "No valid cats found in CSV"),
            ImportError::NoShelterCats => write!(f, "No cats found from shelter API"),
            ImportError::Read(e)       => write!(f, "Error importing CSV: {e}"),
            ImportError::Fetch(e)      => write!(f, "Error fetching shelter cats: {e}"),
            ImportError::Save(e)       => write!(f, "Error saving cats: {e}"),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Records that came in from the source
    pub added: usize,
    /// Store size afterwards
    pub total: usize,
}

/// Parse CSV text and, if it holds any rows, replace the store with them.
/// Rows without an id or timestamp get fresh ones.
pub fn import_csv_text<S: Storage>(store: &CatStore<S>, text: &str) -> Result<ImportOutcome, ImportError> {
    let mut cats = csv::from_csv(text);
    if cats.is_empty() {
        logd!("Import: CSV produced no rows");
        return Err(ImportError::NoCsvRecords);
    }
    cats.iter_mut().for_each(Cat::ensure_identity);

    store.replace_all(&cats).map_err(ImportError::Save)?;
    logf!("Import: CSV replaced store with {} cats", cats.len());
    Ok(ImportOutcome { added: cats.len(), total: cats.len() })
}

pub fn import_csv_file<S: Storage>(store: &CatStore<S>, path: &Path) -> Result<ImportOutcome, ImportError> {
    let text = file::read_text(path).map_err(|e| {
        loge!("Import: read {} failed: {}", path.display(), e);
        ImportError::Read(e)
    })?;
    import_csv_text(store, &text)
}

/// Append already-converted external records to the store.
pub fn append_external<S: Storage>(store: &CatStore<S>, incoming: Vec<Cat>) -> Result<ImportOutcome, ImportError> {
    if incoming.is_empty() {
        return Err(ImportError::NoShelterCats);
    }
    let added = incoming.len();
    let mut cats = store.list_all();
    cats.extend(incoming);

    store.replace_all(&cats).map_err(ImportError::Save)?;
    logf!("Import: appended {} shelter cats (total {})", added, cats.len());
    Ok(ImportOutcome { added, total: cats.len() })
}

/// Fetch cats from the shelter and append them as prefixed records.
pub fn import_from_shelter<S: Storage>(
    store: &CatStore<S>,
    source: &dyn AnimalSource,
) -> Result<ImportOutcome, ImportError> {
    let animals = shelter::fetch_cats(source).map_err(|e| {
        loge!("Import: shelter fetch failed: {}", e);
        ImportError::Fetch(e)
    })?;
    let incoming: Vec<Cat> = animals.iter().map(|a| a.to_cat()).collect();
    append_external(store, incoming)
}
