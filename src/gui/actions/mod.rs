// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{save_new, export, ...}.

mod records;   // src/gui/actions/records.rs
mod transfer;  // src/gui/actions/transfer.rs

pub use records::{cancel_edit, delete, request_delete, save_edit, save_new, start_edit};
pub use transfer::{export, import_csv, import_shelter, scrape_photos};
