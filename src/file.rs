// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::cat::Cat;
use crate::config::options::ExportOptions;
use crate::csv;

/// Write the tracker CSV for `cats` to the path implied by `export`.
/// Returns the final path written to.
pub fn export_cats(export: &ExportOptions, cats: &[Cat]) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path(Local::now().date_naive());
    write_text(&path, &csv::to_csv(cats))?;
    logf!("Export: wrote {} cats → {}", cats.len(), path.display());
    Ok(path)
}

/// Read a whole text file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.is_file() {
        return Err(format!("Not a file: {}", path.display()).into());
    }
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Create parent dirs as needed, then create/truncate and write.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
