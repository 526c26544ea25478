// src/scrape.rs
//
// Shelter photo scraper: list the available cats, save one photo each, and
// write a CSV manifest. Strictly sequential over one shared client; a failed
// photo is logged and skipped (empty `Photo` cell), never retried.

use std::{
    collections::HashSet,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::options::{AppOptions, ScrapeOptions},
    csv::{self, Quoting, SEP},
    file::{ensure_directory, write_text},
    progress::Progress,
    shelter::{self, Animal, AnimalSource, ShelterClient},
};

pub const MANIFEST_HEADERS: [&str; 9] =
    ["AnimalId", "Name", "Type", "Breed", "Age", "Gender", "Location", "Status", "Photo"];

/// Anything that can fetch photo bytes by URL.
pub trait PhotoFetcher {
    fn fetch_photo(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}

impl PhotoFetcher for ShelterClient {
    fn fetch_photo(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        self.download(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub cats: usize,
    pub photos_saved: usize,
    pub photos_failed: usize,
    pub manifest: PathBuf,
}

/// File stem for an API-supplied id: ASCII alphanumerics, `-` and `_`,
/// whitespace collapsed to `_`, everything else dropped.
/// Falls back to `animal_<index>` when nothing usable is left.
pub fn sanitize_file_stem(animal_id: &str, index: usize) -> String {
    let mut out = String::with_capacity(animal_id.len());
    let mut last_us = false;
    for ch in animal_id.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { format!("animal_{}", index) } else { s!(out) }
}

/// `<stem><ext>`, ext taken from the URL.
pub fn photo_file_name(stem: &str, url: &str) -> String {
    join!(stem, shelter::photo_extension(url))
}

/// Stem not yet handed out in this run (compared case-insensitively).
fn unique_stem(used: &mut HashSet<String>, animal_id: &str, index: usize) -> String {
    let mut stem = sanitize_file_stem(animal_id, index);
    if !used.insert(stem.to_ascii_lowercase()) {
        stem = format!("{stem}_{index}");
        used.insert(stem.to_ascii_lowercase());
    }
    stem
}

/// One manifest row; `local_photo` is empty when no photo was saved.
pub fn manifest_row(animal: &Animal, local_photo: &str) -> Vec<String> {
    vec![
        animal.animal_id.clone(),
        animal.name.clone(),
        animal.animal_type.clone(),
        animal.breed.primary.clone(),
        animal.age_label(),
        animal.sex.clone(),
        animal.location.clone(),
        animal.status.clone(),
        s!(local_photo),
    ]
}

/// Every field quoted, `\n`-joined, no trailing newline.
pub fn manifest_text(rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv::format_row(&MANIFEST_HEADERS[..], SEP, Quoting::Always));
    for row in rows {
        lines.push(csv::format_row(row, SEP, Quoting::Always));
    }
    lines.join("\n")
}

fn save_photo(photos: &dyn PhotoFetcher, url: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = photos.fetch_photo(url)?;
    if bytes.is_empty() {
        return Err(format!("Empty body from {url}").into());
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Scrape with the real shelter client.
pub fn run(options: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<ScrapeSummary, Box<dyn Error>> {
    let client = ShelterClient::new(options.shelter.clone())?;
    run_with(&client, &client, &options.scrape, progress)
}

/// Runs the scrape; `progress.finish()` is called on every exit path.
pub fn run_with(
    source: &dyn AnimalSource,
    photos: &dyn PhotoFetcher,
    options: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    let result = scrape_all(source, photos, options, progress.as_deref_mut());
    if let Err(e) = &result {
        loge!("Scrape: aborted: {}", e);
    }
    if let Some(p) = progress {
        p.finish();
    }
    result
}

fn scrape_all(
    source: &dyn AnimalSource,
    photos: &dyn PhotoFetcher,
    options: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching shelter animals…");
    }
    let cats = shelter::fetch_cats(source)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} cats/kittens.", cats.len()));
        p.begin(cats.len());
    }
    if !options.skip_photos {
        ensure_directory(&options.image_dir)?;
    }

    let mut rows = Vec::with_capacity(cats.len());
    let mut used = HashSet::new();
    let mut saved = 0usize;
    let mut failed = 0usize;

    for (index, cat) in cats.iter().enumerate() {
        let mut local_photo = s!();
        let url = if options.skip_photos { None } else { cat.photo_url() };

        if let Some(url) = url {
            let stem = unique_stem(&mut used, &cat.animal_id, index);
            let path = options.image_dir.join(photo_file_name(&stem, &url));
            match save_photo(photos, &url, &path) {
                Ok(()) => {
                    logd!("Scrape: saved {} → {}", url, path.display());
                    local_photo = path.to_string_lossy().into_owned();
                    saved += 1;
                }
                Err(e) => {
                    loge!("Scrape: failed to download {}: {}", url, e);
                    failed += 1;
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&cat.animal_id, &cat.name);
                    }
                    rows.push(manifest_row(cat, &local_photo));
                    continue;
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&cat.animal_id, &cat.name);
        }
        rows.push(manifest_row(cat, &local_photo));
    }

    write_text(&options.manifest, &manifest_text(&rows))?;
    logf!(
        "Scrape: manifest {} (cats={}, photos saved={}, failed={})",
        options.manifest.display(), cats.len(), saved, failed
    );

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Saved {} with images downloaded to {}/",
            options.manifest.display(),
            options.image_dir.display()
        ));
    }

    Ok(ScrapeSummary { cats: cats.len(), photos_saved: saved, photos_failed: failed, manifest: options.manifest.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stems_stay_inside_the_image_dir() {
        assert_eq!(sanitize_file_stem("123", 0), "123");
        assert_eq!(sanitize_file_stem("../escaped", 1), "escaped");
        assert_eq!(sanitize_file_stem("a/b\\c", 2), "abc");
        assert_eq!(sanitize_file_stem("A 12  b", 3), "A_12_b");
        assert_eq!(sanitize_file_stem("", 4), "animal_4");
        assert_eq!(sanitize_file_stem("../..", 5), "animal_5");
    }

    #[test]
    fn repeated_stems_get_the_index() {
        let mut used = HashSet::new();
        assert_eq!(unique_stem(&mut used, "", 0), "animal_0");
        assert_eq!(unique_stem(&mut used, "7", 1), "7");
        assert_eq!(unique_stem(&mut used, "../7", 2), "7_2");
        assert_eq!(photo_file_name("7_2", "https://x/p.PNG"), "7_2.PNG");
    }
}
