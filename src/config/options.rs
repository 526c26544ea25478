// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub tracker: TrackerOptions,
    pub shelter: ShelterOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, with the store dir taken from the environment when set.
    pub fn from_env() -> Self {
        Self {
            tracker: TrackerOptions::from_env(),
            ..Self::default()
        }
    }
}

/// Where the record blob (and the debug log) live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerOptions {
    pub store_dir: PathBuf,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self { store_dir: PathBuf::from(STORE_DIR) }
    }
}

impl TrackerOptions {
    pub fn from_env() -> Self {
        match std::env::var(STORE_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self { store_dir: PathBuf::from(dir.trim()) },
            _ => Self::default(),
        }
    }
}

/// Shelter listing endpoint and the locations queried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShelterOptions {
    pub api_url: String,
    pub locations: Vec<String>,
}

impl Default for ShelterOptions {
    fn default() -> Self {
        Self {
            api_url: s!(SHELTER_API_URL),
            locations: SHELTER_LOCATIONS.iter().map(|l| s!(*l)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Manifest CSV path
    pub manifest: PathBuf,
    /// Directory the photos are written into
    pub image_dir: PathBuf,
    /// Skip photo downloads, only write the manifest
    pub skip_photos: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            skip_photos: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Explicit target. `None` means the dated default in the working dir.
    pub path: Option<PathBuf>,
}

impl ExportOptions {
    /// `cats-export-YYYY-MM-DD.csv`
    pub fn default_file_name(date: NaiveDate) -> String {
        format!("{EXPORT_STEM}-{}.csv", date.format("%Y-%m-%d"))
    }

    /// Resolve the export target. A directory (existing, or hinted by a
    /// trailing separator) gets the dated default file name inside it.
    pub fn out_path(&self, today: NaiveDate) -> PathBuf {
        let file_name = Self::default_file_name(today);
        match &self.path {
            None => PathBuf::from(file_name),
            Some(p) if looks_like_dir(p) => p.join(file_name),
            Some(p) => p.clone(),
        }
    }

    /// Parse text-field input; blank means "use the default".
    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        self.path = if t.is_empty() { None } else { Some(PathBuf::from(t)) };
    }
}

fn looks_like_dir(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\') || p.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn export_defaults_to_dated_name() {
        let export = ExportOptions::default();
        assert_eq!(export.out_path(day()), PathBuf::from("cats-export-2024-03-09.csv"));
    }

    #[test]
    fn export_dir_hint_gets_dated_name() {
        let mut export = ExportOptions::default();
        export.set_path("out/");
        assert_eq!(export.out_path(day()), PathBuf::from("out/").join("cats-export-2024-03-09.csv"));

        export.set_path("  mine.csv ");
        assert_eq!(export.out_path(day()), PathBuf::from("mine.csv"));

        export.set_path("   ");
        assert_eq!(export.path, None);
    }

    #[test]
    fn shelter_defaults_carry_all_locations() {
        let shelter = ShelterOptions::default();
        assert_eq!(shelter.locations.len(), SHELTER_LOCATIONS.len());
        assert_eq!(shelter.api_url, SHELTER_API_URL);
    }
}
