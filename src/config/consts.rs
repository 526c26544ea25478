// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORAGE_KEY: &str = "retro-chibi-cats";
pub const LOG_FILE: &str = "debug.log";
pub const STORE_DIR_ENV: &str = "CAT_TRACKER_STORE";

// Shelter API
pub const SHELTER_API_URL: &str =
    "https://tje3xq7eu2.execute-api.us-west-1.amazonaws.com/production/search";
pub const SHELTER_ORIGIN: &str = "https://sdhumane.org";
pub const SHELTER_REFERER: &str = "https://sdhumane.org/adopt/available-pets/";
pub const SHELTER_LOCATIONS: &[&str] = &[
    "El Cajon Campus",
    "Escondido Campus",
    "Oceanside Campus - Cats/Small Animals",
    "Oceanside Campus - Dogs",
    "San Diego Campus - 5500",
    "San Diego Campus - 5485",
    "San Diego Campus - Behavior Center",
    "San Diego Campus - 5480",
    "Nursery - San Diego",
    "San Diego Campus - 5495",
    "San Diego Campus - 5525",
];
pub const PHOTO_CDN_BASE: &str = "https://do31x39459kz9.cloudfront.net";
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// Import prefixes
pub const SHELTER_ID_PREFIX: &str = "shelter-";
pub const SHELTER_CODE_PREFIX: &str = "SHELTER-";
pub const SHELTER_OWNER: &str = "Shelter";

// Scrape
pub const DEFAULT_MANIFEST: &str = "cats.csv";
pub const DEFAULT_IMAGE_DIR: &str = "cats";
pub const DEFAULT_PHOTO_EXT: &str = ".jpeg";

// Export
pub const EXPORT_STEM: &str = "cats-export";
