// src/shelter.rs
//
// Shelter listing API: the typed response, the blocking HTTP client, and the
// animal → record conversion used by the external import.
//
// The API is loose about types (ids come as numbers or strings, fields go
// missing or null), so every field deserializes leniently into a default.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ORIGIN, REFERER};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::cat::{self, Cat};
use crate::config::consts::*;
use crate::config::options::ShelterOptions;

/* ---------------- Response shape ---------------- */

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShelterResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub response: Vec<Animal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Animal {
    #[serde(deserialize_with = "lenient_string")]
    pub animal_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub animal_type: String,
    #[serde(deserialize_with = "null_default")]
    pub breed: Breed,
    #[serde(deserialize_with = "null_default")]
    pub age: Age,
    #[serde(deserialize_with = "lenient_string")]
    pub sex: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub main_photo: MainPhoto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Breed {
    #[serde(deserialize_with = "lenient_string")]
    pub primary: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Age {
    #[serde(deserialize_with = "lenient_u32")]
    pub years: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub months: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub weeks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MainPhoto {
    #[serde(rename = "default", deserialize_with = "lenient_strings")]
    pub default: Vec<String>,
}

fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => s!(),
    })
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_u64().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Parse a raw API body into its animals (all types).
pub fn parse_response(body: &str) -> Result<Vec<Animal>, Box<dyn Error>> {
    let parsed: ShelterResponse = serde_json::from_str(body)?;
    Ok(parsed.response)
}

/* ---------------- Animal helpers ---------------- */

impl Animal {
    /// `AnimalType` mentions cat or kitten, any case.
    pub fn is_cat(&self) -> bool {
        let t = self.animal_type.to_lowercase();
        t.contains("cat") || t.contains("kitten")
    }

    /// `"<Y>y <M>m <W>w"`
    pub fn age_label(&self) -> String {
        format!("{}y {}m {}w", self.age.years, self.age.months, self.age.weeks)
    }

    /// First listed photo path, as given by the API (often relative).
    pub fn photo_path(&self) -> Option<&str> {
        self.main_photo.default.first().map(|s| s.as_str())
    }

    /// Absolute photo URL, if the animal has one.
    pub fn photo_url(&self) -> Option<String> {
        self.photo_path().map(resolve_photo_url)
    }

    /// Record for the external import: prefixed id and code, no dedup.
    pub fn to_cat(&self) -> Cat {
        let animal_id = if self.animal_id.trim().is_empty() { "UNKNOWN" } else { self.animal_id.trim() };
        let or_unknown = |s: &str| if s.trim().is_empty() { s!("Unknown") } else { s!(s.trim()) };

        let physical: Vec<&str> = [self.sex.trim(), self.animal_type.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        let mut notes = format!("Breed: {}, Age: {}", or_unknown(self.breed.primary.as_str()), self.age_label());
        if !self.location.trim().is_empty() {
            notes.push_str(&format!(", Location: {}", self.location.trim()));
        }
        if !self.status.trim().is_empty() {
            notes.push_str(&format!(", Status: {}", self.status.trim()));
        }

        Cat {
            id: join!(SHELTER_ID_PREFIX, animal_id, "-", &cat::random_suffix()),
            external_code: join!(SHELTER_CODE_PREFIX, animal_id),
            display_name: or_unknown(self.name.as_str()),
            owner_name: s!(SHELTER_OWNER),
            physical_description: physical.join(", "),
            medical_notes: s!(),
            additional_notes: notes,
            sprite_reference: s!(),
            photo_reference: self.photo_url().unwrap_or_default(),
            created_at: cat::now_stamp(),
        }
    }
}

/// `/storage/...` paths live on the CDN; anything else is used as given.
pub fn resolve_photo_url(path: &str) -> String {
    if path.starts_with("/storage") {
        join!(PHOTO_CDN_BASE, path)
    } else {
        s!(path)
    }
}

/// `.jpg` / `.jpeg` / `.png` suffix of the URL (case kept), else `.jpeg`.
pub fn photo_extension(url: &str) -> &str {
    let lower = url.to_ascii_lowercase();
    for ext in [".jpeg", ".jpg", ".png"] {
        if lower.ends_with(ext) {
            return &url[url.len() - ext.len()..];
        }
    }
    DEFAULT_PHOTO_EXT
}

/* ---------------- Fetching ---------------- */

/// Anything that can produce the shelter's animal list.
pub trait AnimalSource {
    fn fetch_animals(&self) -> Result<Vec<Animal>, Box<dyn Error>>;
}

/// Only the cats and kittens from `source`.
pub fn fetch_cats(source: &dyn AnimalSource) -> Result<Vec<Animal>, Box<dyn Error>> {
    let animals = source.fetch_animals()?;
    let total = animals.len();
    let cats: Vec<Animal> = animals.into_iter().filter(Animal::is_cat).collect();
    logf!("Shelter: {} animals, {} cats/kittens", total, cats.len());
    Ok(cats)
}

/// Blocking client with timeouts and a browser user agent.
pub fn build_http_client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

pub struct ShelterClient {
    http: Client,
    options: ShelterOptions,
}

impl ShelterClient {
    pub fn new(options: ShelterOptions) -> Result<Self, Box<dyn Error>> {
        Ok(Self { http: build_http_client()?, options })
    }

    /// Query pairs: animal type, availability, then one per location.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("AnimalType", s!("ALL")), ("StatusCategory", s!("available"))];
        params.extend(self.options.locations.iter().map(|l| ("Location", l.clone())));
        params
    }

    /// Fetch raw bytes (photos) with the same browser-like headers.
    pub fn download(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let resp = self
            .http
            .get(url)
            .header(REFERER, SHELTER_REFERER)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error! status: {} {}", status, url).into());
        }
        Ok(resp.bytes()?.to_vec())
    }
}

impl AnimalSource for ShelterClient {
    fn fetch_animals(&self) -> Result<Vec<Animal>, Box<dyn Error>> {
        logd!("Shelter: GET {} ({} locations)", self.options.api_url, self.options.locations.len());
        let resp = self
            .http
            .get(&self.options.api_url)
            .query(&self.query_params())
            .header(ACCEPT, "application/json")
            .header(ORIGIN, SHELTER_ORIGIN)
            .header(REFERER, SHELTER_REFERER)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error! status: {}", status).into());
        }
        let body = resp.text()?;
        parse_response(&body)
    }
}
