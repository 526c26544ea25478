// src/cat.rs
//
// The cat record plus the two shapes that feed it: the Add-form draft and
// the typed patch used by `CatStore::update`.

use std::{error::Error, fmt};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Built-in sprites. A record with an empty sprite reference shows one of
/// these, picked from its id so it stays stable across runs.
pub const DEFAULT_SPRITES: &[&str] = &[
    "chibi-orange-tabby",
    "chibi-gray",
    "chibi-calico",
    "chibi-tuxedo",
    "chibi-white",
    "chibi-black",
];

/// One tracked cat.
///
/// Every text field is a plain `String` that defaults to empty. Reading goes
/// through [`StoredCat`], so JSON written by the browser version (`catId`,
/// `catName`, ... or explicit `null`s) loads into the same shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredCat")]
pub struct Cat {
    pub id: String,
    pub external_code: String,
    pub display_name: String,
    pub owner_name: String,
    pub physical_description: String,
    pub medical_notes: String,
    pub additional_notes: String,
    pub sprite_reference: String,
    pub photo_reference: String,
    pub created_at: String,
}

/// On-disk shape accepted when loading. The browser version could leave both
/// `photoDataURL` and `photoUrl` on one record, so the photo keys are read
/// separately and merged (`photoReference`, then `photoDataURL`, then `photoUrl`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredCat {
    #[serde(deserialize_with = "null_as_empty")]
    id: String,
    #[serde(alias = "catId", deserialize_with = "null_as_empty")]
    external_code: String,
    #[serde(alias = "catName", deserialize_with = "null_as_empty")]
    display_name: String,
    #[serde(alias = "ownerFullName", deserialize_with = "null_as_empty")]
    owner_name: String,
    #[serde(alias = "physical", deserialize_with = "null_as_empty")]
    physical_description: String,
    #[serde(alias = "medical", deserialize_with = "null_as_empty")]
    medical_notes: String,
    #[serde(alias = "notes", deserialize_with = "null_as_empty")]
    additional_notes: String,
    #[serde(alias = "spriteUrl", deserialize_with = "null_as_empty")]
    sprite_reference: String,
    photo_reference: Option<String>,
    #[serde(rename = "photoDataURL")]
    photo_data_url: Option<String>,
    photo_url: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    created_at: String,
}

impl From<StoredCat> for Cat {
    fn from(c: StoredCat) -> Self {
        let photo_reference = [c.photo_reference, c.photo_data_url, c.photo_url]
            .into_iter()
            .flatten()
            .find(|p| !p.trim().is_empty())
            .unwrap_or_default();
        Cat {
            id: c.id,
            external_code: c.external_code,
            display_name: c.display_name,
            owner_name: c.owner_name,
            physical_description: c.physical_description,
            medical_notes: c.medical_notes,
            additional_notes: c.additional_notes,
            sprite_reference: c.sprite_reference,
            photo_reference,
            created_at: c.created_at,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Cat {
    pub fn has_photo(&self) -> bool {
        !self.photo_reference.trim().is_empty()
    }

    /// Sprite to display: the record's own, or a default chosen by id.
    pub fn sprite(&self) -> &str {
        if self.sprite_reference.trim().is_empty() {
            default_sprite_for(&self.id)
        } else {
            &self.sprite_reference
        }
    }

    /// Fill in a missing id / timestamp. Used for rows arriving from import.
    pub fn ensure_identity(&mut self) {
        if self.id.trim().is_empty() {
            self.id = new_id();
        }
        if self.created_at.trim().is_empty() {
            self.created_at = now_stamp();
        }
    }
}

pub fn default_sprite_for(id: &str) -> &'static str {
    let sum = id.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    DEFAULT_SPRITES[sum % DEFAULT_SPRITES.len()]
}

/// Inline image payloads are data URLs; anything else is a name or a link.
pub fn is_inline_image(reference: &str) -> bool {
    reference.trim_start().starts_with("data:image/")
}

/* ---------------- Identity ---------------- */

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Nine lowercase base-36 characters of randomness.
pub fn random_suffix() -> String {
    let mut n = uuid::Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(9);
    for _ in 0..9 {
        out.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// `<unix millis>-<suffix>`
pub fn new_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), random_suffix())
}

/// RFC 3339, UTC, millisecond precision (`2024-03-09T12:00:00.000Z`).
pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/* ---------------- Add form ---------------- */

/// What the Add form collects: everything but id and timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatDraft {
    pub external_code: String,
    pub display_name: String,
    pub owner_name: String,
    pub physical_description: String,
    pub medical_notes: String,
    pub additional_notes: String,
    pub sprite_reference: String,
    pub photo_reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fill in required fields ({})", self.0.join(", "))
    }
}

impl Error for MissingFields {}

impl CatDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.external_code.trim().is_empty() { missing.push("Cat ID"); }
        if self.display_name.trim().is_empty() { missing.push("Cat Name"); }
        if self.owner_name.trim().is_empty() { missing.push("Owner Full Name"); }
        missing
    }

    /// Validate and stamp a new record with a fresh id and timestamp.
    pub fn build(&self) -> Result<Cat, MissingFields> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }
        Ok(Cat {
            id: new_id(),
            external_code: s!(self.external_code.trim()),
            display_name: s!(self.display_name.trim()),
            owner_name: s!(self.owner_name.trim()),
            physical_description: s!(self.physical_description.trim()),
            medical_notes: s!(self.medical_notes.trim()),
            additional_notes: s!(self.additional_notes.trim()),
            sprite_reference: s!(self.sprite_reference.trim()),
            photo_reference: s!(self.photo_reference.trim()),
            created_at: now_stamp(),
        })
    }

    pub fn from_cat(cat: &Cat) -> Self {
        Self {
            external_code: cat.external_code.clone(),
            display_name: cat.display_name.clone(),
            owner_name: cat.owner_name.clone(),
            physical_description: cat.physical_description.clone(),
            medical_notes: cat.medical_notes.clone(),
            additional_notes: cat.additional_notes.clone(),
            sprite_reference: cat.sprite_reference.clone(),
            photo_reference: cat.photo_reference.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/* ---------------- Patch ---------------- */

/// Field-level update. `None` leaves the field alone; id and timestamp are
/// not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatPatch {
    pub external_code: Option<String>,
    pub display_name: Option<String>,
    pub owner_name: Option<String>,
    pub physical_description: Option<String>,
    pub medical_notes: Option<String>,
    pub additional_notes: Option<String>,
    pub sprite_reference: Option<String>,
    pub photo_reference: Option<String>,
}

impl CatPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, cat: &mut Cat) {
        fn set(slot: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        }
        set(&mut cat.external_code, &self.external_code);
        set(&mut cat.display_name, &self.display_name);
        set(&mut cat.owner_name, &self.owner_name);
        set(&mut cat.physical_description, &self.physical_description);
        set(&mut cat.medical_notes, &self.medical_notes);
        set(&mut cat.additional_notes, &self.additional_notes);
        set(&mut cat.sprite_reference, &self.sprite_reference);
        set(&mut cat.photo_reference, &self.photo_reference);
    }

    /// Patch that sets every editable field from a draft (edit dialog).
    pub fn from_draft(draft: &CatDraft) -> Self {
        Self {
            external_code: Some(s!(draft.external_code.trim())),
            display_name: Some(s!(draft.display_name.trim())),
            owner_name: Some(s!(draft.owner_name.trim())),
            physical_description: Some(s!(draft.physical_description.trim())),
            medical_notes: Some(s!(draft.medical_notes.trim())),
            additional_notes: Some(s!(draft.additional_notes.trim())),
            sprite_reference: Some(s!(draft.sprite_reference.trim())),
            photo_reference: Some(s!(draft.photo_reference.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_code_name_owner() {
        let draft = CatDraft { display_name: s!("Mochi"), ..Default::default() };
        let err = draft.build().unwrap_err();
        assert_eq!(err.0, vec!["Cat ID", "Owner Full Name"]);
        assert!(err.to_string().starts_with("Please fill in required fields"));
    }

    #[test]
    fn draft_build_trims_and_stamps() {
        let draft = CatDraft {
            external_code: s!(" CAT001 "),
            display_name: s!("Mochi"),
            owner_name: s!("Jane Doe "),
            ..Default::default()
        };
        let cat = draft.build().unwrap();
        assert_eq!(cat.external_code, "CAT001");
        assert_eq!(cat.owner_name, "Jane Doe");
        assert!(!cat.id.is_empty());
        assert!(cat.created_at.ends_with('Z'));
        assert_eq!(cat.medical_notes, "");
    }

    #[test]
    fn ids_differ_and_have_suffix() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        let (millis, suffix) = a.split_once('-').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), 9);
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut cat = Cat {
            id: s!("1"),
            display_name: s!("Mochi"),
            owner_name: s!("Jane"),
            created_at: s!("t0"),
            ..Default::default()
        };
        let patch = CatPatch { owner_name: Some(s!("John")), ..Default::default() };
        patch.apply(&mut cat);
        assert_eq!(cat.owner_name, "John");
        assert_eq!(cat.display_name, "Mochi");
        assert_eq!(cat.created_at, "t0");
        assert!(CatPatch::default().is_empty());
    }

    #[test]
    fn legacy_json_names_and_nulls_load() {
        let json = r#"{"id":"7","catId":"CAT7","catName":"Tofu","ownerFullName":"Ann",
            "physical":"gray","medical":null,"notes":"","photoUrl":"http://x/y.png",
            "createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.external_code, "CAT7");
        assert_eq!(cat.display_name, "Tofu");
        assert_eq!(cat.medical_notes, "");
        assert_eq!(cat.photo_reference, "http://x/y.png");
        assert_eq!(cat.sprite_reference, "");
    }

    #[test]
    fn both_legacy_photo_keys_merge() {
        let json = r#"{"id":"1","photoDataURL":"data:image/png;base64,AA","photoUrl":"https://x/p.jpg"}"#;
        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.photo_reference, "data:image/png;base64,AA");

        let json = r#"{"id":"2","photoDataURL":"","photoUrl":"https://x/p.jpg"}"#;
        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.photo_reference, "https://x/p.jpg");

        let json = r#"{"id":"3","photoReference":"https://x/new.jpg","photoUrl":null}"#;
        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.photo_reference, "https://x/new.jpg");
    }

    #[test]
    fn sprite_falls_back_to_stable_default() {
        let cat = Cat { id: s!("abc"), ..Default::default() };
        assert_eq!(cat.sprite(), default_sprite_for("abc"));
        assert!(DEFAULT_SPRITES.contains(&cat.sprite()));

        let own = Cat { sprite_reference: s!("data:image/png;base64,AAAA"), ..Default::default() };
        assert!(is_inline_image(own.sprite()));
    }
}
