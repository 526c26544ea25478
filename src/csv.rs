// src/csv.rs
//
// CSV codec for cat records, plus the generic row helpers the scraper
// manifest shares.
//
// One ordered column table (`COLUMNS`) drives both directions. Writing
// quotes a field whenever it contains the separator, a quote, CR or LF;
// reading is quote-aware across line breaks and trims every token.

use std::borrow::Cow;
use std::mem::take;

use crate::cat::Cat;

pub const SEP: char = ',';

/* ---------------- Schema ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    ExternalCode,
    DisplayName,
    OwnerName,
    MedicalNotes,
    PhysicalDescription,
    AdditionalNotes,
    SpriteReference,
    PhotoReference,
    CreatedAt,
}

/// Export order. Also the order of the header line.
pub const COLUMNS: [Column; 10] = [
    Column::Id,
    Column::ExternalCode,
    Column::DisplayName,
    Column::OwnerName,
    Column::MedicalNotes,
    Column::PhysicalDescription,
    Column::AdditionalNotes,
    Column::SpriteReference,
    Column::PhotoReference,
    Column::CreatedAt,
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Id                  => "id",
            Column::ExternalCode        => "catId",
            Column::DisplayName         => "catName",
            Column::OwnerName           => "ownerFullName",
            Column::MedicalNotes        => "medical",
            Column::PhysicalDescription => "physical",
            Column::AdditionalNotes     => "notes",
            Column::SpriteReference     => "spriteUrl",
            Column::PhotoReference      => "photoDataURL",
            Column::CreatedAt           => "createdAt",
        }
    }

    /// Map a header token onto the schema. `photoUrl` is accepted for files
    /// written by the old Add form.
    pub fn from_header(token: &str) -> Option<Column> {
        let t = token.trim();
        if t == "photoUrl" {
            return Some(Column::PhotoReference);
        }
        COLUMNS.iter().copied().find(|c| c.header() == t)
    }

    pub fn get(self, cat: &Cat) -> &str {
        match self {
            Column::Id                  => &cat.id,
            Column::ExternalCode        => &cat.external_code,
            Column::DisplayName         => &cat.display_name,
            Column::OwnerName           => &cat.owner_name,
            Column::MedicalNotes        => &cat.medical_notes,
            Column::PhysicalDescription => &cat.physical_description,
            Column::AdditionalNotes     => &cat.additional_notes,
            Column::SpriteReference     => &cat.sprite_reference,
            Column::PhotoReference      => &cat.photo_reference,
            Column::CreatedAt           => &cat.created_at,
        }
    }

    pub fn set(self, cat: &mut Cat, value: String) {
        let slot = match self {
            Column::Id                  => &mut cat.id,
            Column::ExternalCode        => &mut cat.external_code,
            Column::DisplayName         => &mut cat.display_name,
            Column::OwnerName           => &mut cat.owner_name,
            Column::MedicalNotes        => &mut cat.medical_notes,
            Column::PhysicalDescription => &mut cat.physical_description,
            Column::AdditionalNotes     => &mut cat.additional_notes,
            Column::SpriteReference     => &mut cat.sprite_reference,
            Column::PhotoReference      => &mut cat.photo_reference,
            Column::CreatedAt           => &mut cat.created_at,
        };
        *slot = value;
    }
}

/* ---------------- Writing ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quoting {
    /// Quote only fields that need it.
    Minimal,
    /// Quote every field (scraper manifest).
    Always,
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

pub fn escape_field(field: &str, sep: char, quoting: Quoting) -> Cow<'_, str> {
    if quoting == Quoting::Always || needs_quotes(field, sep) {
        Cow::Owned(join!("\"", &field.replace('"', "\"\""), "\""))
    } else {
        Cow::Borrowed(field)
    }
}

/// One row, no line terminator.
pub fn format_row<S: AsRef<str>>(row: &[S], sep: char, quoting: Quoting) -> String {
    let mut out = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { out.push(sep); }
        out.push_str(&escape_field(cell.as_ref(), sep, quoting));
    }
    out
}

pub fn header_line() -> String {
    let headers: Vec<&str> = COLUMNS.iter().map(|c| c.header()).collect();
    format_row(&headers, SEP, Quoting::Minimal)
}

/// Header line plus one line per cat, `\n`-joined, no trailing newline.
pub fn to_csv(cats: &[Cat]) -> String {
    let mut lines = Vec::with_capacity(cats.len() + 1);
    lines.push(header_line());
    for cat in cats {
        let row: Vec<&str> = COLUMNS.iter().map(|c| c.get(cat)).collect();
        lines.push(format_row(&row, SEP, Quoting::Minimal));
    }
    lines.join("\n")
}

/* ---------------- Parsing ---------------- */

/// Split into logical lines: LF ends a line only outside quotes.
/// Blank lines are dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    // Trailing line, even with unterminated quotes.
    lines.push(&text[start..]);

    lines.retain(|l| !l.trim().is_empty());
    lines
}

/// Quote-aware split of one logical line; each token is trimmed.
pub fn parse_line(line: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => {
                out.push(s!(field.trim()));
                take(&mut field);
            }
            _ => field.push(ch),
        }
    }
    out.push(s!(field.trim()));
    out
}

/// Header tokens and data rows. `None` when there is no data row.
pub fn parse_table(text: &str, sep: char) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let lines = split_lines(text);
    if lines.len() < 2 {
        return None;
    }
    let headers = parse_line(lines[0], sep);
    let rows = lines[1..].iter().map(|l| parse_line(l, sep)).collect();
    Some((headers, rows))
}

/// Parse tracker CSV into records. Unknown header columns are ignored;
/// short rows leave the missing fields empty.
pub fn from_csv(text: &str) -> Vec<Cat> {
    let Some((headers, rows)) = parse_table(text, SEP) else {
        return Vec::new();
    };

    let mapping: Vec<Option<Column>> = headers.iter().map(|h| Column::from_header(h)).collect();
    let unknown: Vec<&str> = headers
        .iter()
        .zip(&mapping)
        .filter(|(_, c)| c.is_none())
        .map(|(h, _)| h.as_str())
        .collect();
    if !unknown.is_empty() {
        logd!("CSV: ignoring unknown columns {:?}", unknown);
    }

    rows.into_iter()
        .map(|mut tokens| {
            let mut cat = Cat::default();
            for (i, col) in mapping.iter().enumerate() {
                if let Some(col) = col {
                    let value = tokens.get_mut(i).map(take).unwrap_or_default();
                    col.set(&mut cat, value);
                }
            }
            cat
        })
        .collect()
}
