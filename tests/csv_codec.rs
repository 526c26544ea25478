// tests/csv_codec.rs
use cat_tracker::cat::Cat;
use cat_tracker::csv::{from_csv, header_line, to_csv};
use cat_tracker::store::{CatStore, MemoryStorage};

const HEADER: &str = "id,catId,catName,ownerFullName,medical,physical,notes,spriteUrl,photoDataURL,createdAt";

fn mochi() -> Cat {
    Cat {
        id: "1".into(),
        external_code: "CAT001".into(),
        display_name: "Mochi".into(),
        owner_name: "Jane Doe".into(),
        physical_description: "white".into(),
        medical_notes: "".into(),
        additional_notes: "".into(),
        sprite_reference: "".into(),
        photo_reference: "".into(),
        created_at: "2024-03-09T12:00:00.000Z".into(),
    }
}

#[test]
fn empty_collection_is_just_the_header() {
    let text = to_csv(&[]);
    assert_eq!(text, HEADER);
    assert_eq!(header_line(), HEADER);
    assert!(from_csv(&text).is_empty());
}

#[test]
fn mochi_end_to_end() {
    let store = CatStore::new(MemoryStorage::new());
    assert!(store.list_all().is_empty());

    store.create(mochi()).unwrap();
    let all = store.list_all();
    assert_eq!(all, vec![mochi()]);

    let text = to_csv(&all);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("1,CAT001,Mochi,Jane Doe,"));

    assert_eq!(from_csv(&text), all);
}

#[test]
fn awkward_text_survives_a_round_trip() {
    let mut tricky = mochi();
    tricky.display_name = "Mochi, the Great".into();
    tricky.physical_description = "says \"mrrp\" a lot".into();
    tricky.additional_notes = "line one\nline two".into();
    tricky.medical_notes = "spayed,\r\nvaccinated".into();

    let plain = Cat { id: "2".into(), display_name: "Tofu".into(), ..mochi() };
    let cats = vec![tricky, plain];

    let parsed = from_csv(&to_csv(&cats));
    assert_eq!(parsed, cats);
}

#[test]
fn empty_fields_stay_empty() {
    let parsed = from_csv(&to_csv(&[mochi()]));
    assert_eq!(parsed[0].medical_notes, "");
    assert_ne!(parsed[0].medical_notes, "undefined");
    assert_ne!(parsed[0].medical_notes, "null");
}

#[test]
fn missing_and_unknown_columns() {
    let text = "catName,colour,ownerFullName\nMochi,white,Jane\nTofu\n";
    let parsed = from_csv(text);
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].display_name, "Mochi");
    assert_eq!(parsed[0].owner_name, "Jane");
    assert_eq!(parsed[0].id, "");
    assert_eq!(parsed[1].display_name, "Tofu");
    assert_eq!(parsed[1].owner_name, "");
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let text = format!("{HEADER}\r\n\r\n1,CAT001,Mochi,Jane Doe,,white,,,,2024-03-09T12:00:00.000Z\r\n\r\n");
    assert_eq!(from_csv(&text), vec![mochi()]);
}
