// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::{
    cat::{CatDraft, CatPatch},
    config::options::{AppOptions, ScrapeOptions},
    file,
    import,
    progress::Progress,
    scrape,
    shelter::ShelterClient,
    stats::Stats,
    store::CatStore,
    view::{self, SortKey},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List { query: String, sort: SortKey },
    Add(CatDraft),
    Update { id: String, patch: CatPatch },
    Delete { id: String },
    Export { out: Option<PathBuf> },
    Import { path: PathBuf },
    ImportShelter,
    Stats,
    Scrape(ScrapeOptions),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub store_dir: Option<PathBuf>,
    pub command: Command,
}

/// Editable record fields, as named on the command line.
#[derive(Clone, Copy)]
enum Field { Code, Name, Owner, Physical, Medical, Notes, Sprite, Photo }

impl Field {
    fn from_flag(flag: &str) -> Option<Field> {
        Some(match flag {
            "--code"     => Field::Code,
            "--name"     => Field::Name,
            "--owner"    => Field::Owner,
            "--physical" => Field::Physical,
            "--medical"  => Field::Medical,
            "--notes"    => Field::Notes,
            "--sprite"   => Field::Sprite,
            "--photo"    => Field::Photo,
            _ => return None,
        })
    }

    fn draft_slot(self, d: &mut CatDraft) -> &mut String {
        match self {
            Field::Code     => &mut d.external_code,
            Field::Name     => &mut d.display_name,
            Field::Owner    => &mut d.owner_name,
            Field::Physical => &mut d.physical_description,
            Field::Medical  => &mut d.medical_notes,
            Field::Notes    => &mut d.additional_notes,
            Field::Sprite   => &mut d.sprite_reference,
            Field::Photo    => &mut d.photo_reference,
        }
    }

    fn patch_slot(self, p: &mut CatPatch) -> &mut Option<String> {
        match self {
            Field::Code     => &mut p.external_code,
            Field::Name     => &mut p.display_name,
            Field::Owner    => &mut p.owner_name,
            Field::Physical => &mut p.physical_description,
            Field::Medical  => &mut p.medical_notes,
            Field::Notes    => &mut p.additional_notes,
            Field::Sprite   => &mut p.sprite_reference,
            Field::Photo    => &mut p.photo_reference,
        }
    }
}

fn value_for<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>> {
    args.next().ok_or_else(|| format!("Missing value for {flag}").into())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation, Box<dyn Error>> {
    let mut args = args.into_iter();
    let mut store_dir = None;

    // Global flags come before the command word.
    let cmd = loop {
        let Some(a) = args.next() else { return Ok(Invocation { store_dir, command: Command::Help }) };
        match a.as_str() {
            "--store" => store_dir = Some(PathBuf::from(value_for(&mut args, "--store")?)),
            "-h" | "--help" => return Ok(Invocation { store_dir, command: Command::Help }),
            _ => break a,
        }
    };

    let command = match cmd.as_str() {
        "list" => {
            let mut query = s!();
            let mut sort = SortKey::default();
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--search" | "-s" => query = value_for(&mut args, &a)?,
                    "--sort" => {
                        let v = value_for(&mut args, "--sort")?;
                        sort = SortKey::parse(&v).ok_or_else(|| format!("Unknown sort: {v}"))?;
                    }
                    _ => return Err(format!("Unknown arg: {a}").into()),
                }
            }
            Command::List { query, sort }
        }
        "add" => {
            let mut draft = CatDraft::default();
            while let Some(a) = args.next() {
                let field = Field::from_flag(&a).ok_or_else(|| format!("Unknown arg: {a}"))?;
                *field.draft_slot(&mut draft) = value_for(&mut args, &a)?;
            }
            Command::Add(draft)
        }
        "update" => {
            let id = args.next().ok_or("Missing record id")?;
            let mut patch = CatPatch::default();
            while let Some(a) = args.next() {
                let field = Field::from_flag(&a).ok_or_else(|| format!("Unknown arg: {a}"))?;
                *field.patch_slot(&mut patch) = Some(value_for(&mut args, &a)?);
            }
            if patch.is_empty() {
                return Err("Nothing to update (give at least one field flag)".into());
            }
            Command::Update { id, patch }
        }
        "delete" => Command::Delete { id: args.next().ok_or("Missing record id")? },
        "export" => {
            let mut out = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "-o" | "--out" => out = Some(PathBuf::from(value_for(&mut args, &a)?)),
                    _ => return Err(format!("Unknown arg: {a}").into()),
                }
            }
            Command::Export { out }
        }
        "import" => Command::Import { path: PathBuf::from(args.next().ok_or("Missing CSV path")?) },
        "import-shelter" => Command::ImportShelter,
        "stats" => Command::Stats,
        "scrape" => {
            let mut opts = ScrapeOptions::default();
            while let Some(a) = args.next() {
                match a.as_str() {
                    "-o" | "--out" => opts.manifest = PathBuf::from(value_for(&mut args, &a)?),
                    "--images" => opts.image_dir = PathBuf::from(value_for(&mut args, "--images")?),
                    "--no-photos" => opts.skip_photos = true,
                    _ => return Err(format!("Unknown arg: {a}").into()),
                }
            }
            Command::Scrape(opts)
        }
        "help" => Command::Help,
        other => return Err(format!("Unknown command: {other}").into()),
    };

    if matches!(command, Command::ImportShelter | Command::Stats | Command::Delete { .. } | Command::Import { .. }) {
        if let Some(extra) = args.next() {
            return Err(format!("Unknown arg: {extra}").into());
        }
    }

    Ok(Invocation { store_dir, command })
}

/// Prints scrape progress to stdout.
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for CliProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { println!("{msg}"); }
    fn item_done(&mut self, animal_id: &str, name: &str) {
        self.done += 1;
        println!("[{}/{}] {} ({})", self.done, self.total, name, animal_id);
    }
    fn item_failed(&mut self, animal_id: &str, name: &str) {
        self.done += 1;
        println!("[{}/{}] {} ({}): photo failed, skipped", self.done, self.total, name, animal_id);
    }
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<(), Box<dyn Error>> {
    let inv = parse_args(args)?;

    let mut options = AppOptions::from_env();
    if let Some(dir) = inv.store_dir {
        options.tracker.store_dir = dir;
    }
    crate::log::init(&options.tracker.store_dir);
    logf!("CLI: {:?}", inv.command);

    let store = CatStore::open(&options.tracker.store_dir);

    match inv.command {
        Command::Help => eprintln!("{}", include_str!("cli_help.txt")),
        Command::List { query, sort } => {
            let cats = store.list_all();
            let ix = view::filter_sorted(&cats, &query, sort);
            if ix.is_empty() {
                println!("{}", if query.trim().is_empty() { "No cats added yet" } else { "No cats match your search" });
            }
            for i in ix {
                let c = &cats[i];
                println!("{}\t{}\t{}\t{}\t{}", c.id, c.external_code, c.display_name, c.owner_name, c.created_at);
            }
        }
        Command::Add(draft) => {
            let cat = draft.build()?;
            let id = cat.id.clone();
            store.create(cat)?;
            println!("Cat added successfully! id={id}");
        }
        Command::Update { id, patch } => {
            if store.get(&id).is_none() {
                println!("No cat with id {id}; nothing changed");
            } else {
                store.update(&id, &patch)?;
                println!("Updated {id}");
            }
        }
        Command::Delete { id } => {
            if store.get(&id).is_none() {
                println!("No cat with id {id}; nothing changed");
            } else {
                store.delete(&id)?;
                println!("Deleted {id}");
            }
        }
        Command::Export { out } => {
            options.export.path = out;
            let path = file::export_cats(&options.export, &store.list_all())?;
            println!("CSV exported successfully! {}", path.display());
        }
        Command::Import { path } => {
            let outcome = import::import_csv_file(&store, &path)?;
            println!("Imported {} cats successfully!", outcome.added);
        }
        Command::ImportShelter => {
            println!("Fetching shelter cats...");
            let client = ShelterClient::new(options.shelter.clone())?;
            let outcome = import::import_from_shelter(&store, &client)?;
            println!("Imported {} shelter cats! ({} total)", outcome.added, outcome.total);
        }
        Command::Stats => {
            let stats = Stats::compute(&store.list_all());
            println!("Total cats:            {}", stats.total_cats);
            println!("Cats with photos:      {}", stats.cats_with_photos);
            println!("Unique owners:         {}", stats.unique_owners);
            println!("Average cats per owner: {}", stats.avg_label());
            println!("Photo coverage:        {}", stats.coverage_label());
        }
        Command::Scrape(scrape_opts) => {
            options.scrape = scrape_opts;
            let mut progress = CliProgress::new();
            let summary = scrape::run(&options, Some(&mut progress))?;
            println!(
                "{} cats, {} photos saved, {} failed → {}",
                summary.cats, summary.photos_saved, summary.photos_failed, summary.manifest.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse_args(Vec::<String>::new()).unwrap().command, Command::Help);
    }

    #[test]
    fn add_collects_fields_and_store() {
        let inv = parse_args(args("--store /tmp/cats add --code CAT001 --name Mochi --owner Jane")).unwrap();
        assert_eq!(inv.store_dir, Some(PathBuf::from("/tmp/cats")));
        let Command::Add(draft) = inv.command else { panic!("expected add") };
        assert_eq!(draft.external_code, "CAT001");
        assert_eq!(draft.display_name, "Mochi");
        assert_eq!(draft.owner_name, "Jane");
        assert_eq!(draft.medical_notes, "");
    }

    #[test]
    fn update_builds_partial_patch() {
        let inv = parse_args(args("update 42 --medical vaccinated")).unwrap();
        let Command::Update { id, patch } = inv.command else { panic!("expected update") };
        assert_eq!(id, "42");
        assert_eq!(patch.medical_notes.as_deref(), Some("vaccinated"));
        assert_eq!(patch.display_name, None);

        assert!(parse_args(args("update 42")).is_err());
    }

    #[test]
    fn list_and_scrape_flags() {
        let inv = parse_args(args("list --sort catName-asc -s tabby")).unwrap();
        assert_eq!(inv.command, Command::List { query: s!("tabby"), sort: SortKey::NameAsc });

        let inv = parse_args(args("scrape -o out/cats.csv --images out/img --no-photos")).unwrap();
        let Command::Scrape(opts) = inv.command else { panic!("expected scrape") };
        assert_eq!(opts.manifest, PathBuf::from("out/cats.csv"));
        assert_eq!(opts.image_dir, PathBuf::from("out/img"));
        assert!(opts.skip_photos);
    }

    #[test]
    fn rejects_unknowns() {
        assert!(parse_args(args("frobnicate")).is_err());
        assert!(parse_args(args("add --colour red")).is_err());
        assert!(parse_args(args("list --sort sideways")).is_err());
        assert!(parse_args(args("stats extra")).is_err());
        assert!(parse_args(args("add --name")).is_err());
    }
}
