//! CLI for mnrdesk - exports, imports and print composition
//!
//! Usage:
//!   mnrdesk_cli <db.json> export [-o out.json]
//!   mnrdesk_cli <db.json> import <file.json>
//!   mnrdesk_cli <db.json> print <all|latest|id=N|nvr=N> [from=DATE] [to=DATE] [-o out.html]
//!
//! Dates are YYYY-MM-DD. `print` reads layout and header text from
//! `settings.json` next to the database when present.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;
use mnrdesk::export::{export_all, import_all};
use mnrdesk::print::{print_document, PrintSelection};
use mnrdesk::settings::Settings;
use mnrdesk::store::{ChecklistFilter, ObjectStore};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: mnrdesk_cli <db.json> <export|import|print> ...");
        std::process::exit(1);
    }

    let db_path = Path::new(&args[1]);
    let command = args[2].as_str();

    let result = match command {
        "export" => run_export(db_path, &args[3..]),
        "import" => run_import(db_path, &args[3..]),
        "print" => run_print(db_path, &args[3..]),
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_export(db_path: &Path, args: &[String]) -> mnrdesk::Result<()> {
    let store = ObjectStore::open(db_path)?;
    let json = export_all(&store)?;
    write_output(&json, output_path(args))
}

fn run_import(db_path: &Path, args: &[String]) -> mnrdesk::Result<()> {
    let Some(file) = args.first() else {
        return Err("import needs a file argument".into());
    };
    let mut store = ObjectStore::open(db_path)?;
    let json = fs::read_to_string(file)?;
    let counts = import_all(&mut store, &json)?;
    store.save()?;

    let total: usize = counts.values().sum();
    let mut names: Vec<_> = counts.keys().collect();
    names.sort();
    for name in names {
        eprintln!("  {name}: {}", counts[name]);
    }
    eprintln!("Imported {total} records");
    Ok(())
}

fn run_print(db_path: &Path, args: &[String]) -> mnrdesk::Result<()> {
    let Some(mode) = args.first() else {
        return Err("print needs a selection: all, latest, id=N or nvr=N".into());
    };

    let mut filter = ChecklistFilter::default();
    for arg in &args[1..] {
        if let Some(date) = arg.strip_prefix("from=") {
            filter.from = Some(parse_date(date)?);
        } else if let Some(date) = arg.strip_prefix("to=") {
            filter.to = Some(parse_date(date)?);
        }
    }

    let selection = if mode == "all" {
        PrintSelection::Filtered(filter)
    } else if mode == "latest" {
        PrintSelection::LatestPerNvr
    } else if let Some(id) = mode.strip_prefix("id=") {
        PrintSelection::Single {
            checklist_id: parse_u64(id)?,
        }
    } else if let Some(id) = mode.strip_prefix("nvr=") {
        filter.nvr_id = Some(parse_u64(id)?);
        PrintSelection::Filtered(filter)
    } else {
        return Err(format!("unknown print selection: {mode}").into());
    };

    let store = ObjectStore::open(db_path)?;
    let settings_path = db_path.with_file_name("settings.json");
    let settings = Settings::load(&settings_path)?;
    let html = print_document(&store, selection, &settings.grid, &settings.print_header)?;
    write_output(&html, output_path(args))
}

fn output_path(args: &[String]) -> Option<&String> {
    args.iter().position(|a| a == "-o").and_then(|i| args.get(i + 1))
}

fn write_output(content: &str, path: Option<&String>) -> mnrdesk::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> mnrdesk::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("bad date {s:?}: {e}").into())
}

fn parse_u64(s: &str) -> mnrdesk::Result<u64> {
    s.parse().map_err(|_| format!("bad id: {s:?}").into())
}
