use std::path::Path;
use std::process;

use tables_extract::{extract_tables, Flavor, PageSelection};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tables-extract <pdf-path> [stream|lattice] [pages]");
        eprintln!();
        eprintln!("Extracts tables from one PDF and outputs JSON.");
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let flavor = match args.get(2).map(String::as_str) {
        None | Some("stream") => Flavor::Stream,
        Some("lattice") => Flavor::Lattice,
        Some(other) => {
            eprintln!("Unknown flavor '{}' (expected stream or lattice)", other);
            process::exit(1);
        }
    };
    let pages: PageSelection = match args.get(3).map(String::as_str).unwrap_or("all").parse() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid pages argument: {}", e);
            process::exit(1);
        }
    };

    match extract_tables(path, flavor, &pages) {
        Ok(tables) => match serde_json::to_string_pretty(&tables) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error extracting tables from {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}
