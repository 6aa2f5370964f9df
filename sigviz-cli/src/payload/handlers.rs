use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use sigviz_core::activities::dataset_from_activity_tables;

pub fn run_payload(matches: &ArgMatches) -> Result<()> {
    let activities_path = matches
        .get_one::<String>("activities")
        .expect("activity table path is required");

    let reference_path = matches
        .get_one::<String>("reference")
        .expect("reference table path is required");

    let output_path = matches.get_one::<String>("output");

    let query = File::open(activities_path)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open activity table: {}", activities_path))?;

    let reference = File::open(reference_path)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open reference table: {}", reference_path))?;

    let dataset = dataset_from_activity_tables(query, reference)
        .context("Failed to read activity tables")?;

    let json = dataset
        .to_payload_json()
        .context("Failed to serialize payload to JSON")?;

    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            eprintln!("Output written to {}", p);
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!(); // trailing newline
        }
    }

    Ok(())
}
