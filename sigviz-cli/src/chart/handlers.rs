use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use sigviz_core::chart::build_chart;
use sigviz_core::models::Dataset;
use sigviz_core::selection::DiseaseSelector;

pub fn run_chart(matches: &ArgMatches) -> Result<()> {
    let payload_path = matches
        .get_one::<String>("payload")
        .expect("payload path is required");

    let disease = matches.get_one::<String>("disease");
    let output_path = matches.get_one::<String>("output");

    let dataset = Dataset::from_path(payload_path)
        .with_context(|| format!("Failed to load payload: {}", payload_path))?;

    let mut selector = DiseaseSelector::new(&dataset);
    if let Some(code) = disease {
        selector.select(code);
    }

    // no classified reference samples and no --disease: build against the
    // empty cohort rather than failing
    let disease_code = selector.active().unwrap_or_default();

    let spec = build_chart(&dataset, disease_code)?;

    let json =
        serde_json::to_string_pretty(&spec).context("Failed to serialize chart spec to JSON")?;

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
