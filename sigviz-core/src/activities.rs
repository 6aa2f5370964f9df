//! SigProfiler activity-table ingestion.
//!
//! Activity tables are TSV: the first column holds raw signature names
//! ("Signature Subs-01"), each remaining column one sample. Sample headers
//! carry up to three `|`-delimited components: `SAMPLE|CODE|Display Name`.
//! A query table and a reference table merge into one [`Dataset`] whose
//! signature list is the sorted union of both tables.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

use crate::errors::ActivityTableError;
use crate::models::{Dataset, Disease, Sample};

const HEADER_DELIMITER: char = '|';
const SIGNATURE_NAME_DELIMITER: char = '-';
const SIGNATURE_NAME_PREFIX: &str = "SBS";

/// A sample read from one activity table, before signature alignment.
/// Contributions are keyed by raw signature name.
#[derive(Clone, Debug)]
pub struct ActivitySample {
    pub name: String,
    pub disease: Disease,
    pub contributions: BTreeMap<String, u64>,
}

/// Split a column header into sample name and disease.
///
/// Headers with fewer than three components fall back to the UNKNOWN
/// disease; an empty header is an error. `column` is 1-based and only used
/// for diagnostics.
pub fn parse_sample_header(
    header: &str,
    column: usize,
) -> Result<(String, Disease), ActivityTableError> {
    if header.is_empty() {
        return Err(ActivityTableError::EmptySampleHeader { column });
    }

    let mut components = header.splitn(3, HEADER_DELIMITER);

    let name = components.next().unwrap_or_default().to_string();

    let disease = match (components.next(), components.next()) {
        (Some(code), Some(display_name)) => Disease::new(code, display_name),
        _ => Disease::unknown(),
    };

    Ok((name, disease))
}

/// Normalize a raw signature name ("Signature Subs-01") to its canonical
/// SBS form ("SBS1"). Leading zeros are stripped from the position;
/// sub-lettered positions keep their suffix ("Signature Subs-07a" becomes
/// "SBS7a").
pub fn normalize_signature_name(raw: &str) -> Result<String, ActivityTableError> {
    let mut components = raw.splitn(3, SIGNATURE_NAME_DELIMITER);

    let position = components
        .nth(1)
        .ok_or_else(|| ActivityTableError::InvalidSignatureName(raw.to_string()))?;

    let position = position.trim_start_matches('0');
    if position.is_empty() {
        return Err(ActivityTableError::InvalidSignatureName(raw.to_string()));
    }

    Ok(format!("{}{}", SIGNATURE_NAME_PREFIX, position))
}

/// Parse one activity table.
///
/// Returns the raw signature names in row order and the samples with their
/// per-signature counts. Blank lines are skipped; a row shorter than the
/// header leaves the missing cells unset (they align to 0 later).
pub fn read_activity_table<R: BufRead>(
    reader: R,
) -> Result<(Vec<String>, Vec<ActivitySample>), ActivityTableError> {
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(ActivityTableError::MissingHeaders),
    };

    let mut samples = Vec::new();

    for (column, header) in header_line.split('\t').skip(1).enumerate() {
        let (name, disease) = parse_sample_header(header, column + 1)?;

        samples.push(ActivitySample {
            name,
            disease,
            contributions: BTreeMap::new(),
        });
    }

    let mut signatures = Vec::new();

    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let line_no = i + 2;

        let mut fields = line.split('\t');
        let signature = fields.next().unwrap_or_default().to_string();

        for (sample, value) in samples.iter_mut().zip(fields) {
            let contribution: u64 =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ActivityTableError::InvalidContribution {
                        line: line_no,
                        value: value.to_string(),
                    })?;

            sample.contributions.insert(signature.clone(), contribution);
        }

        signatures.push(signature);
    }

    Ok((signatures, samples))
}

/// Merge a query table and a reference table into one [`Dataset`].
///
/// The dataset's signature list is the sorted union of both tables' raw
/// signature sets; every sample's contribution vector is aligned to that
/// order, with 0 for signatures its table never mentions. Names are
/// normalized after sorting, so alignment happens on raw names.
pub fn dataset_from_activity_tables<Q, R>(
    query: Q,
    reference: R,
) -> Result<Dataset, ActivityTableError>
where
    Q: BufRead,
    R: BufRead,
{
    let (query_signatures, query_samples) = read_activity_table(query)?;
    let (reference_signatures, reference_samples) = read_activity_table(reference)?;

    let raw_signatures: BTreeSet<String> = reference_signatures
        .into_iter()
        .chain(query_signatures)
        .collect();
    let raw_signatures: Vec<String> = raw_signatures.into_iter().collect();

    let reference = align_samples(&raw_signatures, reference_samples);
    let query = align_samples(&raw_signatures, query_samples);

    let signatures = raw_signatures
        .iter()
        .map(|raw| normalize_signature_name(raw))
        .collect::<Result<_, _>>()?;

    Ok(Dataset {
        signatures,
        reference,
        query,
    })
}

fn align_samples(signatures: &[String], samples: Vec<ActivitySample>) -> Vec<Sample> {
    samples
        .into_iter()
        .map(|sample| {
            let contributions = signatures
                .iter()
                .map(|signature| sample.contributions.get(signature).copied().unwrap_or(0))
                .collect();

            Sample {
                name: sample.name,
                disease: Some(sample.disease),
                contributions,
            }
        })
        .collect()
}
