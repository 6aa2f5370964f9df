use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PayloadError;
use crate::models::{Disease, Sample};

///
/// The full set of signatures plus the reference and query sample
/// collections. Loaded once, read-only thereafter; every render pass
/// recomputes its derived state from this.
///
#[derive(Clone, Debug)]
pub struct Dataset {
    pub signatures: Vec<String>,
    pub reference: Vec<Sample>,
    pub query: Vec<Sample>,
}

/// Which collection a sample of a merged payload belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleGroup {
    Reference,
    Query,
}

// Historical payload generators disagree on the sample schema: some emit a
// nested `disease: {code, name}` object, some a flattened `diseaseCode`
// string, and some merge reference and query samples into one `samples`
// array tagged with a `group` field. The raw shapes below accept all of
// them; `Dataset` is the normalized result.

#[derive(Deserialize)]
struct RawPayload {
    data: RawData,
}

#[derive(Deserialize)]
struct RawData {
    signatures: Vec<String>,
    #[serde(default)]
    reference: Vec<RawSample>,
    #[serde(default)]
    query: Vec<RawSample>,
    #[serde(default)]
    samples: Vec<RawSample>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSample {
    name: String,
    #[serde(default)]
    disease: Option<RawDisease>,
    #[serde(default)]
    disease_code: Option<String>,
    #[serde(default)]
    group: Option<SampleGroup>,
    contributions: Vec<u64>,
}

#[derive(Deserialize)]
struct RawDisease {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl RawDisease {
    fn into_disease(self) -> Option<Disease> {
        match (self.code, self.name) {
            (Some(code), Some(name)) => Some(Disease::new(code, name)),
            (Some(code), None) => Some(Disease::new(code.clone(), code)),
            (None, Some(name)) => Some(Disease::new(name.clone(), name)),
            (None, None) => None,
        }
    }
}

impl RawSample {
    fn into_sample(self) -> Sample {
        let disease = match (self.disease, self.disease_code) {
            (Some(raw), _) => raw.into_disease(),
            (None, Some(code)) => Some(Disease::new(code.clone(), code)),
            (None, None) => None,
        };

        Sample {
            name: self.name,
            disease,
            contributions: self.contributions,
        }
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    data: PayloadData<'a>,
}

#[derive(Serialize)]
struct PayloadData<'a> {
    signatures: &'a [String],
    reference: &'a [Sample],
    query: &'a [Sample],
}

impl Dataset {
    /// Parse an embedded payload document.
    ///
    /// Accepts both the split `reference`/`query` arrays and a merged
    /// `samples` array tagged per sample with a `group` field. A sample
    /// whose contribution vector disagrees with the signature list rejects
    /// the whole load; truncating or padding would silently present a
    /// cohort total that omits data.
    pub fn from_json(payload: &str) -> Result<Self, PayloadError> {
        let raw: RawPayload = serde_json::from_str(payload)
            .map_err(|e| PayloadError::MalformedPayload(e.to_string()))?;

        let mut reference: Vec<Sample> = Vec::new();
        let mut query: Vec<Sample> = Vec::new();

        for raw_sample in raw.data.reference {
            reference.push(raw_sample.into_sample());
        }

        for raw_sample in raw.data.query {
            query.push(raw_sample.into_sample());
        }

        for raw_sample in raw.data.samples {
            match raw_sample.group {
                Some(SampleGroup::Reference) => reference.push(raw_sample.into_sample()),
                Some(SampleGroup::Query) => query.push(raw_sample.into_sample()),
                None => {
                    return Err(PayloadError::MalformedPayload(format!(
                        "sample {}: missing group",
                        raw_sample.name
                    )));
                }
            }
        }

        let dataset = Dataset {
            signatures: raw.data.signatures,
            reference,
            query,
        };

        dataset.validate_shape()?;

        Ok(dataset)
    }

    /// Load a payload document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PayloadError> {
        let payload = fs::read_to_string(path)?;
        Dataset::from_json(&payload)
    }

    /// Serialize to the canonical payload shape (nested `disease` objects),
    /// suitable for embedding in a host page.
    pub fn to_payload_json(&self) -> serde_json::Result<String> {
        let payload = Payload {
            data: PayloadData {
                signatures: &self.signatures,
                reference: &self.reference,
                query: &self.query,
            },
        };

        serde_json::to_string(&payload)
    }

    /// Distinct diseases present in the reference samples, deduplicated by
    /// code and sorted by code. The first occurrence of a code supplies the
    /// display name.
    pub fn diseases(&self) -> Vec<Disease> {
        let mut by_code: BTreeMap<&str, &Disease> = BTreeMap::new();

        for sample in &self.reference {
            if let Some(disease) = &sample.disease {
                by_code.entry(disease.code.as_str()).or_insert(disease);
            }
        }

        by_code.into_values().cloned().collect()
    }

    /// Reference samples belonging to the disease cohort with the given
    /// code. An unknown code matches no samples.
    pub fn reference_cohort(&self, code: &str) -> Vec<&Sample> {
        self.reference
            .iter()
            .filter(|sample| sample.in_cohort(code))
            .collect()
    }

    fn validate_shape(&self) -> Result<(), PayloadError> {
        let expected = self.signatures.len();

        for sample in self.reference.iter().chain(&self.query) {
            if sample.contributions.len() != expected {
                return Err(PayloadError::SampleShapeMismatch {
                    sample: sample.name.clone(),
                    expected,
                    found: sample.contributions.len(),
                });
            }
        }

        Ok(())
    }
}
