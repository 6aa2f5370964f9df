//! Disease cohort selection state.

use crate::models::{Dataset, Disease};

///
/// The distinct diseases available for cohort filtering, plus the active
/// pick. Owned by the render controller and passed into each computation
/// explicitly; nothing here reads ambient state.
///
/// Options come from the reference samples only, deduplicated by code and
/// sorted by code; the first option is active by default. Selecting a code
/// outside the option set is allowed and simply matches no samples
/// downstream.
///
#[derive(Clone, Debug)]
pub struct DiseaseSelector {
    options: Vec<Disease>,
    active: Option<String>,
}

impl DiseaseSelector {
    pub fn new(dataset: &Dataset) -> Self {
        let options = dataset.diseases();
        let active = options.first().map(|d| d.code.clone());

        DiseaseSelector { options, active }
    }

    /// Sorted options for populating a selection control.
    pub fn options(&self) -> &[Disease] {
        &self.options
    }

    /// The active disease code; `None` only when the dataset has no
    /// classified reference samples.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Replace the active value in response to a selection change.
    pub fn select(&mut self, code: &str) {
        self.active = Some(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::Sample;

    fn reference_sample(name: &str, code: &str, disease_name: &str) -> Sample {
        Sample {
            name: name.to_string(),
            disease: Some(Disease::new(code, disease_name)),
            contributions: vec![0],
        }
    }

    #[fixture]
    fn dataset() -> Dataset {
        Dataset {
            signatures: vec![String::from("SBS1")],
            reference: vec![
                reference_sample("s1", "LUNG", "Lung"),
                reference_sample("s2", "ACT", "Adrenocortical carcinoma"),
                reference_sample("s3", "LUNG", "Lung"),
            ],
            query: Vec::new(),
        }
    }

    #[rstest]
    fn test_options_sorted_distinct(dataset: Dataset) {
        let selector = DiseaseSelector::new(&dataset);
        let codes: Vec<&str> = selector.options().iter().map(|d| d.code.as_str()).collect();

        assert_eq!(codes, vec!["ACT", "LUNG"]);
    }

    #[rstest]
    fn test_default_is_first_option(dataset: Dataset) {
        let selector = DiseaseSelector::new(&dataset);
        assert_eq!(selector.active(), Some("ACT"));
    }

    #[rstest]
    fn test_select_replaces_active(dataset: Dataset) {
        let mut selector = DiseaseSelector::new(&dataset);

        selector.select("LUNG");
        assert_eq!(selector.active(), Some("LUNG"));

        // out-of-set codes are kept; they just match no samples downstream
        selector.select("BALL");
        assert_eq!(selector.active(), Some("BALL"));
    }

    #[rstest]
    fn test_no_reference_samples() {
        let dataset = Dataset {
            signatures: vec![String::from("SBS1")],
            reference: Vec::new(),
            query: Vec::new(),
        };

        let selector = DiseaseSelector::new(&dataset);
        assert!(selector.options().is_empty());
        assert_eq!(selector.active(), None);
    }
}
