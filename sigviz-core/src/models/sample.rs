use serde::Serialize;

use crate::models::Disease;

///
/// A single sample with its per-signature mutation counts.
///
/// `contributions` is aligned positionally with the dataset's signature
/// list: `contributions[i]` is the count attributed to `signatures[i]`.
///
#[derive(Clone, Debug, Serialize)]
pub struct Sample {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,

    pub contributions: Vec<u64>,
}

impl Sample {
    /// Total mutational burden: contributions summed across all signatures.
    pub fn burden(&self) -> u64 {
        self.contributions.iter().sum()
    }

    /// Whether this sample belongs to the disease cohort with the given code.
    pub fn in_cohort(&self, code: &str) -> bool {
        self.disease.as_ref().is_some_and(|d| d.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn sample() -> Sample {
        Sample {
            name: String::from("SJACT001_D"),
            disease: Some(Disease::new("ACT", "Adrenocortical carcinoma")),
            contributions: vec![10, 0, 32],
        }
    }

    #[test]
    fn test_burden() {
        assert_eq!(sample().burden(), 42);
    }

    #[test]
    fn test_in_cohort() {
        let sample = sample();
        assert!(sample.in_cohort("ACT"));
        assert!(!sample.in_cohort("BALL"));

        let unclassified = Sample {
            disease: None,
            ..sample
        };
        assert!(!unclassified.in_cohort("ACT"));
    }
}
