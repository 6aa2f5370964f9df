use std::fmt::{self, Display};

use serde::Serialize;

///
/// Disease classification attached to a sample.
///
/// `code` is the canonical grouping key used for cohort filtering and
/// selection; `name` is the label shown in selection controls and panel
/// titles.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Disease {
    pub code: String,
    pub name: String,
}

impl Disease {
    pub fn new<C: Into<String>, N: Into<String>>(code: C, name: N) -> Self {
        Disease {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Fallback for samples with no recorded classification.
    pub fn unknown() -> Self {
        Disease::new("UNKNOWN", "Unknown")
    }
}

impl Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
