//! Chart-data assembly for mutational-signature contribution visualizations.
//!
//! This crate turns a cohort payload (reference samples grouped by disease,
//! plus query samples, each carrying per-signature mutation counts) into a
//! renderer-agnostic chart description. It covers:
//!
//! - Loading the embedded JSON payload into an immutable [`models::Dataset`]
//! - Building payloads from SigProfiler activity tables
//! - Aggregating per-signature totals with small-contribution folding
//! - Ranking query samples by total mutational burden
//! - Assembling a [`chart::ChartSpec`] for a rendering adapter to consume
//!
//! # Example
//!
//! ```no_run
//! use sigviz_core::chart::build_chart;
//! use sigviz_core::models::Dataset;
//! use sigviz_core::selection::DiseaseSelector;
//!
//! let dataset = Dataset::from_path("payload.json").unwrap();
//!
//! // Pick the first disease available in the reference cohort.
//! let selector = DiseaseSelector::new(&dataset);
//! let code = selector.active().unwrap_or_default();
//!
//! let spec = build_chart(&dataset, code).unwrap();
//! ```

pub mod activities;
pub mod aggregate;
pub mod chart;
pub mod errors;
pub mod etiology;
pub mod models;
pub mod selection;

// re-exports
pub use chart::{ChartSpec, build_chart};
pub use models::{Dataset, Disease, Sample};
pub use selection::DiseaseSelector;

pub mod consts {
    pub const CHART_CMD: &str = "chart";
    pub const PAYLOAD_CMD: &str = "payload";

    /// Cohort-summary signatures below this share of the grand total are
    /// folded into the "Other" bucket.
    pub const SMALL_CONTRIBUTION_THRESHOLD: f64 = 0.02;

    pub const OTHER_LABEL: &str = "Other";

    /// Fixed colors for synthetic series, outside the categorical palette.
    pub const OTHER_COLOR: &str = "#222";
    pub const BURDEN_COLOR: &str = "#911938";
}
