//! Cohort aggregation over immutable sample collections.
//!
//! Everything here is recomputed from scratch on every render pass; no
//! derived state is cached between calls.

use std::collections::BTreeSet;

use crate::consts::{OTHER_LABEL, SMALL_CONTRIBUTION_THRESHOLD};
use crate::errors::PayloadError;
use crate::etiology::display_label;
use crate::models::Sample;

/// Per-signature totals for one cohort.
#[derive(Clone, Debug)]
pub struct CohortSummary {
    /// `totals[i]` is the count summed over the cohort for `signatures[i]`.
    pub totals: Vec<u64>,
    /// Sum of `totals`.
    pub grand_total: u64,
}

/// Row-assembly policy for a cohort-summary panel.
///
/// Zero totals are always dropped. With a fold threshold set, signatures
/// below that share of the grand total are folded into a single "Other"
/// row instead of appearing on their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryPolicy {
    pub fold_threshold: Option<f64>,
}

impl SummaryPolicy {
    /// Reference-cohort policy: fold small contributions into "Other".
    pub fn with_other_bucket() -> Self {
        SummaryPolicy {
            fold_threshold: Some(SMALL_CONTRIBUTION_THRESHOLD),
        }
    }
}

/// One assembled row of a cohort-summary panel.
#[derive(Clone, Debug)]
pub struct AggregateRow {
    /// Index into the canonical signature list; `None` for the synthetic
    /// "Other" bucket.
    pub signature: Option<usize>,
    pub label: String,
    pub count: u64,
    pub proportion: f64,
}

impl CohortSummary {
    /// Sum per-signature contributions over a sample collection.
    ///
    /// A sample whose contribution vector disagrees with the signature
    /// count is a data-integrity violation; the aggregation fails rather
    /// than truncating or padding.
    pub fn summarize<'a, I>(signature_count: usize, samples: I) -> Result<Self, PayloadError>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut totals = vec![0u64; signature_count];

        for sample in samples {
            if sample.contributions.len() != signature_count {
                return Err(PayloadError::SampleShapeMismatch {
                    sample: sample.name.clone(),
                    expected: signature_count,
                    found: sample.contributions.len(),
                });
            }

            for (total, contribution) in totals.iter_mut().zip(&sample.contributions) {
                *total += contribution;
            }
        }

        let grand_total = totals.iter().sum();

        Ok(CohortSummary {
            totals,
            grand_total,
        })
    }

    /// Proportion of the grand total per signature. An empty or all-zero
    /// cohort yields all zeros (zero-width bars), never NaN.
    pub fn proportions(&self) -> Vec<f64> {
        self.totals
            .iter()
            .map(|&total| self.proportion_of(total))
            .collect()
    }

    /// Assemble display rows under the given policy. Row order follows the
    /// canonical signature order, with "Other" last; the "Other" row is
    /// emitted only when its folded mass is nonzero.
    pub fn rows(&self, signatures: &[String], policy: SummaryPolicy) -> Vec<AggregateRow> {
        let threshold = policy
            .fold_threshold
            .map(|share| share * self.grand_total as f64);

        let mut rows = Vec::new();
        let mut other = 0u64;

        for (i, (&total, signature)) in self.totals.iter().zip(signatures).enumerate() {
            if total == 0 {
                continue;
            }

            if let Some(threshold) = threshold {
                if (total as f64) < threshold {
                    other += total;
                    continue;
                }
            }

            rows.push(AggregateRow {
                signature: Some(i),
                label: display_label(signature),
                count: total,
                proportion: self.proportion_of(total),
            });
        }

        if other > 0 {
            rows.push(AggregateRow {
                signature: None,
                label: OTHER_LABEL.to_string(),
                count: other,
                proportion: self.proportion_of(other),
            });
        }

        rows
    }

    fn proportion_of(&self, count: u64) -> f64 {
        if self.grand_total == 0 {
            0.0
        } else {
            count as f64 / self.grand_total as f64
        }
    }
}

/// A query sample paired with its total burden.
#[derive(Clone, Copy, Debug)]
pub struct RankedSample<'a> {
    pub sample: &'a Sample,
    pub total: u64,
}

/// Order samples ascending by total burden, producing the staircase layout
/// of the per-sample panels. The sort is stable: equal totals keep their
/// input order.
pub fn rank_by_burden(samples: &[Sample]) -> Vec<RankedSample<'_>> {
    let mut ranked: Vec<RankedSample> = samples
        .iter()
        .map(|sample| RankedSample {
            sample,
            total: sample.burden(),
        })
        .collect();

    ranked.sort_by_key(|r| r.total);

    ranked
}

/// Signature indices carrying nonzero mass in either summary panel. The
/// per-sample series are restricted to this set so the panels stay
/// visually consistent; the "Other" row has no index and never gates a
/// series.
pub fn active_signatures(reference: &[AggregateRow], query: &[AggregateRow]) -> BTreeSet<usize> {
    reference
        .iter()
        .chain(query)
        .filter_map(|row| row.signature)
        .collect()
}
