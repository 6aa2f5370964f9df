//! Renderer-agnostic chart assembly.
//!
//! [`build_chart`] maps one (dataset, disease) pair to a [`ChartSpec`]: an
//! ordered list of panels, each carrying its category axis and bar series.
//! The description has no dependency on any charting technology; a
//! rendering adapter decides layout, legends, and palette values.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::aggregate::{self, AggregateRow, CohortSummary, RankedSample, SummaryPolicy};
use crate::consts::{BURDEN_COLOR, OTHER_COLOR};
use crate::errors::PayloadError;
use crate::etiology::display_label;
use crate::models::Dataset;

/// Deterministic color assignment for a series.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    /// Index into the renderer's categorical palette. A signature's index
    /// in the canonical list is used, so the same signature gets the same
    /// color across panels and across renders.
    Palette(usize),
    /// Fixed color for synthetic series.
    Fixed(&'static str),
}

/// One bar series within a panel, with one value and one hover annotation
/// per category.
#[derive(Clone, Debug, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub hover: Vec<String>,
    pub color: SeriesColor,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    ReferenceSummary,
    QuerySummary,
    SampleContributions,
    SampleBurden,
}

/// One visual region of the chart: a titled category axis plus its series.
#[derive(Clone, Debug, Serialize)]
pub struct Panel {
    pub id: PanelKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_title: Option<&'static str>,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

/// The full chart description handed to a rendering adapter.
#[derive(Clone, Debug, Serialize)]
pub struct ChartSpec {
    pub panels: Vec<Panel>,
}

/// Human-readable SNV count: "1 SNV", "7 SNVs".
pub fn format_snv(count: u64) -> String {
    if count == 1 {
        format!("{} SNV", count)
    } else {
        format!("{} SNVs", count)
    }
}

/// Assemble the four-panel chart for one disease cohort.
///
/// Panels, in order: reference cohort summary (small contributions folded
/// into "Other"), query cohort summary, per-sample signature contributions
/// (samples in ascending burden order), and per-sample absolute burden.
/// A disease code matching no reference samples yields an empty reference
/// panel; an empty query set yields empty per-sample panels. Neither is an
/// error.
pub fn build_chart(dataset: &Dataset, disease_code: &str) -> Result<ChartSpec, PayloadError> {
    let signatures = &dataset.signatures;

    let cohort = dataset.reference_cohort(disease_code);
    let reference_summary = CohortSummary::summarize(signatures.len(), cohort.iter().copied())?;
    let query_summary = CohortSummary::summarize(signatures.len(), &dataset.query)?;

    let reference_rows = reference_summary.rows(signatures, SummaryPolicy::with_other_bucket());
    let query_rows = query_summary.rows(signatures, SummaryPolicy::default());

    let active = aggregate::active_signatures(&reference_rows, &query_rows);
    let ranked = aggregate::rank_by_burden(&dataset.query);

    let disease_name = dataset
        .diseases()
        .into_iter()
        .find(|d| d.code == disease_code)
        .map(|d| d.name)
        .unwrap_or_else(|| disease_code.to_string());

    let panels = vec![
        summary_panel(
            PanelKind::ReferenceSummary,
            format!("Reference: {} (n={})", disease_name, cohort.len()),
            &reference_rows,
        ),
        summary_panel(
            PanelKind::QuerySummary,
            format!("Query (n={})", dataset.query.len()),
            &query_rows,
        ),
        sample_contribution_panel(signatures, &ranked, &active),
        sample_burden_panel(&ranked),
    ];

    Ok(ChartSpec { panels })
}

fn summary_panel(id: PanelKind, title: String, rows: &[AggregateRow]) -> Panel {
    let series = rows
        .iter()
        .map(|row| Series {
            label: row.label.clone(),
            values: vec![row.proportion],
            hover: vec![format!("{}, {}", format_snv(row.count), row.label)],
            color: match row.signature {
                Some(i) => SeriesColor::Palette(i),
                None => SeriesColor::Fixed(OTHER_COLOR),
            },
        })
        .collect();

    Panel {
        id,
        categories: vec![title.clone()],
        title,
        axis_title: None,
        series,
    }
}

fn sample_contribution_panel(
    signatures: &[String],
    ranked: &[RankedSample<'_>],
    active: &BTreeSet<usize>,
) -> Panel {
    let categories: Vec<String> = ranked.iter().map(|r| r.sample.name.clone()).collect();

    let mut series = Vec::new();

    for (i, signature) in signatures.iter().enumerate() {
        if !active.contains(&i) {
            continue;
        }

        // an all-zero series draws nothing; drop it entirely
        if ranked.iter().all(|r| r.sample.contributions[i] == 0) {
            continue;
        }

        let label = display_label(signature);

        let values = ranked
            .iter()
            .map(|r| {
                if r.total == 0 {
                    0.0
                } else {
                    r.sample.contributions[i] as f64 / r.total as f64
                }
            })
            .collect();

        let hover = ranked
            .iter()
            .map(|r| format!("{}, {}", format_snv(r.sample.contributions[i]), label))
            .collect();

        series.push(Series {
            label,
            values,
            hover,
            color: SeriesColor::Palette(i),
        });
    }

    Panel {
        id: PanelKind::SampleContributions,
        title: String::from("Sample Signature Contributions"),
        axis_title: Some("Proportion of SNVs"),
        categories,
        series,
    }
}

fn sample_burden_panel(ranked: &[RankedSample<'_>]) -> Panel {
    let categories: Vec<String> = ranked.iter().map(|r| r.sample.name.clone()).collect();

    let values = ranked.iter().map(|r| r.total as f64).collect();
    let hover = ranked
        .iter()
        .map(|r| format!("{}, {}", format_snv(r.total), r.sample.name))
        .collect();

    Panel {
        id: PanelKind::SampleBurden,
        title: String::from("Sample Signature Activities"),
        axis_title: Some("Total Mutational Burden"),
        categories,
        series: vec![Series {
            label: String::from("Total burden"),
            values,
            hover,
            color: SeriesColor::Fixed(BURDEN_COLOR),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::{Disease, Sample};

    fn dataset() -> Dataset {
        Dataset {
            signatures: vec![String::from("SBS1"), String::from("SBS5")],
            reference: vec![Sample {
                name: String::from("ref01"),
                disease: Some(Disease::new("LUNG", "Lung")),
                contributions: vec![10, 0],
            }],
            query: vec![Sample {
                name: String::from("query01"),
                disease: None,
                contributions: vec![4, 6],
            }],
        }
    }

    #[test]
    fn test_format_snv() {
        assert_eq!(format_snv(0), "0 SNVs");
        assert_eq!(format_snv(1), "1 SNV");
        assert_eq!(format_snv(7), "7 SNVs");
    }

    #[rstest]
    fn test_build_chart_reference_panel() {
        let spec = build_chart(&dataset(), "LUNG").unwrap();
        let panel = &spec.panels[0];

        assert_eq!(panel.id, PanelKind::ReferenceSummary);
        assert_eq!(panel.title, "Reference: Lung (n=1)");

        // SBS5 is zero: dropped outright, and no Other row appears
        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].label, "SBS1 (Clock-like)");
        assert_eq!(panel.series[0].values, vec![1.0]);
        assert_eq!(panel.series[0].hover, vec!["10 SNVs, SBS1 (Clock-like)"]);
        assert_eq!(panel.series[0].color, SeriesColor::Palette(0));
    }

    #[rstest]
    fn test_build_chart_query_panel() {
        let spec = build_chart(&dataset(), "LUNG").unwrap();
        let panel = &spec.panels[1];

        assert_eq!(panel.id, PanelKind::QuerySummary);
        assert_eq!(panel.title, "Query (n=1)");
        assert_eq!(panel.series.len(), 2);
        assert_eq!(panel.series[0].values, vec![0.4]);
        assert_eq!(panel.series[1].values, vec![0.6]);
    }

    #[rstest]
    fn test_build_chart_sample_panels() {
        let spec = build_chart(&dataset(), "LUNG").unwrap();

        let contributions = &spec.panels[2];
        assert_eq!(contributions.id, PanelKind::SampleContributions);
        assert_eq!(contributions.categories, vec!["query01"]);
        assert_eq!(contributions.series.len(), 2);
        assert_eq!(contributions.series[0].values, vec![0.4]);
        assert_eq!(contributions.series[1].values, vec![0.6]);

        let burden = &spec.panels[3];
        assert_eq!(burden.id, PanelKind::SampleBurden);
        assert_eq!(burden.series.len(), 1);
        assert_eq!(burden.series[0].values, vec![10.0]);
        assert_eq!(burden.series[0].hover, vec!["10 SNVs, query01"]);
        assert_eq!(burden.series[0].color, SeriesColor::Fixed(BURDEN_COLOR));
    }

    #[rstest]
    fn test_colors_agree_across_panels() {
        let spec = build_chart(&dataset(), "LUNG").unwrap();

        let query = &spec.panels[1];
        let samples = &spec.panels[2];

        // SBS5 sits at index 1 of the canonical list in both panels
        assert_eq!(query.series[1].color, SeriesColor::Palette(1));
        assert_eq!(samples.series[1].color, SeriesColor::Palette(1));
    }

    #[rstest]
    fn test_build_chart_unknown_disease_yields_empty_reference() {
        let spec = build_chart(&dataset(), "BALL").unwrap();
        let panel = &spec.panels[0];

        assert_eq!(panel.title, "Reference: BALL (n=0)");
        assert!(panel.series.is_empty());
    }

    #[rstest]
    fn test_build_chart_empty_query() {
        let mut dataset = dataset();
        dataset.query.clear();

        let spec = build_chart(&dataset, "LUNG").unwrap();

        let contributions = &spec.panels[2];
        assert!(contributions.categories.is_empty());
        assert!(contributions.series.is_empty());

        let burden = &spec.panels[3];
        assert!(burden.categories.is_empty());
        assert!(burden.series[0].values.is_empty());
    }

    #[rstest]
    fn test_all_zero_series_suppressed() {
        let mut dataset = dataset();
        dataset.signatures.push(String::from("SBS8"));
        dataset.reference[0].contributions.push(5);
        dataset.query[0].contributions.push(0);

        let spec = build_chart(&dataset, "LUNG").unwrap();
        let contributions = &spec.panels[2];

        // SBS8 is active (nonzero in the reference summary) but zero in
        // every query sample, so it gets no per-sample series
        let labels: Vec<&str> = contributions
            .series
            .iter()
            .map(|s| s.label.as_str())
            .collect();

        assert_eq!(labels, vec!["SBS1 (Clock-like)", "SBS5 (Clock-like)"]);
    }

    #[rstest]
    fn test_sample_panel_staircase_order() {
        let mut dataset = dataset();
        dataset.query = vec![
            Sample {
                name: String::from("big"),
                disease: None,
                contributions: vec![90, 10],
            },
            Sample {
                name: String::from("small"),
                disease: None,
                contributions: vec![1, 1],
            },
        ];

        let spec = build_chart(&dataset, "LUNG").unwrap();

        assert_eq!(spec.panels[2].categories, vec!["small", "big"]);
        assert_eq!(spec.panels[3].series[0].values, vec![2.0, 100.0]);
    }
}
