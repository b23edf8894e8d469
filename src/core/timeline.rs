use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::metric::BodyMetric;
use crate::models::series::{MetricSeries, SeriesKind, SeriesPoint};

/// Several series re-indexed onto one shared date axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MergedTimeline {
    pub axis: Vec<NaiveDate>,
    pub series: Vec<MetricSeries>,
}

/// Union the dates of every series into one ascending axis and re-index each
/// series onto it. Dates a series has no point for become `None` gaps.
///
/// Output series are ordered by `(metric, kind)`, so the result does not
/// depend on the order of `series`. Inputs sharing a `(metric, kind)` are
/// combined, keeping the first non-null value seen for each date.
pub fn merge_all(series: &[MetricSeries]) -> MergedTimeline {
    let mut axis: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut by_key: BTreeMap<(BodyMetric, SeriesKind), BTreeMap<NaiveDate, Option<f64>>> =
        BTreeMap::new();

    for s in series {
        let values = by_key.entry((s.metric, s.kind)).or_default();
        for p in &s.points {
            axis.insert(p.date);
            let slot = values.entry(p.date).or_insert(None);
            if slot.is_none() {
                *slot = p.value;
            }
        }
    }

    let axis: Vec<NaiveDate> = axis.into_iter().collect();
    let series = by_key
        .into_iter()
        .map(|((metric, kind), values)| {
            let points = axis
                .iter()
                .map(|d| SeriesPoint::new(*d, values.get(d).copied().flatten()))
                .collect();
            MetricSeries {
                metric,
                kind,
                points,
            }
        })
        .collect();

    MergedTimeline { axis, series }
}
