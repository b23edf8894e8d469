use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::measurement::Measurement;
use crate::models::metric::BodyMetric;

/// Entries ascending by date, one per day. When several entries share a date
/// the one appearing later in `entries` wins.
pub fn chronological(entries: &[Measurement]) -> Vec<&Measurement> {
    let mut by_date: BTreeMap<NaiveDate, &Measurement> = BTreeMap::new();
    for e in entries {
        by_date.insert(e.date, e);
    }
    by_date.into_values().collect()
}

pub fn latest_date(entries: &[Measurement]) -> Option<NaiveDate> {
    entries.iter().map(|e| e.date).max()
}

/// Most recent value of `metric`, skipping entries that lack it.
pub fn latest_value(entries: &[Measurement], metric: BodyMetric) -> Option<(NaiveDate, f64)> {
    chronological(entries)
        .into_iter()
        .rev()
        .find_map(|e| e.value(metric).map(|v| (e.date, v)))
}
