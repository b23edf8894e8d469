//! Entries and goals as handed over by the tracker's storage layer, read from
//! a JSON export or a CSV of measurements.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::composition;
use crate::models::config::Profile;
use crate::models::goal::Goal;
use crate::models::measurement::{Measurement, Sex};

/// Height assumed for the Navy formula when the profile has none.
pub const DEFAULT_HEIGHT_CM: f64 = 185.0;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub entries: Vec<Measurement>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Dataset {
    /// Load from `path`; `.csv` files hold measurements only.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read dataset {}", path.display()))?;
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let dataset = if is_csv {
            Self {
                entries: parse_csv(&contents)?,
                goals: Vec::new(),
            }
        } else {
            Self::from_json(&contents)?
        };
        debug!(
            entries = dataset.entries.len(),
            goals = dataset.goals.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse `{ "entries": [...], "goals": [...] }` or a bare array of entries.
    pub fn from_json(json_str: &str) -> Result<Self> {
        if json_str.trim_start().starts_with('[') {
            let entries: Vec<Measurement> = serde_json::from_str(json_str)?;
            return Ok(Self {
                entries,
                goals: Vec::new(),
            });
        }
        Ok(serde_json::from_str(json_str)?)
    }

    /// Fill `fat_percentage` from circumferences on entries that lack it,
    /// using the profile's height and sex. Returns how many entries changed.
    pub fn fill_fat_percentage(&mut self, profile: &Profile) -> usize {
        let height = profile.height_cm.unwrap_or(DEFAULT_HEIGHT_CM);
        let sex = profile.sex.unwrap_or(Sex::Male);
        let mut warned = false;
        let mut count = 0;

        for e in self.entries.iter_mut().filter(|e| e.fat_percentage.is_none()) {
            if e.neck.is_none() || e.belly.is_none() {
                continue;
            }
            if !warned && (profile.height_cm.is_none() || profile.sex.is_none()) {
                warn!(height, %sex, "profile incomplete; assuming defaults for body-fat estimate");
                warned = true;
            }
            e.fat_percentage = composition::body_fat_percentage(e.neck, e.belly, height, sex, e.hip);
            if e.fat_percentage.is_some() {
                count += 1;
            }
        }
        count
    }
}

/// Parse measurements from CSV with a header row. Recognised columns:
/// `date, weight, neck, belly|waist, hip, fat_percentage, muscle_mass`.
pub fn parse_csv(csv_str: &str) -> Result<Vec<Measurement>> {
    let mut lines = csv_str.lines();
    let header: Vec<String> = match lines.next() {
        Some(h) => h.split(',').map(|s| s.trim().to_ascii_lowercase()).collect(),
        None => return Ok(Vec::new()),
    };
    let column = |name: &str| header.iter().position(|h| h == name);

    let date_col = column("date").ok_or_else(|| anyhow::anyhow!("CSV is missing a 'date' column"))?;
    let weight_col =
        column("weight").ok_or_else(|| anyhow::anyhow!("CSV is missing a 'weight' column"))?;
    let neck_col = column("neck");
    let belly_col = column("belly").or_else(|| column("waist"));
    let hip_col = column("hip");
    let fat_col = column("fat_percentage");
    let muscle_col = column("muscle_mass");

    let mut entries = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = i + 2;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |col: Option<usize>| col.and_then(|c| fields.get(c)).filter(|s| !s.is_empty());

        let date_str = field(Some(date_col))
            .ok_or_else(|| anyhow::anyhow!("row {}: missing date", row))?;
        let date: NaiveDate = date_str
            .parse()
            .with_context(|| format!("row {}: invalid date '{}'", row, date_str))?;
        let weight_str = field(Some(weight_col))
            .ok_or_else(|| anyhow::anyhow!("row {}: missing weight", row))?;
        let weight: f64 = weight_str
            .parse()
            .with_context(|| format!("row {}: invalid weight '{}'", row, weight_str))?;

        let optional = |col: Option<usize>, name: &str| -> Result<Option<f64>> {
            match field(col) {
                Some(s) => Ok(Some(s.parse().with_context(|| {
                    format!("row {}: invalid {} '{}'", row, name, s)
                })?)),
                None => Ok(None),
            }
        };

        entries.push(Measurement {
            date,
            weight,
            neck: optional(neck_col, "neck")?,
            belly: optional(belly_col, "belly")?,
            hip: optional(hip_col, "hip")?,
            fat_percentage: optional(fat_col, "fat_percentage")?,
            muscle_mass: optional(muscle_col, "muscle_mass")?,
        });
    }
    Ok(entries)
}
