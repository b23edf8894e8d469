pub mod calc;
pub mod config;
pub mod goal;
pub mod init;
pub mod project;
pub mod summary;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use bodyline::core::history;
use bodyline::dataset::Dataset;
use bodyline::models::Goal;
use bodyline::models::config::Config;

pub struct Context {
    pub human: bool,
    pub today: NaiveDate,
    pub data: Option<PathBuf>,
}

impl Context {
    /// Config plus the dataset, with body fat filled in from circumferences.
    pub fn load(&self) -> Result<(Config, Dataset)> {
        let config = Config::load()?;
        let path = self.data.clone().unwrap_or_else(Config::dataset_path);
        let mut dataset = Dataset::load(&path)?;
        dataset.fill_fat_percentage(&config.profile);
        Ok((config, dataset))
    }
}

/// Pick goal `number` (1-based), or the open goal with the nearest target
/// date, falling back to the first goal. The selection is validated.
pub fn select_goal(dataset: &Dataset, number: Option<usize>, today: NaiveDate) -> Result<&Goal> {
    if dataset.goals.is_empty() {
        anyhow::bail!("no goals in dataset");
    }
    let goal = match number {
        Some(n) => dataset
            .goals
            .get(n.wrapping_sub(1))
            .ok_or_else(|| anyhow::anyhow!("goal {} not found ({} goal(s))", n, dataset.goals.len()))?,
        None => dataset
            .goals
            .iter()
            .filter(|g| g.target_date > today)
            .min_by_key(|g| g.target_date)
            .unwrap_or(&dataset.goals[0]),
    };
    goal.validate(history::latest_date(&dataset.entries))?;
    Ok(goal)
}
