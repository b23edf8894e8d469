use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bodyline",
    version,
    about = "Body-composition goals: projections, required rates and risk tiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Dataset file with entries and goals (.json or .csv)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Estimate muscle mass from weight and body-fat percentage
    Muscle {
        /// Body weight
        #[arg(long)]
        weight: f64,
        /// Body-fat percentage
        #[arg(long)]
        fat: f64,
    },

    /// Estimate body-fat percentage from circumferences (Navy method)
    BodyFat {
        #[arg(long)]
        neck: f64,
        /// Waist/belly circumference
        #[arg(long, alias = "waist")]
        belly: f64,
        #[arg(long)]
        hip: Option<f64>,
        /// Height in cm (defaults to profile)
        #[arg(long)]
        height: Option<f64>,
        /// male/female/other (defaults to profile)
        #[arg(long)]
        sex: Option<String>,
    },

    /// Waist circumference consistent with a target body-fat percentage
    Waist {
        /// Target body-fat percentage
        #[arg(long)]
        fat: f64,
        /// Neck circumference (defaults to latest entry)
        #[arg(long)]
        neck: Option<f64>,
        /// Height in cm (defaults to profile)
        #[arg(long)]
        height: Option<f64>,
        /// male/female/other (defaults to profile)
        #[arg(long)]
        sex: Option<String>,
        /// Hip circumference (defaults to latest entry)
        #[arg(long)]
        hip: Option<f64>,
    },

    /// Classify a weekly rate of change into a risk tier
    Classify {
        /// weight, fat or muscle
        metric: String,
        /// Weekly change (negative for loss)
        #[arg(allow_negative_numbers = true)]
        weekly_change: f64,
    },

    /// Actual vs required series for one metric of a goal
    Project {
        /// weight, fat or muscle
        metric: String,
        /// Goal number (1-based, defaults to the next open goal)
        #[arg(long)]
        goal: Option<usize>,
        /// One required point per day instead of start/target only
        #[arg(long)]
        daily: bool,
    },

    /// Required daily/weekly change to reach a goal
    Rate {
        /// weight, fat or muscle
        metric: String,
        #[arg(long)]
        goal: Option<usize>,
    },

    /// Progress report for every open goal
    Progress,

    /// All metrics of a goal on one shared timeline
    Chart {
        #[arg(long)]
        goal: Option<usize>,
        #[arg(long)]
        daily: bool,
    },

    /// Latest values and change over a period
    Summary {
        /// Comparison window in days
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. height, sex, thresholds.caution)
        key: String,
        /// Config value
        value: String,
    },
}
