mod cli;
mod cmd;

use bodyline::output;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let today: NaiveDate = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let ctx = cmd::Context {
        human: cli.human,
        today,
        data: cli.data.clone(),
    };

    let (name, result) = match cli.command {
        Commands::Init { skip } => ("init", cmd::init::run(skip)),
        Commands::Muscle { weight, fat } => ("muscle", cmd::calc::run_muscle(&ctx, weight, fat)),
        Commands::BodyFat {
            neck,
            belly,
            hip,
            height,
            sex,
        } => (
            "body-fat",
            cmd::calc::run_body_fat(&ctx, neck, belly, hip, height, sex.as_deref()),
        ),
        Commands::Waist {
            fat,
            neck,
            height,
            sex,
            hip,
        } => (
            "waist",
            cmd::calc::run_waist(&ctx, fat, neck, height, sex.as_deref(), hip),
        ),
        Commands::Classify {
            metric,
            weekly_change,
        } => ("classify", cmd::calc::run_classify(&ctx, &metric, weekly_change)),
        Commands::Project {
            metric,
            goal,
            daily,
        } => ("project", cmd::project::run(&ctx, &metric, goal, daily)),
        Commands::Rate { metric, goal } => ("rate", cmd::goal::run_rate(&ctx, &metric, goal)),
        Commands::Progress => ("progress", cmd::goal::run_progress(&ctx)),
        Commands::Chart { goal, daily } => ("chart", cmd::project::run_chart(&ctx, goal, daily)),
        Commands::Summary { days } => ("summary", cmd::summary::run(&ctx, days)),
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(ctx.human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "bodyline", &mut std::io::stdout());
            ("completions", Ok(()))
        }
    };

    if let Err(e) = result {
        let code = if e.is::<bodyline::error::ValidationError>() {
            "validation_error"
        } else {
            "general_error"
        };
        let err = output::error(name, code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable. Filter with `BODYLINE_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BODYLINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
