use anyhow::Result;
use serde_json::json;

use bodyline::core::{circumference, composition, history, rate, units};
use bodyline::dataset::Dataset;
use bodyline::models::config::Config;
use bodyline::models::{BodyMetric, Measurement, Sex};
use bodyline::output;
use bodyline::output::human;

use super::Context;

pub fn run_muscle(ctx: &Context, weight: f64, fat: f64) -> Result<()> {
    let config = Config::load()?;
    let weight_kg = units::mass_from_input(weight, &config.units);
    let muscle = composition::muscle_mass(Some(weight_kg), Some(fat));

    if ctx.human {
        match muscle {
            Some(m) => {
                let (display, unit) = units::to_display(m, BodyMetric::MuscleMass, &config.units);
                println!("Muscle mass: {:.1} {}", display, unit);
            }
            None => println!("Insufficient data: weight must be positive."),
        }
    } else {
        let out = output::success("muscle", json!({ "muscle_mass": muscle }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_body_fat(
    ctx: &Context,
    neck: f64,
    belly: f64,
    hip: Option<f64>,
    height: Option<f64>,
    sex: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let height = height
        .or(config.profile.height_cm)
        .ok_or_else(|| anyhow::anyhow!("height is required (pass --height or set it in config)"))?;
    let sex = resolve_sex(sex, &config)?;
    let u = &config.units;

    let fat = composition::body_fat_percentage(
        Some(units::length_from_input(neck, u)),
        Some(units::length_from_input(belly, u)),
        height,
        sex,
        hip.map(|h| units::length_from_input(h, u)),
    );

    if ctx.human {
        match fat {
            Some(f) => println!("Body fat: {:.1} %", f),
            None => println!("Insufficient data: waist must exceed neck."),
        }
    } else {
        let out = output::success("body-fat", json!({ "fat_percentage": fat }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_waist(
    ctx: &Context,
    fat: f64,
    neck: Option<f64>,
    height: Option<f64>,
    sex: Option<&str>,
    hip: Option<f64>,
) -> Result<()> {
    let config = Config::load()?;
    let u = &config.units;
    let sex = resolve_sex(sex, &config)?;

    // Circumferences not given on the command line come from the latest entry carrying them.
    let latest = if neck.is_none() || (hip.is_none() && sex != Sex::Male) {
        let path = ctx.data.clone().unwrap_or_else(Config::dataset_path);
        if path.exists() {
            Dataset::load(&path)?.entries
        } else {
            Vec::new()
        }
    } else {
        Vec::new()
    };
    let ordered = history::chronological(&latest);
    let latest_of =
        |pick: fn(&Measurement) -> Option<f64>| ordered.iter().rev().find_map(|e| pick(e));

    let neck_cm = neck
        .map(|n| units::length_from_input(n, u))
        .or_else(|| latest_of(|e| e.neck));
    let hip_cm = match sex {
        Sex::Male => None,
        _ => hip
            .map(|h| units::length_from_input(h, u))
            .or_else(|| latest_of(|e| e.hip)),
    };
    let height_cm = height.or(config.profile.height_cm);

    let waist = circumference::infer_waist(Some(fat), neck_cm, height_cm, Some(sex), hip_cm);

    if ctx.human {
        match waist {
            Some(w) => {
                let (display, unit) = units::length_to_display(w, u);
                println!("Waist for {:.1} % body fat: {:.1} {}", fat, display, unit);
            }
            None => println!("No plausible waist for {:.1} % body fat with these inputs.", fat),
        }
    } else {
        let out = output::success(
            "waist",
            json!({
                "target_fat_percentage": fat,
                "neck_cm": neck_cm,
                "height_cm": height_cm,
                "hip_cm": hip_cm,
                "sex": sex,
                "waist_cm": waist,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_classify(ctx: &Context, metric: &str, weekly_change: f64) -> Result<()> {
    let config = Config::load()?;
    let metric: BodyMetric = metric.parse()?;
    let c = rate::describe(weekly_change, metric, &config.thresholds);

    if ctx.human {
        println!("{}", human::format_classification(&c));
    } else {
        let out = output::success("classify", serde_json::to_value(&c)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn resolve_sex(flag: Option<&str>, config: &Config) -> Result<Sex> {
    match flag {
        Some(s) => s.parse(),
        None => config
            .profile
            .sex
            .ok_or_else(|| anyhow::anyhow!("sex is required (pass --sex or set it in config)")),
    }
}
