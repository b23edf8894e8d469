use anyhow::Result;
use serde_json::json;

use bodyline::models::config::{Config, Units};
use bodyline::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "height" => config.profile.height_cm = Some(value.parse()?),
        "sex" => config.profile.sex = Some(value.parse()?),
        "units.system" => match value {
            "metric" => config.units = Units::default(),
            "imperial" => config.units = Units::imperial(),
            _ => anyhow::bail!("units.system must be 'metric' or 'imperial'"),
        },
        "thresholds.caution" => config.thresholds.caution_multiplier = value.parse()?,
        "thresholds.extreme" => config.thresholds.extreme_multiplier = value.parse()?,
        _ => anyhow::bail!("unknown config key: {}", key),
    }
    config.thresholds.validate()?;
    if !config.thresholds.is_ordered() {
        tracing::warn!(
            caution = config.thresholds.caution_multiplier,
            extreme = config.thresholds.extreme_multiplier,
            "extreme multiplier is below caution; extreme tier will never be reported"
        );
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
