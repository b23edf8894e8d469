mod common;

use bodyline::error::ValidationError;
use bodyline::models::config::{Config, Profile, Thresholds, Units};
use bodyline::models::{BodyMetric, Goal, Measurement, Sex};
use common::d;
use std::ffi::OsString;
use std::sync::{LazyLock, Mutex};
use tempfile::TempDir;

static CONFIG_ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct BodylineHomeGuard {
    previous: Option<OsString>,
}

impl BodylineHomeGuard {
    fn set(path: &std::path::Path) -> Self {
        let previous = std::env::var_os("BODYLINE_HOME");
        // SAFETY: tests that touch BODYLINE_HOME are serialized by CONFIG_ENV_LOCK.
        unsafe { std::env::set_var("BODYLINE_HOME", path) };
        Self { previous }
    }
}

impl Drop for BodylineHomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => {
                // SAFETY: tests that touch BODYLINE_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::set_var("BODYLINE_HOME", value) };
            }
            None => {
                // SAFETY: tests that touch BODYLINE_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::remove_var("BODYLINE_HOME") };
            }
        }
    }
}

fn with_temp_home<T>(f: impl FnOnce(&std::path::Path) -> T) -> T {
    let _lock = CONFIG_ENV_LOCK.lock().unwrap();
    let dir = TempDir::new().unwrap();
    let _home = BodylineHomeGuard::set(dir.path());
    f(dir.path())
}

// ─── Config tests ────────────────────────────────────────────────────────────

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert!(config.profile.height_cm.is_none());
    assert!(config.profile.sex.is_none());
    assert_eq!(config.units.system, "metric");
    assert_eq!(config.thresholds.caution_multiplier, 1.25);
    assert_eq!(config.thresholds.extreme_multiplier, 1.5);
}

#[test]
fn test_config_toml_round_trip() {
    let config = Config {
        profile: Profile {
            height_cm: Some(172.0),
            sex: Some(Sex::Female),
        },
        units: Units::imperial(),
        thresholds: Thresholds::new(1.1, 1.9).unwrap(),
    };
    let toml_str = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.profile.height_cm, Some(172.0));
    assert_eq!(parsed.profile.sex, Some(Sex::Female));
    assert!(parsed.units.is_imperial());
    assert_eq!(parsed.thresholds, config.thresholds);
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let parsed: Config = toml::from_str("[profile]\nheight_cm = 180.0\n").unwrap();
    assert_eq!(parsed.profile.height_cm, Some(180.0));
    assert_eq!(parsed.thresholds, Thresholds::default());
    assert!(!parsed.units.is_imperial());
}

#[test]
fn test_config_save_and_load() {
    with_temp_home(|home| {
        let mut config = Config::default();
        config.profile.height_cm = Some(180.0);
        config.profile.sex = Some(Sex::Male);
        config.save().unwrap();
        assert!(home.join("config.toml").exists());

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.profile.height_cm, Some(180.0));
        assert_eq!(loaded.profile.sex, Some(Sex::Male));
    });
}

#[cfg(unix)]
#[test]
fn test_config_saved_owner_only() {
    use std::os::unix::fs::PermissionsExt;
    with_temp_home(|home| {
        Config::default().save().unwrap();
        let mode = std::fs::metadata(home.join("config.toml"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    });
}

#[test]
fn test_config_load_rejects_bad_multiplier() {
    with_temp_home(|home| {
        std::fs::write(
            home.join("config.toml"),
            "[thresholds]\ncaution_multiplier = 2.5\n",
        )
        .unwrap();
        let err = Config::load().unwrap_err();
        assert!(err.is::<ValidationError>());
    });
}

// ─── Thresholds ──────────────────────────────────────────────────────────────

#[test]
fn test_thresholds_range() {
    assert!(Thresholds::new(1.0, 2.0).is_ok());
    assert_eq!(
        Thresholds::new(0.9, 1.5),
        Err(ValidationError::MultiplierOutOfRange {
            name: "caution_multiplier",
            value: 0.9,
            min: 1.0,
            max: 2.0,
        })
    );
    assert!(Thresholds::new(1.25, 2.01).is_err());
    assert!(Thresholds::new(f64::NAN, 1.5).is_err());
}

#[test]
fn test_thresholds_ordering() {
    assert!(Thresholds::default().is_ordered());
    assert!(Thresholds::new(1.5, 1.5).unwrap().is_ordered());
    assert!(!Thresholds::new(1.6, 1.2).unwrap().is_ordered());
}

// ─── Goal ────────────────────────────────────────────────────────────────────

#[test]
fn test_goal_validate_ok() {
    let goal = Goal::new(d(2024, 4, 1))
        .starting(d(2024, 1, 1))
        .with_target(BodyMetric::Weight, 80.0);
    assert_eq!(goal.validate(None), Ok(()));
}

#[test]
fn test_goal_target_not_after_start() {
    let goal = Goal::new(d(2024, 1, 1))
        .starting(d(2024, 1, 1))
        .with_target(BodyMetric::Weight, 80.0);
    assert_eq!(
        goal.validate(None),
        Err(ValidationError::TargetNotAfterStart {
            start: d(2024, 1, 1),
            target: d(2024, 1, 1),
        })
    );
}

#[test]
fn test_goal_default_start_applies_without_explicit_start() {
    let goal = Goal::new(d(2024, 2, 1)).with_target(BodyMetric::Weight, 80.0);
    assert!(goal.validate(Some(d(2024, 1, 1))).is_ok());
    assert!(goal.validate(Some(d(2024, 3, 1))).is_err());
    // An explicit start wins over the default.
    let goal = goal.starting(d(2024, 1, 1));
    assert!(goal.validate(Some(d(2024, 3, 1))).is_ok());
}

#[test]
fn test_goal_without_targets() {
    let goal = Goal::new(d(2024, 4, 1)).starting(d(2024, 1, 1));
    assert!(!goal.is_actionable());
    assert_eq!(goal.validate(None), Err(ValidationError::NoTargets));

    let nan = goal.with_target(BodyMetric::FatPercentage, f64::NAN);
    assert!(!nan.is_actionable());
}

#[test]
fn test_goal_deserialize() {
    let json = r#"{"start_date":"2024-01-01","target_date":"2024-04-01","target_weight":80.0}"#;
    let goal: Goal = serde_json::from_str(json).unwrap();
    assert_eq!(goal.target(BodyMetric::Weight), Some(80.0));
    assert_eq!(goal.target(BodyMetric::MuscleMass), None);
    assert_eq!(goal.start_date, Some(d(2024, 1, 1)));
}

// ─── Metric / Measurement ────────────────────────────────────────────────────

#[test]
fn test_metric_aliases() {
    assert_eq!("w".parse::<BodyMetric>().unwrap(), BodyMetric::Weight);
    assert_eq!("bf".parse::<BodyMetric>().unwrap(), BodyMetric::FatPercentage);
    assert_eq!("fat".parse::<BodyMetric>().unwrap(), BodyMetric::FatPercentage);
    assert_eq!("muscle".parse::<BodyMetric>().unwrap(), BodyMetric::MuscleMass);
    assert!("height".parse::<BodyMetric>().is_err());
    assert_eq!(BodyMetric::FatPercentage.to_string(), "fat_percentage");
    assert_eq!(BodyMetric::FatPercentage.short_name(), "fat");
}

#[test]
fn test_sex_parse() {
    assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
    assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
    assert_eq!("other".parse::<Sex>().unwrap(), Sex::Other);
    assert!("x".parse::<Sex>().is_err());
}

#[test]
fn test_measurement_value_prefers_stored_muscle() {
    let mut m = Measurement::new(d(2024, 1, 1), 80.0).with_fat(20.0);
    assert_eq!(m.value(BodyMetric::MuscleMass), Some(48.0));
    m.muscle_mass = Some(50.5);
    assert_eq!(m.value(BodyMetric::MuscleMass), Some(50.5));
}

#[test]
fn test_measurement_waist_alias() {
    let json = r#"{"date":"2024-01-01","weight":80.0,"neck":38.0,"waist":90.0}"#;
    let m: Measurement = serde_json::from_str(json).unwrap();
    assert_eq!(m.belly, Some(90.0));
    assert_eq!(m.fat_percentage, None);
}
