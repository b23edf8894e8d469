use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ValidationError;
use crate::models::measurement::Sex;

pub const MIN_MULTIPLIER: f64 = 1.0;
pub const MAX_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_CAUTION_MULTIPLIER: f64 = 1.25;
pub const DEFAULT_EXTREME_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub height_cm: Option<f64>,
    pub sex: Option<Sex>,
}

/// Display/input unit system: `metric` (kg, cm) or `imperial` (lbs, in).
#[derive(Debug, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "default_system")]
    pub system: String,
}

fn default_system() -> String {
    "metric".to_string()
}

impl Default for Units {
    fn default() -> Self {
        Self {
            system: default_system(),
        }
    }
}

impl Units {
    pub fn imperial() -> Self {
        Self {
            system: "imperial".to_string(),
        }
    }

    pub fn is_imperial(&self) -> bool {
        self.system == "imperial"
    }
}

/// Multipliers over the healthy-rate reference that mark the caution and
/// extreme tiers. Passed by value into the classifier; never global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_caution")]
    pub caution_multiplier: f64,
    #[serde(default = "default_extreme")]
    pub extreme_multiplier: f64,
}

fn default_caution() -> f64 {
    DEFAULT_CAUTION_MULTIPLIER
}
fn default_extreme() -> f64 {
    DEFAULT_EXTREME_MULTIPLIER
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            caution_multiplier: DEFAULT_CAUTION_MULTIPLIER,
            extreme_multiplier: DEFAULT_EXTREME_MULTIPLIER,
        }
    }
}

impl Thresholds {
    pub fn new(caution_multiplier: f64, extreme_multiplier: f64) -> Result<Self, ValidationError> {
        let t = Self {
            caution_multiplier,
            extreme_multiplier,
        };
        t.validate()?;
        Ok(t)
    }

    /// Both multipliers must lie in [1.0, 2.0].
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_multiplier("caution_multiplier", self.caution_multiplier)?;
        check_multiplier("extreme_multiplier", self.extreme_multiplier)?;
        Ok(())
    }

    /// False when extreme sits below caution; tolerated, but extreme then never fires.
    pub fn is_ordered(&self) -> bool {
        self.extreme_multiplier >= self.caution_multiplier
    }
}

fn check_multiplier(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&value) {
        return Err(ValidationError::MultiplierOutOfRange {
            name,
            value,
            min: MIN_MULTIPLIER,
            max: MAX_MULTIPLIER,
        });
    }
    Ok(())
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let config: Self = toml::from_str(&contents)?;
            config.thresholds.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // An existing file keeps its old mode through open(); fix it after writing.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("BODYLINE_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bodyline")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Default dataset exported by the entries/goals collaborator.
    pub fn dataset_path() -> PathBuf {
        Self::data_dir().join("data.json")
    }
}
