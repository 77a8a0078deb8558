//! Configuration file support for the BAC estimator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bac/config.toml`.

use crate::{BiologicalSex, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default form values for new sessions
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub sex: BiologicalSex,

    #[serde(default)]
    pub elapsed_hours: f64,
}

/// Output preferences
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the wall-clock time at which BAC reaches zero
    #[serde(default = "default_show_sober_clock")]
    pub show_sober_clock: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_sober_clock: default_show_sober_clock(),
        }
    }
}

fn default_show_sober_clock() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        Self::load_or_default(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("bac").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject profile values the calculator would refuse anyway
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.profile.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::Config(format!(
                    "profile.weight_kg must be positive, got {}",
                    weight
                )));
            }
        }
        if !self.profile.elapsed_hours.is_finite() || self.profile.elapsed_hours < 0.0 {
            return Err(Error::Config(format!(
                "profile.elapsed_hours must be zero or more, got {}",
                self.profile.elapsed_hours
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile.weight_kg, None);
        assert_eq!(config.profile.sex, BiologicalSex::Male);
        assert_eq!(config.profile.elapsed_hours, 0.0);
        assert!(config.display.show_sober_clock);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profile.weight_kg = Some(64.0);
        config.profile.sex = BiologicalSex::Female;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profile, config.profile);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[profile]
sex = "female"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.sex, BiologicalSex::Female);
        assert_eq!(config.profile.weight_kg, None);
        assert!(config.display.show_sober_clock); // default
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.profile.weight_kg, None);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\nweight_kg = -10.0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[profile\nweight_kg = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
