//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the contact form endpoint, the default unit system and the theme.

mod error;

pub use error::ConfigError;

use crate::bmi::UnitSystem;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/bmi-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub contact_endpoint: Option<String>,
    pub default_units: UnitSystem,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub contact_endpoint: Option<String>,
    #[serde(default)]
    pub default_units: UnitSystem,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            contact_endpoint: None,
            default_units: UnitSystem::default(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, one is written with the
    /// defaults so there is something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::ReadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::Malformed {
                    path: file_path.clone(),
                    message: e.to_string(),
                })?;
            self.contact_endpoint = data.contact_endpoint.filter(|e| !e.trim().is_empty());
            self.default_units = data.default_units;
            self.theme_name = data.theme_name;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            contact_endpoint: self.contact_endpoint.clone(),
            default_units: self.default_units,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::Encode(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Apply command line overrides on top of the loaded values. Overrides
    /// are not written back to the file.
    ///
    pub fn apply_overrides(&mut self, endpoint: Option<&str>, units: Option<&str>) -> Result<(), AppError> {
        if let Some(endpoint) = endpoint {
            self.contact_endpoint = Some(endpoint.to_owned());
        }
        if let Some(units) = units {
            self.default_units = units.parse().map_err(|message| ConfigError::InvalidValue {
                key: "units".to_string(),
                message,
            })?;
        }
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        // A directory that does not exist yet is created.
        let dir = temp_dir.path().join("bmi-tui");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert!(dir.join(FILE_NAME).exists());
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));
        assert_eq!(config.contact_endpoint, None);
        assert_eq!(config.default_units, UnitSystem::Metric);
        assert_eq!(config.theme_name, "rose-pine-dawn");
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(
            dir.join(FILE_NAME),
            "contact_endpoint: https://forms.example.com/f/abc\ndefault_units: imperial\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("https://forms.example.com/f/abc")
        );
        assert_eq!(config.default_units, UnitSystem::Imperial);
        assert_eq!(config.theme_name, "rose-pine-dawn");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join(FILE_NAME), "default_units: stones\n").unwrap();

        let mut config = Config::new();
        let error = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            error,
            AppError::Config(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.contact_endpoint = Some("http://localhost:8080/contact".to_string());
        config.theme_name = "tokyo-night".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.contact_endpoint, config.contact_endpoint);
        assert_eq!(reloaded.theme_name, "tokyo-night");
    }

    #[test]
    fn test_save_without_path() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::new();
        config
            .apply_overrides(Some("http://localhost/contact"), Some("imperial"))
            .unwrap();
        assert_eq!(config.contact_endpoint.as_deref(), Some("http://localhost/contact"));
        assert_eq!(config.default_units, UnitSystem::Imperial);

        let error = config.apply_overrides(None, Some("stones")).unwrap_err();
        assert!(error.to_string().contains("units"));
        assert_eq!(config.default_units, UnitSystem::Imperial);
    }
}
