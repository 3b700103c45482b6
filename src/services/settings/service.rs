use crate::models::settings::Settings;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Reads widget settings from a TOML file. The file is never written.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Settings file in the platform config directory, if one can be resolved
    pub fn new() -> Self {
        let path = ProjectDirs::from("com", "Ken24T", "YearProgress")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE));
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let Some(path) = self.path.as_ref() else {
            log::debug!("No config directory available, using default settings");
            return Ok(Settings::default());
        };

        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.clone(),
            source,
        })?;

        settings.validate().map_err(SettingsError::Invalid)?;

        Ok(settings)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Load settings, falling back to the defaults when the file is unusable.
pub fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.load() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{}; using default settings", err);
            Settings::default()
        }
    }
}
