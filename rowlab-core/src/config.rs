//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings of the labeling tool. Loads and saves
//! settings as TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate, with robust defaulting
//! when no config file exists yet.

use std::path::PathBuf;
use std::time::Duration;

use annotr::LabelSet;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Canonical label tokens and the exported column title.
    pub labels: LabelSet,

    /// Whether newly loaded files are assumed to start with a header row.
    pub assume_header: bool,

    /// How long transient notifications stay on screen.
    #[serde(with = "humantime_serde")]
    pub notification_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: LabelSet::default(),
            assume_header: true,
            notification_ttl: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// writing the defaults there on first run.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str)
            .await
            .map_err(|source| AppError::ConfigIo { path, source })?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "rowlab", "rowlab")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_owned()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.assume_header);
        assert_eq!(config.labels.primary, "natural");
        assert_eq!(config.labels.secondary, "conventional");
        assert_eq!(config.notification_ttl, Duration::from_secs(3));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.labels, config.labels);
        assert_eq!(parsed.assume_header, config.assume_header);
        assert_eq!(parsed.notification_ttl, config.notification_ttl);
    }

    #[test]
    fn test_humantime_duration_field() {
        let parsed: Config = toml::from_str(
            r#"
            assume_header = false
            notification_ttl = "5s"

            [labels]
            primary = "good"
            secondary = "bad"
            column_title = "verdict"
            "#,
        )
        .unwrap();

        assert!(!parsed.assume_header);
        assert_eq!(parsed.notification_ttl, Duration::from_secs(5));
        assert_eq!(parsed.labels.primary, "good");
    }
}
