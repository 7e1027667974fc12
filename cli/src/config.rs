// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use taqwim_core::{APP_NAME, Config as CoreConfig};

const TAQWIM_CONFIG_ENV: &str = "TAQWIM_CONFIG";
const TAQWIM_DEV_ENV: &str = "TAQWIM_DEV";

const TAQWIM_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const TAQWIM_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from `path`, `$TAQWIM_CONFIG` or the user config
/// directory, in that order.
///
/// Built-in defaults apply when no file is found in the user config
/// directory, or when development mode skips the lookup.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TAQWIM_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            tracing::info!(
                "development environment detected ({TAQWIM_DEV_ENV} is set), using defaults"
            );
            return ConfigRaw::default().normalize();
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return ConfigRaw::default().normalize();
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .normalize()
}

/// Configuration of the command-line interface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// How prayer times are printed.
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Clock used to print times of day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum TimeFormat {
    /// `5:15 AM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,

    /// `05:15`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    cli: Config,
}

impl ConfigRaw {
    fn normalize(mut self) -> Result<(CoreConfig, Config), Box<dyn Error>> {
        self.core.normalize()?;
        Ok((self.core, self.cli))
    }
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(TAQWIM_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if TAQWIM_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if TAQWIM_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            TAQWIM_DEV_ENV,
            val,
            TAQWIM_DEV_VALID_TRUE.join(", "),
            TAQWIM_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
