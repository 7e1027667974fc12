// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ConfigError, FixedSchedule, LocationSetting, PrayerTimes};

/// The name of the application.
pub const APP_NAME: &str = "taqwim";

/// Largest accepted moon-sighting adjustment, in days.
pub const MAX_HIJRI_OFFSET: i8 = 3;

/// Core configuration.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
pub struct Config {
    /// Days added to the local date before converting "today" to Hijri, to
    /// follow a local moon sighting.
    #[serde(default)]
    pub hijri_offset: i8,

    /// Initial location. Makkah when absent.
    #[serde(default)]
    pub location: Option<LocationSetting>,

    /// Fixed prayer schedule. The built-in placeholder when absent.
    #[serde(default)]
    pub prayer_times: Option<PrayerTimes>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if !(-MAX_HIJRI_OFFSET..=MAX_HIJRI_OFFSET).contains(&self.hijri_offset) {
            return Err(ConfigError::HijriOffset(self.hijri_offset));
        }

        if let Some(location) = &mut self.location {
            location.city = location.city.trim().to_owned();
            location.validate().map_err(|source| ConfigError::Invalid {
                section: "core.location",
                source,
            })?;
        }

        if let Some(times) = &self.prayer_times {
            times.validate().map_err(|source| ConfigError::Invalid {
                section: "core.prayer_times",
                source,
            })?;
        }

        tracing::debug!(?self, "configuration normalized");
        Ok(())
    }

    /// The configured location, or Makkah.
    pub fn location(&self) -> LocationSetting {
        self.location.clone().unwrap_or_default()
    }

    /// The configured prayer schedule.
    pub fn schedule(&self) -> FixedSchedule {
        self.prayer_times.map(FixedSchedule::new).unwrap_or_default()
    }
}
