// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Convention used to derive prayer times from the sun's position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CalculationMethod {
    /// Umm al-Qura University, Makkah.
    #[default]
    UmmAlQura,

    /// Muslim World League.
    #[serde(rename = "MWL")]
    #[cfg_attr(feature = "clap", value(name = "mwl"))]
    MuslimWorldLeague,

    /// Islamic Society of North America.
    #[serde(rename = "ISNA")]
    Isna,

    /// Egyptian General Authority of Survey.
    Egypt,

    /// University of Islamic Sciences, Karachi.
    Karachi,

    /// Institute of Geophysics, University of Tehran.
    Tehran,

    /// Shia Ithna-Ashari, Leva Institute, Qum.
    Jafari,
}

impl CalculationMethod {
    /// Every method, in declaration order.
    pub const ALL: [CalculationMethod; 7] = [
        CalculationMethod::UmmAlQura,
        CalculationMethod::MuslimWorldLeague,
        CalculationMethod::Isna,
        CalculationMethod::Egypt,
        CalculationMethod::Karachi,
        CalculationMethod::Tehran,
        CalculationMethod::Jafari,
    ];

    /// The wire name, e.g. `UmmAlQura` or `MWL`.
    pub const fn as_str(self) -> &'static str {
        match self {
            CalculationMethod::UmmAlQura => "UmmAlQura",
            CalculationMethod::MuslimWorldLeague => "MWL",
            CalculationMethod::Isna => "ISNA",
            CalculationMethod::Egypt => "Egypt",
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Tehran => "Tehran",
            CalculationMethod::Jafari => "Jafari",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(ValidationError::InvalidField {
                field: "calculationMethod",
                expected: "one of UmmAlQura, MWL, ISNA, Egypt, Karachi, Tehran, Jafari",
            })
    }
}

/// The active location used for prayer times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSetting {
    /// City name.
    pub city: String,

    /// Latitude in degrees, north positive.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude in degrees, east positive.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// IANA time zone name.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Calculation convention.
    #[serde(default, alias = "calculation_method")]
    pub calculation_method: CalculationMethod,
}

impl LocationSetting {
    /// Checks that coordinates, when present, are within range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "city" });
        }
        validate_coordinates(self.latitude, self.longitude)
    }
}

impl Default for LocationSetting {
    fn default() -> Self {
        City::Makkah.into()
    }
}

/// Patch for the location, overwriting only the fields that are set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationPatch {
    /// The city, if set.
    pub city: Option<String>,

    /// The latitude, if set. `Some(None)` clears it.
    pub latitude: Option<Option<f64>>,

    /// The longitude, if set. `Some(None)` clears it.
    pub longitude: Option<Option<f64>>,

    /// The time zone, if set. `Some(None)` clears it.
    pub timezone: Option<Option<String>>,

    /// The calculation method, if set.
    pub calculation_method: Option<CalculationMethod>,
}

impl LocationPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.timezone.is_none()
            && self.calculation_method.is_none()
    }

    /// Checks the fields that are set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(city) = &self.city
            && city.trim().is_empty()
        {
            return Err(ValidationError::MissingField { field: "city" });
        }
        validate_coordinates(self.latitude.flatten(), self.longitude.flatten())
    }

    /// Applies the patch to a location, modifying it in place.
    ///
    /// When the city changes and no coordinates are given, the coordinates
    /// and time zone are taken from the matching [`City`] preset, or cleared
    /// when the city is not a preset.
    pub fn apply_to<'a>(&self, l: &'a mut LocationSetting) -> &'a mut LocationSetting {
        if let Some(city) = &self.city
            && !city.eq_ignore_ascii_case(&l.city)
        {
            l.city.clone_from(city);
            if self.latitude.is_none() && self.longitude.is_none() {
                let preset = city.parse::<City>().ok();
                l.latitude = preset.map(|c| c.latitude());
                l.longitude = preset.map(|c| c.longitude());
                if self.timezone.is_none() {
                    l.timezone = preset.map(|c| c.timezone().to_owned());
                }
            }
        }

        if let Some(latitude) = self.latitude {
            l.latitude = latitude;
        }

        if let Some(longitude) = self.longitude {
            l.longitude = longitude;
        }

        if let Some(timezone) = &self.timezone {
            l.timezone.clone_from(timezone);
        }

        if let Some(method) = self.calculation_method {
            l.calculation_method = method;
        }

        l
    }
}

fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(lat) = latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        return Err(ValidationError::InvalidField {
            field: "latitude",
            expected: "between -90 and 90",
        });
    }

    if let Some(lon) = longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        return Err(ValidationError::InvalidField {
            field: "longitude",
            expected: "between -180 and 180",
        });
    }

    Ok(())
}

/// Built-in city presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum City {
    /// Makkah, Saudi Arabia.
    Makkah,
    /// Madinah, Saudi Arabia.
    Madinah,
    /// Riyadh, Saudi Arabia.
    Riyadh,
    /// Cairo, Egypt.
    Cairo,
    /// Istanbul, Turkey.
    Istanbul,
    /// Karachi, Pakistan.
    Karachi,
    /// Jakarta, Indonesia.
    Jakarta,
}

impl City {
    /// Every preset.
    pub const ALL: [City; 7] = [
        City::Makkah,
        City::Madinah,
        City::Riyadh,
        City::Cairo,
        City::Istanbul,
        City::Karachi,
        City::Jakarta,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            City::Makkah => "Makkah",
            City::Madinah => "Madinah",
            City::Riyadh => "Riyadh",
            City::Cairo => "Cairo",
            City::Istanbul => "Istanbul",
            City::Karachi => "Karachi",
            City::Jakarta => "Jakarta",
        }
    }

    /// Latitude in degrees.
    pub const fn latitude(self) -> f64 {
        self.coordinates().0
    }

    /// Longitude in degrees.
    pub const fn longitude(self) -> f64 {
        self.coordinates().1
    }

    /// IANA time zone.
    pub const fn timezone(self) -> &'static str {
        match self {
            City::Makkah | City::Madinah | City::Riyadh => "Asia/Riyadh",
            City::Cairo => "Africa/Cairo",
            City::Istanbul => "Europe/Istanbul",
            City::Karachi => "Asia/Karachi",
            City::Jakarta => "Asia/Jakarta",
        }
    }

    /// The calculation method customary in the city.
    pub const fn calculation_method(self) -> CalculationMethod {
        match self {
            City::Makkah | City::Madinah | City::Riyadh => CalculationMethod::UmmAlQura,
            City::Cairo => CalculationMethod::Egypt,
            City::Istanbul | City::Jakarta => CalculationMethod::MuslimWorldLeague,
            City::Karachi => CalculationMethod::Karachi,
        }
    }

    const fn coordinates(self) -> (f64, f64) {
        match self {
            City::Makkah => (21.3891, 39.8579),
            City::Madinah => (24.5247, 39.5692),
            City::Riyadh => (24.7136, 46.6753),
            City::Cairo => (30.0444, 31.2357),
            City::Istanbul => (41.0082, 28.9784),
            City::Karachi => (24.8607, 67.0011),
            City::Jakarta => (-6.2088, 106.8456),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(ValidationError::InvalidField {
                field: "city",
                expected: "a known city",
            })
    }
}

impl From<City> for LocationSetting {
    fn from(city: City) -> Self {
        Self {
            city: city.name().to_owned(),
            latitude: Some(city.latitude()),
            longitude: Some(city.longitude()),
            timezone: Some(city.timezone().to_owned()),
            calculation_method: city.calculation_method(),
        }
    }
}
