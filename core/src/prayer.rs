// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::{LocationSetting, ValidationError};

const MINUTES_PER_DAY: i32 = 24 * 60;

/// A named daily time slot. [`Prayer::Sunrise`] marks the end of the Fajr
/// window and is not itself a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Prayer {
    /// Dawn prayer.
    Fajr,
    /// Sunrise.
    Sunrise,
    /// Midday prayer.
    Dhuhr,
    /// Afternoon prayer.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer.
    Isha,
}

impl Prayer {
    /// The five daily prayers in canonical order.
    pub const DAILY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Every slot of the day in chronological order, sunrise included.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Capitalized English name.
    pub const fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Local prayer times of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    /// Dawn prayer.
    #[serde(with = "hhmm")]
    pub fajr: Time,

    /// Sunrise.
    #[serde(with = "hhmm")]
    pub sunrise: Time,

    /// Midday prayer.
    #[serde(with = "hhmm")]
    pub dhuhr: Time,

    /// Afternoon prayer.
    #[serde(with = "hhmm")]
    pub asr: Time,

    /// Sunset prayer.
    #[serde(with = "hhmm")]
    pub maghrib: Time,

    /// Night prayer.
    #[serde(with = "hhmm")]
    pub isha: Time,
}

impl PrayerTimes {
    /// The time of the given slot.
    pub fn get(&self, prayer: Prayer) -> Time {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Checks that the slots are strictly increasing through the day.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = Prayer::ALL
            .windows(2)
            .all(|w| self.get(w[0]) < self.get(w[1]));

        if ordered {
            Ok(())
        } else {
            Err(ValidationError::InvalidField {
                field: "prayer_times",
                expected: "in chronological order from fajr to isha",
            })
        }
    }
}

impl Default for PrayerTimes {
    fn default() -> Self {
        FixedSchedule::default().times
    }
}

/// The upcoming prayer and how long until it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    /// The upcoming prayer, never [`Prayer::Sunrise`].
    pub prayer: Prayer,

    /// Minutes from now, in `1..=1440`.
    pub minutes_until: u32,
}

impl fmt::Display for NextPrayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.minutes_until / 60, self.minutes_until % 60);
        match hours {
            0 => write!(f, "{} in {minutes}m", self.prayer),
            _ => write!(f, "{} in {hours}h {minutes}m", self.prayer),
        }
    }
}

impl Serialize for NextPrayer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strategy producing the prayer times of a location on a date.
pub trait PrayerCalculator: Send + Sync {
    /// Computes the times of `date` at `location`.
    fn compute(&self, location: &LocationSetting, date: Date) -> PrayerTimes;
}

/// A schedule that is the same for every location and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSchedule {
    times: PrayerTimes,
}

impl FixedSchedule {
    /// Uses `times` for every day.
    pub fn new(times: PrayerTimes) -> Self {
        Self { times }
    }
}

impl Default for FixedSchedule {
    fn default() -> Self {
        Self::new(PrayerTimes {
            fajr: Time::constant(5, 15, 0, 0),
            sunrise: Time::constant(6, 45, 0, 0),
            dhuhr: Time::constant(12, 30, 0, 0),
            asr: Time::constant(15, 45, 0, 0),
            maghrib: Time::constant(18, 15, 0, 0),
            isha: Time::constant(19, 45, 0, 0),
        })
    }
}

impl PrayerCalculator for FixedSchedule {
    fn compute(&self, _location: &LocationSetting, _date: Date) -> PrayerTimes {
        self.times
    }
}

/// Computes the prayer times of `date` at `location` with `calculator`.
#[tracing::instrument(skip(calculator), fields(city = %location.city))]
pub fn compute_prayer_times<P: PrayerCalculator + ?Sized>(
    calculator: &P,
    location: &LocationSetting,
    date: Date,
) -> PrayerTimes {
    calculator.compute(location, date)
}

/// Finds the first daily prayer strictly after `now`, wrapping to the next
/// day's Fajr once Isha has begun.
///
/// A prayer whose time equals `now` counts as already begun, so at exactly
/// Fajr the answer is the following Dhuhr. Seconds are ignored.
pub fn next_prayer(times: &PrayerTimes, now: Time) -> NextPrayer {
    let now = minutes_of_day(now);
    let upcoming = Prayer::DAILY.iter().find_map(|&prayer| {
        let at = minutes_of_day(times.get(prayer));
        (at > now).then_some((prayer, at - now))
    });

    let (prayer, minutes) = upcoming.unwrap_or_else(|| {
        let fajr = minutes_of_day(times.fajr);
        (Prayer::Fajr, (fajr - now).rem_euclid(MINUTES_PER_DAY))
    });

    NextPrayer {
        prayer,
        // 0 only when now equals fajr after every prayer has passed
        minutes_until: match minutes {
            0 => MINUTES_PER_DAY as u32,
            m => m as u32,
        },
    }
}

/// Parses a 24-hour `HH:MM` time.
pub fn parse_time(s: &str) -> Result<Time, ValidationError> {
    let invalid = || ValidationError::InvalidTime(s.to_owned());
    let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
    let is_field = |t: &str| (1..=2).contains(&t.len()) && t.bytes().all(|b| b.is_ascii_digit());
    if !is_field(hour) || minute.len() != 2 || !is_field(minute) {
        return Err(invalid());
    }

    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Formats a time as `HH:MM`.
pub fn format_24h(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Formats a time on a 12-hour clock, e.g. `5:15 AM` or `12:30 PM`.
pub fn format_12h(time: Time) -> String {
    let suffix = if time.hour() < 12 { "AM" } else { "PM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {suffix}", time.minute())
}

fn minutes_of_day(time: Time) -> i32 {
    i32::from(time.hour()) * 60 + i32::from(time.minute())
}

/// Serde adapter storing a [`Time`] as `HH:MM`.
pub mod hhmm {
    use jiff::civil::Time;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serializes as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_24h(*time))
    }

    /// Deserializes from `HH:MM`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(de::Error::custom)
    }
}
