// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between the proleptic Gregorian calendar and the arithmetic
//! (tabular) Hijri calendar.
//!
//! Both directions go through a fixed day number, counting days from
//! 0001-01-01 (day 1). The Hijri year is the number of elapsed days since the
//! epoch divided by the mean lunar year of a 30-year cycle (10631 / 30 ≈
//! 354.367 days), and months alternate between 30 and 29 days with the last
//! month lengthened in the 11 leap years of each cycle.

use std::fmt;

use jiff::civil::Date;

use crate::ValidationError;

/// Fixed day number of 1 Muharram 1 AH, Gregorian 0622-07-19.
const HIJRI_EPOCH: i64 = 227_015;

/// Days in one 30-year Hijri cycle.
const CYCLE_DAYS: i64 = 10_631;

/// Years in one Hijri cycle.
const CYCLE_YEARS: i64 = 30;

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HijriMonth {
    /// 1st month.
    Muharram,
    /// 2nd month.
    Safar,
    /// 3rd month.
    RabiAlAwwal,
    /// 4th month.
    RabiAlThani,
    /// 5th month.
    JumadaAlUla,
    /// 6th month.
    JumadaAlThani,
    /// 7th month.
    Rajab,
    /// 8th month.
    Shaban,
    /// 9th month, the month of fasting.
    Ramadan,
    /// 10th month.
    Shawwal,
    /// 11th month.
    DhuAlQidah,
    /// 12th month, the month of pilgrimage.
    DhuAlHijjah,
}

impl HijriMonth {
    /// All months in calendar order.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlUla,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    /// The month number, 1 for Muharram through 12 for Dhu al-Hijjah.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a month by its number, `None` outside 1..=12.
    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// The English transliteration of the month name.
    pub const fn name(self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-Awwal",
            HijriMonth::RabiAlThani => "Rabi' al-Thani",
            HijriMonth::JumadaAlUla => "Jumada al-Ula",
            HijriMonth::JumadaAlThani => "Jumada al-Thani",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQidah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A date in the Hijri calendar.
///
/// Ordering is lexicographic over `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i32,
    month: HijriMonth,
    day: u8,
}

impl HijriDate {
    /// 1 Muharram 1 AH.
    pub const EPOCH: HijriDate = HijriDate {
        year: 1,
        month: HijriMonth::Muharram,
        day: 1,
    };

    /// Creates a Hijri date, checking `year >= 1`, `month` in 1..=12 and
    /// `day` in 1..=30.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        if year < 1 {
            return Err(ValidationError::InvalidField {
                field: "year",
                expected: "at least 1",
            });
        }

        let month = HijriMonth::from_number(month).ok_or(ValidationError::InvalidField {
            field: "month",
            expected: "between 1 and 12",
        })?;

        if !(1..=30).contains(&day) {
            return Err(ValidationError::InvalidField {
                field: "day",
                expected: "between 1 and 30",
            });
        }

        Ok(Self { year, month, day })
    }

    /// The Hijri year, at least 1.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number in 1..=12.
    pub fn month(&self) -> u8 {
        self.month.number()
    }

    /// The day of the month in 1..=30.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The month as an enum.
    pub fn hijri_month(&self) -> HijriMonth {
        self.month
    }

    /// The month name, e.g. `Ramadan`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Long form such as `1 Ramadan 1446 AH`.
    pub fn formatted(&self) -> String {
        self.to_string()
    }

    /// The Gregorian date of this Hijri date.
    pub fn to_gregorian(&self) -> Date {
        hijri_to_gregorian(self.year, self.month(), self.day)
    }
}

impl From<Date> for HijriDate {
    fn from(date: Date) -> Self {
        gregorian_to_hijri(date)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month, self.year)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            year: i32,
            month: u8,
            day: u8,
            month_name: &'static str,
            formatted: String,
        }

        Repr {
            year: self.year,
            month: self.month(),
            day: self.day,
            month_name: self.month_name(),
            formatted: self.formatted(),
        }
        .serialize(serializer)
    }
}

/// Converts a Gregorian date to the Hijri calendar.
///
/// Total over every date `jiff` can represent. Dates before the Hijri epoch
/// are clamped to 1 Muharram 1 AH so the result never has a year below 1.
pub fn gregorian_to_hijri(date: Date) -> HijriDate {
    let fixed = fixed_from_gregorian(date);
    if fixed < HIJRI_EPOCH {
        return HijriDate::EPOCH;
    }

    let year = (CYCLE_YEARS * (fixed - HIJRI_EPOCH) + 10_646).div_euclid(CYCLE_DAYS);
    let prior_days = fixed - fixed_from_hijri(year, 1, 1);
    let month = (11 * prior_days + 330).div_euclid(325);
    let day = fixed - fixed_from_hijri(year, month, 1) + 1;
    debug_assert!((1..=12).contains(&month) && (1..=30).contains(&day));

    HijriDate {
        year: year as i32,
        month: HijriMonth::ALL[(month - 1) as usize],
        day: day.max(1) as u8,
    }
}

/// Converts a Hijri date to the Gregorian calendar.
///
/// Out of range components are normalized first: a year below 1 becomes 1,
/// the month is clamped to 1..=12 and the day to 1..=30. Day 30 of a 29-day
/// month lands on the first day of the following month. Results beyond the
/// range of [`Date`] saturate at [`Date::MIN`] or [`Date::MAX`].
pub fn hijri_to_gregorian(year: i32, month: u8, day: u8) -> Date {
    let year = i64::from(year.max(1));
    let month = i64::from(month.clamp(1, 12));
    let day = i64::from(day.clamp(1, 30));
    gregorian_from_fixed(fixed_from_hijri(year, month, day))
}

/// Whether the Hijri year has 355 days rather than 354.
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(CYCLE_YEARS) < 11
}

/// Number of days in a Hijri month, 29 or 30. Months outside 1..=12 are
/// clamped.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month.clamp(1, 12) {
        12 if is_leap_year(year) => 30,
        m if m % 2 == 1 => 30,
        _ => 29,
    }
}

/// Whether [`hijri_to_gregorian`] maps the date into the range of [`Date`]
/// rather than saturating. The last such date is 2 Rabi' al-Thani 9666.
pub fn fits_gregorian_range(year: i32, month: u8, day: u8) -> bool {
    let year = i64::from(year.max(1));
    let month = i64::from(month.clamp(1, 12));
    let day = i64::from(day.clamp(1, 30));
    fixed_from_hijri(year, month, day) <= fixed_from_gregorian(Date::MAX)
}

fn fixed_from_hijri(year: i64, month: i64, day: i64) -> i64 {
    day + 29 * (month - 1)
        + (6 * month - 1).div_euclid(11)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(CYCLE_YEARS)
        + HIJRI_EPOCH
        - 1
}

fn is_gregorian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

fn fixed_from_gregorian_ymd(year: i64, month: i64, day: i64) -> i64 {
    let correction = match month {
        ..=2 => 0,
        _ if is_gregorian_leap_year(year) => -1,
        _ => -2,
    };
    365 * (year - 1)
        + (year - 1).div_euclid(4)
        - (year - 1).div_euclid(100)
        + (year - 1).div_euclid(400)
        + (367 * month - 362).div_euclid(12)
        + correction
        + day
}

fn fixed_from_gregorian(date: Date) -> i64 {
    fixed_from_gregorian_ymd(
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

fn gregorian_from_fixed(fixed: i64) -> Date {
    let d0 = fixed - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    let year = if n100 == 4 || n1 == 4 { year } else { year + 1 };

    if year > i64::from(Date::MAX.year()) {
        return Date::MAX;
    } else if year < i64::from(Date::MIN.year()) {
        return Date::MIN;
    }

    let prior_days = fixed - fixed_from_gregorian_ymd(year, 1, 1);
    let correction = if fixed < fixed_from_gregorian_ymd(year, 3, 1) {
        0
    } else if is_gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367);
    let day = fixed - fixed_from_gregorian_ymd(year, month, 1) + 1;

    // in range by construction
    Date::new(year as i16, month as i8, day as i8).unwrap_or(Date::MAX)
}
