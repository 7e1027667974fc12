// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hijri calendar conversion, prayer countdown and Islamic event countdown,
//! with an in-memory store and a transport independent request boundary.

#![warn(missing_docs)]

mod calendar;
mod clock;
mod config;
mod countdown;
mod error;
mod event;
mod hijri;
mod location;
mod prayer;
mod service;
mod store;

pub use crate::calendar::{DayCell, MonthGrid, WEEKS, month_grid};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{APP_NAME, Config, MAX_HIJRI_OFFSET};
pub use crate::countdown::{
    EventCountdown, MODEL_MONTH_DAYS, MODEL_YEAR_DAYS, days_until_event, upcoming_events,
};
pub use crate::error::{ApiError, ConfigError, StoreError, ValidationError};
pub use crate::event::{
    EventDraft, EventPatch, IslamicEvent, canonical_events, holiday_name, is_holiday,
};
pub use crate::hijri::{
    HijriDate, HijriMonth, days_in_month, fits_gregorian_range, gregorian_to_hijri,
    hijri_to_gregorian, is_leap_year,
};
pub use crate::location::{CalculationMethod, City, LocationPatch, LocationSetting};
pub use crate::prayer::{
    FixedSchedule, NextPrayer, Prayer, PrayerCalculator, PrayerTimes, compute_prayer_times,
    format_12h, format_24h, hhmm, next_prayer, parse_time,
};
pub use crate::service::{GregorianConversion, Method, PrayerSchedule, Response, Service};
pub use crate::store::{MemoryStore, Store};
