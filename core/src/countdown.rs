// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{HijriDate, IslamicEvent};

/// Days per month in the countdown model.
pub const MODEL_MONTH_DAYS: u32 = 30;

/// Days per year in the countdown model.
pub const MODEL_YEAR_DAYS: u32 = 12 * MODEL_MONTH_DAYS;

/// Days from `current` until the next occurrence of the Hijri `(month, day)`.
///
/// Every month is counted as 30 days, so a year has 360. The result is in
/// `0..360`: an event falling on the current day is 0 days away, and one that
/// has already passed this year is counted forward through the end of the
/// year. Out of range anchors are clamped to month 1..=12 and day 1..=30.
pub fn days_until_event(hijri_month: u8, hijri_day: u8, current: &HijriDate) -> u32 {
    let event = ordinal(hijri_month.clamp(1, 12), hijri_day.clamp(1, 30));
    let today = ordinal(current.month(), current.day());
    (event + MODEL_YEAR_DAYS - today) % MODEL_YEAR_DAYS
}

fn ordinal(month: u8, day: u8) -> u32 {
    (u32::from(month) - 1) * MODEL_MONTH_DAYS + u32::from(day)
}

/// An event together with its distance from the current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCountdown {
    /// The event definition.
    #[serde(flatten)]
    pub event: IslamicEvent,

    /// Days until the next occurrence.
    pub days_until: u32,
}

/// Computes the countdown of every event once and orders them nearest first.
///
/// Events with the same distance keep their input order.
#[tracing::instrument(skip(events), fields(current = %current))]
pub fn upcoming_events<I>(events: I, current: &HijriDate) -> Vec<EventCountdown>
where
    I: IntoIterator<Item = IslamicEvent>,
{
    let mut countdowns: Vec<_> = events
        .into_iter()
        .map(|event| EventCountdown {
            days_until: days_until_event(event.hijri_month, event.hijri_day, current),
            event,
        })
        .collect();

    countdowns.sort_by_key(|c| c.days_until);
    tracing::debug!(count = countdowns.len(), "computed event countdowns");
    countdowns
}
