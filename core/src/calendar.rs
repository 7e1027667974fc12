// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{ToSpan, civil::Date};
use serde::Serialize;

use crate::{HijriDate, HijriMonth, IslamicEvent, days_in_month, hijri_to_gregorian};

/// Rows in a month grid.
pub const WEEKS: usize = 6;

/// A Hijri month laid out in weeks starting on Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    /// The Hijri year.
    pub year: i32,

    /// The Hijri month.
    #[serde(serialize_with = "serialize_month")]
    pub month: HijriMonth,

    /// Number of days in the month, 29 or 30.
    pub days: u8,

    /// Six weeks of seven cells, `None` outside the month.
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

/// One day of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// Day of the Hijri month.
    pub day: u8,

    /// The same day in the Gregorian calendar.
    pub gregorian: Date,

    /// Whether this is the current day.
    pub is_today: bool,

    /// Names of the events falling on this day.
    pub events: Vec<String>,
}

impl MonthGrid {
    /// The cells of the month in order, skipping the blanks.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Lays out a Hijri month, marking `today` and the days carrying `events`.
///
/// The year is raised to at least 1 and the month clamped to 1..=12.
pub fn month_grid(
    year: i32,
    month: u8,
    today: Option<&HijriDate>,
    events: &[IslamicEvent],
) -> MonthGrid {
    let year = year.max(1);
    let month = month.clamp(1, 12);
    let days = days_in_month(year, month);
    let first = hijri_to_gregorian(year, month, 1);
    let leading = first.weekday().to_sunday_zero_offset() as usize;

    let mut weeks: Vec<[Option<DayCell>; 7]> = (0..WEEKS).map(|_| Default::default()).collect();
    for day in 1..=days {
        let index = leading + usize::from(day) - 1;
        let is_today =
            today.is_some_and(|t| t.year() == year && t.month() == month && t.day() == day);
        let events = events
            .iter()
            .filter(|e| e.hijri_month == month && e.hijri_day == day)
            .map(|e| e.name.clone())
            .collect();

        weeks[index / 7][index % 7] = Some(DayCell {
            day,
            gregorian: first.saturating_add(i64::from(day - 1).days()),
            is_today,
            events,
        });
    }

    MonthGrid {
        year,
        month: HijriMonth::from_number(month).unwrap_or(HijriMonth::Muharram),
        days,
        weeks,
    }
}

fn serialize_month<S: serde::Serializer>(month: &HijriMonth, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(month.name())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Weekday, date};

    use super::*;
    use crate::EventDraft;

    #[test]
    fn aligns_the_first_day_to_its_weekday() {
        // 1 Ramadan 1446 is Saturday 2025-03-01
        let grid = month_grid(1446, 9, None, &[]);
        assert_eq!(grid.days, 30);
        assert_eq!(grid.weeks.len(), WEEKS);
        assert!(grid.weeks[0][..6].iter().all(Option::is_none));

        let first = grid.weeks[0][6].as_ref().unwrap();
        assert_eq!(first.day, 1);
        assert_eq!(first.gregorian, date(2025, 3, 1));
        assert_eq!(first.gregorian.weekday(), Weekday::Saturday);

        let last = grid.days().last().unwrap();
        assert_eq!(last.day, 30);
        assert_eq!(last.gregorian, date(2025, 3, 30));
    }

    #[test]
    fn uses_real_month_lengths() {
        let grid = month_grid(1446, 2, None, &[]);
        assert_eq!(grid.days, 29);
        assert_eq!(grid.days().count(), 29);
    }

    #[test]
    fn marks_today_and_events() {
        let today = HijriDate::new(1446, 9, 15).unwrap();
        let events = [
            EventDraft::new("Laylat al-Qadr", 9, 27).into_event(1),
            EventDraft::new("Eid al-Fitr", 10, 1).into_event(2),
        ];
        let grid = month_grid(1446, 9, Some(&today), &events);

        let marked: Vec<_> = grid.days().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(marked, vec![15]);

        let with_events: Vec<_> = grid
            .days()
            .filter(|c| !c.events.is_empty())
            .map(|c| (c.day, c.events.clone()))
            .collect();
        assert_eq!(with_events, vec![(27, vec!["Laylat al-Qadr".to_owned()])]);
    }

    #[test]
    fn ignores_today_in_other_months() {
        let today = HijriDate::new(1447, 9, 15).unwrap();
        let grid = month_grid(1446, 9, Some(&today), &[]);
        assert!(grid.days().all(|c| !c.is_today));
    }
}
