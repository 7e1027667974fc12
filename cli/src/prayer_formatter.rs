// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use jiff::civil::Time;
use taqwim_core::{Prayer, PrayerSchedule, format_12h, format_24h};

use crate::config::TimeFormat;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};

/// One line of the prayer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerRow {
    pub prayer: Prayer,
    pub time: Time,
    pub is_next: bool,
}

impl PrayerRow {
    /// The rows of a schedule in order of the day, sunrise included.
    pub fn from_schedule(schedule: &PrayerSchedule) -> Vec<Self> {
        Prayer::ALL
            .iter()
            .map(|&prayer| PrayerRow {
                prayer,
                time: schedule.times.get(prayer),
                is_next: prayer == schedule.next_prayer.prayer,
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct PrayerFormatter {
    columns: Vec<PrayerColumn>,
}

impl PrayerFormatter {
    pub fn new(time_format: TimeFormat) -> Self {
        Self {
            columns: vec![
                PrayerColumn::Prayer(PrayerColumnPrayer),
                PrayerColumn::Time(PrayerColumnTime(time_format)),
            ],
        }
    }

    pub fn format<'a>(&'a self, rows: &'a [PrayerRow]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [PrayerRow],
    formatter: &'a PrayerFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = TableStyleBasic::new().with_header(true);
        write!(f, "{}", Table::new(style, &self.formatter.columns, self.rows))
    }
}

#[derive(Debug, Clone)]
pub enum PrayerColumn {
    Prayer(PrayerColumnPrayer),
    Time(PrayerColumnTime),
}

impl TableColumn<PrayerRow> for PrayerColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PrayerColumn::Prayer(_) => "Prayer",
            PrayerColumn::Time(_) => "Time",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a PrayerRow) -> Cow<'a, str> {
        match self {
            PrayerColumn::Prayer(a) => a.format(data),
            PrayerColumn::Time(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            PrayerColumn::Prayer(_) => PaddingDirection::Left,
            PrayerColumn::Time(_) => PaddingDirection::Right,
        }
    }

    fn color(&self, data: &PrayerRow) -> Option<Color> {
        match data.prayer {
            _ if data.is_next => Some(Color::Green),
            Prayer::Sunrise => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrayerColumnPrayer;

impl PrayerColumnPrayer {
    fn format<'a>(&self, data: &'a PrayerRow) -> Cow<'a, str> {
        data.prayer.name().into()
    }
}

#[derive(Debug, Clone)]
pub struct PrayerColumnTime(TimeFormat);

impl PrayerColumnTime {
    fn format<'a>(&self, data: &'a PrayerRow) -> Cow<'a, str> {
        match self.0 {
            TimeFormat::TwelveHour => format_12h(data.time).into(),
            TimeFormat::TwentyFourHour => format_24h(data.time).into(),
        }
    }
}
