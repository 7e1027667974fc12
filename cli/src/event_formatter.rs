// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use taqwim_core::{EventCountdown, HijriMonth};

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};

/// Events within this many days are highlighted.
const SOON_DAYS: u32 = 30;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Id(EventColumnId),
                EventColumn::Date(EventColumnDate),
                EventColumn::Countdown(EventColumnCountdown),
                EventColumn::Name(EventColumnName),
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns
                .push(EventColumn::Description(EventColumnDescription));
        }
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventCountdown]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventCountdown],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => {
                write!(f, "{}", Table::new(TableStyleJson::new(), columns, self.events))
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(TableStyleBasic::new(), columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id(EventColumnId),
    Date(EventColumnDate),
    Countdown(EventColumnCountdown),
    Name(EventColumnName),
    Description(EventColumnDescription),
}

impl TableColumn<EventCountdown> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id(_) => "ID",
            EventColumn::Date(_) => "Hijri Date",
            EventColumn::Countdown(_) => "Countdown",
            EventColumn::Name(_) => "Name",
            EventColumn::Description(_) => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        match self {
            EventColumn::Id(a) => a.format(data),
            EventColumn::Date(a) => a.format(data),
            EventColumn::Countdown(a) => a.format(data),
            EventColumn::Name(a) => a.format(data),
            EventColumn::Description(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id(_) | EventColumn::Countdown(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &EventCountdown) -> Option<Color> {
        match self {
            EventColumn::Countdown(_) | EventColumn::Name(_) => match data.days_until {
                0 => Some(Color::Green),
                d if d <= SOON_DAYS => Some(Color::Yellow),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId;

impl EventColumnId {
    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        format!("#{}", data.event.id).into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDate;

impl EventColumnDate {
    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        let event = &data.event;
        match HijriMonth::from_number(event.hijri_month) {
            Some(month) => format!("{} {month}", event.hijri_day).into(),
            None => format!("{}/{}", event.hijri_day, event.hijri_month).into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnCountdown;

impl EventColumnCountdown {
    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        match data.days_until {
            0 => "today".into(),
            1 => "tomorrow".into(),
            d => format!("in {d} days").into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnName;

impl EventColumnName {
    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        data.event.name.as_str().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDescription;

impl EventColumnDescription {
    fn format<'a>(&self, data: &'a EventCountdown) -> Cow<'a, str> {
        data.event.description.as_deref().unwrap_or_default().into()
    }
}
