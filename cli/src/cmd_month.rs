// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write};

use clap::{ArgMatches, Command};
use colored::Colorize;
use taqwim_core::{Clock, DayCell, MonthGrid, Service, Store};

use crate::arg::{CommonArgs, HijriArgs, OutputFormat};

const WEEKDAYS: &str = "Su Mo Tu We Th Fr Sa";

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show a Hijri month, the current one by default")
            .arg(HijriArgs::year(false).requires("month"))
            .arg(HijriArgs::month(false))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: HijriArgs::get_year(matches),
            month: HijriArgs::get_month(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run<S: Store, C: Clock>(self, service: &Service<S, C>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        let grid = self.grid(service)?;
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
            OutputFormat::Table => println!("{}", render(&grid, self.verbose)?),
        }
        Ok(())
    }

    fn grid<S: Store, C: Clock>(
        &self,
        service: &Service<S, C>,
    ) -> Result<MonthGrid, Box<dyn Error>> {
        let (year, month) = match (self.year, self.month) {
            (Some(year), Some(month)) => (year, month),
            _ => {
                let today = service.hijri_today();
                (today.year(), today.month())
            }
        };
        Ok(service.month(year, month)?)
    }
}

fn render(grid: &MonthGrid, verbose: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let title = format!("{} {} AH", grid.month, grid.year);
    let title = format!("{title:^width$}", width = WEEKDAYS.len());
    writeln!(out, "{}", title.trim_end().bold())?;
    write!(out, "{}", WEEKDAYS.dimmed())?;

    for week in grid.weeks.iter().filter(|w| w.iter().any(Option::is_some)) {
        writeln!(out)?;
        let line: Vec<String> = week.iter().map(render_cell).collect();
        write!(out, "{}", line.join(" ").trim_end())?;
    }

    let mut marked = grid.days().filter(|d| !d.events.is_empty()).peekable();
    if marked.peek().is_some() {
        writeln!(out)?;
    }
    for day in marked {
        write!(out, "\n{:>2} {}", day.day, day.events.join(", ").yellow())?;
    }

    if verbose && let (Some(first), Some(last)) = (grid.days().next(), grid.days().last()) {
        let (days, first, last) = (grid.days, first.gregorian, last.gregorian);
        write!(out, "\n\n{days} days, {first} to {last}")?;
    }
    Ok(out)
}

fn render_cell(cell: &Option<DayCell>) -> String {
    match cell {
        None => "  ".to_owned(),
        Some(cell) => {
            let day = format!("{:>2}", cell.day);
            match (cell.is_today, cell.events.is_empty()) {
                (true, _) => day.reversed().to_string(),
                (false, false) => day.yellow().to_string(),
                (false, true) => day,
            }
        }
    }
}
