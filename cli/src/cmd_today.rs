// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;
use serde::Serialize;
use taqwim_core::{Clock, EventCountdown, HijriDate, Service, Store, holiday_name};

use crate::arg::{CommonArgs, OutputFormat};

#[derive(Debug, Clone, Copy)]
pub struct CmdToday {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdToday {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show today's Hijri date")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run<S: Store, C: Clock>(self, service: &Service<S, C>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing today...");
        let today = Today::new(service)?;
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&today)?),
            OutputFormat::Table => println!("{}", today.render(self.verbose)),
        }
        Ok(())
    }
}

impl Default for CmdToday {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Today {
    hijri: HijriDate,
    gregorian: Date,
    holiday: Option<&'static str>,
    next_event: Option<EventCountdown>,
}

impl Today {
    fn new<S: Store, C: Clock>(service: &Service<S, C>) -> Result<Self, Box<dyn Error>> {
        let hijri = service.hijri_today();
        Ok(Self {
            hijri,
            gregorian: service.today(),
            holiday: holiday_name(hijri.month(), hijri.day()),
            next_event: service.islamic_events()?.into_iter().next(),
        })
    }

    fn render(&self, verbose: bool) -> String {
        let mut out = format!(
            "{}  {}",
            self.hijri.to_string().bold(),
            self.gregorian.strftime("%A, %B %-d, %Y").to_string().dimmed()
        );
        if let Some(holiday) = self.holiday {
            out.push_str(&format!("\n{} {}", "Holiday:".green(), holiday));
        }
        if verbose && let Some(next) = &self.next_event {
            out.push_str(&format!(
                "\n{} {} in {} days",
                "Next event:".yellow(),
                next.event.name,
                next.days_until
            ));
        }
        out
    }
}
