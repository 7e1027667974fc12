// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Time;
use taqwim_core::{City, Clock, LocationSetting, PrayerSchedule, Service, Store};

use crate::arg::{CommonArgs, OutputFormat, PrayerArgs};
use crate::config::TimeFormat;
use crate::prayer_formatter::{PrayerFormatter, PrayerRow};

#[derive(Debug, Clone, Copy)]
pub struct CmdPrayer {
    pub city: Option<City>,
    pub at: Option<Time>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdPrayer {
    pub const NAME: &str = "prayer";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("p")
            .about("Show today's prayer times and the next prayer")
            .arg(PrayerArgs::city())
            .arg(PrayerArgs::at())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            city: PrayerArgs::get_city(matches),
            at: PrayerArgs::get_at(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run<S: Store, C: Clock>(
        self,
        service: &Service<S, C>,
        time_format: TimeFormat,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing prayer times...");
        let schedule = self.schedule(service)?;
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
            OutputFormat::Table => println!("{}", self.render(&schedule, time_format)),
        }
        Ok(())
    }

    fn schedule<S: Store, C: Clock>(
        &self,
        service: &Service<S, C>,
    ) -> Result<PrayerSchedule, Box<dyn Error>> {
        if self.city.is_none() && self.at.is_none() {
            return Ok(service.prayer_times()?);
        }

        let location = match self.city {
            Some(city) => LocationSetting::from(city),
            None => service.store().location()?.unwrap_or_default(),
        };
        let at = self.at.unwrap_or_else(|| service.now().time());
        Ok(service.prayer_times_for(&location, at))
    }

    fn render(&self, schedule: &PrayerSchedule, time_format: TimeFormat) -> String {
        let rows = PrayerRow::from_schedule(schedule);
        let formatter = PrayerFormatter::new(time_format);

        let mut out = format!(
            "{}, {}\n{}\n{} {}",
            schedule.city.bold(),
            schedule.date.strftime("%A, %B %-d, %Y"),
            formatter.format(&rows),
            "Next:".green(),
            schedule.next_prayer,
        );
        if self.verbose {
            out.push_str(&format!(
                "\n{}",
                "Times are a fixed schedule, not computed from the sun position.".dimmed()
            ));
        }
        out
    }
}
