// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, ValueEnum, arg, value_parser};
use clap_num::number_range;
use jiff::civil::{Date, Time};
use taqwim_core::{City, parse_time};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HijriArgs;

impl HijriArgs {
    pub fn year(required: bool) -> Arg {
        arg!(year: <YEAR> "Hijri year")
            .value_parser(parse_hijri_year)
            .required(required)
    }

    pub fn get_year(matches: &ArgMatches) -> Option<i32> {
        matches.get_one("year").copied()
    }

    pub fn month(required: bool) -> Arg {
        arg!(month: <MONTH> "Hijri month, 1-12")
            .value_parser(parse_hijri_month)
            .required(required)
    }

    pub fn get_month(matches: &ArgMatches) -> Option<u8> {
        matches.get_one("month").copied()
    }

    pub fn day() -> Arg {
        arg!(day: <DAY> "Day of the Hijri month, 1-30").value_parser(parse_hijri_day)
    }

    pub fn get_day(matches: &ArgMatches) -> Option<u8> {
        matches.get_one("day").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PrayerArgs;

impl PrayerArgs {
    pub fn city() -> Arg {
        arg!(--city <CITY> "Use a preset city instead of the configured location")
            .value_parser(value_parser!(City))
    }

    pub fn get_city(matches: &ArgMatches) -> Option<City> {
        matches.get_one("city").copied()
    }

    pub fn at() -> Arg {
        arg!(--at <TIME> "Count down from this time of day, HH:MM").value_parser(parse_hh_mm)
    }

    pub fn get_at(matches: &ArgMatches) -> Option<Time> {
        matches.get_one("at").copied()
    }
}

pub fn parse_date(s: &str) -> Result<Date, String> {
    s.parse()
        .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}"))
}

fn parse_hh_mm(s: &str) -> Result<Time, String> {
    parse_time(s).map_err(|e| e.to_string())
}

fn parse_hijri_year(s: &str) -> Result<i32, String> {
    number_range(s, 1, 9666)
}

fn parse_hijri_month(s: &str) -> Result<u8, String> {
    number_range(s, 1, 12)
}

fn parse_hijri_day(s: &str) -> Result<u8, String> {
    number_range(s, 1, 30)
}
