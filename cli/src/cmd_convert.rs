// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use jiff::civil::Date;
use taqwim_core::{GregorianConversion, HijriDate, fits_gregorian_range, gregorian_to_hijri};

use crate::arg::{CommonArgs, HijriArgs, OutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdToHijri {
    pub date: Date,
    pub output_format: OutputFormat,
}

impl CmdToHijri {
    pub const NAME: &str = "to-hijri";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a Gregorian date to the Hijri calendar")
            .arg(arg!(date: <DATE> "Gregorian date, YYYY-MM-DD").value_parser(parse_date))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let date = match matches.get_one::<Date>("date") {
            Some(date) => *date,
            _ => unreachable!(),
        };

        Self {
            date,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting to hijri...");
        let hijri = gregorian_to_hijri(self.date);
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hijri)?),
            OutputFormat::Table => println!("{hijri}"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdToGregorian {
    pub hijri: HijriDate,
    pub output_format: OutputFormat,
}

impl CmdToGregorian {
    pub const NAME: &str = "to-gregorian";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a Hijri date to the Gregorian calendar")
            .arg(HijriArgs::year(true))
            .arg(HijriArgs::month(true))
            .arg(HijriArgs::day().required(true))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let (year, month, day) = match (
            HijriArgs::get_year(matches),
            HijriArgs::get_month(matches),
            HijriArgs::get_day(matches),
        ) {
            (Some(year), Some(month), Some(day)) => (year, month, day),
            _ => unreachable!(),
        };
        if !fits_gregorian_range(year, month, day) {
            return Err(format!("{day}/{month}/{year} AH is past the last supported date").into());
        }

        Ok(Self {
            hijri: HijriDate::new(year, month, day)?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting to gregorian...");
        let conversion = GregorianConversion::from(self.hijri.to_gregorian());
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversion)?),
            OutputFormat::Table => println!("{}", conversion.formatted),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn convert_command() -> Command {
        Command::new("test").subcommand(
            Command::new("convert")
                .subcommand(CmdToHijri::command())
                .subcommand(CmdToGregorian::command()),
        )
    }

    #[test]
    fn test_parse_to_hijri() {
        let matches = convert_command()
            .try_get_matches_from(["test", "convert", "to-hijri", "2025-03-01"])
            .unwrap();
        let sub_matches = matches
            .subcommand_matches("convert")
            .and_then(|m| m.subcommand_matches(CmdToHijri::NAME))
            .unwrap();
        let parsed = CmdToHijri::from(sub_matches);
        assert_eq!(parsed.date, date(2025, 3, 1));
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_to_gregorian() {
        let args = ["test", "convert", "to-gregorian", "1446", "9", "1"];
        let matches = convert_command().try_get_matches_from(args).unwrap();
        let sub_matches = matches
            .subcommand_matches("convert")
            .and_then(|m| m.subcommand_matches(CmdToGregorian::NAME))
            .unwrap();
        let parsed = CmdToGregorian::from(sub_matches).unwrap();
        assert_eq!(parsed.hijri, HijriDate::new(1446, 9, 1).unwrap());
        assert_eq!(parsed.hijri.to_gregorian(), date(2025, 3, 1));
    }

    #[test]
    fn test_reject_invalid_dates() {
        let args = ["test", "convert", "to-hijri", "2025-13-01"];
        assert!(convert_command().try_get_matches_from(args).is_err());

        let args = ["test", "convert", "to-gregorian", "1446", "13", "1"];
        assert!(convert_command().try_get_matches_from(args).is_err());
    }

    #[test]
    fn test_reject_dates_past_gregorian_range() {
        let parse = |day: &'static str| {
            let args = ["test", "convert", "to-gregorian", "9666", "4", day];
            let matches = convert_command().try_get_matches_from(args).unwrap();
            let sub_matches = matches
                .subcommand_matches("convert")
                .and_then(|m| m.subcommand_matches(CmdToGregorian::NAME))
                .unwrap();
            CmdToGregorian::from(sub_matches).map(|cmd| cmd.hijri.to_gregorian())
        };
        assert_eq!(parse("2").unwrap(), Date::MAX);
        assert!(parse("3").is_err());
    }
}
