// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use taqwim_core::{APP_NAME, MemoryStore, Service, SystemClock};
use tracing_subscriber::EnvFilter;

use crate::cmd_convert::{CmdToGregorian, CmdToHijri};
use crate::cmd_events::CmdEvents;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_month::CmdMonth;
use crate::cmd_prayer::CmdPrayer;
use crate::cmd_today::CmdToday;
use crate::config::{Config, parse_config};

const TAQWIM_LOG_ENV: &str = "TAQWIM_LOG";

/// Run the Taqwim command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            init_tracing(cli.command.verbose());
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(TAQWIM_LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Hijri calendar, prayer countdown and Islamic events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/taqwim/config.toml on Linux and MacOS, \
%APPDATA%/taqwim/config.toml on Windows. Built-in defaults apply when it does not exist.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdToday::command())
            .subcommand(
                Command::new("convert")
                    .alias("c")
                    .about("Convert dates between the Gregorian and Hijri calendars")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdToHijri::command())
                    .subcommand(CmdToGregorian::command()),
            )
            .subcommand(CmdPrayer::command())
            .subcommand(CmdEvents::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdToday::NAME, matches)) => Today(CmdToday::from(matches)),
            Some(("convert", matches)) => match matches.subcommand() {
                Some((CmdToHijri::NAME, matches)) => ToHijri(CmdToHijri::from(matches)),
                Some((CmdToGregorian::NAME, matches)) => {
                    ToGregorian(CmdToGregorian::from(matches)?)
                }
                _ => unreachable!(),
            },
            Some((CmdPrayer::NAME, matches)) => Prayer(CmdPrayer::from(matches)),
            Some((CmdEvents::NAME, matches)) => Events(CmdEvents::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Today(CmdToday::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show today's Hijri date
    Today(CmdToday),

    /// Convert a Gregorian date to Hijri
    ToHijri(CmdToHijri),

    /// Convert a Hijri date to Gregorian
    ToGregorian(CmdToGregorian),

    /// Show prayer times
    Prayer(CmdPrayer),

    /// List upcoming events
    Events(CmdEvents),

    /// Show a Hijri month
    Month(CmdMonth),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Whether the command asked for detailed output
    pub fn verbose(&self) -> bool {
        use Commands::*;
        match self {
            Today(a) => a.verbose,
            Prayer(a) => a.verbose,
            Events(a) => a.verbose,
            Month(a) => a.verbose,
            ToHijri(_) | ToGregorian(_) | GenerateCompletion(_) => false,
        }
    }

    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Today(a)       => Self::run_with(config, |x, _| a.run(x)).await,
            ToHijri(a)     => a.run(),
            ToGregorian(a) => a.run(),
            Prayer(a)      => Self::run_with(config, |x, c| a.run(x, c.time_format)).await,
            Events(a)      => Self::run_with(config, |x, _| a.run(x)).await,
            Month(a)       => Self::run_with(config, |x, _| a.run(x)).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&Service<MemoryStore, SystemClock>, &Config) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        let store = MemoryStore::new().with_location(core_config.location());
        let service = Service::new(store, SystemClock)
            .with_calculator(core_config.schedule())
            .with_hijri_offset(core_config.hijri_offset);

        f(&service, &config)
    }
}
