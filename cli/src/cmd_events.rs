// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use clap_num::number_range;
use taqwim_core::{Clock, EventCountdown, Service, Store};

use crate::arg::{CommonArgs, OutputFormat};
use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdEvents {
    pub limit: Option<usize>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEvents {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("e")
            .about("List upcoming Islamic events")
            .arg(Self::arg_limit())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            limit: matches.get_one("limit").copied(),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run<S: Store, C: Clock>(self, service: &Service<S, C>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = self.events(service)?;
        let formatter = EventFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        println!("{}", formatter.format(&events));
        Ok(())
    }

    fn events<S: Store, C: Clock>(
        &self,
        service: &Service<S, C>,
    ) -> Result<Vec<EventCountdown>, Box<dyn Error>> {
        let mut events = service.islamic_events()?;
        if let Some(limit) = self.limit {
            events.truncate(limit);
        }
        Ok(events)
    }

    fn arg_limit() -> Arg {
        arg!(-n --limit <N> "Show at most N events").value_parser(parse_limit)
    }
}

fn parse_limit(s: &str) -> Result<usize, String> {
    number_range(s, 1, 1000)
}
