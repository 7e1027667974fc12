// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of Taqwim.

mod arg;
mod cli;
mod cmd_convert;
mod cmd_events;
mod cmd_generate_completion;
mod cmd_month;
mod cmd_prayer;
mod cmd_today;
mod config;
mod event_formatter;
mod prayer_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, TimeFormat, parse_config};
