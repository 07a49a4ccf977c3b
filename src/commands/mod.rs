//! Command implementations for pracfile.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config_cmd;
mod generate;
mod sections;

use crate::cli::{Cli, Command, ConfigAction};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config, command, ..
    } = cli;

    match command {
        Command::Generate(args) => generate::cmd_generate(&config, args).await,
        Command::Sections => sections::cmd_sections(),
        Command::Config(cmd) => match cmd.action {
            ConfigAction::Show => config_cmd::cmd_config_show(&config),
            ConfigAction::Init(args) => config_cmd::cmd_config_init(&config, args),
        },
    }
}
