// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of supported HPSS commands
//!
//! The registry is a closed, enumerable set built once at startup from tool
//! configuration and passed by reference to whoever dispatches commands.
//! Nothing registers at runtime and nothing mutates an entry after
//! construction.

use chrono::NaiveDate;
use indexmap::IndexMap;

use obsinv_core::HpssCommandRawResponse;

use crate::config::HpssConfig;
use crate::error::HpssError;
use crate::parsers::{inspect_tarball_parser, CommandOutput};
use crate::validators::inspect_tarball_args_valid;

/// Logical name of the archive-listing command.
pub const CMD_INSPECT_TARBALL: &str = "inspect_tarball";

/// Validates a caller-supplied argument list before any process is spawned.
pub type ArgValidator = fn(command: &str, args: &[String]) -> Result<(), HpssError>;

/// Parses a raw response's stdout into a structured result.
pub type OutputParser =
    fn(response: &HpssCommandRawResponse, obs_day: NaiveDate) -> Result<CommandOutput, HpssError>;

/// Immutable contract for one logical HPSS command.
#[derive(Debug, Clone)]
pub struct HpssCommand {
    /// Program name plus fixed flags. Caller arguments are appended after
    /// these tokens, in order, as discrete argv entries.
    pub template: Vec<String>,
    pub arg_validator: ArgValidator,
    pub output_parser: OutputParser,
}

/// Closed set of supported commands, keyed by logical name.
#[derive(Debug, Clone)]
pub struct HpssCommandRegistry {
    commands: IndexMap<&'static str, HpssCommand>,
}

impl HpssCommandRegistry {
    /// Build the registry from tool configuration.
    pub fn new(config: &HpssConfig) -> Self {
        let mut commands = IndexMap::new();
        commands.insert(
            CMD_INSPECT_TARBALL,
            HpssCommand {
                template: vec![config.program.clone(), "-tvf".to_string()],
                arg_validator: inspect_tarball_args_valid,
                output_parser: inspect_tarball_parser,
            },
        );
        Self { commands }
    }

    /// Look up a command contract by logical name.
    pub fn lookup(&self, name: &str) -> Result<&HpssCommand, HpssError> {
        self.commands
            .get(name)
            .ok_or_else(|| HpssError::UnknownCommand {
                name: name.to_string(),
                valid: self.command_names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Names of all registered commands, in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

impl Default for HpssCommandRegistry {
    fn default() -> Self {
        Self::new(&HpssConfig::default())
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
