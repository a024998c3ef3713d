// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HPSS command construction and dispatch
//!
//! A handler represents one attempt to run a registered command: it resolves
//! the contract, validates the caller's arguments, builds the command line
//! from discrete tokens, executes the child process, and retains the raw
//! response for parsing. Create one handler per attempt and discard it after
//! consuming the result.

use chrono::{DateTime, NaiveDate, Utc};

use obsinv_core::{Clock, HpssCommandRawResponse, SystemClock};

use crate::commands::{HpssCommand, HpssCommandRegistry};
use crate::error::HpssError;
use crate::parsers::CommandOutput;
use crate::runner::ProcessRunner;

/// One attempt to run a registered HPSS command.
pub struct HpssCommandHandler<C: Clock = SystemClock> {
    name: String,
    command: HpssCommand,
    args: Vec<String>,
    cmd_line: Vec<String>,
    raw_response: Option<HpssCommandRawResponse>,
    clock: C,
}

impl HpssCommandHandler<SystemClock> {
    /// Resolve `name` against the registry and validate `args`.
    ///
    /// Fails with `UnknownCommand` or an argument-validation error before any
    /// process is spawned.
    pub fn new(
        registry: &HpssCommandRegistry,
        name: &str,
        args: Vec<String>,
    ) -> Result<Self, HpssError> {
        Self::with_clock(registry, name, args, SystemClock)
    }
}

impl<C: Clock> HpssCommandHandler<C> {
    pub fn with_clock(
        registry: &HpssCommandRegistry,
        name: &str,
        args: Vec<String>,
        clock: C,
    ) -> Result<Self, HpssError> {
        let command = registry.lookup(name)?.clone();
        (command.arg_validator)(name, &args)?;

        let mut cmd_line = command.template.clone();
        cmd_line.extend(args.iter().cloned());
        tracing::debug!(command = name, ?cmd_line, "constructed command line");

        Ok(Self {
            name: name.to_string(),
            command,
            args,
            cmd_line,
            raw_response: None,
            clock,
        })
    }

    /// Execute the command as a child process, blocking until it exits.
    ///
    /// Stdout and stderr are captured fully buffered (listing output is
    /// bounded). Returns the success flag: `Ok(false)` for a non-zero exit
    /// code, which is a normal outcome — only failures to launch or wait on
    /// the process are errors. There is no timeout; a hung tool blocks the
    /// caller.
    pub fn send(&mut self, runner: &dyn ProcessRunner) -> Result<bool, HpssError> {
        let program = self.cmd_line[0].clone();

        let submitted_at = self.clock.now_utc();
        let result = runner.run(&program, &self.cmd_line[1..]);
        let finished_at = self.clock.now_utc();

        let output = match result {
            Ok(output) => output,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(HpssError::ToolNotAvailable { program, source });
            }
            Err(source) => {
                return Err(HpssError::ExecutionFailure { program, source });
            }
        };

        let latency = latency_seconds(submitted_at, finished_at);
        let success = output.exit_code == 0;
        tracing::info!(
            command = %self.name,
            exit_code = output.exit_code,
            latency,
            "command completed"
        );

        self.raw_response = Some(HpssCommandRawResponse {
            command: self.cmd_line.join(" "),
            return_code: output.exit_code,
            error: output.stderr,
            output: output.stdout,
            success,
            arg0: self.args.first().cloned().unwrap_or_default(),
            submitted_at,
            latency,
        });

        Ok(success)
    }

    /// Whether a failed `send` may be retried.
    ///
    /// Always false for now; retryable failure classes of the external tool
    /// are not yet known. Extension point for a future classification.
    pub fn can_retry_send(&self) -> bool {
        false
    }

    /// The raw response captured by the last successful `send`.
    pub fn raw_response(&self) -> Option<&HpssCommandRawResponse> {
        self.raw_response.as_ref()
    }

    /// The fully constructed command line, template tokens first.
    pub fn cmd_line(&self) -> &[String] {
        &self.cmd_line
    }

    /// Run the command's output parser over the captured raw response.
    ///
    /// Fails with `TypeMismatch` when no response has been captured yet.
    pub fn parse_response(&self, obs_day: NaiveDate) -> Result<CommandOutput, HpssError> {
        let response = self.raw_response.as_ref().ok_or(HpssError::TypeMismatch)?;
        (self.command.output_parser)(response, obs_day)
    }
}

/// Wall-clock delta in seconds, microsecond precision, clamped at zero.
fn latency_seconds(submitted_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> f64 {
    let delta = finished_at.signed_duration_since(submitted_at);
    delta.num_microseconds().unwrap_or(0).max(0) as f64 / 1_000_000.0
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
