// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument validation for HPSS commands
//!
//! Validation runs before any process is spawned and never mutates its input.
//! The character-class check is a security boundary: together with
//! discrete-token spawning (see `runner`) it keeps shell metacharacters,
//! whitespace, and quotes out of the constructed command line.

use crate::error::HpssError;

fn is_safe_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/')
}

/// Validate arguments for the archive-listing command.
///
/// Requires exactly one argument, a tarball path matching `[A-Za-z0-9._-/]+`
/// in its entirety.
pub fn inspect_tarball_args_valid(command: &str, args: &[String]) -> Result<(), HpssError> {
    tracing::debug!(command, ?args, "validating command arguments");
    if args.len() != 1 {
        return Err(HpssError::InvalidArgumentCount {
            command: command.to_string(),
            received: args.len(),
        });
    }

    let arg = &args[0];
    if arg.is_empty() || !arg.chars().all(is_safe_path_char) {
        return Err(HpssError::InvalidArgumentContent { arg: arg.clone() });
    }

    Ok(())
}

#[cfg(test)]
#[path = "validators_tests.rs"]
mod tests;
