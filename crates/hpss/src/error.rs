// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for HPSS command dispatch and parsing.
//!
//! Everything here is raised synchronously at the point of detection. A
//! non-zero exit code from the external tool is deliberately absent: it is a
//! representable outcome (`HpssCommandRawResponse::success == false`), not an
//! error.

use std::io;
use thiserror::Error;

/// Errors from HPSS command dispatch and response parsing
#[derive(Debug, Error)]
pub enum HpssError {
    #[error("unknown HPSS command \"{name}\", use one of: {valid}")]
    UnknownCommand { name: String, valid: String },

    #[error("command \"{command}\" accepts exactly 1 argument, received {received}")]
    InvalidArgumentCount { command: String, received: usize },

    #[error(
        "invalid characters in file path \"{arg}\", only a-z A-Z 0-9 and - . / _ are allowed"
    )]
    InvalidArgumentContent { arg: String },

    /// The external program is missing from the execution environment.
    /// Fatal and non-retryable until an operator fixes the host.
    #[error("command \"{program}\" was not recognized, try loading the hpss module: $ module load hpss")]
    ToolNotAvailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("error while running command \"{program}\"")]
    ExecutionFailure {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Parse requested without a captured raw response. Programmer error:
    /// `send` must complete before `parse_response`.
    #[error("no raw response to parse, the command has not been sent")]
    TypeMismatch,

    #[error("problem parsing file timestamp \"{raw}\"")]
    TimestampParseFailure {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("problem parsing {field} \"{raw}\"")]
    FieldParseFailure {
        field: &'static str,
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
