// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obsinv-hpss: command dispatch and response parsing for the HPSS archive tool
//!
//! The flow for one inspection:
//!
//! ```text
//! HpssCommandRegistry::lookup ─► arg validator ─► HpssCommandHandler::send
//!        (contract)              (pre-spawn)       (child process, timing)
//!                                                        │
//!                              HpssCommandRawResponse ◄──┘
//!                                        │
//!                         HpssCommandHandler::parse_response
//!                                        │
//!                          CommandOutput::TarballContents
//! ```
//!
//! Execution is synchronous: `send` blocks the calling thread until the child
//! process exits and its output is fully captured. Handlers hold no shared
//! state, so callers wanting parallelism run independent handlers on their
//! own threads.

pub mod commands;
pub mod config;
pub mod error;
pub mod handler;
pub mod parsers;
pub mod runner;
pub mod validators;

pub use commands::{HpssCommand, HpssCommandRegistry, CMD_INSPECT_TARBALL};
pub use config::HpssConfig;
pub use error::HpssError;
pub use handler::HpssCommandHandler;
pub use parsers::{inspect_tarball_parser, CommandOutput};
#[cfg(any(test, feature = "test-support"))]
pub use runner::FakeRunner;
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
