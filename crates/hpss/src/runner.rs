// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution seam
//!
//! `HpssCommandHandler` spawns the external tool through the `ProcessRunner`
//! trait so tests can script outcomes without a real binary on the host.
//! Implementations receive discrete argv tokens and must hand them to the OS
//! as-is — joining them into a shell string would defeat the validator's
//! injection guarantee.

use std::io;
use std::process::Command;

/// Captured output of one completed child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a child process and captures its output.
pub trait ProcessRunner {
    /// Run `program` with `args`, blocking until exit with stdout and stderr
    /// fully buffered. Returns an error only when the process cannot be
    /// launched or waited on; a non-zero exit code is a normal `Ok` outcome.
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput>;
}

/// Runs real child processes via `std::process`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRunner;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{ProcessOutput, ProcessRunner};
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::io;

    /// Scripted process runner that records every invocation.
    ///
    /// Outcomes are consumed in FIFO order; running with nothing queued
    /// yields an `io::Error` so a misconfigured test fails loudly.
    #[derive(Default)]
    pub struct FakeRunner {
        results: Mutex<VecDeque<io::Result<ProcessOutput>>>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a completed-process outcome.
        pub fn push_output(&self, exit_code: i32, stdout: &str, stderr: &str) {
            self.results.lock().push_back(Ok(ProcessOutput {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }));
        }

        /// Queue a launch failure.
        pub fn push_error(&self, err: io::Error) {
            self.results.lock().push_back(Err(err));
        }

        /// Every `(program, args)` pair run so far, in order.
        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().clone()
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
            self.calls
                .lock()
                .push((program.to_string(), args.to_vec()));
            self.results.lock().pop_front().unwrap_or_else(|| {
                Err(io::Error::other("FakeRunner has no scripted result"))
            })
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
