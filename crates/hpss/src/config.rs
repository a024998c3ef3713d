// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Archive tool configuration

/// Environment variable naming the archive binary to invoke.
pub const HTAR_BIN_ENV: &str = "OBSINV_HTAR_BIN";

const DEFAULT_PROGRAM: &str = "htar";

/// Configuration for the external HPSS archive tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpssConfig {
    /// Program invoked for tarball listings: a bare name resolved on PATH or
    /// an absolute path.
    pub program: String,
}

impl Default for HpssConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl HpssConfig {
    /// Read the config from the environment, falling back to `htar` on PATH.
    pub fn from_env() -> Self {
        match std::env::var(HTAR_BIN_ENV) {
            Ok(program) if !program.is_empty() => Self { program },
            _ => Self::default(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
