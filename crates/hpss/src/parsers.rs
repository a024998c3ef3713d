// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output parsers for HPSS command responses

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use obsinv_core::{HpssCommandRawResponse, HpssFileMeta, HpssTarballContents};

use crate::error::HpssError;

/// Minimum token count for a meaningful `htar -tvf` output line.
const EXPECTED_COMPONENTS_HTAR_TVF_FILE_OBJ: usize = 7;

/// Structured result of one parsed command response, one variant per
/// registered command's output shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    TarballContents(HpssTarballContents),
}

impl CommandOutput {
    /// The tarball contents, when this output came from `inspect_tarball`.
    pub fn into_tarball_contents(self) -> Option<HpssTarballContents> {
        match self {
            CommandOutput::TarballContents(contents) => Some(contents),
        }
    }
}

/// Parse `htar -tvf` listing output into tarball contents.
///
/// The listing is human-oriented tabular text. Each line is split on
/// whitespace; lines with fewer than 7 tokens carry no data (blank lines,
/// stray diagnostics) and are skipped silently. The header line — literal
/// `Listing` at token 1 — supplies the parent directory (token 4, trailing
/// comma stripped) and the tool's self-reported entry count (token 5); if
/// several headers appear, the last one wins. Every other long-enough line is
/// a file entry: permissions at token 1, size at token 3, date and time at
/// tokens 4 and 5 (UTC, seconds forced to zero), name at token 6.
///
/// Fail-fast: one malformed timestamp or integer field aborts the whole
/// parse. `expected_count` is advisory and never checked against the number
/// of entries actually found.
pub fn inspect_tarball_parser(
    response: &HpssCommandRawResponse,
    obs_day: NaiveDate,
) -> Result<CommandOutput, HpssError> {
    let mut parent_dir = String::new();
    let mut expected_count = 0u64;
    let mut files_meta = Vec::new();

    for line in response.output.lines() {
        let components: Vec<&str> = line.split_whitespace().collect();
        if components.len() < EXPECTED_COMPONENTS_HTAR_TVF_FILE_OBJ {
            continue;
        }

        if components[1] == "Listing" {
            parent_dir = components[4].trim_end_matches(',').to_string();
            expected_count = parse_int(components[5], "expected entry count")?;
            continue;
        }

        files_meta.push(HpssFileMeta {
            name: components[6].to_string(),
            permissions: components[1].to_string(),
            last_modified: parse_entry_timestamp(components[4], components[5])?,
            size: parse_int(components[3], "file size")?,
        });
    }

    Ok(CommandOutput::TarballContents(HpssTarballContents {
        parent_dir,
        expected_count,
        inspected_files: files_meta,
        observation_day: obs_day,
        submitted_at: response.submitted_at,
        latency: response.latency,
    }))
}

fn parse_int(raw: &str, field: &'static str) -> Result<u64, HpssError> {
    raw.parse().map_err(|source| HpssError::FieldParseFailure {
        field,
        raw: raw.to_string(),
        source,
    })
}

/// Assemble `YYYY-MM-DD` and `HH:MM` tokens into a UTC timestamp with the
/// seconds forced to zero.
fn parse_entry_timestamp(date: &str, time: &str) -> Result<DateTime<Utc>, HpssError> {
    let raw = format!("{date}T{time}:00");
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.and_utc())
        .map_err(|source| HpssError::TimestampParseFailure { raw, source })
}

#[cfg(test)]
#[path = "parsers_tests.rs"]
mod tests;
