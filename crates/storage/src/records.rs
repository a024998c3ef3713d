// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record shapes handed to the persistence boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use obsinv_core::{HpssCommandRawResponse, HpssTarballContents};

/// Generated identifier of a persisted command result.
pub type CmdResultId = i64;

/// One persisted external-command execution with its observation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmdResult {
    pub command: String,
    pub arg0: String,
    pub raw_output: String,
    pub raw_error: String,
    pub error_code: i32,
    pub obs_day: NaiveDate,
    pub submitted_at: DateTime<Utc>,
    pub latency: f64,
    pub inserted_at: DateTime<Utc>,
}

/// One inventoried file from a tarball listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsInventoryItem {
    pub cmd_result_id: CmdResultId,
    pub filename: String,
    pub parent_dir: String,
    pub obs_day: NaiveDate,
    pub file_size: u64,
    pub permissions: String,
    pub last_modified: DateTime<Utc>,
    pub inserted_at: DateTime<Utc>,
}

/// Derived per-observation metadata produced by downstream analysis
/// (e.g. NCEPLIBS-bufr scans). Defined here so analyzers can reference the
/// identifiers generated on insert; this crate never fills these in itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsMetaItem {
    pub obs_id: i64,
    pub cmd_result_id: CmdResultId,
    pub cmd_str: String,
    pub sat_id: Option<i64>,
    pub sat_id_name: Option<String>,
    pub obs_count: u64,
    pub inserted_at: DateTime<Utc>,
}

/// Build a persistable command result from a raw response.
pub fn cmd_result_from_response(
    response: &HpssCommandRawResponse,
    obs_day: NaiveDate,
    inserted_at: DateTime<Utc>,
) -> CmdResult {
    CmdResult {
        command: response.command.clone(),
        arg0: response.arg0.clone(),
        raw_output: response.output.clone(),
        raw_error: response.error.clone(),
        error_code: response.return_code,
        obs_day,
        submitted_at: response.submitted_at,
        latency: response.latency,
        inserted_at,
    }
}

/// Build per-file inventory records from parsed tarball contents, in listing
/// order.
pub fn inventory_items_from_contents(
    contents: &HpssTarballContents,
    cmd_result_id: CmdResultId,
    inserted_at: DateTime<Utc>,
) -> Vec<ObsInventoryItem> {
    contents
        .inspected_files
        .iter()
        .map(|file| ObsInventoryItem {
            cmd_result_id,
            filename: file.name.clone(),
            parent_dir: contents.parent_dir.clone(),
            obs_day: contents.observation_day,
            file_size: file.size,
            permissions: file.permissions.clone(),
            last_modified: file.last_modified,
            inserted_at,
        })
        .collect()
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
