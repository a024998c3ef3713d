// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value types produced by HPSS command dispatch and response parsing.
//!
//! Each record is an immutable snapshot: populated once, then handed down the
//! pipeline (raw response → parsed contents → storage records) without
//! further mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one completed external-process execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpssCommandRawResponse {
    /// The literal command line invoked, tokens joined with single spaces.
    pub command: String,
    pub return_code: i32,
    /// Captured stderr text.
    pub error: String,
    /// Captured stdout text.
    pub output: String,
    /// True exactly when `return_code == 0`. A false value is a normal,
    /// caller-inspectable outcome, not an error.
    pub success: bool,
    /// First caller-supplied argument, used as a correlation key
    /// (for `inspect_tarball` this is the inspected tarball path).
    pub arg0: String,
    pub submitted_at: DateTime<Utc>,
    /// Wall-clock seconds from submission to process exit. Never negative.
    pub latency: f64,
}

/// One file record found inside a tarball, as reported by the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpssFileMeta {
    pub name: String,
    pub permissions: String,
    /// UTC, minute precision (the listing carries no seconds).
    pub last_modified: DateTime<Utc>,
    pub size: u64,
}

/// Parsed result of one archive-listing invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpssTarballContents {
    pub parent_dir: String,
    /// Entry count the tool itself declared in its header line. Advisory:
    /// a mismatch with `inspected_files.len()` is a signal for the caller,
    /// never a parse failure.
    pub expected_count: u64,
    /// Entries in listing order.
    pub inspected_files: Vec<HpssFileMeta>,
    /// Caller-supplied data-collection day this inspection belongs to.
    pub observation_day: NaiveDate,
    pub submitted_at: DateTime<Utc>,
    pub latency: f64,
}
