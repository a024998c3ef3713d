// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obsinv-core: shared value types for the observation inventory utilities

pub mod clock;
pub mod records;

pub use clock::{Clock, FakeClock, SystemClock};
pub use records::{HpssCommandRawResponse, HpssFileMeta, HpssTarballContents};
