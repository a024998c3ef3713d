// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obsinv-storage: persistence boundary for inventory records
//!
//! The inspection pipeline only produces records; it performs no storage I/O
//! itself. `InventoryStore` is the seam a persistence backend implements.
//! `MemoryStore` is the in-process implementation used by tests and by
//! callers that only need the current run's records.

pub mod memory;
pub mod records;

pub use memory::MemoryStore;
pub use records::{
    cmd_result_from_response, inventory_items_from_contents, CmdResult, CmdResultId,
    ObsInventoryItem, ObsMetaItem,
};

use thiserror::Error;

/// Errors from inventory persistence operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown cmd_result_id {0}, insert the command result first")]
    UnknownCmdResult(CmdResultId),
}

/// Persistence boundary consumed by the inspection pipeline.
pub trait InventoryStore {
    /// Persist one command result and return its generated identifier.
    fn insert_cmd_result(&mut self, record: CmdResult) -> Result<CmdResultId, StoreError>;

    /// Bulk-persist per-file inventory records referencing a command result.
    fn insert_obs_inventory_items(
        &mut self,
        items: Vec<ObsInventoryItem>,
    ) -> Result<(), StoreError>;

    /// Bulk-persist derived per-observation metadata records.
    fn insert_obs_meta_items(&mut self, items: Vec<ObsMetaItem>) -> Result<(), StoreError>;
}
