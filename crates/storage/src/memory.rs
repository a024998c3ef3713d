// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory inventory store

use crate::records::{CmdResult, CmdResultId, ObsInventoryItem, ObsMetaItem};
use crate::{InventoryStore, StoreError};

/// Non-durable `InventoryStore` keeping everything in process memory.
///
/// Identifiers are assigned sequentially from 1. Inventory and meta inserts
/// reject records whose `cmd_result_id` was never issued, mirroring the
/// foreign-key constraint a relational backend would enforce.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cmd_results: Vec<(CmdResultId, CmdResult)>,
    obs_inventory: Vec<ObsInventoryItem>,
    obs_meta: Vec<ObsMetaItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmd_results(&self) -> &[(CmdResultId, CmdResult)] {
        &self.cmd_results
    }

    pub fn obs_inventory(&self) -> &[ObsInventoryItem] {
        &self.obs_inventory
    }

    pub fn obs_meta(&self) -> &[ObsMetaItem] {
        &self.obs_meta
    }

    fn has_cmd_result(&self, id: CmdResultId) -> bool {
        self.cmd_results.iter().any(|(known, _)| *known == id)
    }
}

impl InventoryStore for MemoryStore {
    fn insert_cmd_result(&mut self, record: CmdResult) -> Result<CmdResultId, StoreError> {
        let id = self.cmd_results.len() as CmdResultId + 1;
        tracing::debug!(id, command = %record.command, "inserting cmd result");
        self.cmd_results.push((id, record));
        Ok(id)
    }

    fn insert_obs_inventory_items(
        &mut self,
        items: Vec<ObsInventoryItem>,
    ) -> Result<(), StoreError> {
        for item in &items {
            if !self.has_cmd_result(item.cmd_result_id) {
                return Err(StoreError::UnknownCmdResult(item.cmd_result_id));
            }
        }
        tracing::debug!(count = items.len(), "inserting obs inventory items");
        self.obs_inventory.extend(items);
        Ok(())
    }

    fn insert_obs_meta_items(&mut self, items: Vec<ObsMetaItem>) -> Result<(), StoreError> {
        for item in &items {
            if !self.has_cmd_result(item.cmd_result_id) {
                return Err(StoreError::UnknownCmdResult(item.cmd_result_id));
            }
        }
        tracing::debug!(count = items.len(), "inserting obs meta items");
        self.obs_meta.extend(items);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
