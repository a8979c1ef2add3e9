//! # In-Memory Ledger Adapter
//!
//! `VersionedStore` backed by a `RwLock`ed map, with a per-key history
//! journal that records every write and delete in commit order. Stands in
//! for the hosting platform in tests and single-process embeddings.

use crate::domain::entities::Timestamp;
use crate::domain::errors::ContractError;
use crate::domain::history::HistoryEntry;
use crate::domain::status::CallerIdentity;
use crate::ports::outbound::{HistoryScan, TimeSource, TransactionContext, VersionedStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory world state with retained per-key version history.
///
/// Each committed write mints a fresh transaction id and a monotonically
/// increasing commit timestamp, so audit ordering is deterministic in
/// tests. History scans yield most-recent-first, the platform's typical
/// native order.
pub struct InMemoryLedger {
    state: RwLock<HashMap<String, Vec<u8>>>,
    journal: RwLock<HashMap<String, Vec<HistoryEntry>>>,
    /// Base commit time; each commit stamps `base + seq`.
    base_time: Timestamp,
    seq: AtomicU64,
}

impl InMemoryLedger {
    /// Create an empty ledger with commit timestamps starting at zero.
    pub fn new() -> Self {
        Self::with_base_time(0)
    }

    /// Create an empty ledger whose commit timestamps start at `base_time`.
    pub fn with_base_time(base_time: Timestamp) -> Self {
        Self {
            state: RwLock::new(HashMap::new()),
            journal: RwLock::new(HashMap::new()),
            base_time,
            seq: AtomicU64::new(0),
        }
    }

    fn next_commit(&self) -> (String, Timestamp) {
        let n = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        (uuid::Uuid::new_v4().to_string(), self.base_time + n)
    }

    /// Platform-level tombstone: remove the key and journal the deletion.
    ///
    /// Not part of the `VersionedStore` port — the contract never deletes;
    /// this models out-of-band platform deletes visible only through
    /// history replay.
    pub fn delete(&self, key: &str) -> Result<(), ContractError> {
        let mut state = self.state.write().map_err(|_| ContractError::WriteFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        state.remove(key);
        drop(state);

        let (tx_id, timestamp) = self.next_commit();
        let mut journal = self.journal.write().map_err(|_| ContractError::WriteFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        journal.entry(key.to_string()).or_default().push(HistoryEntry {
            tx_id,
            value: None,
            timestamp,
            is_delete: true,
        });
        Ok(())
    }

    /// Number of journal entries (writes + deletes) recorded for `key`.
    pub fn version_count(&self, key: &str) -> usize {
        self.journal
            .read()
            .map(|j| j.get(key).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedStore for InMemoryLedger {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError> {
        let state = self.state.read().map_err(|_| ContractError::WriteFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        Ok(state.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), ContractError> {
        let mut state = self.state.write().map_err(|_| ContractError::WriteFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        state.insert(key.to_string(), value.to_vec());
        drop(state);

        let (tx_id, timestamp) = self.next_commit();
        let mut journal = self.journal.write().map_err(|_| ContractError::WriteFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        journal.entry(key.to_string()).or_default().push(HistoryEntry {
            tx_id,
            value: Some(value.to_vec()),
            timestamp,
            is_delete: false,
        });
        Ok(())
    }

    fn history_of<'a>(&'a self, key: &str) -> Result<HistoryScan<'a>, ContractError> {
        let journal = self.journal.read().map_err(|_| ContractError::HistoryFailure {
            asset_id: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        // Snapshot under the lock, then yield most-recent-first.
        let entries: Vec<HistoryEntry> = journal.get(key).cloned().unwrap_or_default();
        Ok(Box::new(entries.into_iter().rev().map(Ok)))
    }
}

/// Transaction context for in-memory invocations: a minted transaction id
/// plus the caller identity the platform would have verified.
pub struct MemoryContext {
    tx_id: String,
    caller: CallerIdentity,
}

impl MemoryContext {
    /// Context with a freshly minted v4 transaction id.
    pub fn new(caller: CallerIdentity) -> Self {
        Self {
            tx_id: uuid::Uuid::new_v4().to_string(),
            caller,
        }
    }

    /// Context with a pinned transaction id, for deterministic assertions.
    pub fn with_tx_id(tx_id: impl Into<String>, caller: CallerIdentity) -> Self {
        Self {
            tx_id: tx_id.into(),
            caller,
        }
    }
}

impl TransactionContext for MemoryContext {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn caller(&self) -> &CallerIdentity {
        &self.caller
    }
}

/// Wall-clock time source.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Pinned time source for deterministic tests.
pub struct FixedTimeSource(pub Timestamp);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}
