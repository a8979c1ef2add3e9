//! # History Reconstruction
//!
//! Replays the platform's per-key version history into an ordered audit
//! sequence. A faithful, order-preserving projection: no reordering, no
//! deduplication, no validation beyond decoding each snapshot. Fully
//! buffered in memory, bounded by a single asset's history.

use serde::{Deserialize, Serialize};

use super::entities::Timestamp;
use super::errors::ContractError;

/// One prior write (or delete) of a key, as recorded by the hosting ledger
/// platform. Consumed in platform-native order, typically most-recent-first;
/// the contract assumes nothing stronger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Identifier of the transaction that committed this version.
    pub tx_id: String,
    /// Value snapshot, or `None` for a tombstone.
    pub value: Option<Vec<u8>>,
    /// Wall-clock commit time, epoch seconds.
    pub timestamp: Timestamp,
    /// Whether this entry records a deletion.
    pub is_delete: bool,
}

/// One row of the audit view returned by `getHistory`.
///
/// Wire form: `{"TxId": ..., "Value": <snapshot|null>, "Timestamp": ...,
/// "IsDelete": ...}` — a tombstone renders as a null value with
/// `IsDelete: true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Committing transaction id.
    #[serde(rename = "TxId")]
    pub tx_id: String,
    /// Decoded record snapshot, or `null` for a tombstone.
    #[serde(rename = "Value")]
    pub value: Option<serde_json::Value>,
    /// Commit time, epoch seconds.
    #[serde(rename = "Timestamp")]
    pub timestamp: Timestamp,
    /// Tombstone flag.
    #[serde(rename = "IsDelete")]
    pub is_delete: bool,
}

/// Drain a history scan to completion and materialize every entry.
///
/// Order is preserved exactly as the platform yields it. An asset with no
/// history at all reports `NotFound` rather than an empty audit view.
pub fn materialize<I>(asset_id: &str, scan: I) -> Result<Vec<AuditEntry>, ContractError>
where
    I: IntoIterator<Item = Result<HistoryEntry, ContractError>>,
{
    let mut entries = Vec::new();
    for item in scan {
        let entry = item?;
        let value = match (entry.is_delete, entry.value) {
            (true, _) | (false, None) => None,
            (false, Some(bytes)) => {
                Some(serde_json::from_slice(&bytes).map_err(|e| ContractError::decode(asset_id, e))?)
            }
        };
        entries.push(AuditEntry {
            tx_id: entry.tx_id,
            value,
            timestamp: entry.timestamp,
            is_delete: entry.is_delete,
        });
    }
    if entries.is_empty() {
        return Err(ContractError::NotFound {
            asset_id: asset_id.to_string(),
        });
    }
    Ok(entries)
}
