//! # Outbound Ports (Driven Ports)
//!
//! Contracts the hosting ledger platform must fulfil. The platform owns
//! durability, serializability and conflict resolution (optimistic
//! multi-version concurrency with read-version validation at commit time);
//! the contract stays read-compute-write pure against these traits.

use crate::domain::entities::Timestamp;
use crate::domain::errors::ContractError;
use crate::domain::history::HistoryEntry;
use crate::domain::status::CallerIdentity;

/// Lazy, finite, platform-ordered scan over a key's prior versions.
///
/// The boxed iterator is the scoped handle on the platform's history
/// cursor: dropping it releases the cursor on every exit path, including
/// early error returns. Consumers drain it to completion.
pub type HistoryScan<'a> = Box<dyn Iterator<Item = Result<HistoryEntry, ContractError>> + 'a>;

/// Key→bytes world state with a retained per-key version history.
///
/// Every write produces exactly one new history entry. No locking is
/// exposed here; concurrent writers to the same key are ordered and
/// conflict-checked entirely by the platform.
pub trait VersionedStore {
    /// Read the current value under `key`. `None` means the key is absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError>;

    /// Persist `value` as the new current version under `key`.
    ///
    /// ## Errors
    ///
    /// - `WriteFailure`: the store rejected the persist.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), ContractError>;

    /// Open a history scan over all prior writes and deletes of `key`,
    /// in the platform's native order (typically most-recent-first).
    fn history_of<'a>(&'a self, key: &str) -> Result<HistoryScan<'a>, ContractError>;
}

/// Per-invocation platform context: the committing transaction's identity.
///
/// Caller identity comes from the platform's membership layer, already
/// verified; participant ids recorded on stage stamps are taken from here,
/// never from constants.
pub trait TransactionContext {
    /// Identifier of the current transaction.
    fn tx_id(&self) -> &str;

    /// Verified identity and role claims of the caller.
    fn caller(&self) -> &CallerIdentity;
}

/// Wall-clock source for stage timestamps.
///
/// A port so that tests pin time and the transition logic stays
/// deterministic and re-executable.
pub trait TimeSource {
    /// Current time, epoch seconds.
    fn now(&self) -> Timestamp;
}
