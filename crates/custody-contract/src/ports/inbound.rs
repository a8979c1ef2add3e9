//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the custody contract: every operation the fixed RPC
//! surface can reach. Implementations must enforce all domain invariants,
//! and a failed operation must never commit a state change.

use crate::domain::entities::{BatchRecord, TelemetryReading};
use crate::domain::errors::ContractError;
use crate::domain::history::AuditEntry;
use crate::domain::status::StageOp;
use crate::ports::outbound::TransactionContext;

/// Primary API for the custody contract.
pub trait CustodyContractApi {
    /// Create a product record at genesis: all optional fields blank,
    /// status uninitialized, empty telemetry.
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: the key already holds a record.
    /// - `WriteFailure`: the store rejected the persist.
    fn genesis(
        &self,
        ctx: &dyn TransactionContext,
        asset_id: &str,
        sensor_id: &str,
    ) -> Result<(), ContractError>;

    /// Apply one guarded stage transition.
    ///
    /// Authorization runs before the transition guard: the caller's
    /// verified role must match the operation's policy, then the current
    /// status must satisfy the operation's predecessor exactly. On success
    /// the fixed target status, participant id and stage timestamp are
    /// persisted as one new version.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record under `asset_id`.
    /// - `Unauthorized`: caller role does not match the operation.
    /// - `PreconditionFailed`: status is not the required predecessor.
    /// - `DecodeError`: stored bytes not a valid product record.
    /// - `WriteFailure`: the store rejected the persist.
    fn apply_stage(
        &self,
        ctx: &dyn TransactionContext,
        asset_id: &str,
        op: StageOp,
    ) -> Result<(), ContractError>;

    /// Append one telemetry reading to a product record.
    ///
    /// Never inspects or modifies `status`; legal at any point in the
    /// asset's life after genesis. A missing record fails with `NotFound`
    /// rather than silently creating a partial one.
    fn append_telemetry(
        &self,
        ctx: &dyn TransactionContext,
        asset_id: &str,
        reading: TelemetryReading,
    ) -> Result<(), ContractError>;

    /// Raw read: the stored bytes under `asset_id`, verbatim.
    fn query(&self, asset_id: &str) -> Result<Vec<u8>, ContractError>;

    /// Create a regulated-batch record (flat genesis, no lifecycle).
    fn create_batch(
        &self,
        ctx: &dyn TransactionContext,
        batch: BatchRecord,
    ) -> Result<(), ContractError>;

    /// Read and decode a batch record.
    fn get_batch_by_id(&self, batch_id: &str) -> Result<BatchRecord, ContractError>;

    /// Append one telemetry reading to a batch record, unconditionally.
    ///
    /// Returns the committing transaction's id.
    fn update_batch(
        &self,
        ctx: &dyn TransactionContext,
        batch_id: &str,
        reading: TelemetryReading,
    ) -> Result<String, ContractError>;

    /// Replay the key's full version history into the ordered audit view.
    fn get_history(&self, asset_id: &str) -> Result<Vec<AuditEntry>, ContractError>;
}
