//! # Custody Contract Service
//!
//! The main service implementing the contract API.
//!
//! ## Architecture
//!
//! Every operation is read-compute-write: load the current record version,
//! compute the next one in memory, persist exactly once. A failed
//! operation returns before any write, so the record is never partially
//! mutated and the platform may safely discard and re-execute a
//! transaction whose read-set went stale.
//!
//! Authorization runs before the transition guard: the caller's verified
//! role must match the operation's policy first, then the status
//! predecessor is checked.

use crate::domain::entities::{BatchRecord, ProductRecord, TelemetryReading, DOC_TYPE_BATCH};
use crate::domain::errors::ContractError;
use crate::domain::history::{self, AuditEntry};
use crate::domain::status::StageOp;
use crate::ports::inbound::CustodyContractApi;
use crate::ports::outbound::{TimeSource, TransactionContext, VersionedStore};

/// The custody contract service, generic over its platform ports.
pub struct CustodyContractService<S, T>
where
    S: VersionedStore,
    T: TimeSource,
{
    store: S,
    time: T,
}

impl<S, T> CustodyContractService<S, T>
where
    S: VersionedStore,
    T: TimeSource,
{
    /// Create a service over the given world state and clock.
    pub fn new(store: S, time: T) -> Self {
        Self { store, time }
    }

    /// Access the underlying store (platform tooling, test seeding).
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_product(&self, asset_id: &str) -> Result<ProductRecord, ContractError> {
        let bytes = self
            .store
            .read(asset_id)?
            .ok_or_else(|| ContractError::NotFound {
                asset_id: asset_id.to_string(),
            })?;
        serde_json::from_slice(&bytes).map_err(|e| ContractError::decode(asset_id, e))
    }

    fn read_batch(&self, batch_id: &str) -> Result<BatchRecord, ContractError> {
        let bytes = self
            .store
            .read(batch_id)?
            .ok_or_else(|| ContractError::NotFound {
                asset_id: batch_id.to_string(),
            })?;
        serde_json::from_slice(&bytes).map_err(|e| ContractError::decode(batch_id, e))
    }

    fn persist<R: serde::Serialize>(&self, key: &str, record: &R) -> Result<(), ContractError> {
        let bytes = serde_json::to_vec(record).map_err(|e| ContractError::decode(key, e))?;
        self.store.write(key, &bytes)
    }
}

impl<S, T> CustodyContractApi for CustodyContractService<S, T>
where
    S: VersionedStore,
    T: TimeSource,
{
    fn genesis(
        &self,
        _ctx: &dyn TransactionContext,
        asset_id: &str,
        sensor_id: &str,
    ) -> Result<(), ContractError> {
        if self.store.read(asset_id)?.is_some() {
            return Err(ContractError::AlreadyExists {
                asset_id: asset_id.to_string(),
            });
        }
        let record = ProductRecord::genesis(asset_id, sensor_id);
        self.persist(asset_id, &record)?;
        tracing::info!("[custody] created product {} with sensor {}", asset_id, sensor_id);
        Ok(())
    }

    fn apply_stage(
        &self,
        ctx: &dyn TransactionContext,
        asset_id: &str,
        op: StageOp,
    ) -> Result<(), ContractError> {
        let mut record = self.read_product(asset_id)?;

        let caller = ctx.caller();
        if caller.role != op.required_role() {
            return Err(ContractError::Unauthorized {
                asset_id: asset_id.to_string(),
                required: op.required_role(),
                caller: caller.role,
            });
        }

        if !op.admits(record.status) {
            return Err(ContractError::PreconditionFailed {
                asset_id: asset_id.to_string(),
                current: record.status,
                required: op.required_predecessor(),
            });
        }

        record.stamp_stage(op, &caller.id, self.time.now());
        self.persist(asset_id, &record)?;
        tracing::info!(
            "[custody] {:?} on {} by {}: status -> {:?}",
            op,
            asset_id,
            caller.id,
            record.status
        );
        Ok(())
    }

    fn append_telemetry(
        &self,
        _ctx: &dyn TransactionContext,
        asset_id: &str,
        reading: TelemetryReading,
    ) -> Result<(), ContractError> {
        let mut record = self.read_product(asset_id)?;
        record.telemetry.push(reading);
        self.persist(asset_id, &record)?;
        tracing::info!(
            "[custody] telemetry appended to {} ({} readings)",
            asset_id,
            record.telemetry.len()
        );
        Ok(())
    }

    fn query(&self, asset_id: &str) -> Result<Vec<u8>, ContractError> {
        self.store
            .read(asset_id)?
            .ok_or_else(|| ContractError::NotFound {
                asset_id: asset_id.to_string(),
            })
    }

    fn create_batch(
        &self,
        _ctx: &dyn TransactionContext,
        mut batch: BatchRecord,
    ) -> Result<(), ContractError> {
        if batch.id.is_empty() {
            return Err(ContractError::DecodeError {
                asset_id: String::new(),
                reason: "batch id must not be empty".to_string(),
            });
        }
        if self.store.read(&batch.id)?.is_some() {
            return Err(ContractError::AlreadyExists {
                asset_id: batch.id.clone(),
            });
        }
        if batch.doc_type.is_empty() {
            batch.doc_type = DOC_TYPE_BATCH.to_string();
        }
        self.persist(&batch.id, &batch)?;
        tracing::info!("[custody] created batch {}", batch.id);
        Ok(())
    }

    fn get_batch_by_id(&self, batch_id: &str) -> Result<BatchRecord, ContractError> {
        self.read_batch(batch_id)
    }

    fn update_batch(
        &self,
        ctx: &dyn TransactionContext,
        batch_id: &str,
        reading: TelemetryReading,
    ) -> Result<String, ContractError> {
        let mut batch = self.read_batch(batch_id)?;
        batch.telemetry.push(reading);
        self.persist(batch_id, &batch)?;
        tracing::info!(
            "[custody] telemetry appended to batch {} ({} readings)",
            batch_id,
            batch.telemetry.len()
        );
        Ok(ctx.tx_id().to_string())
    }

    fn get_history(&self, asset_id: &str) -> Result<Vec<AuditEntry>, ContractError> {
        // The scan handle is dropped at the end of materialize on every
        // path, releasing the platform cursor.
        let scan = self.store.history_of(asset_id)?;
        history::materialize(asset_id, scan)
    }
}
