//! Integration scenarios and shared fixtures.

pub mod batch;
pub mod telemetry;

use custody_contract::prelude::*;

/// Pinned clock used across scenarios so stage stamps are assertable.
pub const TEST_TIME: Timestamp = 1_650_000_000;

/// Fresh service over an empty in-memory ledger and a pinned clock.
pub fn service() -> CustodyContractService<InMemoryLedger, FixedTimeSource> {
    CustodyContractService::new(InMemoryLedger::new(), FixedTimeSource(TEST_TIME))
}

/// Transaction context for a caller with the given verified role.
pub fn ctx(id: &str, role: Role) -> MemoryContext {
    MemoryContext::new(CallerIdentity::new(id, role))
}

/// Write a product version with the given status straight to the store,
/// the way platform tooling seeds lifecycle predecessors.
pub fn seed_product(
    svc: &CustodyContractService<InMemoryLedger, FixedTimeSource>,
    asset_id: &str,
    status: Status,
) {
    let mut record = ProductRecord::genesis(asset_id, "S1");
    record.status = status;
    let bytes = serde_json::to_vec(&record).expect("encode seeded record");
    svc.store().write(asset_id, &bytes).expect("seed write");
}

/// Decode the current product version under `asset_id`.
pub fn product(
    svc: &CustodyContractService<InMemoryLedger, FixedTimeSource>,
    asset_id: &str,
) -> ProductRecord {
    let bytes = svc.query(asset_id).expect("query");
    serde_json::from_slice(&bytes).expect("decode product")
}

/// Opt-in log capture for debugging a failing scenario.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
