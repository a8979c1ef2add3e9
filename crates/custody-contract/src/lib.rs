//! # custody-contract
//!
//! Chain-of-custody ledger contract for physical goods (agricultural
//! products, pharmaceutical batches) moving through mutually-distrusting
//! parties: producer, manufacturer, distributor, regulator.
//!
//! ## Role in System
//!
//! - **World-State Client**: every asset is a versioned record in the
//!   hosting ledger platform's append-only, key-addressed store
//! - **Lifecycle Authority**: validates and applies custody-status
//!   transitions through an explicit transition table
//! - **Audit Projection**: replays a key's full version history into an
//!   ordered audit view
//!
//! ## Architecture
//!
//! Hexagonal layout. The `ports` module defines the seams to the hosting
//! platform (`VersionedStore`, `TransactionContext`, `TimeSource`); the
//! `domain` module owns the data model and transition rules; `service`
//! wires them into read-compute-write operations; `dispatch` maps the
//! fixed RPC surface onto typed commands.
//!
//! ## Concurrency
//!
//! Each operation is one logically atomic transaction: read current state,
//! compute the next record, write once. Conflict resolution between
//! concurrent writers to the same key is the platform's responsibility
//! (optimistic multi-version concurrency), so every operation here is
//! read-compute-write pure and safely re-executable.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{FixedTimeSource, InMemoryLedger, MemoryContext, SystemTimeSource};
    pub use crate::dispatch::Command;
    pub use crate::domain::entities::{BatchRecord, ProductRecord, TelemetryReading, Timestamp};
    pub use crate::domain::errors::ContractError;
    pub use crate::domain::history::{AuditEntry, HistoryEntry};
    pub use crate::domain::status::{CallerIdentity, Role, StageOp, Status};
    pub use crate::ports::inbound::CustodyContractApi;
    pub use crate::ports::outbound::{HistoryScan, TimeSource, TransactionContext, VersionedStore};
    pub use crate::service::CustodyContractService;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
