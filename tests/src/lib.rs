//! # Custody-Chain Test Suite
//!
//! Unified test crate covering the contract end-to-end against the
//! in-memory ledger adapter.
//!
//! ## Structure
//!
//! ```text
//! tests/src/integration/
//! ├── lifecycle.rs   # staged transitions, role policy, failure policy
//! ├── telemetry.rs   # append-only sensor trail
//! ├── batch.rs       # regulated-batch variant
//! ├── history.rs     # audit reconstruction, tombstones
//! └── dispatch.rs    # RPC framing end-to-end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p custody-tests
//! cargo test -p custody-tests integration::lifecycle
//! ```

#![allow(dead_code)]

pub mod integration;
