//! Adapters: in-memory implementations of the outbound ports, used by the
//! test suite and by hosts embedding the contract without a real ledger.

pub mod memory_ledger;

pub use memory_ledger::*;
