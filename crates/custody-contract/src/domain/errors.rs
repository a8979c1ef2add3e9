//! # Error Types
//!
//! The contract's error taxonomy. Every failure aborts the transaction and
//! surfaces to the caller without committing any state change; a failed
//! operation never partially mutates a record.

use thiserror::Error;

use super::status::{Role, Status};

/// Errors surfaced by contract operations.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wrong argument arity for an RPC function.
    #[error("missing argument for '{function}': expected {expected}, got {got}")]
    MissingArgument {
        /// RPC function name as dispatched.
        function: String,
        /// Number of positional arguments the function requires.
        expected: usize,
        /// Number of positional arguments actually supplied.
        got: usize,
    },

    /// Key absent in the world state.
    #[error("asset not found: {asset_id}")]
    NotFound {
        /// Offending asset id.
        asset_id: String,
    },

    /// Key already holds a record; genesis operations refuse to overwrite.
    #[error("asset already exists: {asset_id}")]
    AlreadyExists {
        /// Offending asset id.
        asset_id: String,
    },

    /// Stored or input bytes not valid for the expected schema.
    #[error("decode failure for '{asset_id}': {reason}")]
    DecodeError {
        /// Offending asset id, or `""` when the payload carried none.
        asset_id: String,
        /// Decoder diagnostic.
        reason: String,
    },

    /// Current status does not match the operation's required predecessor.
    #[error("precondition failed for {asset_id}: status is {current:?}, requires {required}")]
    PreconditionFailed {
        /// Offending asset id.
        asset_id: String,
        /// Status found in the current record version.
        current: Status,
        /// Predecessor the operation requires.
        required: &'static str,
    },

    /// Caller's verified role does not match the operation's policy.
    #[error("unauthorized for {asset_id}: requires {required:?}, caller is {caller:?}")]
    Unauthorized {
        /// Offending asset id.
        asset_id: String,
        /// Role the transition table demands.
        required: Role,
        /// Role the platform verified for the caller.
        caller: Role,
    },

    /// The world state rejected the persist.
    #[error("write failure for {asset_id}: {reason}")]
    WriteFailure {
        /// Offending asset id.
        asset_id: String,
        /// Store diagnostic.
        reason: String,
    },

    /// The platform's history cursor failed mid-scan.
    #[error("history scan failed for {asset_id}: {reason}")]
    HistoryFailure {
        /// Offending asset id.
        asset_id: String,
        /// Platform diagnostic.
        reason: String,
    },

    /// Dispatched function name is not part of the RPC surface.
    #[error("invalid function name: {name}")]
    UnknownFunction {
        /// The unrecognized name.
        name: String,
    },
}

impl ContractError {
    /// Decode failure helper keeping call sites terse.
    pub fn decode(asset_id: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ContractError::DecodeError {
            asset_id: asset_id.into(),
            reason: err.to_string(),
        }
    }
}
