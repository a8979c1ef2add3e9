//! # Lifecycle State Machine
//!
//! Custody status as a closed enumeration plus the explicit transition
//! table (predecessor → operation → successor). Illegal transitions are an
//! exhaustively-matched set, not a runtime string comparison.
//!
//! ## Transition Table
//!
//! | Operation | Required predecessor | Target | Role |
//! |-----------|---------------------|--------|------|
//! | `CreateOrHarvest` | `Initiated` | `Harvested` | `Farmer` |
//! | `ManufactureProcessing` | `Harvested` | `ManufactureProcess` | `Manufacturer` |
//! | `DistributorProcessing` | `DistributionProcess` | `DistributionStarted` | `Distributor` |
//! | `FlagError` | any processing stage | `Error` | `Regulator` |
//!
//! `Initiated` and `DistributionProcess` are entered by platform tooling
//! writes, not by any contract operation; the table fixes each operation's
//! own predecessor and target only. `Error` is terminal: no operation
//! admits it as a predecessor.

use serde::{Deserialize, Serialize};

/// Custody lifecycle stage of a product record.
///
/// The wire form is a plain string; `Uninitialized` serializes as `""`
/// (the genesis placeholder). Unknown strings fail decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Genesis placeholder: record exists, lifecycle not begun.
    #[default]
    #[serde(rename = "")]
    Uninitialized,
    /// Product registered with the supply chain, awaiting harvest/creation.
    Initiated,
    /// Harvested or created by the producing party.
    Harvested,
    /// Under processing at the manufacturer.
    ManufactureProcess,
    /// Released to distribution, awaiting carrier pickup.
    DistributionProcess,
    /// In transit with the distributor.
    DistributionStarted,
    /// Terminal: flagged by a regulator. No transition leaves this state.
    Error,
}

impl Status {
    /// Stages during which a regulator may flag the record.
    pub fn is_processing_stage(self) -> bool {
        matches!(
            self,
            Status::Harvested | Status::ManufactureProcess | Status::DistributionProcess
        )
    }
}

/// Party role claimed by (and verified for) a transaction's caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Producing party (farmer / producer).
    Farmer,
    /// Manufacturing and/or packing party.
    Manufacturer,
    /// Carrier / distribution party.
    Distributor,
    /// Regulator, internal or external to the consortium.
    Regulator,
}

/// Verified identity and claims of the caller, supplied by the platform's
/// membership layer through the transaction context.
///
/// Participant ids recorded on stage stamps come from here, never from
/// constants baked into the contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Platform-verified participant identifier.
    pub id: String,
    /// Role claim checked against the transition table's policy.
    pub role: Role,
}

impl CallerIdentity {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), role }
    }
}

/// One guarded stage-transition operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOp {
    /// Producer records harvest/creation of the physical good.
    CreateOrHarvest,
    /// Manufacturer takes the good into processing.
    ManufactureProcessing,
    /// Distributor starts the distribution leg.
    DistributorProcessing,
    /// Regulator flags the record into the terminal error state.
    FlagError,
}

impl StageOp {
    /// Role authorized to perform this operation. Checked before the
    /// transition guard.
    pub const fn required_role(self) -> Role {
        match self {
            StageOp::CreateOrHarvest => Role::Farmer,
            StageOp::ManufactureProcessing => Role::Manufacturer,
            StageOp::DistributorProcessing => Role::Distributor,
            StageOp::FlagError => Role::Regulator,
        }
    }

    /// Fixed status this operation assigns on success.
    pub const fn target(self) -> Status {
        match self {
            StageOp::CreateOrHarvest => Status::Harvested,
            StageOp::ManufactureProcessing => Status::ManufactureProcess,
            StageOp::DistributorProcessing => Status::DistributionStarted,
            StageOp::FlagError => Status::Error,
        }
    }

    /// Whether `current` satisfies this operation's predecessor guard.
    ///
    /// Exact equality for the staged operations; any processing stage for
    /// `FlagError`.
    pub fn admits(self, current: Status) -> bool {
        match self {
            StageOp::CreateOrHarvest => current == Status::Initiated,
            StageOp::ManufactureProcessing => current == Status::Harvested,
            StageOp::DistributorProcessing => current == Status::DistributionProcess,
            StageOp::FlagError => current.is_processing_stage(),
        }
    }

    /// Human-readable predecessor requirement, for error reporting.
    pub const fn required_predecessor(self) -> &'static str {
        match self {
            StageOp::CreateOrHarvest => "Initiated",
            StageOp::ManufactureProcessing => "Harvested",
            StageOp::DistributorProcessing => "DistributionProcess",
            StageOp::FlagError => "Harvested|ManufactureProcess|DistributionProcess",
        }
    }
}
