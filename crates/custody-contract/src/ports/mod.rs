//! Ports: the seams between the contract and its hosting platform.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
