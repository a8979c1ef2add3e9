//! Domain layer: persisted data model, lifecycle rules, audit projection.

pub mod entities;
pub mod errors;
pub mod history;
pub mod status;

pub use entities::*;
pub use errors::*;
pub use history::*;
pub use status::*;
