//! Contract model
//!
//! Types describing what a reconstructed constraint descriptor must
//! conform to:
//!
//! - `accessor`: declared zero-argument accessors and their result kinds
//! - `contract_type`: the contract descriptor itself plus its identity
//!
//! ## Reserved attribute names
//!
//! Every constraint contract carries three conventional attributes:
//! `message`, `groups`, `payload`. They are ordinary attributes with no
//! structural difference from any other, but convenience setters exist
//! for them on the builder, and [`ContractType::constraint`] appends their
//! accessor declarations automatically.

pub mod accessor;
pub mod contract_type;

/// Reserved attribute name for the human-readable violation message
pub const ATTR_MESSAGE: &str = "message";

/// Reserved attribute name for the group markers
pub const ATTR_GROUPS: &str = "groups";

/// Reserved attribute name for the payload markers
pub const ATTR_PAYLOAD: &str = "payload";

// Re-exports
pub use accessor::{Accessor, AttributeKind};
pub use contract_type::{ContractId, ContractType};
