//! Core types and traits for redecl
//!
//! This crate defines the foundational types used throughout the system:
//! - AttributeValue: unified value enum for constraint attributes
//! - Marker: opaque group/payload marker token
//! - ContractType / ContractId: descriptors of declared constraint interfaces
//! - Accessor / AttributeKind: declared zero-argument accessors
//! - Error: error type hierarchy
//! - ContractInstance: trait for contract-conformant objects
//!
//! The machinery that assembles attribute bags and produces dispatch
//! proxies lives in `redecl-proxy`; this crate holds only the data model
//! those pieces agree on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod traits;
pub mod value;

// Re-export commonly used types and traits
pub use contract::{
    Accessor, AttributeKind, ContractId, ContractType, ATTR_GROUPS, ATTR_MESSAGE, ATTR_PAYLOAD,
};
pub use error::{AccessorFault, ContractDefect, Error, Result};
pub use traits::ContractInstance;
pub use value::{AttributeValue, Marker};
