//! Attribute-bag builders and dynamic dispatch proxies
//!
//! This crate is the machinery that reconstructs declarative constraint
//! descriptors at runtime: a [`ProxyBuilder`] accumulates named attribute
//! values for a [`ContractType`], optionally seeded by replicating an
//! existing conformant instance, and produces immutable
//! [`ContractProxy`] objects that answer accessor calls from the
//! accumulated bag.
//!
//! # Quick Start
//!
//! ```
//! use redecl_core::{Accessor, AttributeKind, ContractType};
//! use redecl_proxy::ProxyBuilder;
//!
//! let size = ContractType::constraint(
//!     "Size",
//!     vec![
//!         Accessor::new("min", AttributeKind::Int),
//!         Accessor::new("max", AttributeKind::Int),
//!     ],
//! );
//!
//! let mut builder = ProxyBuilder::new(size);
//! builder.put_value("min", 1i64);
//! builder.put_value("max", 10i64);
//! builder.set_message("must be sized");
//! builder.set_groups(vec![]);
//! builder.set_payload(vec![]);
//!
//! let proxy = builder.create().unwrap();
//! assert_eq!(proxy.get("min").unwrap().as_int(), Some(1));
//! ```
//!
//! # Architecture
//!
//! - `bag`: the name→value store a builder owns
//! - `builder`: accumulation, replication seeding, proxy production
//! - `dispatch`: per-contract compiled accessor routing
//! - `registry`: the process-wide (and injectable) dispatch-table cache
//! - `proxy`: the immutable dispatch router handed to the validation engine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bag;
pub mod builder;
pub mod dispatch;
pub mod proxy;
pub mod registry;

pub use bag::AttributeBag;
pub use builder::ProxyBuilder;
pub use dispatch::DispatchTable;
pub use proxy::ContractProxy;
pub use registry::DispatchRegistry;

// Re-export the core data model so downstream users need one import path
pub use redecl_core::{
    Accessor, AccessorFault, AttributeKind, AttributeValue, ContractDefect, ContractId,
    ContractInstance, ContractType, Error, Marker, Result, ATTR_GROUPS, ATTR_MESSAGE, ATTR_PAYLOAD,
};
