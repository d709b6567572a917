//! redecl - Runtime reconstruction of declarative constraint descriptors
//!
//! When constraint declarations live in external configuration (an XML
//! mapping file, say) instead of compiled-in metadata, something has to
//! turn parsed name→value pairs back into immutable, contract-conformant
//! descriptor objects. That something is this crate: a [`ProxyBuilder`]
//! accumulates attribute values for a [`ContractType`] and produces
//! [`ContractProxy`] instances the validation engine consumes as if they
//! were natively declared.
//!
//! # Quick Start
//!
//! ```
//! use redecl::{Accessor, AttributeKind, ContractType, ProxyBuilder};
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
//! let descriptor = builder.create()?;
//! assert_eq!(descriptor.get("max")?.as_int(), Some(10));
//! # Ok::<(), redecl::Error>(())
//! ```
//!
//! # Architecture
//!
//! The data model (values, contract types, errors, the conformance
//! trait) lives in `redecl-core`; the machinery (bags, builders,
//! dispatch tables, proxies) lives in `redecl-proxy`. This crate
//! re-exports the public surface of both.

// Re-export the public API from redecl-proxy (which re-exports the core
// data model)
pub use redecl_proxy::*;
