//! Contract type descriptors
//!
//! A `ContractType` is an externally defined description of a declared
//! interface: a name plus a fixed, registered list of zero-argument
//! accessors. The accessor list is registered at the point the contract
//! type is defined; nothing is discovered by introspection later.
//!
//! Contract types are shared: constructors hand out `Arc<ContractType>`,
//! and everything downstream (builders, proxies, the dispatch cache) holds
//! that `Arc`. Identity is the `ContractId` assigned at construction, so
//! two separately constructed contract types never compare equal even when
//! their names and accessor lists coincide.

use super::accessor::{Accessor, AttributeKind};
use super::{ATTR_GROUPS, ATTR_MESSAGE, ATTR_PAYLOAD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identity of a contract type
///
/// Wrapper around a UUID v4 assigned when the contract type is constructed.
/// This is the key of the dispatch-table cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(Uuid);

impl ContractId {
    /// Create a new random ContractId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally defined descriptor of a declared constraint interface
///
/// Holds the contract's name and its fixed accessor list. Construction is
/// cheap and performs no validation; well-formedness (no duplicate or
/// unnamed accessors) is checked when a dispatch table is compiled for the
/// contract.
///
/// # Example
///
/// ```
/// use redecl_core::{Accessor, AttributeKind, ContractType};
///
/// let size = ContractType::constraint(
///     "Size",
///     vec![
///         Accessor::new("min", AttributeKind::Int),
///         Accessor::new("max", AttributeKind::Int),
///     ],
/// );
/// assert!(size.declares("max"));
/// assert!(size.declares("message")); // appended by `constraint`
/// ```
#[derive(Debug)]
pub struct ContractType {
    id: ContractId,
    name: String,
    accessors: Vec<Accessor>,
}

impl ContractType {
    /// Define a contract type with exactly the given accessors
    pub fn new(name: impl Into<String>, accessors: Vec<Accessor>) -> Arc<Self> {
        Arc::new(Self {
            id: ContractId::new(),
            name: name.into(),
            accessors,
        })
    }

    /// Define a constraint contract type
    ///
    /// Appends the three reserved accessors every constraint contract
    /// carries: `message(): Str`, `groups(): Array`, `payload(): Array`.
    pub fn constraint(name: impl Into<String>, mut accessors: Vec<Accessor>) -> Arc<Self> {
        accessors.push(Accessor::new(ATTR_MESSAGE, AttributeKind::Str));
        accessors.push(Accessor::new(ATTR_GROUPS, AttributeKind::Array));
        accessors.push(Accessor::new(ATTR_PAYLOAD, AttributeKind::Array));
        Self::new(name, accessors)
    }

    /// The contract's identity
    pub fn id(&self) -> ContractId {
        self.id
    }

    /// The contract's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared accessors, in declaration order
    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Look up a declared accessor by name
    ///
    /// Linear scan; dispatch-hot paths go through a compiled dispatch
    /// table instead.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.name() == name)
    }

    /// Check whether the contract declares an accessor with this name
    pub fn declares(&self, name: &str) -> bool {
        self.accessor(name).is_some()
    }
}

// Identity equality: a contract type is equal only to itself
impl PartialEq for ContractType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContractType {}

impl std::hash::Hash for ContractType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================
