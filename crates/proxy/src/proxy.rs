//! ContractProxy: the dynamic dispatch router
//!
//! ## Design
//!
//! A proxy is a pure, stateless-after-construction router closing over a
//! compiled dispatch table and a bag snapshot taken at `create()` time.
//! Later mutation of the originating builder cannot reach it, and the
//! proxy itself offers no mutation. It is `Send + Sync` and safe for
//! unsynchronized concurrent reads from any number of threads.
//!
//! An accessor call answers the stored value with no coercion. A declared
//! accessor with no stored value fails immediately with
//! [`Error::MissingAttribute`], the explicit incompleteness signal
//! distinct from any default. A name the contract never declared fails
//! with [`Error::UndeclaredAccessor`].

use crate::bag::AttributeBag;
use crate::dispatch::DispatchTable;
use redecl_core::{
    AccessorFault, AttributeValue, ContractInstance, ContractType, Error, Result, ATTR_GROUPS,
    ATTR_MESSAGE, ATTR_PAYLOAD,
};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable, contract-conformant descriptor produced by a builder
///
/// Handed opaquely to the validation engine as if it were a natively
/// declared instance. Two proxies are equal iff they share the same
/// contract type and their bags are attribute-wise equal: two
/// independently built descriptors of the same configuration compare
/// equal.
///
/// # Example
///
/// ```
/// use redecl_core::{Accessor, AttributeKind, AttributeValue, ContractType};
/// use redecl_proxy::ProxyBuilder;
///
/// let max = ContractType::new("Max", vec![Accessor::new("max", AttributeKind::Int)]);
/// let mut builder = ProxyBuilder::new(max);
/// builder.put_value("max", 10i64);
/// let proxy = builder.create().unwrap();
/// assert_eq!(proxy.get("max").unwrap(), &AttributeValue::Int(10));
/// ```
#[derive(Debug, Clone)]
pub struct ContractProxy {
    table: Arc<DispatchTable>,
    bag: AttributeBag,
}

impl ContractProxy {
    pub(crate) fn new(table: Arc<DispatchTable>, bag: AttributeBag) -> Self {
        Self { table, bag }
    }

    /// The contract type this proxy conforms to
    pub fn contract_type(&self) -> &Arc<ContractType> {
        self.table.contract()
    }

    /// Answer one accessor invocation from the bag snapshot
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAttribute`] when the accessor is declared but the
    ///   bag holds no value for it
    /// - [`Error::UndeclaredAccessor`] when the contract declares no such
    ///   accessor
    pub fn get(&self, accessor: &str) -> Result<&AttributeValue> {
        if self.table.route(accessor).is_none() {
            return Err(Error::UndeclaredAccessor {
                contract: self.contract_type().name().to_string(),
                accessor: accessor.to_string(),
            });
        }
        self.bag.get(accessor).ok_or_else(|| Error::MissingAttribute {
            contract: self.contract_type().name().to_string(),
            accessor: accessor.to_string(),
        })
    }

    /// The reserved `message` attribute
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContractProxy::get`].
    pub fn message(&self) -> Result<&AttributeValue> {
        self.get(ATTR_MESSAGE)
    }

    /// The reserved `groups` attribute
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContractProxy::get`].
    pub fn groups(&self) -> Result<&AttributeValue> {
        self.get(ATTR_GROUPS)
    }

    /// The reserved `payload` attribute
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContractProxy::get`].
    pub fn payload(&self) -> Result<&AttributeValue> {
        self.get(ATTR_PAYLOAD)
    }

    /// Iterate over the attribute names present in the snapshot
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.bag.names()
    }

    /// Number of attributes present in the snapshot
    pub fn len(&self) -> usize {
        self.bag.len()
    }

    /// Check whether the snapshot holds no attributes
    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Order-independent content hash over (contract identity, bag)
    ///
    /// Equal proxies produce equal hashes; offered as a method for
    /// deduplication because IEEE-754 float equality rules out a lawful
    /// `Eq` implementation, which `std` hash collections would require.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.contract_type().id().hash(&mut hasher);
        self.bag.content_hash().hash(&mut hasher);
        hasher.finish()
    }
}

// Value equality over (contract identity, bag contents)
impl PartialEq for ContractProxy {
    fn eq(&self, other: &Self) -> bool {
        self.contract_type().id() == other.contract_type().id() && self.bag == other.bag
    }
}

// Diagnostics only, not contractually binding. Names are sorted so the
// rendering is stable across runs.
impl fmt::Display for ContractProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(", self.contract_type().name())?;
        let mut names: Vec<&str> = self.bag.names().collect();
        names.sort_unstable();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            // names come from the bag, so the lookup cannot miss
            match self.bag.get(name) {
                Some(value) => write!(f, "{name}={value}")?,
                None => write!(f, "{name}=?")?,
            }
        }
        write!(f, ")")
    }
}

// A proxy is itself a contract-conformant instance, so it can seed a new
// builder through replication.
impl ContractInstance for ContractProxy {
    fn contract_type(&self) -> &Arc<ContractType> {
        self.table.contract()
    }

    fn read_attribute(&self, accessor: &str) -> std::result::Result<AttributeValue, AccessorFault> {
        self.get(accessor)
            .cloned()
            .map_err(|err| AccessorFault::Invocation(err.to_string()))
    }
}
