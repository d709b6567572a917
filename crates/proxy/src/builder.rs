//! ProxyBuilder: accumulates attribute values for a contract type
//!
//! ## Design
//!
//! One builder is created per constraint occurrence the mapping parser
//! encounters, populated incrementally, then asked for proxies. The
//! builder holds exactly one contract type reference (immutable after
//! construction) and exclusively owns one attribute bag (mutable for the
//! builder's lifetime).
//!
//! `create()` may be called repeatedly; each call produces an independent
//! proxy over a snapshot of the bag at call time. Dispatch is resolved
//! through the registry handle the builder captured at construction, the
//! builder's own loading context, never through anything the caller of
//! `create()` supplies, so proxy identity and dispatch behavior stay
//! consistent no matter which component asks.
//!
//! A builder is populated by one thread before `create()`; mutation takes
//! `&mut self`, so concurrent mutation of a shared builder is rejected at
//! compile time.

use crate::bag::AttributeBag;
use crate::proxy::ContractProxy;
use crate::registry::DispatchRegistry;
use redecl_core::{
    AccessorFault, AttributeValue, ContractInstance, ContractType, Error, Marker, Result,
    ATTR_GROUPS, ATTR_MESSAGE, ATTR_PAYLOAD,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Mutable accumulator assembling an attribute bag for one contract type
///
/// # Example
///
/// ```
/// use redecl_core::{Accessor, AttributeKind, ContractType, Marker};
/// use redecl_proxy::ProxyBuilder;
///
/// let size = ContractType::constraint(
///     "Size",
///     vec![
///         Accessor::new("min", AttributeKind::Int),
///         Accessor::new("max", AttributeKind::Int),
///     ],
/// );
/// let mut builder = ProxyBuilder::new(size);
/// builder.put_value("min", 1i64);
/// builder.put_value("max", 10i64);
/// builder.set_message("must be sized");
/// builder.set_groups(vec![]);
/// builder.set_payload(vec![]);
/// let proxy = builder.create().unwrap();
/// assert_eq!(proxy.get("max").unwrap().as_int(), Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct ProxyBuilder {
    contract: Arc<ContractType>,
    bag: AttributeBag,
    registry: DispatchRegistry,
}

impl ProxyBuilder {
    /// Create a builder with an empty bag bound to `contract`
    pub fn new(contract: Arc<ContractType>) -> Self {
        Self {
            contract,
            bag: AttributeBag::new(),
            registry: DispatchRegistry::global(),
        }
    }

    /// Create a builder pre-populated with a copy of `values`
    ///
    /// The mapping is copied entry by entry; the builder's bag never
    /// aliases the caller's map.
    pub fn with_values(contract: Arc<ContractType>, values: HashMap<String, AttributeValue>) -> Self {
        let mut builder = Self::new(contract);
        builder.bag.extend(values);
        builder
    }

    /// Create a builder seeded by replicating an existing instance
    ///
    /// Infers the contract type from the instance, walks every declared
    /// accessor, and stores name→result. A read denied under plain access
    /// is retried with elevated access before failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Replication`] naming the offending accessor and
    /// the source instance when any accessor read fails, stays denied
    /// even elevated, or rejects its argument list.
    pub fn replicate(instance: &dyn ContractInstance) -> Result<Self> {
        let contract = instance.contract_type().clone();
        let mut bag = AttributeBag::new();
        for accessor in contract.accessors() {
            let value = match instance.read_attribute(accessor.name()) {
                Ok(value) => value,
                Err(AccessorFault::Denied) => instance
                    .read_attribute_elevated(accessor.name())
                    .map_err(|fault| Error::Replication {
                        instance: instance.describe(),
                        accessor: accessor.name().to_string(),
                        fault,
                    })?,
                Err(fault) => {
                    return Err(Error::Replication {
                        instance: instance.describe(),
                        accessor: accessor.name().to_string(),
                        fault,
                    })
                }
            };
            bag.put(accessor.name(), value);
        }
        Ok(Self {
            contract,
            bag,
            registry: DispatchRegistry::global(),
        })
    }

    /// Swap in a non-global dispatch registry
    ///
    /// For isolated configuration scopes and tests. The handle becomes
    /// the builder's loading context for every subsequent `create()`.
    pub fn with_registry(mut self, registry: DispatchRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Store a value under an attribute name, overwriting unconditionally
    ///
    /// No check is made that the value matches the kind the accessor
    /// declares; that check belongs to the consumer.
    pub fn put_value(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.bag.put(name, value);
    }

    /// The stored value for `name`, or `None` if absent
    pub fn value(&self, name: &str) -> Option<&AttributeValue> {
        self.bag.get(name)
    }

    /// Check whether a value is stored under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.bag.contains(name)
    }

    /// Number of distinct attribute names currently stored
    pub fn len(&self) -> usize {
        self.bag.len()
    }

    /// Check whether no attributes are stored yet
    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// The contract type this builder is bound to
    pub fn contract_type(&self) -> &Arc<ContractType> {
        &self.contract
    }

    /// Set the reserved `message` attribute
    ///
    /// Identical to `put_value("message", text)`.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.put_value(ATTR_MESSAGE, text.into());
    }

    /// Set the reserved `groups` attribute
    ///
    /// Identical to `put_value("groups", markers)`.
    pub fn set_groups(&mut self, markers: Vec<Marker>) {
        self.put_value(ATTR_GROUPS, markers);
    }

    /// Set the reserved `payload` attribute
    ///
    /// Identical to `put_value("payload", markers)`.
    pub fn set_payload(&mut self, markers: Vec<Marker>) {
        self.put_value(ATTR_PAYLOAD, markers);
    }

    /// Produce a proxy over the current bag contents
    ///
    /// Each call snapshots the bag, so proxies already handed out are
    /// unaffected by later mutation of this builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`] wrapping the underlying
    /// [`ContractDefect`](redecl_core::ContractDefect) when the
    /// contract's dispatch table cannot be compiled.
    pub fn create(&self) -> Result<ContractProxy> {
        let table = self
            .registry
            .resolve(&self.contract)
            .map_err(|defect| Error::Instantiation {
                contract: self.contract.name().to_string(),
                defect,
            })?;
        Ok(ContractProxy::new(table, self.bag.snapshot()))
    }
}
