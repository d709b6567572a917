//! Dispatch tables: compiled accessor routing for one contract type
//!
//! The source of truth for what a contract declares is its accessor list.
//! A `DispatchTable` is that list compiled once into a name-keyed routing
//! map, so every proxy accessor call is a single hash lookup instead of a
//! linear scan. Compilation is also where a contract's well-formedness is
//! checked: duplicate or unnamed accessors are representable on a
//! [`ContractType`] (declarative input may be malformed) and are rejected
//! here.

use redecl_core::{Accessor, ContractDefect, ContractType};
use std::collections::HashMap;
use std::sync::Arc;

/// Accessor routing map for one contract type, built once and shared
///
/// Tables are produced by [`DispatchRegistry::resolve`] and cached per
/// [`ContractId`]; proxies hold an `Arc` to the table of their contract.
///
/// [`DispatchRegistry::resolve`]: crate::DispatchRegistry::resolve
/// [`ContractId`]: redecl_core::ContractId
#[derive(Debug)]
pub struct DispatchTable {
    contract: Arc<ContractType>,
    routes: HashMap<String, usize>,
}

impl DispatchTable {
    /// Compile the routing map for a contract type
    ///
    /// # Errors
    ///
    /// Returns a [`ContractDefect`] when the accessor list is malformed:
    /// an accessor with an empty name, or two accessors sharing a name.
    pub fn compile(contract: Arc<ContractType>) -> Result<Self, ContractDefect> {
        let accessors = contract.accessors();
        let mut routes = HashMap::with_capacity(accessors.len());
        for (index, accessor) in accessors.iter().enumerate() {
            if accessor.name().is_empty() {
                return Err(ContractDefect::UnnamedAccessor);
            }
            if routes.insert(accessor.name().to_string(), index).is_some() {
                return Err(ContractDefect::DuplicateAccessor(
                    accessor.name().to_string(),
                ));
            }
        }
        Ok(Self { contract, routes })
    }

    /// The contract type this table routes for
    pub fn contract(&self) -> &Arc<ContractType> {
        &self.contract
    }

    /// Route an accessor name to its declaration, or `None` if undeclared
    pub fn route(&self, accessor: &str) -> Option<&Accessor> {
        self.routes
            .get(accessor)
            .map(|&index| &self.contract.accessors()[index])
    }

    /// Number of routed accessors
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check whether the contract declares no accessors
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
