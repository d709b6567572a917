//! Dispatch-table registry: the process-wide compiled-dispatch cache
//!
//! Compiling a dispatch table is cheap but repeated, so tables are cached
//! per contract identity. The cache is reuse-only: every `create()` for
//! the same contract shares one table while each proxy keeps its own bag
//! snapshot, and correctness never depends on a cache hit.
//!
//! A registry handle is cheap to clone (the map is shared behind an
//! `Arc`). Builders capture a handle at construction (their own loading
//! context), so dispatch resolution behaves identically no matter which
//! component asks for the proxy. The default process-wide registry is
//! reachable through [`DispatchRegistry::global`]; isolated contexts
//! (tests, sandboxed configuration scopes) construct their own.

use crate::dispatch::DispatchTable;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use redecl_core::{ContractDefect, ContractId, ContractType};
use std::sync::Arc;
use tracing::debug;

/// Process-wide default registry
static GLOBAL: Lazy<DispatchRegistry> = Lazy::new(DispatchRegistry::new);

/// Cache of compiled dispatch tables, keyed by contract identity
///
/// # Example
///
/// ```
/// use redecl_core::ContractType;
/// use redecl_proxy::DispatchRegistry;
///
/// let registry = DispatchRegistry::new();
/// let contract = ContractType::new("Bare", vec![]);
/// let first = registry.resolve(&contract).unwrap();
/// let second = registry.resolve(&contract).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchRegistry {
    tables: Arc<DashMap<ContractId, Arc<DispatchTable>>>,
}

impl DispatchRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the process-wide default registry
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Resolve the dispatch table for a contract, compiling on first use
    ///
    /// Concurrent resolvers may compile the same table twice; one copy
    /// wins the cache slot and both callers receive a usable table.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractDefect`] when the contract's accessor list
    /// fails to compile. Failed compilations are not cached.
    pub fn resolve(&self, contract: &Arc<ContractType>) -> Result<Arc<DispatchTable>, ContractDefect> {
        if let Some(table) = self.tables.get(&contract.id()) {
            return Ok(Arc::clone(table.value()));
        }
        let table = Arc::new(DispatchTable::compile(contract.clone())?);
        debug!(
            target: "redecl::dispatch",
            contract = %contract.name(),
            accessors = table.len(),
            "compiled dispatch table"
        );
        Ok(self
            .tables
            .entry(contract.id())
            .or_insert(table)
            .value()
            .clone())
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check whether the registry holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
