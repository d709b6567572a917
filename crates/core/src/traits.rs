//! Core trait for contract conformance
//!
//! `ContractInstance` is the seam between this crate and anything claiming
//! to satisfy a contract type: hand-written descriptor types, and the
//! proxies this system itself produces. Replication reads every declared
//! accessor off an instance through this trait.

use crate::contract::ContractType;
use crate::error::AccessorFault;
use crate::value::AttributeValue;
use std::sync::Arc;

/// An object conforming to a contract type
///
/// Implementations answer each declared accessor by name. The contract
/// type reference returned by `contract_type` governs which accessor names
/// replication will ask for.
///
/// # Elevated reads
///
/// `read_attribute_elevated` exists for implementations that sit behind an
/// access barrier: replication falls back to it when the plain read is
/// denied. The default simply delegates to `read_attribute`; there is no
/// ambient sandbox here to bypass.
pub trait ContractInstance {
    /// The contract type this instance conforms to
    fn contract_type(&self) -> &Arc<ContractType>;

    /// Read the value of one declared accessor
    ///
    /// # Errors
    ///
    /// Returns an [`AccessorFault`] when the read fails, is denied, or the
    /// accessor rejects its (empty) argument list.
    fn read_attribute(&self, accessor: &str) -> std::result::Result<AttributeValue, AccessorFault>;

    /// Read the value of one declared accessor, bypassing access barriers
    ///
    /// # Errors
    ///
    /// Returns an [`AccessorFault`] when the read fails even with elevated
    /// access.
    fn read_attribute_elevated(
        &self,
        accessor: &str,
    ) -> std::result::Result<AttributeValue, AccessorFault> {
        self.read_attribute(accessor)
    }

    /// Human-readable identification of this instance for error messages
    fn describe(&self) -> String {
        format!("@{}", self.contract_type().name())
    }
}
