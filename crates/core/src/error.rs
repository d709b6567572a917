//! Error types for contract reconstruction
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! ## Propagation policy
//!
//! None of these errors are recovered internally. Each is terminal for the
//! operation that raised it and is surfaced unchanged to the immediate
//! caller: no silent defaulting, no partial results, and no re-wrapping of
//! an `Error` that already passed through a call chain.

use thiserror::Error;

/// Result type alias for contract reconstruction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cause of a failed accessor read during replication
///
/// Accessors are zero-argument, so `InvalidArguments` indicates the source
/// instance violated its own contract rather than a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessorFault {
    /// The accessor invocation itself failed
    #[error("invocation failed: {0}")]
    Invocation(String),

    /// The accessor stayed inaccessible, even under elevation
    #[error("access denied")]
    Denied,

    /// The accessor rejected its (empty) argument list
    #[error("accessor rejected arguments")]
    InvalidArguments,
}

/// Defect in a contract type's accessor list
///
/// Detected when a dispatch table is compiled for the contract, not when
/// the contract type is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractDefect {
    /// Two accessors were declared with the same name
    #[error("duplicate accessor `{0}` declared")]
    DuplicateAccessor(String),

    /// An accessor was declared with an empty name
    #[error("accessor with empty name declared")]
    UnnamedAccessor,
}

/// Error types for contract reconstruction
#[derive(Debug, Error)]
pub enum Error {
    /// Seeding a builder from an existing contract instance failed
    #[error("cannot replicate {instance}: accessor `{accessor}` {fault}")]
    Replication {
        /// Description of the source instance
        instance: String,
        /// Name of the offending accessor
        accessor: String,
        /// What went wrong with the read
        #[source]
        fault: AccessorFault,
    },

    /// A proxy could not be produced for the configured contract
    #[error("unable to create descriptor for contract `{contract}`")]
    Instantiation {
        /// Name of the contract being instantiated
        contract: String,
        /// The underlying construction failure
        #[source]
        defect: ContractDefect,
    },

    /// A declared accessor was invoked with no value bound for it
    #[error("no value bound for accessor `{accessor}` of contract `{contract}`")]
    MissingAttribute {
        /// Name of the contract
        contract: String,
        /// Name of the unanswered accessor
        accessor: String,
    },

    /// An accessor was invoked that the contract never declared
    #[error("contract `{contract}` declares no accessor `{accessor}`")]
    UndeclaredAccessor {
        /// Name of the contract
        contract: String,
        /// Name of the unknown accessor
        accessor: String,
    },
}
