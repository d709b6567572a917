//! Accessor declarations
//!
//! A contract type is a fixed set of named, zero-argument accessors. Each
//! accessor declares the kind of value it results in. Declared kinds are
//! carried for introspection and diagnostics only: nothing in this crate
//! checks a supplied value against the kind its accessor declares. That
//! check belongs to the consumer.

use serde::{Deserialize, Serialize};

/// The declared result kind of an accessor
///
/// One variant per [`AttributeValue`](crate::AttributeValue) kind. Used for
/// introspection and diagnostics; never enforced against supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Boolean result
    Bool,
    /// 64-bit signed integer result
    Int,
    /// 64-bit floating point result
    Float,
    /// UTF-8 string result
    Str,
    /// Opaque marker result
    Marker,
    /// List-of-values result
    Array,
}

impl AttributeKind {
    /// All attribute kinds (for iteration)
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Bool,
        AttributeKind::Int,
        AttributeKind::Float,
        AttributeKind::Str,
        AttributeKind::Marker,
        AttributeKind::Array,
    ];

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            AttributeKind::Bool => "Bool",
            AttributeKind::Int => "Int",
            AttributeKind::Float => "Float",
            AttributeKind::Str => "Str",
            AttributeKind::Marker => "Marker",
            AttributeKind::Array => "Array",
        }
    }

    /// Short identifier (for serialization, diagnostics)
    pub const fn id(&self) -> &'static str {
        match self {
            AttributeKind::Bool => "bool",
            AttributeKind::Int => "int",
            AttributeKind::Float => "float",
            AttributeKind::Str => "str",
            AttributeKind::Marker => "marker",
            AttributeKind::Array => "array",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "bool" => Some(AttributeKind::Bool),
            "int" => Some(AttributeKind::Int),
            "float" => Some(AttributeKind::Float),
            "str" => Some(AttributeKind::Str),
            "marker" => Some(AttributeKind::Marker),
            "array" => Some(AttributeKind::Array),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A declared zero-argument accessor of a contract type
///
/// Pairs the accessor's name with its declared result kind. Accessor names
/// are unique within a contract type; the uniqueness check happens when the
/// contract's dispatch table is compiled, not at declaration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accessor {
    name: String,
    kind: AttributeKind,
}

impl Accessor {
    /// Declare an accessor with the given name and result kind
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The accessor's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accessor's declared result kind
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }
}

impl std::fmt::Display for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(): {}", self.name, self.kind)
    }
}

// ============================================================================
// Tests
// ============================================================================
