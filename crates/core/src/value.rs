//! Attribute value types
//!
//! This module defines:
//! - AttributeValue: unified enum for all values a constraint attribute can carry
//! - Marker: opaque named token used for group and payload attributes
//!
//! ## Value Model
//!
//! A declarative constraint attribute carries one of six kinds:
//! Bool, Int, Float, Str, Marker, Array.
//!
//! ### Equality Rules
//!
//! - Different kinds are NEVER equal: `Int(1) != Float(1.0)`
//! - `Float` uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - `Array` equality is element-wise and order-sensitive
//!
//! Values are stored exactly as supplied and returned without coercion.
//! Whether a value matches the result kind its accessor declares is checked
//! nowhere in this crate; that is the consumer's concern.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque named token standing in for group and payload markers.
///
/// Markers are supplied by the validation and group-sequencing subsystems
/// and pass through this crate unchanged; nothing here interprets them.
/// Two markers are equal iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(String);

impl Marker {
    /// Create a marker with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The marker's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unified value type for constraint attributes
///
/// Every value that can appear on the right-hand side of a declarative
/// constraint attribute is one of these six kinds.
///
/// ## Kind Equality
///
/// Different kinds are never equal, even when they look alike:
/// - `Int(1) != Float(1.0)`
/// - `Str("A") != Marker("A")`
///
/// Float equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Opaque marker token (groups, payload)
    Marker(Marker),
    /// Ordered list of values
    Array(Vec<AttributeValue>),
}

// Custom PartialEq for IEEE-754 float semantics; kinds never cross-compare
impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Bool(a), AttributeValue::Bool(b)) => a == b,
            (AttributeValue::Int(a), AttributeValue::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (AttributeValue::Float(a), AttributeValue::Float(b)) => a == b,
            (AttributeValue::Str(a), AttributeValue::Str(b)) => a == b,
            (AttributeValue::Marker(a), AttributeValue::Marker(b)) => a == b,
            (AttributeValue::Array(a), AttributeValue::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl AttributeValue {
    /// Get the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "Bool",
            AttributeValue::Int(_) => "Int",
            AttributeValue::Float(_) => "Float",
            AttributeValue::Str(_) => "Str",
            AttributeValue::Marker(_) => "Marker",
            AttributeValue::Array(_) => "Array",
        }
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, AttributeValue::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, AttributeValue::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, AttributeValue::Float(_))
    }

    /// Check if this is a string value
    pub fn is_str(&self) -> bool {
        matches!(self, AttributeValue::Str(_))
    }

    /// Check if this is a marker value
    pub fn is_marker(&self) -> bool {
        matches!(self, AttributeValue::Marker(_))
    }

    /// Check if this is an array value
    pub fn is_array(&self) -> bool {
        matches!(self, AttributeValue::Array(_))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Str value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &Marker if this is a Marker value
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            AttributeValue::Marker(m) => Some(m),
            _ => None,
        }
    }

    /// Get as &[AttributeValue] if this is an Array value
    pub fn as_array(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Content hash of this value
    ///
    /// Equal values produce equal hashes. `-0.0` is normalized to `0.0`
    /// before hashing so the hash agrees with `PartialEq`. `NaN` values
    /// hash to their bit pattern; since `NaN != NaN` no agreement with
    /// equality is required for them.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash_into(&mut hasher);
        hasher.finish()
    }

    /// Feed this value into a hasher, kind-discriminated
    pub(crate) fn hash_into<H: Hasher>(&self, state: &mut H) {
        match self {
            AttributeValue::Bool(b) => {
                0u8.hash(state);
                b.hash(state);
            }
            AttributeValue::Int(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            AttributeValue::Float(f) => {
                // normalize -0.0 so that -0.0 == 0.0 implies equal hashes
                let normalized = if *f == 0.0 { 0.0f64 } else { *f };
                2u8.hash(state);
                normalized.to_bits().hash(state);
            }
            AttributeValue::Str(s) => {
                3u8.hash(state);
                s.hash(state);
            }
            AttributeValue::Marker(m) => {
                4u8.hash(state);
                m.hash(state);
            }
            AttributeValue::Array(items) => {
                5u8.hash(state);
                items.len().hash(state);
                for item in items {
                    item.hash_into(state);
                }
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Float(x) => write!(f, "{x}"),
            AttributeValue::Str(s) => write!(f, "{s:?}"),
            AttributeValue::Marker(m) => write!(f, "{m}"),
            AttributeValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Str(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Str(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Int(i)
    }
}

impl From<i32> for AttributeValue {
    fn from(i: i32) -> Self {
        AttributeValue::Int(i as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}

impl From<f32> for AttributeValue {
    fn from(f: f32) -> Self {
        AttributeValue::Float(f as f64)
    }
}

impl From<Marker> for AttributeValue {
    fn from(m: Marker) -> Self {
        AttributeValue::Marker(m)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(a: Vec<AttributeValue>) -> Self {
        AttributeValue::Array(a)
    }
}

impl From<Vec<Marker>> for AttributeValue {
    fn from(markers: Vec<Marker>) -> Self {
        AttributeValue::Array(markers.into_iter().map(AttributeValue::Marker).collect())
    }
}
