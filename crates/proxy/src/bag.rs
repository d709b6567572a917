//! AttributeBag: the name→value store behind a builder
//!
//! ## Design
//!
//! A bag is an ordering-irrelevant mapping from attribute name to
//! [`AttributeValue`], owned exclusively by one builder. Keys are expected
//! to be exactly the accessor names the contract later queries; that
//! expectation is the caller's responsibility and is not enforced here.
//!
//! Last write wins on duplicate `put` for the same name. Lookups for a
//! missing name answer `None`, never an error.

use redecl_core::AttributeValue;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Name→value store backing a builder and, through snapshots, a proxy
///
/// # Example
///
/// ```
/// use redecl_proxy::AttributeBag;
///
/// let mut bag = AttributeBag::new();
/// bag.put("max", 10i64);
/// assert!(bag.contains("max"));
/// assert_eq!(bag.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    entries: HashMap<String, AttributeValue>,
}

impl AttributeBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a name, overwriting any previous value
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get the stored value for a name, or `None` if absent
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Check whether a value is stored under this name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct attribute names currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored attribute names (no ordering guarantee)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs (no ordering guarantee)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clone the current contents for handing to a proxy
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Order-independent content hash of the bag
    ///
    /// Computed as a wrapping sum of per-entry hashes, so insertion order
    /// does not matter. Bags that compare equal produce equal hashes.
    pub fn content_hash(&self) -> u64 {
        let mut combined: u64 = 0;
        for (name, value) in &self.entries {
            let mut hasher = DefaultHasher::new();
            name.hash(&mut hasher);
            value.content_hash().hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        combined
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, AttributeValue)> for AttributeBag {
    fn extend<I: IntoIterator<Item = (String, AttributeValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
