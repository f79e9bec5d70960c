//! Ordered map types for the document model.
//!
//! This module provides [`IniMap`] and [`SectionMap`], thin wrappers around
//! [`IndexMap`] that maintain insertion order. Order matters here: the
//! document serializes its entries in the order they were first assigned, so
//! a file read, tweaked, and written back keeps its original layout.
//!
//! ## Why IndexMap?
//!
//! A plain `HashMap` would lose the file's line order and make output
//! nondeterministic. `IndexMap` gives:
//!
//! - **Deterministic output**: entries render in a consistent order
//! - **Faithful round-trips**: parse then serialize preserves layout
//! - **Predictable tests**: no order-dependent flakiness
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{Entry, IniMap, Value};
//!
//! let mut root = IniMap::new();
//! root.insert("name".to_string(), Entry::Scalar(Value::from("tool")));
//! root.insert("retries".to_string(), Entry::Scalar(Value::Int(3)));
//!
//! let keys: Vec<_> = root.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "retries"]);
//! ```

use crate::value::{Entry, Value};
use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// The document root: an ordered map of keys to [`Entry`] slots.
///
/// Top-level keys and section names share this one namespace. Scalar entries
/// hold a [`Value`] directly; section entries hold a nested [`SectionMap`].
///
/// # Examples
///
/// ```rust
/// use ini_doc::{Entry, IniMap, Value};
///
/// let mut root = IniMap::new();
/// root.insert("x".to_string(), Entry::Scalar(Value::Int(1)));
/// root.section_mut("[a]").insert("y".to_string(), Value::Int(2));
///
/// assert_eq!(root.len(), 2);
/// assert!(root.get("[a]").is_some_and(|e| e.is_section()));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, Entry>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-entry pair into the map.
    ///
    /// If the map already contained this key, the old entry is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        self.0.insert(key, entry)
    }

    /// Returns a reference to the entry corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the entry corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.0.get_mut(key)
    }

    /// Returns the nested section map for `key`, inserting an empty section
    /// if the key is absent.
    ///
    /// A key holds either a scalar or a section, never both, so an existing
    /// scalar at `key` is replaced by a fresh section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{IniMap, Value};
    ///
    /// let mut root = IniMap::new();
    /// root.section_mut("[auth]").insert("token".to_string(), Value::from("abc"));
    /// assert_eq!(root.get("[auth]").and_then(|e| e.as_section()).map(|s| s.len()), Some(1));
    /// ```
    pub fn section_mut(&mut self, key: impl Into<String>) -> &mut SectionMap {
        let slot = self
            .0
            .entry(key.into())
            .or_insert_with(|| Entry::Section(SectionMap::new()));
        if slot.is_scalar() {
            *slot = Entry::Section(SectionMap::new());
        }
        let Entry::Section(section) = slot else {
            unreachable!()
        };
        section
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, preserving the order of remaining entries.
    pub fn shift_remove(&mut self, key: &str) -> Option<Entry> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Entry> {
        self.0.keys()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Entry> {
        self.0.values()
    }

    /// Returns an iterator over the key-entry pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.0.iter()
    }
}

impl From<HashMap<String, Entry>> for IniMap {
    fn from(map: HashMap<String, Entry>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl IntoIterator for IniMap {
    type Item = (String, Entry);
    type IntoIter = indexmap::map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Entry)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for IniMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IniMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IniMapVisitor;

        impl<'de> Visitor<'de> for IniMapVisitor {
            type Value = IniMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of scalars and sections")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut root = IniMap::new();
                while let Some((key, entry)) = map.next_entry()? {
                    root.insert(key, entry);
                }
                Ok(root)
            }
        }

        deserializer.deserialize_map(IniMapVisitor)
    }
}

/// The key/value map inside one section.
///
/// Sections hold scalars only; there is no deeper nesting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionMap(IndexMap<String, Value>);

impl SectionMap {
    /// Creates an empty `SectionMap`.
    #[must_use]
    pub fn new() -> Self {
        SectionMap(IndexMap::new())
    }

    /// Inserts a key-value pair into the section.
    ///
    /// If the section already contained this key, the old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the section contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the section, preserving the order of remaining keys.
    pub fn shift_remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of keys in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the section, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the section, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the section, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for SectionMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for SectionMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SectionMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for SectionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
