//! Ordered property → raw value mappings.
//!
//! A [`DeclarationSet`] is what a stylesheet rule holds and what resolution
//! produces. Values stay raw strings until a codec decodes them, so one bad
//! value never affects its neighbours.
//!
//! # Merging
//!
//! Merging is last-wins per key: a key already present keeps its position and
//! takes the new value, new keys are appended.
//!
//! ```rust
//! use viewcss::style::DeclarationSet;
//!
//! let mut base = DeclarationSet::from_pairs([("background-color", "red"), ("color", "#00FF00FF")]);
//! base.merge(&DeclarationSet::from_pairs([("color", "#0000FFFF")]));
//!
//! assert_eq!(base.get("background-color"), Some("red"));
//! assert_eq!(base.get("color"), Some("#0000FFFF"));
//! ```

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping from property name to raw value.
///
/// Equality ignores order: two sets are equal when they hold the same keys
/// with the same values.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    entries: Vec<(String, String)>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from pairs, later duplicates overwriting earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.insert(key, value);
        }
        set
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Merges `other` on top of `self`; `other` wins on shared keys.
    pub fn merge(&mut self, other: &DeclarationSet) {
        for (key, value) in &other.entries {
            self.insert(key.as_str(), value.as_str());
        }
    }

    /// Returns a new set with `other` merged on top of `self`.
    pub fn merged(&self, other: &DeclarationSet) -> DeclarationSet {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DeclarationSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for DeclarationSet {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DeclarationSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DeclarationSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for DeclarationSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for DeclarationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeclarationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DeclarationSetVisitor)
    }
}

struct DeclarationSetVisitor;

impl<'de> Visitor<'de> for DeclarationSetVisitor {
    type Value = DeclarationSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of CSS property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = DeclarationSet::new();
        while let Some((key, value)) = access.next_entry::<String, RawValue>()? {
            match value.0 {
                Some(value) => {
                    set.insert(key, value);
                }
                None => log::warn!("skipping property '{}': value is not a scalar", key),
            }
        }
        Ok(set)
    }
}

/// A declaration value as written in YAML/JSON.
///
/// Numbers and booleans are accepted and kept in their textual form, so
/// `text-shadow-opacity: 0.5` works without quoting. Nulls, sequences and
/// nested mappings decode to `None`.
struct RawValue(Option<String>);

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Str(String),
            Int(i64),
            Float(f64),
            Bool(bool),
            Other(IgnoredAny),
        }

        Ok(RawValue(match Scalar::deserialize(deserializer)? {
            Scalar::Str(s) => Some(s),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(n) => Some(n.to_string()),
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Other(_) => None,
        }))
    }
}
