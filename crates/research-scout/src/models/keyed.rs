//! Insertion-ordered name → value map serialized as a JSON object.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Values keyed by researcher name, kept in the order names were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameKeyed<T> {
    entries: Vec<(String, T)>,
}

impl<T> NameKeyed<T> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a value. A repeated name replaces the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value for a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Mutable entries in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut T)> {
        self.entries.iter_mut().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for NameKeyed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for NameKeyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, v)| (n, v)))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NameKeyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
            type Value = NameKeyed<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by researcher name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut keyed = NameKeyed::new();
                while let Some((name, value)) = map.next_entry::<String, T>()? {
                    keyed.insert(name, value);
                }
                Ok(keyed)
            }
        }

        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut keyed = NameKeyed::new();
        keyed.insert("Zoe", 1);
        keyed.insert("Adam", 2);

        let json = serde_json::to_string(&keyed).unwrap();
        assert_eq!(json, r#"{"Zoe":1,"Adam":2}"#);
    }

    #[test]
    fn test_repeated_name_replaces_in_place() {
        let mut keyed = NameKeyed::new();
        keyed.insert("Zoe", 1);
        keyed.insert("Adam", 2);
        keyed.insert("Zoe", 3);

        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed.get("Zoe"), Some(&3));
        assert_eq!(keyed.names().collect::<Vec<_>>(), vec!["Zoe", "Adam"]);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let keyed: NameKeyed<String> =
            serde_json::from_str(r#"{"b": "x", "a": "y", "c": "z"}"#).unwrap();
        assert_eq!(keyed.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<NameKeyed<i32>>("[1, 2]").is_err());
    }
}
