//! The ordered JSON object.
//!
//! This module provides [`Document`], an ordered mapping from string keys to
//! [`Slot`]s. Field order is first-insertion order and is preserved through
//! reassignment and merges, so render output is deterministic.
//!
//! A `Document` owns its children outright: embedding one document into
//! another copies (or moves) the whole subtree, so no two documents ever
//! share mutable state.
//!
//! ## Examples
//!
//! ```rust
//! use json_scribe::Document;
//!
//! let mut root = Document::new();
//! root.field("name").set("Bob");
//! root.field("age").set(44);
//!
//! let mut address = Document::new();
//! address.field("planet").set("Earth");
//! root.field("address").set(address);
//!
//! assert_eq!(
//!     root.to_compact().unwrap(),
//!     r#"{"name":"Bob","age":44,"address":{"planet":"Earth"}}"#
//! );
//! ```

use crate::error::Result;
use crate::slot::Slot;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io;
use std::ops::AddAssign;

/// An ordered sequence of `(key, Slot)` pairs; the JSON object abstraction.
///
/// Lookup is a linear scan, acceptable at the document sizes this builder
/// targets. A hash index would have to preserve both iteration order and the
/// duplicate keys a merge can introduce, so the pair vector is the
/// representation, not an implementation detail.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    fields: Vec<(String, Slot)>,
}

impl Document {
    /// Creates an empty document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_scribe::Document;
    ///
    /// let document = Document::new();
    /// assert!(document.is_empty());
    /// assert_eq!(document.to_compact().unwrap(), "{}");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Document { fields: Vec::new() }
    }

    /// Returns a mutable reference to the slot for `key`, creating and
    /// appending an empty slot if the key is absent.
    ///
    /// When duplicates exist (after a merge), the first entry wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_scribe::Document;
    ///
    /// let mut document = Document::new();
    /// document.field("name").set("Bob");
    /// document.field("name").set("Alice"); // same slot, value replaced
    /// assert_eq!(document.len(), 1);
    /// ```
    pub fn field(&mut self, key: &str) -> &mut Slot {
        match self.fields.iter().position(|(k, _)| k == key) {
            Some(pos) => &mut self.fields[pos].1,
            None => {
                self.fields.push((key.to_string(), Slot::new()));
                let end = self.fields.len() - 1;
                &mut self.fields[end].1
            }
        }
    }

    /// Returns the slot for `key` without creating it. First match wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Slot> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| slot)
    }

    /// Appends every `(key, Slot)` pair of `other`, cloning the slots.
    ///
    /// No de-duplication is performed: if both documents contain a key, the
    /// result contains two entries with that key and renders both. Later
    /// mutation of `other` cannot affect `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_scribe::Document;
    ///
    /// let mut left = Document::new();
    /// left.field("a").set(0);
    /// left.field("b").set(2);
    ///
    /// let mut right = Document::new();
    /// right.field("a").set(1);
    ///
    /// left.merge(&right);
    /// assert_eq!(left.to_compact().unwrap(), r#"{"a":0,"b":2,"a":1}"#);
    /// ```
    pub fn merge(&mut self, other: &Document) {
        self.fields.extend(other.fields.iter().cloned());
    }

    /// Returns the number of field entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Returns an iterator over the `(key, Slot)` pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, Slot)> {
        self.fields.iter()
    }

    /// Renders the document as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if any reachable cell is still unassigned.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_compact(&self) -> Result<String> {
        crate::to_compact(self)
    }

    /// Renders the document as indented JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if any reachable cell is still unassigned.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn to_pretty(&self) -> Result<String> {
        crate::to_pretty(self)
    }

    /// Writes the indented rendering plus a trailing newline to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or stdout cannot be written.
    pub fn pretty_print(&self) -> Result<()> {
        crate::write_pretty(io::stdout().lock(), self)
    }
}

impl AddAssign<&Document> for Document {
    /// `+=` is [`Document::merge`].
    fn add_assign(&mut self, rhs: &Document) {
        self.merge(rhs);
    }
}

impl AddAssign<Document> for Document {
    fn add_assign(&mut self, rhs: Document) {
        self.fields.extend(rhs.fields);
    }
}

impl FromIterator<(String, Slot)> for Document {
    /// Collects pairs as-is, duplicates included, matching merge semantics.
    fn from_iter<T: IntoIterator<Item = (String, Slot)>>(iter: T) -> Self {
        Document {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Slot);
    type IntoIter = std::vec::IntoIter<(String, Slot)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, slot) in &self.fields {
            map.serialize_entry(key, slot)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creates_in_insertion_order() {
        let mut document = Document::new();
        document.field("k1").set(1);
        document.field("k2").set(2);
        document.field("k3").set(3);

        let keys: Vec<_> = document.keys().collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn test_reassignment_keeps_position() {
        let mut document = Document::new();
        document.field("k1").set(1);
        document.field("k2").set(2);
        document.field("k3").set(3);
        document.field("k2").set("changed");

        let keys: Vec<_> = document.keys().collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
        assert_eq!(
            document.get("k2").map(|slot| slot.first().as_str()),
            Some(Some("changed"))
        );
    }

    #[test]
    fn test_merge_appends_without_dedup() {
        let mut left = Document::new();
        left.field("a").set(0);
        left.field("b").set(2);

        let mut right = Document::new();
        right.field("a").set(1);

        left.merge(&right);
        assert_eq!(left.len(), 3);

        let keys: Vec<_> = left.keys().collect();
        assert_eq!(keys, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_merge_copies_slots() {
        let mut left = Document::new();
        let mut right = Document::new();
        right.field("x").set(1);

        left.merge(&right);
        right.field("x").set(99);

        assert_eq!(
            left.get("x").and_then(|slot| slot.first().as_f64()),
            Some(1.0)
        );
    }

    #[test]
    fn test_add_assign_by_ref_and_move() {
        let mut a = Document::new();
        a.field("a").set(1);
        let mut b = Document::new();
        b.field("b").set(2);

        let mut by_ref = a.clone();
        by_ref += &b;
        let mut by_move = a;
        by_move += b;

        assert_eq!(by_ref, by_move);
        assert_eq!(by_ref.len(), 2);
    }

    #[test]
    fn test_get_first_match_wins() {
        let mut left = Document::new();
        left.field("a").set(0);
        let mut right = Document::new();
        right.field("a").set(1);
        left.merge(&right);

        assert_eq!(
            left.get("a").and_then(|slot| slot.first().as_f64()),
            Some(0.0)
        );
    }
}
