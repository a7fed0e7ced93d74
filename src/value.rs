//! The tagged value model.
//!
//! This module provides [`Value`], the tagged union behind every document
//! field, together with the [`True`], [`False`] and [`Null`] sentinels used
//! to assign the corresponding JSON literals.
//!
//! ## Core Types
//!
//! - [`Value`]: one of string, number, nested object, `true`, `false`, `null`,
//!   or the unassigned default state
//! - [`True`] / [`False`] / [`Null`]: zero-sized markers that convert into the
//!   matching [`Value`] variant
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_scribe::{Null, True, Value};
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let flag = Value::from(True);
//! let nothing = Value::from(Null);
//!
//! assert!(text.is_string());
//! assert!(number.is_number());
//! assert!(flag.is_bool());
//! assert!(nothing.is_null());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use json_scribe::Value;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_f64(), Some(42.0));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::document::Document;
use serde::ser::{Serialize, Serializer};

/// Sentinel for the JSON literal `true`.
///
/// Assigning the unit value `True` to a field stores [`Value::True`]:
///
/// ```rust
/// use json_scribe::{Document, True};
///
/// let mut document = Document::new();
/// document.field("active").set(True);
/// assert_eq!(document.to_compact().unwrap(), r#"{"active":true}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct True;

/// Sentinel for the JSON literal `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct False;

/// Sentinel for the JSON literal `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Null;

/// A tagged union holding exactly one JSON payload.
///
/// `Value` is the cell type stored inside every [`Slot`](crate::Slot). A
/// freshly created cell is [`Value::Unset`] until first assignment; an unset
/// cell has no JSON representation and is reported as an error if it survives
/// until rendering.
///
/// Assignment never fails and never type-checks: a cell may change JSON type
/// across its lifetime, each assignment simply replaces what was held before.
///
/// # Examples
///
/// ```rust
/// use json_scribe::Value;
///
/// let mut value = Value::from("draft");
/// assert!(value.is_string());
///
/// // Reassignment may change the JSON type
/// value.set(3);
/// assert!(value.is_number());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The default state of a freshly created cell, before first assignment.
    #[default]
    Unset,
    /// A string, rendered double-quoted with `"` and `\` escaped.
    String(String),
    /// A number. All numeric assignments widen to `f64`, which is lossy for
    /// integers beyond 2^53; non-finite values render as text that is not
    /// valid JSON.
    Number(f64),
    /// A nested document, boxed to break the recursive size cycle.
    Object(Box<Document>),
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
}

impl Value {
    /// Returns `true` if the cell has never been assigned.
    #[inline]
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    /// Returns `true` if the value is the literal `null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is either boolean literal.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::True | Value::False)
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a nested document.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number, returns it.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a boolean literal, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_scribe::Value;
    ///
    /// assert_eq!(Value::True.as_bool(), Some(true));
    /// assert_eq!(Value::False.as_bool(), Some(false));
    /// assert_eq!(Value::Null.as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    /// If the value is a nested document, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Value::Object(document) => Some(&**document),
            _ => None,
        }
    }

    /// If the value is a nested document, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Object(document) => Some(&mut **document),
            _ => None,
        }
    }

    /// Replaces the held payload.
    ///
    /// ```rust
    /// use json_scribe::{Document, Value};
    ///
    /// let mut document = Document::new();
    /// document.field("scores").at(0).set(7);
    /// assert_eq!(document.to_compact().unwrap(), r#"{"scores":[7]}"#);
    /// ```
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }
}

impl From<True> for Value {
    fn from(_: True) -> Self {
        Value::True
    }
}

impl From<False> for Value {
    fn from(_: False) -> Self {
        Value::False
    }
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Object(Box::new(document))
    }
}

impl From<&Document> for Value {
    fn from(document: &Document) -> Self {
        Value::Object(Box::new(document.clone()))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Unset => Err(serde::ser::Error::custom(
                "cell was reserved but never assigned",
            )),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Object(document) => document.serialize(serializer),
            Value::True => serializer.serialize_bool(true),
            Value::False => serializer.serialize_bool(false),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert!(Value::default().is_unset());
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Value::from(True), Value::True);
        assert_eq!(Value::from(False), Value::False);
        assert_eq!(Value::from(Null), Value::Null);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(42u64), Value::Number(42.0));
        assert_eq!(Value::from(3.5f64), Value::Number(3.5));
        assert_eq!(Value::from(true), Value::True);
        assert_eq!(Value::from(false), Value::False);
    }

    #[test]
    fn test_numeric_widening() {
        // all numeric assignments land in the same f64 variant
        assert_eq!(Value::from(7i8), Value::from(7u16));
        assert_eq!(Value::from(7i64), Value::from(7.0f64));
    }

    #[test]
    fn test_from_document() {
        let mut document = Document::new();
        document.field("planet").set("Earth");

        let by_ref = Value::from(&document);
        let by_move = Value::from(document);
        assert_eq!(by_ref, by_move);
        assert!(by_move.is_object());
    }

    #[test]
    fn test_embedded_document_is_independent() {
        let mut inner = Document::new();
        inner.field("planet").set("Earth");

        let embedded = Value::from(&inner);

        // mutating the source afterwards must not show through
        inner.field("planet").set("Mars");
        assert_eq!(
            embedded.as_object().and_then(|d| d.get("planet")).map(|s| s.first().as_str()),
            Some(Some("Earth"))
        );
    }

    #[test]
    fn test_reassignment_changes_type() {
        let mut value = Value::from("draft");
        value.set(3);
        assert!(value.is_number());
        value.set(Null);
        assert!(value.is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(42).as_f64(), Some(42.0));
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::Null.as_str(), None);
        assert!(Value::Unset.as_object().is_none());
    }
}
