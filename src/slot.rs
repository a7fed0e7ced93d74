//! The field value container.
//!
//! A [`Slot`] is what a document key points at. It starts life in scalar mode
//! holding a single cell; the first indexed access flips it into array mode
//! for good, after which it renders as a JSON array even if only index 0 is
//! ever used.

use crate::value::Value;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::ops::{Index, IndexMut};

/// A single addressable field: one cell in scalar mode, an ordered sequence
/// of cells once promoted to array mode.
///
/// # Examples
///
/// ```rust
/// use json_scribe::Document;
///
/// let mut document = Document::new();
///
/// // scalar assignment leaves the slot in scalar mode
/// document.field("age").set(44);
///
/// // indexed access promotes permanently, even for a single element
/// document.field("scores").at(0).set(7);
///
/// assert_eq!(
///     document.to_compact().unwrap(),
///     r#"{"age":44,"scores":[7]}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    cells: Vec<Value>,
    array: bool,
}

impl Slot {
    /// Creates a scalar-mode slot holding one unassigned cell.
    #[must_use]
    pub fn new() -> Self {
        Slot {
            cells: vec![Value::Unset],
            array: false,
        }
    }

    /// Assigns the scalar cell (element 0). Does not change array mode.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.cells[0] = value.into();
    }

    /// Returns a mutable reference to the cell at `index`, growing the slot
    /// so the index is valid and switching it into array mode permanently.
    ///
    /// Cells grown over by a jump ahead stay unassigned; they are reported at
    /// render time unless assigned first.
    pub fn at(&mut self, index: usize) -> &mut Value {
        self.array = true;
        if self.cells.len() <= index {
            self.cells.resize(index + 1, Value::Unset);
        }
        &mut self.cells[index]
    }

    /// Returns `true` once the slot has been promoted to array mode.
    ///
    /// Promotion never reverts:
    ///
    /// ```rust
    /// use json_scribe::Slot;
    ///
    /// let mut slot = Slot::new();
    /// slot.at(0).set(7);
    /// slot.set(8); // scalar write into element 0
    /// assert!(slot.is_array());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Returns the number of cells. A scalar-mode slot reports 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a slot holds at least one cell from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `index` without growing or promoting.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    /// Returns the scalar cell (element 0).
    #[must_use]
    pub fn first(&self) -> &Value {
        &self.cells[0]
    }

    /// Returns an iterator over the cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cells.iter()
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Slot {
    type Output = Value;

    /// Shared indexing reads without promoting to array mode.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    fn index(&self, index: usize) -> &Value {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Slot {
    /// Mutable indexing behaves like [`Slot::at`]: it grows the slot and
    /// promotes it to array mode.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.at(index)
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.array {
            let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
            for cell in &self.cells {
                seq.serialize_element(cell)?;
            }
            seq.end()
        } else {
            self.first().serialize(serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_scalar_unset() {
        let slot = Slot::new();
        assert!(!slot.is_array());
        assert_eq!(slot.len(), 1);
        assert!(slot.first().is_unset());
    }

    #[test]
    fn test_set_overwrites_element_zero() {
        let mut slot = Slot::new();
        slot.set("first");
        slot.set("second");
        assert_eq!(slot.first().as_str(), Some("second"));
        assert!(!slot.is_array());
    }

    #[test]
    fn test_indexed_access_promotes_permanently() {
        let mut slot = Slot::new();
        slot.at(0).set(5);
        assert!(slot.is_array());

        // scalar write afterwards does not demote
        slot.set(6);
        assert!(slot.is_array());
        assert_eq!(slot.first().as_f64(), Some(6.0));
    }

    #[test]
    fn test_growth_fills_gaps_with_unset() {
        let mut slot = Slot::new();
        slot.at(3).set("tail");
        assert_eq!(slot.len(), 4);
        assert!(slot.get(1).is_some_and(Value::is_unset));
        assert_eq!(slot.get(3).and_then(|v| v.as_str()), Some("tail"));
    }

    #[test]
    fn test_growth_never_shrinks() {
        let mut slot = Slot::new();
        slot.at(2).set("c");
        slot.at(0).set("a");
        assert_eq!(slot.len(), 3);
    }

    #[test]
    fn test_index_mut_grows() {
        let mut slot = Slot::new();
        slot[1] = Value::from(6);
        assert!(slot.is_array());
        assert_eq!(slot.len(), 2);
        assert_eq!(slot[1].as_f64(), Some(6.0));
    }
}
