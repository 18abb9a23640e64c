//! Sequences of point values.
//!
//! [`PointValues`] owns a run of point value slots and hands them out with
//! their interpretation attached. It is the layer that both writes and reads
//! the slots, so every read is checked against the kind that was written.
//!
//! # Examples
//!
//! ```
//! use svgbird_core::PointValues;
//!
//! let mut points = PointValues::new();
//! points.push_type(2);
//! points.push_value(10.0);
//! points.push_value(20.0);
//!
//! assert_eq!(points.type_at(0), Ok(2));
//! assert_eq!(points.value_at(1), Ok(10.0));
//! assert!(points.value_at(0).is_err());
//! ```

use std::{slice, vec};

use log::{debug, trace};

use crate::{
    cell::PointCell,
    error::PointValueError,
    point_value::{PointKind, PointValue},
};

/// An owned, growable sequence of point values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointValues {
    values: Vec<PointValue>,
}

impl PointValues {
    /// Creates an empty sequence
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Rebuilds a sequence from raw cells and the kind each one holds.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::LengthMismatch`] if `cells` and `kinds`
    /// differ in length.
    pub fn from_cells(cells: &[PointCell], kinds: &[PointKind]) -> Result<Self, PointValueError> {
        if cells.len() != kinds.len() {
            debug!(cells = cells.len(), kinds = kinds.len(); "Cell and kind counts differ");
            return Err(PointValueError::LengthMismatch {
                cells: cells.len(),
                kinds: kinds.len(),
            });
        }

        let values = cells
            .iter()
            .zip(kinds)
            .map(|(cell, kind)| cell.read(*kind))
            .collect();

        Ok(Self { values })
    }

    /// Writes every slot into its own cell
    pub fn to_cells(&self) -> Vec<PointCell> {
        self.values.iter().copied().map(PointCell::from).collect()
    }

    /// Returns the kind of every slot, in order
    pub fn kinds(&self) -> Vec<PointKind> {
        self.values.iter().map(|point| point.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, point: PointValue) {
        self.values.push(point);
    }

    pub fn push_value(&mut self, value: f64) {
        self.push(PointValue::Value(value));
    }

    pub fn push_type(&mut self, tag: u32) {
        self.push(PointValue::Type(tag));
    }

    /// Returns the slot at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<PointValue> {
        self.values.get(index).copied()
    }

    /// Reads the float at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::OutOfBounds`] for an invalid index and
    /// [`PointValueError::KindMismatch`] if the slot holds a tag.
    pub fn value_at(&self, index: usize) -> Result<f64, PointValueError> {
        self.checked(index)?
            .try_value()
            .map_err(|err| err.at_index(index))
    }

    /// Reads the tag at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::OutOfBounds`] for an invalid index and
    /// [`PointValueError::KindMismatch`] if the slot holds a float.
    pub fn type_at(&self, index: usize) -> Result<u32, PointValueError> {
        self.checked(index)?
            .try_type()
            .map_err(|err| err.at_index(index))
    }

    /// Overwrites the slot at `index`, possibly changing its kind.
    ///
    /// Returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::OutOfBounds`] for an invalid index.
    pub fn set(&mut self, index: usize, point: PointValue) -> Result<PointValue, PointValueError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(PointValueError::OutOfBounds { index, len })?;

        if slot.kind() != point.kind() {
            trace!(index, from:% = slot.kind(), to:% = point.kind(); "Point value changes kind");
        }

        Ok(std::mem::replace(slot, point))
    }

    /// Inserts a slot at `index`, shifting later slots.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::OutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, point: PointValue) -> Result<(), PointValueError> {
        let len = self.values.len();
        if index > len {
            return Err(PointValueError::OutOfBounds { index, len });
        }
        self.values.insert(index, point);
        Ok(())
    }

    /// Removes and returns the slot at `index`, shifting later slots.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::OutOfBounds`] for an invalid index.
    pub fn remove(&mut self, index: usize) -> Result<PointValue, PointValueError> {
        self.checked(index)?;
        Ok(self.values.remove(index))
    }

    /// Shortens the sequence to `len` slots; no-op if already shorter
    pub fn truncate(&mut self, len: usize) {
        self.values.truncate(len);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = PointValue> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[PointValue] {
        &self.values
    }

    fn checked(&self, index: usize) -> Result<PointValue, PointValueError> {
        self.get(index).ok_or(PointValueError::OutOfBounds {
            index,
            len: self.values.len(),
        })
    }
}

impl From<Vec<PointValue>> for PointValues {
    fn from(values: Vec<PointValue>) -> Self {
        Self { values }
    }
}

impl FromIterator<PointValue> for PointValues {
    fn from_iter<I: IntoIterator<Item = PointValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<PointValue> for PointValues {
    fn extend<I: IntoIterator<Item = PointValue>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for PointValues {
    type Item = PointValue;
    type IntoIter = vec::IntoIter<PointValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointValues {
    type Item = &'a PointValue;
    type IntoIter = slice::Iter<'a, PointValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
