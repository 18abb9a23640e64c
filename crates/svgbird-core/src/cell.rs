//! Raw overlay storage for point values.
//!
//! [`PointCell`] is eight bytes that can be written and read either as an
//! IEEE-754 double or as an unsigned 32-bit integer. Both views share the same
//! storage, so the cell itself does not know which one is active; callers
//! that need that guarantee should use [`PointValue`] instead.
//!
//! # Layout
//!
//! ```text
//!   byte:  0   1   2   3   4   5   6   7
//!         ├───────────────────────────────┤  value: f64 (little-endian)
//!         ├───────────────┤                  type:  u32 (little-endian)
//! ```
//!
//! The tag view covers the first four bytes. Writing a tag replaces those four
//! bytes and leaves the rest untouched. Writing a float replaces all eight.
//! The layout is fixed as little-endian on every target so that
//! [`PointCell::to_le_bytes`] is portable.
//!
//! # Examples
//!
//! ```
//! use svgbird_core::PointCell;
//!
//! let mut cell = PointCell::from_value(1.0);
//! assert_eq!(cell.bits(), 0x3FF0_0000_0000_0000);
//! assert_eq!(cell.type_bits(), 0);
//!
//! cell.set_type(1);
//! assert_eq!(cell.bits(), 0x3FF0_0000_0000_0001);
//! ```

use std::fmt;

use crate::point_value::{PointKind, PointValue};

const TYPE_MASK: u64 = 0xFFFF_FFFF;

/// Eight bytes viewed as either a `f64` or a `u32`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PointCell {
    bits: u64,
}

impl PointCell {
    /// Size of the cell in bytes, the width of its widest view
    pub const SIZE: usize = 8;

    /// Creates a zeroed cell
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Creates a cell holding a float
    pub fn from_value(value: f64) -> Self {
        Self {
            bits: value.to_bits(),
        }
    }

    /// Creates a zeroed cell and writes a tag into it
    pub fn from_type(tag: u32) -> Self {
        let mut cell = Self::new();
        cell.set_type(tag);
        cell
    }

    /// Creates a cell from its raw bit pattern
    pub fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Creates a cell from its little-endian byte representation
    pub fn from_le_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            bits: u64::from_le_bytes(bytes),
        }
    }

    /// Writes a float over all eight bytes
    pub fn set_value(&mut self, value: f64) {
        self.bits = value.to_bits();
    }

    /// Writes a tag over the first four bytes
    pub fn set_type(&mut self, tag: u32) {
        self.bits = (self.bits & !TYPE_MASK) | u64::from(tag);
    }

    /// Reads all eight bytes as a float
    pub fn value(self) -> f64 {
        f64::from_bits(self.bits)
    }

    /// Reads the first four bytes as a tag
    pub fn type_bits(self) -> u32 {
        (self.bits & TYPE_MASK) as u32
    }

    /// Returns the raw bit pattern
    pub fn bits(self) -> u64 {
        self.bits
    }

    /// Returns the little-endian byte representation
    pub fn to_le_bytes(self) -> [u8; Self::SIZE] {
        self.bits.to_le_bytes()
    }

    /// Writes a point value using its own interpretation
    pub fn write(&mut self, point: PointValue) {
        match point {
            PointValue::Value(value) => self.set_value(value),
            PointValue::Type(tag) => self.set_type(tag),
        }
    }

    /// Reads the cell back under the given interpretation.
    ///
    /// The cell cannot tell which view was last written, so the caller must
    /// supply it.
    pub fn read(self, kind: PointKind) -> PointValue {
        match kind {
            PointKind::Value => PointValue::Value(self.value()),
            PointKind::Type => PointValue::Type(self.type_bits()),
        }
    }
}

impl From<PointValue> for PointCell {
    fn from(point: PointValue) -> Self {
        let mut cell = Self::new();
        cell.write(point);
        cell
    }
}

impl fmt::Debug for PointCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointCell")
            .field("bits", &format_args!("{:#018x}", self.bits))
            .finish()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// The tag view is always the low half of the float's bit pattern.
    fn check_type_view_is_low_bits(value: f64) -> Result<(), TestCaseError> {
        let cell = PointCell::from_value(value);
        prop_assert_eq!(cell.type_bits(), (value.to_bits() & TYPE_MASK) as u32);
        Ok(())
    }

    /// A tag written into a zeroed cell reads back as the float with those bits.
    fn check_value_view_of_tag(tag: u32) -> Result<(), TestCaseError> {
        let cell = PointCell::from_type(tag);
        prop_assert_eq!(cell.value().to_bits(), u64::from(tag));
        Ok(())
    }

    /// Reading with the kind that was written returns the same point value.
    fn check_read_matches_write(point: PointValue) -> Result<(), TestCaseError> {
        let cell = PointCell::from(point);
        let read = cell.read(point.kind());
        match (point, read) {
            (PointValue::Value(a), PointValue::Value(b)) => {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
            _ => {
                prop_assert_eq!(point, read);
            }
        }
        Ok(())
    }

    fn point_strategy() -> impl Strategy<Value = PointValue> {
        prop_oneof![
            any::<f64>().prop_map(PointValue::Value),
            any::<u32>().prop_map(PointValue::Type),
        ]
    }

    proptest! {
        #[test]
        fn type_view_is_low_bits(value in any::<f64>()) {
            check_type_view_is_low_bits(value)?;
        }

        #[test]
        fn value_view_of_tag(tag in any::<u32>()) {
            check_value_view_of_tag(tag)?;
        }

        #[test]
        fn read_matches_write(point in point_strategy()) {
            check_read_matches_write(point)?;
        }
    }
}
