//! Point values.
//!
//! A point value is a scalar slot that holds either a floating-point magnitude
//! or an unsigned 32-bit tag. Only one interpretation is meaningful at a time.
//!
//! # Overview
//!
//! - [`PointValue`]: The tagged value, one variant per interpretation
//! - [`PointKind`]: Names the interpretation without carrying the payload
//!
//! The active interpretation is part of the type, so a slot can never be read
//! back as the wrong kind by accident. Reading with the wrong kind through the
//! fallible accessors yields [`PointValueError::KindMismatch`].
//!
//! Tags are opaque: this crate stores and returns them, it does not assign
//! them any meaning.
//!
//! # Examples
//!
//! ```
//! use svgbird_core::{PointKind, PointValue};
//!
//! let x = PointValue::value(12.5);
//! assert_eq!(x.kind(), PointKind::Value);
//! assert_eq!(x.as_value(), Some(12.5));
//! assert_eq!(x.as_type(), None);
//!
//! let tag = PointValue::tag(3);
//! assert_eq!(tag.try_type(), Ok(3));
//! assert!(tag.try_value().is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PointValueError;

/// Which interpretation of a point value is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// A 64-bit floating-point magnitude
    Value,
    /// A 32-bit unsigned tag
    Type,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => write!(f, "value"),
            Self::Type => write!(f, "type"),
        }
    }
}

/// A single point value slot.
///
/// Holds either a coordinate or magnitude ([`PointValue::Value`]) or an
/// unsigned tag ([`PointValue::Type`]).
///
/// The default is `Value(0.0)`, which is what zeroed storage reads as.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointValue {
    /// Floating-point magnitude
    Value(f64),
    /// Unsigned 32-bit tag
    Type(u32),
}

impl Default for PointValue {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl PointValue {
    /// Creates a floating-point point value
    pub fn value(value: f64) -> Self {
        Self::Value(value)
    }

    /// Creates a tag point value
    pub fn tag(tag: u32) -> Self {
        Self::Type(tag)
    }

    /// Returns the active interpretation
    pub fn kind(self) -> PointKind {
        match self {
            Self::Value(_) => PointKind::Value,
            Self::Type(_) => PointKind::Type,
        }
    }

    /// Returns true if this slot holds a floating-point value
    pub fn is_value(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true if this slot holds a tag
    pub fn is_type(self) -> bool {
        matches!(self, Self::Type(_))
    }

    /// Returns the float, or `None` if the slot holds a tag
    pub fn as_value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Type(_) => None,
        }
    }

    /// Returns the tag, or `None` if the slot holds a float
    pub fn as_type(self) -> Option<u32> {
        match self {
            Self::Type(tag) => Some(tag),
            Self::Value(_) => None,
        }
    }

    /// Reads the slot as a float.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::KindMismatch`] if the slot holds a tag.
    pub fn try_value(self) -> Result<f64, PointValueError> {
        self.as_value().ok_or_else(|| self.mismatch(PointKind::Value))
    }

    /// Reads the slot as a tag.
    ///
    /// # Errors
    ///
    /// Returns [`PointValueError::KindMismatch`] if the slot holds a float.
    pub fn try_type(self) -> Result<u32, PointValueError> {
        self.as_type().ok_or_else(|| self.mismatch(PointKind::Type))
    }

    fn mismatch(self, expected: PointKind) -> PointValueError {
        PointValueError::KindMismatch {
            index: None,
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Type(tag) => write!(f, "type:{tag}"),
        }
    }
}

impl From<f64> for PointValue {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<u32> for PointValue {
    fn from(tag: u32) -> Self {
        Self::Type(tag)
    }
}

impl TryFrom<PointValue> for f64 {
    type Error = PointValueError;

    fn try_from(point: PointValue) -> Result<Self, Self::Error> {
        point.try_value()
    }
}

impl TryFrom<PointValue> for u32 {
    type Error = PointValueError;

    fn try_from(point: PointValue) -> Result<Self, Self::Error> {
        point.try_type()
    }
}
