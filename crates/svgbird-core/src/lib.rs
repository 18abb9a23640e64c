//! svgbird Core Types
//!
//! This crate provides the point value types shared by the svgbird SVG
//! library. It includes:
//!
//! - **Point values**: A cell holding either a float or a 32-bit tag ([`point_value::PointValue`])
//! - **Cells**: The raw 8-byte overlay storage ([`cell::PointCell`])
//! - **Sequences**: An owner that tracks the active kind per slot ([`points::PointValues`])
//! - **Errors**: Failures when reading with the wrong interpretation ([`error::PointValueError`])

pub mod cell;
pub mod error;
pub mod point_value;
pub mod points;

pub use cell::PointCell;
pub use error::PointValueError;
pub use point_value::{PointKind, PointValue};
pub use points::PointValues;
