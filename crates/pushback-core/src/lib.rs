//! # Pushback Core
//!
//! Core types and utilities shared by the pushback crates.
//! Provides the error taxonomy, the 2D point type used by outlines,
//! and feet/meter unit conversion.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{AcfError, Error, OutlineError, Result};
pub use geometry::Point2D;
pub use units::{feet_to_meters, meters_to_feet, LengthUnit};
