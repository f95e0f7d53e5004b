//! Unit conversion utilities
//!
//! Aircraft files store lengths in feet; outlines are produced in meters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Convert feet to meters
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Length unit used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meters
    Meters,
    /// Feet
    Feet,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "m"),
            Self::Feet => write!(f, "ft"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meters" | "metres" | "m" => Ok(Self::Meters),
            "feet" | "ft" => Ok(Self::Feet),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Format a length value for display
///
/// * `value_m` - Value in meters
/// * `unit` - Target unit
pub fn format_length(value_m: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Meters => format!("{:.2}", value_m),
        LengthUnit::Feet => format!("{:.2}", meters_to_feet(value_m)),
    }
}
