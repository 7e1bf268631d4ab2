//! Unit conversion into SI (meters and kilograms).
//!
//! Inputs are not validated: negative values convert like any other number
//! and it is up to the caller to decide what they mean.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Centimeters per meter.
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Meters per inch (exact).
pub const METERS_PER_INCH: f64 = 0.0254;

/// Kilograms per avoirdupois pound (exact).
pub const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Specifying the unit system measurements are entered in.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Return the value used by the units radio group.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Return the other unit system.
    ///
    pub fn other(&self) -> UnitSystem {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!("unknown unit system '{}'", other)),
        }
    }
}

pub fn centimeters_to_meters(cm: f64) -> f64 {
    cm / CENTIMETERS_PER_METER
}

pub fn feet_inches_to_meters(feet: f64, inches: f64) -> f64 {
    ((feet * INCHES_PER_FOOT) + inches) * METERS_PER_INCH
}

pub fn pounds_to_kilograms(lb: f64) -> f64 {
    lb * KILOGRAMS_PER_POUND
}
