//! BMI calculator core.
//!
//! This module holds the pure calculation logic:
//! - Unit conversion into SI units
//! - BMI computation, rounding and classification
//! - The view model for the results region and reference table

mod engine;
mod presenter;
mod units;

pub use engine::{
    classify, compute_bmi, evaluate, parse_number, round_to_one_decimal, BmiResult, Category,
    Measurement,
};
pub use presenter::{ResultView, INITIAL_PROMPT, INVALID_INPUT_PROMPT, VALUE_PLACEHOLDER};
pub use units::{centimeters_to_meters, feet_inches_to_meters, pounds_to_kilograms, UnitSystem};
