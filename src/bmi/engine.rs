//! BMI computation and classification.
//!
//! Everything in here is pure: raw field text goes in, a [`BmiResult`] comes
//! out. Missing or unusable input is a distinguished result, not an error.

use super::units::{centimeters_to_meters, feet_inches_to_meters, pounds_to_kilograms, UnitSystem};
use std::fmt;

/// Lower bound of the normal weight band.
pub const NORMAL_LOWER_BOUND: f64 = 18.5;

/// Lower bound of the overweight band.
pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;

/// Lower bound of the obese band.
pub const OBESE_LOWER_BOUND: f64 = 30.0;

/// Specifying the BMI weight categories, lowest band first.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// All categories in reference table order.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Return the human readable label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Return the range identifier of the matching reference table row.
    ///
    pub fn range_id(&self) -> &'static str {
        match self {
            Category::Underweight => "under",
            Category::Normal => "normal",
            Category::Overweight => "over",
            Category::Obese => "obese",
        }
    }

    /// Return the BMI range caption shown in the reference table.
    ///
    pub fn range_caption(&self) -> &'static str {
        match self {
            Category::Underweight => "Below 18.5",
            Category::Normal => "18.5 – 24.9",
            Category::Overweight => "25.0 – 29.9",
            Category::Obese => "30.0 and above",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measurement whose required fields are all present and non-zero.
///
/// `height_secondary` carries inches for imperial input and is unused for
/// metric input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Measurement {
    pub height_primary: f64,
    pub height_secondary: f64,
    pub weight: f64,
    pub unit_system: UnitSystem,
}

impl Measurement {
    /// Parse raw field text into a measurement. Returns `None` when a
    /// required field is blank, zero or not a number. Imperial input needs
    /// either feet or inches, plus pounds.
    ///
    pub fn parse(unit_system: UnitSystem, primary: &str, secondary: &str, weight: &str) -> Option<Measurement> {
        let height_primary = parse_number(primary);
        let weight = parse_number(weight);
        let height_secondary = match unit_system {
            UnitSystem::Metric => 0.0,
            UnitSystem::Imperial => parse_number(secondary),
        };

        let height_given = match unit_system {
            UnitSystem::Metric => is_truthy(height_primary),
            UnitSystem::Imperial => is_truthy(height_primary) || is_truthy(height_secondary),
        };
        if !height_given || !is_truthy(weight) {
            return None;
        }

        Some(Measurement {
            height_primary,
            height_secondary,
            weight,
            unit_system,
        })
    }

    /// Return `(height in meters, weight in kilograms)`.
    ///
    pub fn to_si(&self) -> (f64, f64) {
        match self.unit_system {
            UnitSystem::Metric => (centimeters_to_meters(self.height_primary), self.weight),
            UnitSystem::Imperial => (
                feet_inches_to_meters(self.height_primary, self.height_secondary),
                pounds_to_kilograms(self.weight),
            ),
        }
    }
}

/// Outcome of a calculation. `value` and `category` are either both set or
/// both unset.
///
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct BmiResult {
    pub value: Option<f64>,
    pub category: Option<Category>,
}

impl BmiResult {
    pub fn invalid() -> BmiResult {
        BmiResult::default()
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

/// Return weight divided by height squared, or `None` for a zero or negative
/// height.
///
pub fn compute_bmi(height_meters: f64, weight_kg: f64) -> Option<f64> {
    if height_meters <= 0.0 {
        return None;
    }
    Some(weight_kg / (height_meters * height_meters))
}

/// Round to one decimal place, halves rounding up.
///
pub fn round_to_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 10.0
}

/// Classify a BMI value. Each band includes its lower bound.
///
pub fn classify(bmi: f64) -> Category {
    if bmi < NORMAL_LOWER_BOUND {
        Category::Underweight
    } else if bmi < OVERWEIGHT_LOWER_BOUND {
        Category::Normal
    } else if bmi < OBESE_LOWER_BOUND {
        Category::Overweight
    } else {
        Category::Obese
    }
}

/// Compute a rounded, classified result from raw field text.
///
pub fn evaluate(unit_system: UnitSystem, primary: &str, secondary: &str, weight: &str) -> BmiResult {
    let measurement = match Measurement::parse(unit_system, primary, secondary, weight) {
        Some(m) => m,
        None => return BmiResult::invalid(),
    };
    let (height_m, weight_kg) = measurement.to_si();
    match compute_bmi(height_m, weight_kg) {
        Some(bmi) if bmi.is_finite() && bmi != 0.0 => {
            let rounded = round_to_one_decimal(bmi);
            BmiResult {
                value: Some(rounded),
                category: Some(classify(rounded)),
            }
        }
        _ => BmiResult::invalid(),
    }
}

/// Parse number input text the way HTML number fields report it: surrounding
/// whitespace is ignored, blank text is zero and anything unparsable is NaN.
///
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => (),
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust also accepts "inf" and "nan" spellings, which number fields do not.
    if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
