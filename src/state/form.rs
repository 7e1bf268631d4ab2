//! Form editing state types.
//!
//! This module contains the calculator and contact form fields, the field
//! focus enums, and the unit toggle controlling which measurement inputs are
//! visible.

use crate::bmi::{self, BmiResult, UnitSystem};

/// Tracks the selected unit system and, through it, which input group is
/// shown. Exactly one unit system is selected at any time.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct UnitToggle {
    selected: UnitSystem,
}

impl UnitToggle {
    pub fn new(selected: UnitSystem) -> Self {
        UnitToggle { selected }
    }

    pub fn selected(&self) -> UnitSystem {
        self.selected
    }

    /// Select a unit system. Returns whether the selection changed.
    ///
    pub fn select(&mut self, unit: UnitSystem) -> bool {
        let changed = self.selected != unit;
        self.selected = unit;
        changed
    }

    /// Select the unit system that is not currently selected.
    ///
    pub fn toggle(&mut self) {
        self.selected = self.selected.other();
    }

    /// Return the input group currently shown.
    ///
    pub fn visible_group(&self) -> UnitSystem {
        self.selected
    }

    pub fn is_visible(&self, group: UnitSystem) -> bool {
        self.visible_group() == group
    }
}

/// Specifying the calculator form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BmiField {
    Units,
    HeightCm,
    WeightKg,
    HeightFt,
    HeightIn,
    WeightLb,
}

impl BmiField {
    /// Return the focusable fields, in order, for a unit system.
    ///
    pub fn for_units(unit: UnitSystem) -> &'static [BmiField] {
        match unit {
            UnitSystem::Metric => &[BmiField::Units, BmiField::HeightCm, BmiField::WeightKg],
            UnitSystem::Imperial => &[
                BmiField::Units,
                BmiField::HeightFt,
                BmiField::HeightIn,
                BmiField::WeightLb,
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiField::Units => "Units",
            BmiField::HeightCm => "Height (cm)",
            BmiField::WeightKg => "Weight (kg)",
            BmiField::HeightFt => "Height (ft)",
            BmiField::HeightIn => "Height (in)",
            BmiField::WeightLb => "Weight (lb)",
        }
    }
}

/// Raw text of the calculator inputs for both unit systems.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct BmiForm {
    pub height_cm: String,
    pub weight_kg: String,
    pub height_ft: String,
    pub height_in: String,
    pub weight_lb: String,
}

impl BmiForm {
    /// Return the text of a field. The units field has no text.
    ///
    pub fn value(&self, field: BmiField) -> &str {
        match field {
            BmiField::Units => "",
            BmiField::HeightCm => &self.height_cm,
            BmiField::WeightKg => &self.weight_kg,
            BmiField::HeightFt => &self.height_ft,
            BmiField::HeightIn => &self.height_in,
            BmiField::WeightLb => &self.weight_lb,
        }
    }

    pub fn value_mut(&mut self, field: BmiField) -> Option<&mut String> {
        match field {
            BmiField::Units => None,
            BmiField::HeightCm => Some(&mut self.height_cm),
            BmiField::WeightKg => Some(&mut self.weight_kg),
            BmiField::HeightFt => Some(&mut self.height_ft),
            BmiField::HeightIn => Some(&mut self.height_in),
            BmiField::WeightLb => Some(&mut self.weight_lb),
        }
    }

    /// Clear all measurement inputs.
    ///
    pub fn clear(&mut self) {
        *self = BmiForm::default();
    }

    /// Evaluate the inputs of the given unit system.
    ///
    pub fn evaluate(&self, unit: UnitSystem) -> BmiResult {
        match unit {
            UnitSystem::Metric => bmi::evaluate(unit, &self.height_cm, "", &self.weight_kg),
            UnitSystem::Imperial => {
                bmi::evaluate(unit, &self.height_ft, &self.height_in, &self.weight_lb)
            }
        }
    }
}

/// Return whether a character may be typed into a number input.
///
pub fn is_numeric_input(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Specifying the contact form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ContactField {
    Name,
    Email,
    Message,
    Submit,
}

impl ContactField {
    /// All focusable contact fields in form order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
        ContactField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
            ContactField::Submit => "Submit",
        }
    }
}

/// Return the element after `current` in `order`, wrapping around. Falls
/// back to the first element when `current` is not in `order`.
///
pub fn cycle<T: PartialEq + Copy>(order: &[T], current: T, forward: bool) -> T {
    let len = order.len();
    match order.iter().position(|f| *f == current) {
        Some(i) if forward => order[(i + 1) % len],
        Some(i) => order[(i + len - 1) % len],
        None => order[0],
    }
}
