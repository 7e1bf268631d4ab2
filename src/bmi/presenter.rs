//! View model for the results block and the reference table.

use super::engine::{BmiResult, Category};

/// Placeholder shown in place of a BMI value.
pub const VALUE_PLACEHOLDER: &str = "—";

/// Label shown when the entered measurements cannot produce a result.
pub const INVALID_INPUT_PROMPT: &str = "Please enter valid height and weight.";

/// Label shown before anything has been calculated and after a reset.
pub const INITIAL_PROMPT: &str = "Enter your details to see results.";

/// Text and highlight state of the results region.
///
#[derive(Debug, PartialEq, Clone)]
pub struct ResultView {
    pub value_text: String,
    pub label_text: String,
    highlighted: Option<Category>,
}

impl Default for ResultView {
    fn default() -> Self {
        ResultView::reset()
    }
}

impl ResultView {
    /// Return the view for a freshly loaded or reset calculator.
    ///
    pub fn reset() -> ResultView {
        ResultView {
            value_text: VALUE_PLACEHOLDER.to_string(),
            label_text: INITIAL_PROMPT.to_string(),
            highlighted: None,
        }
    }

    /// Return the view for a calculation result. A result without a value
    /// highlights no reference row at all.
    ///
    pub fn present(result: &BmiResult) -> ResultView {
        match (result.value, result.category) {
            (Some(value), Some(category)) => ResultView {
                value_text: format_value(value),
                label_text: category.label().to_string(),
                highlighted: Some(category),
            },
            _ => ResultView {
                value_text: VALUE_PLACEHOLDER.to_string(),
                label_text: INVALID_INPUT_PROMPT.to_string(),
                highlighted: None,
            },
        }
    }

    pub fn highlighted(&self) -> Option<Category> {
        self.highlighted
    }

    /// Return whether the given reference row is highlighted.
    ///
    pub fn is_highlighted(&self, row: Category) -> bool {
        self.highlighted == Some(row)
    }

    /// Return each reference row paired with its highlight flag, in table
    /// order.
    ///
    pub fn rows(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        Category::ALL
            .iter()
            .map(move |row| (*row, self.is_highlighted(*row)))
    }
}

/// Format a rounded value the way a number prints in the browser: no
/// trailing `.0` for whole numbers.
///
fn format_value(value: f64) -> String {
    format!("{}", value)
}
