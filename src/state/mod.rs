//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Section, NavToggle)
//! - Form editing types (BmiForm, UnitToggle, field focus)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{is_numeric_input, BmiField, BmiForm, ContactField, UnitToggle};
pub use navigation::{NavToggle, Section};
pub use state_impl::State;
