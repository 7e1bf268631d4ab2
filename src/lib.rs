//! Terminal BMI calculator with a contact form.
//!
//! The calculation core in [`bmi`] and the submission state machine in
//! [`contact`] are independent of the terminal; [`state`], [`events`] and
//! [`ui`] adapt them to a `ratatui` interface.

pub mod app;
pub mod bmi;
pub mod config;
pub mod contact;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
