//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: contact form delivery
//! - Terminal events: user input and timer ticks

pub mod network;
pub mod terminal;
