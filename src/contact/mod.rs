//! Contact form module.
//!
//! This module contains everything behind the contact form:
//! - Form fields and the honeypot check
//! - The submission state machine with timed reverts
//! - The HTTP client that posts the form
//! - Contact-specific error types

mod client;
mod error;
mod form;
mod submission;

pub use client::ContactClient;
pub use error::ContactError;
pub use form::{ContactForm, HONEYPOT_FIELD};
pub use submission::{
    StatusKind, StatusRegion, Submission, SubmissionController, SubmissionState, SubmitButton,
    DEFAULT_SUBMIT_LABEL, ERROR_LABEL, ERROR_REVERT_DELAY, LOADING_LABEL, NETWORK_ERROR_MESSAGE,
    REJECTED_MESSAGE, SUCCESS_LABEL, SUCCESS_REVERT_DELAY,
};
