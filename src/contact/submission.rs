//! Contact submission lifecycle.
//!
//! `Idle -> Loading -> Success | Error -> Idle`. Loading is entered only by a
//! submit that passes the honeypot check and is left only by the resolution of
//! that same attempt. Success and Error schedule a revert to Idle which is
//! applied by [`SubmissionController::tick`]; a later submission cancels it.

use super::{ContactError, ContactForm};
use log::*;
use std::time::{Duration, Instant};

/// How long the success affordance stays before reverting.
pub const SUCCESS_REVERT_DELAY: Duration = Duration::from_millis(2000);

/// How long the error affordance stays before reverting.
pub const ERROR_REVERT_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_SUBMIT_LABEL: &str = "Send";
pub const LOADING_LABEL: &str = "Sending…";
pub const SUCCESS_LABEL: &str = "Sent";
pub const ERROR_LABEL: &str = "Try again";

/// Shown when the endpoint answered with a non-success status.
pub const REJECTED_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Shown when the request itself failed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Specifying the submission states.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Specifying the status region styles.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Text and style of the status message region.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct StatusRegion {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusRegion {
    fn set(&mut self, text: &str, kind: StatusKind) {
        self.text = text.to_string();
        self.kind = kind;
    }
}

/// Presentation state of the submit control.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SubmitButton {
    label: String,
    original_label: Option<String>,
    state: SubmissionState,
    disabled: bool,
    busy: bool,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        SubmitButton {
            label: label.to_string(),
            original_label: None,
            state: SubmissionState::Idle,
            disabled: false,
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Which state the control is styled for.
    ///
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Restyle the control for a state. The label shown at the first call is
    /// remembered and restored whenever the control returns to idle.
    ///
    fn set_state(&mut self, state: SubmissionState) {
        let original = self
            .original_label
            .get_or_insert_with(|| self.label.clone())
            .clone();
        self.state = state;
        self.disabled = state == SubmissionState::Loading;
        self.busy = state == SubmissionState::Loading;
        self.label = match state {
            SubmissionState::Loading => LOADING_LABEL.to_string(),
            SubmissionState::Success => SUCCESS_LABEL.to_string(),
            SubmissionState::Error => ERROR_LABEL.to_string(),
            SubmissionState::Idle => original,
        };
    }
}

/// A submission ready to be posted.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Submission {
    pub attempt: u64,
    pub form: ContactForm,
}

/// A scheduled revert to idle, owned by the attempt that scheduled it.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct PendingRevert {
    attempt: u64,
    due: Instant,
}

/// Owns the contact form and drives its submission state machine.
///
#[derive(Debug)]
pub struct SubmissionController {
    form: ContactForm,
    state: SubmissionState,
    button: SubmitButton,
    status: StatusRegion,
    attempt: u64,
    pending_revert: Option<PendingRevert>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        SubmissionController::new(DEFAULT_SUBMIT_LABEL)
    }
}

impl SubmissionController {
    /// Return a new idle controller whose submit control reads `label`.
    ///
    pub fn new(label: &str) -> Self {
        SubmissionController {
            form: ContactForm::default(),
            state: SubmissionState::Idle,
            button: SubmitButton::new(label),
            status: StatusRegion::default(),
            attempt: 0,
            pending_revert: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    /// Return when the pending revert to idle falls due, if one is scheduled.
    ///
    pub fn revert_due(&self) -> Option<Instant> {
        self.pending_revert.map(|p| p.due)
    }

    /// Handle a submit request. Returns the submission to post, or `None`
    /// when the honeypot is filled or a submission is already in flight.
    ///
    pub fn submit(&mut self) -> Option<Submission> {
        if self.state == SubmissionState::Loading {
            debug!("Ignoring submit while a submission is in flight.");
            return None;
        }
        if self.form.is_bot() {
            debug!("Dropping submission with a filled honeypot field.");
            return None;
        }

        if self.pending_revert.take().is_some() {
            debug!("Cancelled pending revert of attempt {}.", self.attempt);
        }
        self.attempt += 1;
        self.status.set("", StatusKind::Neutral);
        self.transition(SubmissionState::Loading);
        info!("Submitting contact form (attempt {})...", self.attempt);

        Some(Submission {
            attempt: self.attempt,
            form: self.form.clone(),
        })
    }

    /// Apply the outcome of a delivery. Returns false if the outcome does not
    /// belong to the attempt currently in flight, in which case nothing
    /// changes.
    ///
    pub fn resolve(&mut self, attempt: u64, outcome: Result<(), ContactError>, now: Instant) -> bool {
        if self.state != SubmissionState::Loading || attempt != self.attempt {
            warn!(
                "Ignoring outcome of contact attempt {} (current attempt {}, state {:?}).",
                attempt, self.attempt, self.state
            );
            return false;
        }

        match outcome {
            Ok(()) => {
                info!("Contact form sent.");
                self.status.set("", StatusKind::Success);
                self.form.reset();
                self.transition(SubmissionState::Success);
                self.schedule_revert(now + SUCCESS_REVERT_DELAY);
            }
            Err(e) => {
                error!("Failed to send contact form: {}", e);
                let message = if e.is_rejection() {
                    REJECTED_MESSAGE
                } else {
                    NETWORK_ERROR_MESSAGE
                };
                self.status.set(message, StatusKind::Error);
                self.transition(SubmissionState::Error);
                self.schedule_revert(now + ERROR_REVERT_DELAY);
            }
        }
        true
    }

    /// Apply a pending revert that has fallen due. Returns whether the
    /// controller went back to idle.
    ///
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_revert {
            Some(revert) if now >= revert.due && revert.attempt == self.attempt => {
                self.pending_revert = None;
                self.transition(SubmissionState::Idle);
                debug!("Contact form control reverted to idle.");
                true
            }
            _ => false,
        }
    }

    fn schedule_revert(&mut self, due: Instant) {
        self.pending_revert = Some(PendingRevert {
            attempt: self.attempt,
            due,
        });
    }

    fn transition(&mut self, state: SubmissionState) {
        debug!("Contact submission {:?} -> {:?}", self.state, state);
        self.state = state;
        self.button.set_state(state);
    }
}
