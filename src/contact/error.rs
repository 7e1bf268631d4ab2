//! Contact delivery error types.

/// Errors that can occur while delivering a contact form submission.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Submission rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// No form action has been configured
    #[error("Contact endpoint not set")]
    EndpointNotSet,

    /// The submission could not be handed to the network thread
    #[error("Failed to dispatch submission: {0}")]
    Dispatch(String),

    /// The configured form action is not a usable URL
    #[error("Invalid contact endpoint '{0}'")]
    InvalidEndpoint(String),
}

impl ContactError {
    /// Return whether the endpoint was reached and answered with an error
    /// status, as opposed to the request failing outright.
    ///
    pub fn is_rejection(&self) -> bool {
        matches!(self, ContactError::Rejected { .. })
    }
}
