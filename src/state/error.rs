//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Network channel was not attached to state
    #[error("Network sender not set in state")]
    NetworkSenderNotSet,

    /// Network channel receiver has gone away
    #[error("Failed to queue network event: {0}")]
    NetworkSendFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::NetworkSenderNotSet;
        assert!(error.to_string().contains("Network sender not set"));

        let error = StateError::NetworkSendFailed("receiver dropped".to_string());
        assert!(error.to_string().contains("Failed to queue network event"));
        assert!(error.to_string().contains("receiver dropped"));
    }
}
