//! Top-level error type.
//!
//! Module errors convert into [`AppError`] with `?`; `main` and the event
//! handlers surface it through `anyhow`.

pub use crate::config::ConfigError;
pub use crate::contact::ContactError;
pub use crate::state::StateError;

/// Anything that can stop the application from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Drawing to the terminal failed
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// The network thread's tokio runtime could not be built
    #[error("Failed to create runtime: {0}")]
    RuntimeCreation(String),
}

pub type AppResult<T> = Result<T, AppError>;
