//! Errors raised while resolving, reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` resolved where the file lives
    #[error("Config file location not resolved")]
    FilePathNotSet,

    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    #[error("Could not read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create config directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML for the expected fields
    #[error("Malformed config file {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Could not encode config: {0}")]
    Encode(String),

    /// A value given on the command line is not valid
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
