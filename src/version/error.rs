use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version string '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("invalid version number '{0}': expected 'keep', 'inc' or a non-negative integer")]
    InvalidComponent(String),
}
