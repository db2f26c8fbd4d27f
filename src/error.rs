use thiserror::Error;

/// Unified error type for relcheck operations
#[derive(Error, Debug)]
pub enum RelcheckError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Revision error: {0}")]
    Revision(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relcheck
pub type Result<T> = std::result::Result<T, RelcheckError>;

impl RelcheckError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelcheckError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        RelcheckError::Version(msg.into())
    }

    /// Create a revision error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        RelcheckError::Revision(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        RelcheckError::Branch(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        RelcheckError::Output(msg.into())
    }
}
