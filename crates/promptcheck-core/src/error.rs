//! Error types for promptcheck

/// Result type alias using promptcheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for promptcheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scanner construction errors (rule table compilation)
    #[error("scanner error: {0}")]
    Scanner(String),

    /// Quality judge errors
    #[error("judge error: {0}")]
    Judge(String),

    /// Archive codec errors (malformed metadata headers)
    #[error("archive error: {0}")]
    Archive(String),

    /// Contract violations at an API boundary
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new scanner error
    pub fn scanner(msg: impl Into<String>) -> Self {
        Self::Scanner(msg.into())
    }

    /// Create a new judge error
    pub fn judge(msg: impl Into<String>) -> Self {
        Self::Judge(msg.into())
    }

    /// Create a new archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
