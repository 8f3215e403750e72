use thiserror::Error;

/// Unified error type for git-flow-message operations
#[derive(Error, Debug)]
pub enum FlowMessageError {
    #[error("Git process failed: {0}")]
    Process(String),

    #[error("Unable to detect branch name: {0}")]
    Branch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-flow-message
pub type Result<T> = std::result::Result<T, FlowMessageError>;

impl FlowMessageError {
    /// Create a process error with context
    pub fn process(msg: impl Into<String>) -> Self {
        FlowMessageError::Process(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        FlowMessageError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FlowMessageError::Config(msg.into())
    }
}
