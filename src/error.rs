/// Exit codes for the xdpms CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,
    /// Runtime error occurred
    Error = 1,
    /// Invalid command-line usage; clap exits with this code itself
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

/// Failure class of an [`Error`], for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Connection,
    Protocol,
    InvalidArgument,
    OperationFailed,
}

/// Error types for DPMS operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The display connection could not be opened, was closed, or was lost
    #[error("Display connection error: {0}")]
    Connection(String),

    /// The server failed to answer a query it always answers
    #[error("DPMS protocol error: {0}")]
    Protocol(String),

    /// The server (or the level check) rejected a malformed value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A state-changing command was rejected
    #[error("DPMS operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection(_) => ErrorKind::Connection,
            Error::Protocol(_) => ErrorKind::Protocol,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::OperationFailed(_) => ErrorKind::OperationFailed,
        }
    }

    /// Build an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::Connection => Error::Connection(message),
            ErrorKind::Protocol => Error::Protocol(message),
            ErrorKind::InvalidArgument => Error::InvalidArgument(message),
            ErrorKind::OperationFailed => Error::OperationFailed(message),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        // All runtime errors use ExitCode::Error (1)
        // Usage errors are handled separately by clap
        ExitCode::Error
    }
}
