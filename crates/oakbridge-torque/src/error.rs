//! Error handling for the Torque bridge.

use thiserror::Error;

/// Result type for Torque bridge operations.
pub type TorqueResult<T> = Result<T, TorqueError>;

/// Errors that can occur talking to a Torque/PBS backend.
#[derive(Debug, Error)]
pub enum TorqueError {
    /// Connecting to a backend host failed.
    #[error("Connection to {host} failed: {message}")]
    ConnectionFailed { host: String, message: String },

    /// Job submission failed.
    #[error("Job submission failed: {0}")]
    SubmitFailed(String),

    /// Status query failed.
    #[error("Status query failed: {0}")]
    QueryFailed(String),

    /// Job not found on the scheduler.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// Job deletion failed.
    #[error("Job deletion failed: {0}")]
    DeleteFailed(String),

    /// IO error (for example reading a job script).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TorqueError::ConnectionFailed {
            host: "oakley".to_string(),
            message: "refused".to_string(),
        };
        assert_eq!(err.to_string(), "Connection to oakley failed: refused");

        let err = TorqueError::JobNotFound("123.oak-batch.osc.edu".to_string());
        assert_eq!(err.to_string(), "Job not found: 123.oak-batch.osc.edu");
    }
}
