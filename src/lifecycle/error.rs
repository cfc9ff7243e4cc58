use crate::config::ConfigError;
use crate::operator::OperatorError;
use thiserror::Error;

/// Errors that stop the cinema as a whole.
#[derive(Debug, Error)]
pub enum CinemaError {
    /// Rejected before anything was spawned.
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(#[from] ConfigError),

    #[error("Startup failed: {0}")]
    Startup(String),

    #[error("Task failed: {0}")]
    TaskFailed(String),

    #[error("Operator failed: {0}")]
    Operator(#[from] OperatorError),

    /// A resource could not be read for the end-of-day summary.
    #[error("Resource unavailable: {0}")]
    Resource(String),
}
