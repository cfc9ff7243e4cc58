//! Error types for the visitor registry actor.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// The visitor is not on the premises.
    #[error("Visitor not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
