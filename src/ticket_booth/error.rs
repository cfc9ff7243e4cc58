//! Error types for the ticket booth actor.

use thiserror::Error;

/// Errors that can occur during ticket booth operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TicketBoothError {
    /// The booth has not been installed in its actor.
    #[error("Ticket booth not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
