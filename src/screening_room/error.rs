//! Error types for the screening room actor.

use crate::model::RoomState;
use thiserror::Error;

/// Errors that can occur during screening room operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    /// The requested transition is not part of the lifecycle.
    #[error("Invalid room transition: {from} -> {to}")]
    InvalidTransition { from: RoomState, to: RoomState },

    /// The operator already closed the room; it does not reopen.
    #[error("Room is shut for the day")]
    ShutForTheDay,

    /// The room has not been installed in its actor.
    #[error("Room not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
