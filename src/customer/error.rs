//! Error types for customers.

use crate::model::WaitInterrupted;
use crate::registry::RegistryError;
use crate::screening_room::RoomError;
use crate::ticket_booth::TicketBoothError;
use thiserror::Error;

/// Anything that ends one customer's visit early. Never fatal to the cinema.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// A waiter group closed under the customer, i.e. the room went away.
    #[error("Interrupted while waiting: {0}")]
    InterruptedWait(#[from] WaitInterrupted),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Ticket booth error: {0}")]
    TicketBooth(#[from] TicketBoothError),

    #[error("Screening room error: {0}")]
    Room(#[from] RoomError),
}
