//! Error types for the operator.

use crate::registry::RegistryError;
use crate::screening_room::RoomError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperatorError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Screening room error: {0}")]
    Room(#[from] RoomError),
}
