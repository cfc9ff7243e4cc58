//! # Lifecycle
//!
//! Wiring for a day at the cinema.
//!
//! - [`Premises`] spawns the three resource actors and installs the booth and room.
//! - [`Cinema`] adds the customers and the operator on top, then waits for the day
//!   to end.
//! - [`tracing`] holds the logging setup and the event [`Category`] labels.

pub mod cinema;
pub mod error;
pub mod premises;
pub mod tracing;

pub use cinema::{Cinema, CinemaSummary};
pub use error::CinemaError;
pub use premises::Premises;
pub use self::tracing::{setup_tracing, Category};
