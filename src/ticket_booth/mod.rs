//! # Ticket Booth Actor
//!
//! The cinema's ticket counter: a bounded stock of tickets sold one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`TicketBooth`]
//! - [`actions`] - [`BoothAction`] and [`TicketOutcome`]
//! - [`error`] - [`TicketBoothError`]
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use cinema_recipe::ticket_booth;
//! use cinema_recipe::clients::TicketBoothClient;
//! use cinema_recipe::ticket_booth::TicketOutcome;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = ticket_booth::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let booth = TicketBoothClient::install(generic_client, 1).await?;
//!     assert!(matches!(booth.try_issue().await?, TicketOutcome::Issued { remaining: 0 }));
//!     assert!(matches!(booth.try_issue().await?, TicketOutcome::Denied));
//!     Ok(())
//! }
//! ```
//!
//! A denial is not an error: running out of tickets is an ordinary end to a
//! customer's visit.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::TicketBooth;

/// Creates a new ticket booth actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<TicketBooth>, ResourceClient<TicketBooth>) {
    ResourceActor::new(buffer_size)
}
