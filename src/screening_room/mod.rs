//! # Screening Room Actor
//!
//! The room customers compete for. Its actor serialises three kinds of traffic:
//!
//! - customers asking to be admitted ([`RoomAction::Admit`]),
//! - customers leaving after the film ([`RoomAction::Leave`]),
//! - the operator driving the lifecycle ([`RoomAction::Transition`]).
//!
//! ## Waiter groups
//!
//! Every answer to `Admit` carries a [`Waiter`](crate::model::Waiter) subscribed during
//! the same mailbox turn that evaluated the admission predicate:
//!
//! - admitted customers get a place in the *screening over* group, woken on entering `Exiting`;
//! - rejected customers get a place in the *next cycle* group, woken on entering `Open`.
//!
//! Only one group is woken per transition. Wake-ups are not filtered by
//! eligibility, so a woken customer asks to be admitted again rather than assuming
//! a seat is free.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`ScreeningRoom`]
//! - [`actions`] - [`RoomAction`], [`RoomActionResult`], [`Admission`]
//! - [`error`] - [`RoomError`]
//! - [`signals`] - [`RoomSignals`], the waiter groups handed to `run()` as context

pub mod actions;
pub mod entity;
pub mod error;
pub mod signals;

pub use actions::*;
pub use error::*;
pub use signals::RoomSignals;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::ScreeningRoom;

/// Creates a new screening room actor and its client.
///
/// Spawn it with `actor.run(RoomSignals::new())`.
pub fn new(buffer_size: usize) -> (ResourceActor<ScreeningRoom>, ResourceClient<ScreeningRoom>) {
    ResourceActor::new(buffer_size)
}
