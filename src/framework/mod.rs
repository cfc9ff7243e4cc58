//! Generic single-owner actor framework for the cinema's shared resources.
//!
//! Every shared resource (ticket booth, screening room, visitor registry) is an
//! entity owned by exactly one [`ResourceActor`]. The actor drains its mailbox one
//! request at a time, so the mailbox *is* the resource's lock: no entity is ever
//! touched by two tasks at once, and no caller can hold two resources together.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities of one type
//! - [`ResourceClient`] - Cloneable, type-safe handle used to send requests
//! - [`ActorClient`] - Trait that domain clients implement to inherit `get`/`delete`/`count`
//! - [`FrameworkError`] - Mailbox and lookup failures
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
