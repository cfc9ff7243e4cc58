//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod room;
pub mod ticket_booth;
pub mod visitor;
pub mod waiters;

pub use room::*;
pub use ticket_booth::*;
pub use visitor::*;
pub use waiters::*;
