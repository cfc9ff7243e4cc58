//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each shared resource gets a domain client bound to its single entity, so callers
//! say `booth.try_issue()` instead of building `ResourceRequest`s by hand.

pub mod registry_client;
pub mod room_client;
pub mod ticket_booth_client;

pub use registry_client::*;
pub use room_client::*;
pub use ticket_booth_client::*;

/// The handles every actor in the cinema is constructed with.
///
/// Cloning is cheap: each field is a mailbox sender plus an ID.
#[derive(Clone)]
pub struct CinemaClients {
    pub registry: RegistryClient,
    pub booth: TicketBoothClient,
    pub room: ScreeningRoomClient,
}
