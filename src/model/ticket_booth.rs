/// The ticket counter: a bounded, decrementing stock of tickets.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
/// Exactly one booth exists per cinema; its actor's mailbox is the critical
/// section every sale goes through.
use std::fmt::Display;

/// Type-safe identifier for ticket booths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoothId(pub u32);

impl From<u32> for BoothId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BoothId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "booth_{}", self.0)
    }
}

/// Invariant: `remaining <= capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketBooth {
    pub id: BoothId,
    pub capacity: u32,
    pub remaining: u32,
}

impl TicketBooth {
    pub fn new(id: BoothId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            remaining: capacity,
        }
    }

    /// Tickets handed out so far.
    pub fn issued(&self) -> u32 {
        self.capacity - self.remaining
    }
}

#[derive(Debug, Clone)]
pub struct TicketBoothCreate {
    pub capacity: u32,
}
