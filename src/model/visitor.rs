/// A customer currently on the premises.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing the visitor registry to be a [`ResourceActor`](crate::framework::ResourceActor):
/// creating a `Visitor` is a customer arriving, deleting it is the customer leaving.
///
/// See [`impl ActorEntity for Visitor`](#impl-ActorEntity-for-Visitor) for details on:
/// - Creation parameters ([`VisitorCreate`])
/// - Update parameters ([`VisitorUpdate`])
use std::fmt::Display;

/// Type-safe identifier for visitors, allocated by the registry on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisitorId(pub u32);

impl From<u32> for VisitorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "visitor_{}", self.0)
    }
}

/// Where a customer is in its visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerState {
    NoTicket,
    HasTicket,
    Watching,
    Entering,
    Exiting,
}

impl CustomerState {
    /// Human-readable line logged when a customer reaches this state.
    pub fn describe(self) -> &'static str {
        match self {
            CustomerState::NoTicket => "didn't get a ticket",
            CustomerState::HasTicket => {
                "has just bought a ticket and is heading towards the projection room"
            }
            CustomerState::Watching => "just entered the projection room",
            CustomerState::Entering => "is entering the cinema",
            CustomerState::Exiting => "is exiting the cinema",
        }
    }
}

impl Display for CustomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CustomerState::NoTicket => "no-ticket",
            CustomerState::HasTicket => "has-ticket",
            CustomerState::Watching => "watching",
            CustomerState::Entering => "entering",
            CustomerState::Exiting => "exiting",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visitor {
    pub id: VisitorId,
    pub name: String,
    pub state: CustomerState,
}

/// Payload for registering a visitor.
#[derive(Debug, Clone)]
pub struct VisitorCreate {
    pub name: String,
}

/// Payload for mirroring a customer's state into the registry.
#[derive(Debug, Clone)]
pub struct VisitorUpdate {
    pub state: CustomerState,
}
