/// The screening room: a capacity-bounded set of occupants plus a cyclic lifecycle.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
/// Its actor serialises admissions, departures and the operator's transitions.
/// The waiter groups customers block on are the actor's context
/// ([`RoomSignals`](crate::screening_room::RoomSignals)), not part of the entity, so
/// a snapshot of the room is plain data.
///
/// See [`RoomAction`](crate::screening_room::RoomAction) for the operations.
use crate::model::VisitorId;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for screening rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub u32);

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room_{}", self.0)
    }
}

/// Lifecycle of the room, cycling
/// `Closed -> Open -> Projecting -> Exiting -> Cleaning -> Open -> ...`
/// until the operator closes it for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomState {
    Closed,
    Open,
    Projecting,
    Exiting,
    Cleaning,
}

impl RoomState {
    /// Whether the lifecycle permits moving from `self` to `next`.
    ///
    /// `Closed -> Closed` is allowed so an operator that finds nobody on the premises
    /// before the first show can still close the room for the day.
    pub fn can_transition_to(self, next: RoomState) -> bool {
        use RoomState::*;
        matches!(
            (self, next),
            (Closed, Open)
                | (Closed, Closed)
                | (Open, Projecting)
                | (Projecting, Exiting)
                | (Exiting, Cleaning)
                | (Cleaning, Open)
                | (Cleaning, Closed)
        )
    }

    /// Occupants may only be added in this state.
    pub fn admits_entrants(self) -> bool {
        self == RoomState::Open
    }
}

impl Display for RoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoomState::Closed => "CLOSED",
            RoomState::Open => "OPEN",
            RoomState::Projecting => "PROJECTING",
            RoomState::Exiting => "EXITING",
            RoomState::Cleaning => "CLEANING",
        };
        f.write_str(label)
    }
}

/// Invariants:
/// - `occupants.len() <= capacity`
/// - occupants are only added while `state == Open`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningRoom {
    pub id: RoomId,
    pub capacity: usize,
    pub state: RoomState,
    /// Occupant IDs with their display names.
    pub occupants: BTreeMap<VisitorId, String>,
    /// Number of times the room has opened.
    pub cycle: u64,
    /// Set once the operator closes the room; it never reopens afterwards.
    pub shut_for_the_day: bool,
}

impl ScreeningRoom {
    pub fn new(id: RoomId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            state: RoomState::Closed,
            occupants: BTreeMap::new(),
            cycle: 0,
            shut_for_the_day: false,
        }
    }

    /// The admission predicate: open and not full.
    pub fn has_free_seat(&self) -> bool {
        self.state.admits_entrants() && self.occupants.len() < self.capacity
    }

    pub fn is_occupant(&self, visitor: VisitorId) -> bool {
        self.occupants.contains_key(&visitor)
    }
}

#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub capacity: usize,
}

/// What the room looked like right after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomReport {
    pub state: RoomState,
    pub occupants: usize,
    pub cycle: u64,
}
