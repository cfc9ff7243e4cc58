//! Custom actions for the screening room.

use crate::model::{RoomReport, RoomState, VisitorId, Waiter};

#[derive(Debug, Clone)]
pub enum RoomAction {
    /// Take a seat if the room is open and not full. Never blocks inside the room.
    Admit { visitor: VisitorId, name: String },
    /// Give the seat back. A no-op for visitors who are not seated.
    Leave { visitor: VisitorId },
    /// Move the lifecycle on. Issued by the operator only.
    Transition(RoomState),
}

/// Results from [`RoomAction`]s - variants match 1:1.
#[derive(Debug)]
pub enum RoomActionResult {
    Admit(Admission),
    /// `true` if the visitor was seated.
    Leave(bool),
    Transition(RoomReport),
}

/// Answer to an admission request.
#[derive(Debug)]
pub enum Admission {
    /// Seated for `cycle`; wait on `screening_over` for the end of the film.
    Admitted { cycle: u64, screening_over: Waiter },
    /// Not accepting entrants right now; wait on `next_cycle` and try again.
    Rejected { state: RoomState, next_cycle: Waiter },
}
