//! The room's two waiter groups.

use crate::model::WaiterGroup;

/// Context of the screening room actor.
///
/// The actor owns it for its whole run and drops it on exit, which interrupts
/// anybody still waiting. Only the room's handlers can broadcast.
#[derive(Debug, Default)]
pub struct RoomSignals {
    /// Woken on every transition into `Exiting`.
    screening_over: WaiterGroup,
    /// Woken on every transition into `Open`.
    next_cycle: WaiterGroup,
}

impl RoomSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn screening_over(&self) -> &WaiterGroup {
        &self.screening_over
    }

    pub(crate) fn next_cycle(&self) -> &WaiterGroup {
        &self.next_cycle
    }
}
