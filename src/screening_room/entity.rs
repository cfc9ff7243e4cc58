//! [`ActorEntity`] implementation for [`ScreeningRoom`].
//!
//! All the room's rules live here; the actor guarantees each handler runs alone.

use super::actions::{Admission, RoomAction, RoomActionResult};
use super::error::RoomError;
use super::signals::RoomSignals;
use crate::framework::ActorEntity;
use crate::lifecycle::Category;
use crate::model::{RoomCreate, RoomId, RoomReport, RoomState, ScreeningRoom, VisitorId};
use async_trait::async_trait;
use tracing::{debug, info, warn};

impl ScreeningRoom {
    fn admit(&mut self, signals: &RoomSignals, visitor: VisitorId, name: String) -> Admission {
        if self.is_occupant(visitor) {
            return Admission::Admitted {
                cycle: self.cycle,
                screening_over: signals.screening_over().subscribe(),
            };
        }

        if self.has_free_seat() {
            self.occupants.insert(visitor, name);
            debug!(
                category = %Category::ScreeningRoom,
                %visitor,
                occupants = self.occupants.len(),
                capacity = self.capacity,
                "Seat taken"
            );
            Admission::Admitted {
                cycle: self.cycle,
                screening_over: signals.screening_over().subscribe(),
            }
        } else {
            info!(
                category = %Category::ScreeningRoom,
                %visitor,
                name = %name,
                state = %self.state,
                occupants = self.occupants.len(),
                "The client has to wait for the next projection"
            );
            Admission::Rejected {
                state: self.state,
                next_cycle: signals.next_cycle().subscribe(),
            }
        }
    }

    fn leave(&mut self, visitor: VisitorId) -> bool {
        match self.occupants.remove(&visitor) {
            Some(name) => {
                if matches!(self.state, RoomState::Open | RoomState::Projecting) {
                    warn!(category = %Category::ScreeningRoom, %visitor, state = %self.state, "Left before the film ended");
                }
                info!(category = %Category::ScreeningRoom, %visitor, name = %name, "The client just left the projection room");
                true
            }
            None => {
                debug!(category = %Category::ScreeningRoom, %visitor, "Leave ignored, not seated");
                false
            }
        }
    }

    fn transition(
        &mut self,
        signals: &RoomSignals,
        next: RoomState,
    ) -> Result<RoomReport, RoomError> {
        if !self.state.can_transition_to(next) {
            return Err(RoomError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        if next == RoomState::Open && self.shut_for_the_day {
            return Err(RoomError::ShutForTheDay);
        }

        self.state = next;
        match next {
            RoomState::Open => {
                self.cycle += 1;
                info!(category = %Category::ScreeningRoom, state = %next, cycle = self.cycle, "Room state changed");
                signals.next_cycle().broadcast();
            }
            RoomState::Projecting => {
                info!(category = %Category::ScreeningRoom, state = %next, cycle = self.cycle, "Room state changed");
                info!(category = %Category::ScreeningRoom, "{} clients are enjoying the film", self.occupants.len());
            }
            RoomState::Exiting => {
                info!(category = %Category::ScreeningRoom, state = %next, cycle = self.cycle, "Room state changed");
                signals.screening_over().broadcast();
            }
            RoomState::Cleaning => {
                info!(category = %Category::ScreeningRoom, state = %next, cycle = self.cycle, "Room state changed");
            }
            RoomState::Closed => {
                self.shut_for_the_day = true;
                info!(category = %Category::ScreeningRoom, state = %next, cycles = self.cycle, "Room state changed");
            }
        }

        Ok(RoomReport {
            state: self.state,
            occupants: self.occupants.len(),
            cycle: self.cycle,
        })
    }
}

#[async_trait]
impl ActorEntity for ScreeningRoom {
    type Id = RoomId;
    type Create = RoomCreate;
    type Update = ();
    type Action = RoomAction;
    type ActionResult = RoomActionResult;
    type Context = RoomSignals;
    type Error = RoomError;

    fn from_create_params(id: RoomId, params: RoomCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.capacity))
    }

    async fn on_create(&mut self, _ctx: &RoomSignals) -> Result<(), Self::Error> {
        info!(category = %Category::ScreeningRoom, state = %self.state, capacity = self.capacity, "Room ready");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &RoomSignals) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RoomAction,
        signals: &RoomSignals,
    ) -> Result<RoomActionResult, Self::Error> {
        match action {
            RoomAction::Admit { visitor, name } => {
                Ok(RoomActionResult::Admit(self.admit(signals, visitor, name)))
            }
            RoomAction::Leave { visitor } => Ok(RoomActionResult::Leave(self.leave(visitor))),
            RoomAction::Transition(next) => self
                .transition(signals, next)
                .map(RoomActionResult::Transition),
        }
    }
}
