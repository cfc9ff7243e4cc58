//! [`ActorEntity`] implementation for [`TicketBooth`].

use super::actions::{BoothAction, TicketOutcome};
use super::error::TicketBoothError;
use crate::framework::ActorEntity;
use crate::lifecycle::Category;
use crate::model::{BoothId, TicketBooth, TicketBoothCreate};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for TicketBooth {
    type Id = BoothId;
    type Create = TicketBoothCreate;
    type Update = ();
    type Action = BoothAction;
    type ActionResult = TicketOutcome;
    type Context = ();
    type Error = TicketBoothError;

    fn from_create_params(id: BoothId, params: TicketBoothCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.capacity))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        info!(category = %Category::TicketCounter, capacity = self.capacity, "Ticket booth open");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    /// # Actions
    /// - `TryIssue`: decrements `remaining` when positive; always logs the count left.
    async fn handle_action(
        &mut self,
        action: BoothAction,
        _ctx: &(),
    ) -> Result<TicketOutcome, Self::Error> {
        match action {
            BoothAction::TryIssue => {
                let outcome = if self.remaining > 0 {
                    self.remaining -= 1;
                    TicketOutcome::Issued {
                        remaining: self.remaining,
                    }
                } else {
                    TicketOutcome::Denied
                };
                info!(category = %Category::TicketCounter, remaining = self.remaining, "Tickets remaining");
                Ok(outcome)
            }
        }
    }
}
