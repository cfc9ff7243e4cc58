//! [`ActorEntity`] implementation for [`Visitor`].

use super::error::RegistryError;
use crate::framework::ActorEntity;
use crate::lifecycle::Category;
use crate::model::{CustomerState, Visitor, VisitorCreate, VisitorId, VisitorUpdate};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Visitor {
    type Id = VisitorId;
    type Create = VisitorCreate;
    type Update = VisitorUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RegistryError;

    /// Registers a new arrival in the `Entering` state.
    fn from_create_params(id: VisitorId, params: VisitorCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            state: CustomerState::Entering,
        })
    }

    async fn on_update(&mut self, update: VisitorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        debug!(category = %Category::Cinema, visitor = %self.id, from = %self.state, to = %update.state, "Visitor state");
        self.state = update.state;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        debug!(category = %Category::Cinema, visitor = %self.id, name = %self.name, "Visitor left the premises");
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visitor_is_entering() {
        let visitor = Visitor::from_create_params(
            VisitorId(3),
            VisitorCreate { name: "Ada".into() },
        )
        .unwrap();
        assert_eq!(visitor.state, CustomerState::Entering);
        assert_eq!(visitor.id.to_string(), "visitor_3");
    }
}
