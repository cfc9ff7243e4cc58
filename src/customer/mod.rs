//! # Customer
//!
//! One task per customer, walking through the visit:
//!
//! 1. register with the visitor registry and signal arrival;
//! 2. try to buy a ticket, leaving straight away if the booth is sold out;
//! 3. ask the room for a seat until one is granted, waiting for the next opening
//!    after every refusal;
//! 4. watch until the room announces the end of the film, give the seat back,
//!    linger briefly and leave the premises.
//!
//! Every wait is raced against the cinema's [`CancellationToken`]. A cancelled
//! customer gives its seat back and deregisters on a best-effort basis.

pub mod error;

pub use error::*;

use crate::clients::CinemaClients;
use crate::lifecycle::Category;
use crate::model::{CustomerState, VisitorId, Waiter};
use crate::screening_room::Admission;
use crate::ticket_booth::TicketOutcome;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How a customer's visit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerOutcome {
    /// The booth was sold out.
    NoTicket,
    /// Saw the film shown in `cycle`.
    Watched { cycle: u64 },
    /// The cinema shut down first.
    Cancelled,
    Failed(CustomerError),
}

impl CustomerOutcome {
    pub fn watched(&self) -> bool {
        matches!(self, CustomerOutcome::Watched { .. })
    }
}

pub struct Customer {
    name: String,
    state: CustomerState,
    clients: CinemaClients,
    departure: Duration,
    cancel: CancellationToken,
    arrivals: Option<mpsc::UnboundedSender<VisitorId>>,
}

/// Result of racing a wait against cancellation.
enum Woken<T> {
    Done(T),
    Cancelled,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        clients: CinemaClients,
        departure: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            name: name.into(),
            state: CustomerState::Entering,
            clients,
            departure,
            cancel,
            arrivals: None,
        }
    }

    /// Reports the registered ID on `arrivals` once the customer is on the premises.
    pub fn announce_arrival_to(mut self, arrivals: mpsc::UnboundedSender<VisitorId>) -> Self {
        self.arrivals = Some(arrivals);
        self
    }

    /// Runs the whole visit. Failures are reported in the outcome, never propagated.
    pub async fn run(mut self) -> CustomerOutcome {
        let visitor = match self.clients.registry.enter(&self.name).await {
            Ok(visitor) => visitor,
            Err(e) => {
                warn!(category = %Category::Customer, name = %self.name, error = %e, "Could not enter the cinema");
                return CustomerOutcome::Failed(e.into());
            }
        };
        info!(category = %Category::Customer, %visitor, name = %self.name, "{}", self.state.describe());
        if let Some(arrivals) = self.arrivals.take() {
            // The gate only stops listening once the operator is already running.
            let _ = arrivals.send(visitor);
        }

        match self.visit(visitor).await {
            Ok(Woken::Done(outcome)) => outcome,
            Ok(Woken::Cancelled) => {
                debug!(category = %Category::Customer, %visitor, name = %self.name, state = %self.state, "Visit cancelled");
                self.abandon(visitor).await;
                CustomerOutcome::Cancelled
            }
            Err(e) => {
                warn!(category = %Category::Customer, %visitor, name = %self.name, error = %e, "Visit cut short");
                self.abandon(visitor).await;
                CustomerOutcome::Failed(e)
            }
        }
    }

    async fn visit(&mut self, visitor: VisitorId) -> Result<Woken<CustomerOutcome>, CustomerError> {
        if self.cancel.is_cancelled() {
            return Ok(Woken::Cancelled);
        }

        if let TicketOutcome::Denied = self.clients.booth.try_issue().await? {
            self.set_state(visitor, CustomerState::NoTicket).await?;
            self.depart(visitor).await?;
            return Ok(Woken::Done(CustomerOutcome::NoTicket));
        }
        self.set_state(visitor, CustomerState::HasTicket).await?;

        loop {
            match self.clients.room.enter(visitor, &self.name).await? {
                Admission::Admitted {
                    cycle,
                    screening_over,
                } => {
                    self.set_state(visitor, CustomerState::Watching).await?;
                    if let Woken::Cancelled = self.wait(screening_over).await? {
                        return Ok(Woken::Cancelled);
                    }
                    self.clients.room.leave(visitor).await?;
                    // The film is over either way; cancelling only cuts the lingering short.
                    if let Woken::Cancelled = self.pause(self.departure).await {
                        debug!(category = %Category::Customer, %visitor, name = %self.name, "Departure cut short");
                    }
                    self.depart(visitor).await?;
                    return Ok(Woken::Done(CustomerOutcome::Watched { cycle }));
                }
                Admission::Rejected { next_cycle, .. } => {
                    if let Woken::Cancelled = self.wait(next_cycle).await? {
                        return Ok(Woken::Cancelled);
                    }
                }
            }
        }
    }

    async fn wait(&self, waiter: Waiter) -> Result<Woken<()>, CustomerError> {
        tokio::select! {
            _ = self.cancel.cancelled() => Ok(Woken::Cancelled),
            woke = waiter.wait() => {
                let generation = woke?;
                debug!(category = %Category::Customer, name = %self.name, generation, "Woken");
                Ok(Woken::Done(()))
            }
        }
    }

    async fn pause(&self, duration: Duration) -> Woken<()> {
        tokio::select! {
            _ = self.cancel.cancelled() => Woken::Cancelled,
            _ = tokio::time::sleep(duration) => Woken::Done(()),
        }
    }

    async fn set_state(&mut self, visitor: VisitorId, state: CustomerState) -> Result<(), CustomerError> {
        self.state = state;
        self.clients.registry.record_state(visitor, state).await?;
        info!(category = %Category::Customer, %visitor, name = %self.name, "{}", state.describe());
        Ok(())
    }

    async fn depart(&mut self, visitor: VisitorId) -> Result<(), CustomerError> {
        self.state = CustomerState::Exiting;
        info!(category = %Category::Customer, %visitor, name = %self.name, "{}", self.state.describe());
        self.clients.registry.exit(visitor).await?;
        Ok(())
    }

    /// Best-effort cleanup after a cancelled or failed visit.
    async fn abandon(&mut self, visitor: VisitorId) {
        if let Err(e) = self.clients.room.leave(visitor).await {
            debug!(category = %Category::Customer, %visitor, error = %e, "Could not give the seat back");
        }
        if let Err(e) = self.depart(visitor).await {
            debug!(category = %Category::Customer, %visitor, error = %e, "Could not deregister");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CinemaConfig;
    use crate::lifecycle::Premises;
    use crate::model::RoomState;

    async fn premises(tickets: u32, seats: usize) -> Premises {
        let config = CinemaConfig {
            ticket_capacity: tickets,
            room_capacity: seats,
            ..CinemaConfig::default()
        };
        Premises::open(&config).await.unwrap()
    }

    fn customer(name: &str, premises: &Premises, cancel: &CancellationToken) -> Customer {
        lingering_customer(name, premises, cancel, Duration::from_millis(10))
    }

    fn lingering_customer(
        name: &str,
        premises: &Premises,
        cancel: &CancellationToken,
        departure: Duration,
    ) -> Customer {
        Customer::new(name, premises.clients.clone(), departure, cancel.clone())
    }

    async fn wait_for_occupants(premises: &Premises, seated: usize) {
        while premises.clients.room.snapshot().await.unwrap().occupants.len() < seated {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sold_out_customer_leaves_without_a_ticket() {
        let premises = premises(0, 2).await;
        let cancel = CancellationToken::new();

        let outcome = customer("Ada", &premises, &cancel).run().await;

        assert_eq!(outcome, CustomerOutcome::NoTicket);
        assert!(premises.clients.registry.is_empty().await.unwrap());
        premises.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_customer_watches_until_the_film_ends() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        let (arrivals, mut arrived) = mpsc::unbounded_channel();
        let room = premises.clients.room.clone();

        room.open().await.unwrap();
        let visit = tokio::spawn(
            customer("Ada", &premises, &cancel)
                .announce_arrival_to(arrivals)
                .run(),
        );
        let visitor = arrived.recv().await.unwrap();
        loop {
            let members = premises.clients.registry.members().await.unwrap();
            assert_eq!(members[0].id, visitor);
            if members[0].state == CustomerState::Watching {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(room.snapshot().await.unwrap().is_occupant(visitor));

        room.start_projection().await.unwrap();
        assert!(!visit.is_finished());
        room.end_projection().await.unwrap();

        assert_eq!(visit.await.unwrap(), CustomerOutcome::Watched { cycle: 1 });
        assert!(room.snapshot().await.unwrap().occupants.is_empty());
        assert!(premises.clients.registry.is_empty().await.unwrap());
        drop(room);
        premises.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_customer_retries_on_the_next_opening() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        let room = premises.clients.room.clone();

        // Arrives while the room is still closed.
        let visit = tokio::spawn(customer("Bruno", &premises, &cancel).run());
        while premises.clients.registry.headcount().await.unwrap() == 0 {
            tokio::task::yield_now().await;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(room.snapshot().await.unwrap().state, RoomState::Closed);

        room.open().await.unwrap();
        wait_for_occupants(&premises, 1).await;
        room.start_projection().await.unwrap();
        room.end_projection().await.unwrap();

        assert_eq!(visit.await.unwrap(), CustomerOutcome::Watched { cycle: 1 });
        drop(room);
        premises.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_customer_gives_back_seat_and_deregisters() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        premises.clients.room.open().await.unwrap();

        let visit = tokio::spawn(customer("Chloé", &premises, &cancel).run());
        wait_for_occupants(&premises, 1).await;
        cancel.cancel();

        assert_eq!(visit.await.unwrap(), CustomerOutcome::Cancelled);
        assert!(premises.clients.room.snapshot().await.unwrap().occupants.is_empty());
        assert!(premises.clients.registry.is_empty().await.unwrap());
        premises.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_losing_the_room_interrupts_the_wait() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        premises.clients.room.open().await.unwrap();

        let visit = tokio::spawn(customer("Dmitri", &premises, &cancel).run());
        wait_for_occupants(&premises, 1).await;
        premises.abort_room();

        assert_eq!(
            visit.await.unwrap(),
            CustomerOutcome::Failed(CustomerError::InterruptedWait(
                crate::model::WaitInterrupted
            ))
        );
        assert!(premises.clients.registry.is_empty().await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_departure_still_counts_the_film() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        let room = premises.clients.room.clone();
        room.open().await.unwrap();

        let visit = tokio::spawn(
            lingering_customer("Elena", &premises, &cancel, Duration::from_secs(60)).run(),
        );
        wait_for_occupants(&premises, 1).await;
        room.start_projection().await.unwrap();
        room.end_projection().await.unwrap();
        while !room.snapshot().await.unwrap().occupants.is_empty() {
            tokio::task::yield_now().await;
        }
        cancel.cancel();

        assert_eq!(visit.await.unwrap(), CustomerOutcome::Watched { cycle: 1 });
        assert!(premises.clients.registry.is_empty().await.unwrap());
        drop(room);
        premises.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_held_snapshot_does_not_keep_waiters_alive() {
        let premises = premises(1, 1).await;
        let cancel = CancellationToken::new();
        premises.clients.room.open().await.unwrap();

        let visit = tokio::spawn(customer("Farid", &premises, &cancel).run());
        wait_for_occupants(&premises, 1).await;
        let snapshot = premises.clients.room.snapshot().await.unwrap();
        premises.abort_room();

        assert_eq!(
            visit.await.unwrap(),
            CustomerOutcome::Failed(CustomerError::InterruptedWait(
                crate::model::WaitInterrupted
            ))
        );
        assert!(snapshot.is_occupant(crate::model::VisitorId(1)));
    }
}
