use super::{Category, CinemaError, Premises};
use crate::clients::CinemaClients;
use crate::config::CinemaConfig;
use crate::customer::{Customer, CustomerOutcome};
use crate::model::RoomState;
use crate::names::NameSource;
use crate::operator::{ArrivalGate, Operator, OperatorError, OperatorReport, ShowTimes};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// One day at the cinema: the premises plus every customer and the operator.
///
/// # Example
///
/// ```ignore
/// let mut names = GuestNumbers::default();
/// let cinema = Cinema::open(CinemaConfig::default(), &mut names).await?;
/// let summary = cinema.run_to_completion().await?;
/// assert_eq!(summary.watched() + summary.no_ticket(), 8);
/// ```
pub struct Cinema {
    premises: Premises,
    cancel: CancellationToken,
    customers: Vec<(String, JoinHandle<CustomerOutcome>)>,
    operator: JoinHandle<Result<OperatorReport, OperatorError>>,
    deadline: Option<JoinHandle<()>>,
}

/// How the day went.
#[derive(Debug, Clone)]
pub struct CinemaSummary {
    /// Every customer's name and outcome, in spawn order.
    pub outcomes: Vec<(String, CustomerOutcome)>,
    pub operator: OperatorReport,
    pub tickets_remaining: u32,
    pub room_state: RoomState,
}

impl CinemaSummary {
    fn count(&self, pred: impl Fn(&CustomerOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn no_ticket(&self) -> usize {
        self.count(|o| matches!(o, CustomerOutcome::NoTicket))
    }

    pub fn watched(&self) -> usize {
        self.count(CustomerOutcome::watched)
    }

    pub fn cancelled(&self) -> usize {
        self.count(|o| matches!(o, CustomerOutcome::Cancelled))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CustomerOutcome::Failed(_)))
    }
}

impl Cinema {
    /// Validates `config`, opens the premises and lets the customers in.
    ///
    /// The operator starts only once every customer has registered.
    pub async fn open(
        config: CinemaConfig,
        names: &mut dyn NameSource,
    ) -> Result<Self, CinemaError> {
        config.validate()?;
        let premises = Premises::open(&config).await?;
        let cancel = CancellationToken::new();
        let (arrivals, gate) = ArrivalGate::channel(config.client_count);

        let customers = (0..config.client_count)
            .map(|_| {
                let name = names.next_name();
                let customer = Customer::new(
                    name.clone(),
                    premises.clients.clone(),
                    config.departure(),
                    cancel.clone(),
                )
                .announce_arrival_to(arrivals.clone());
                (name, tokio::spawn(customer.run()))
            })
            .collect();
        drop(arrivals);

        let times = ShowTimes {
            boarding: config.boarding(),
            screening: config.screening(),
            cleaning: config.cleaning(),
        };
        let operator = tokio::spawn(
            Operator::new(premises.clients.clone(), times, cancel.clone())
                .after_arrivals(gate)
                .run(),
        );

        let deadline = config.deadline().map(|after| {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    _ = tokio::time::sleep(after) => {
                        warn!(category = %Category::Cinema, ?after, "Deadline reached, sending everyone home");
                        cancel.cancel();
                    }
                }
            })
        });

        info!(category = %Category::Cinema, customers = config.client_count, "Doors open");
        Ok(Self {
            premises,
            cancel,
            customers,
            operator,
            deadline,
        })
    }

    /// Handles to the shared resources, e.g. for observing the room mid-run.
    pub fn clients(&self) -> &CinemaClients {
        &self.premises.clients
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Waits for every customer and the operator, then shuts the premises down.
    pub async fn run_to_completion(self) -> Result<CinemaSummary, CinemaError> {
        let Cinema {
            premises,
            cancel,
            customers,
            operator,
            deadline,
        } = self;

        let mut outcomes = Vec::with_capacity(customers.len());
        for (name, handle) in customers {
            let outcome = handle
                .await
                .map_err(|e| CinemaError::TaskFailed(format!("customer {name}: {e}")))?;
            outcomes.push((name, outcome));
        }
        let report = operator
            .await
            .map_err(|e| CinemaError::TaskFailed(format!("operator: {e}")))??;
        if let Some(deadline) = deadline {
            deadline.abort();
        }
        drop(cancel);

        let tickets_remaining = premises
            .clients
            .booth
            .remaining()
            .await
            .map_err(|e| CinemaError::Resource(e.to_string()))?;
        let room_state = premises
            .clients
            .room
            .snapshot()
            .await
            .map_err(|e| CinemaError::Resource(e.to_string()))?
            .state;
        premises.shutdown().await?;

        let summary = CinemaSummary {
            outcomes,
            operator: report,
            tickets_remaining,
            room_state,
        };
        info!(
            category = %Category::Cinema,
            watched = summary.watched(),
            no_ticket = summary.no_ticket(),
            cancelled = summary.cancelled(),
            failed = summary.failed(),
            shows = summary.operator.cycles.len(),
            "The cinema is closed"
        );
        Ok(summary)
    }

    /// Cancels every wait and dwell, then collects whatever state the day ended in.
    pub async fn shutdown(self) -> Result<CinemaSummary, CinemaError> {
        info!(category = %Category::Cinema, "Shutting down");
        self.cancel.cancel();
        self.run_to_completion().await
    }
}
