//! # Operator
//!
//! The only driver of the screening room's lifecycle. Each pass of its loop
//! checks the registry once:
//!
//! - nobody left on the premises: close the room for the day and stop;
//! - otherwise run one show: open, board, project, let everybody out, clean.
//!
//! Because the check happens once per pass, the operator may run one show for an
//! empty room if the last customer leaves mid-cycle.

pub mod error;

pub use error::*;

use crate::clients::CinemaClients;
use crate::lifecycle::Category;
use crate::model::VisitorId;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How long each phase of a show lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowTimes {
    pub boarding: Duration,
    pub screening: Duration,
    pub cleaning: Duration,
}

/// Audience of one show, taken at the start of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub audience: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperatorReport {
    pub cycles: Vec<CycleReport>,
    /// Stopped by cancellation instead of closing the room.
    pub cancelled: bool,
}

impl OperatorReport {
    pub fn total_audience(&self) -> usize {
        self.cycles.iter().map(|c| c.audience).sum()
    }
}

/// Holds the operator back until every customer has registered.
///
/// Without it the operator could find the registry empty before the first
/// customer arrives and close the cinema for the day.
pub struct ArrivalGate {
    arrivals: mpsc::UnboundedReceiver<VisitorId>,
    expected: usize,
}

impl ArrivalGate {
    /// The sender is cloned into each customer.
    pub fn channel(expected: usize) -> (mpsc::UnboundedSender<VisitorId>, Self) {
        let (tx, arrivals) = mpsc::unbounded_channel();
        (tx, Self { arrivals, expected })
    }

    /// Resolves once `expected` arrivals were seen or every sender is gone.
    /// Returns the number of arrivals.
    pub async fn wait(mut self) -> usize {
        let mut arrived = 0;
        while arrived < self.expected {
            match self.arrivals.recv().await {
                Some(visitor) => {
                    arrived += 1;
                    debug!(category = %Category::Operator, %visitor, arrived, expected = self.expected, "Arrival");
                }
                None => break,
            }
        }
        arrived
    }
}

pub struct Operator {
    clients: CinemaClients,
    times: ShowTimes,
    cancel: CancellationToken,
    gate: Option<ArrivalGate>,
}

impl Operator {
    pub fn new(clients: CinemaClients, times: ShowTimes, cancel: CancellationToken) -> Self {
        Self {
            clients,
            times,
            cancel,
            gate: None,
        }
    }

    pub fn after_arrivals(mut self, gate: ArrivalGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub async fn run(mut self) -> Result<OperatorReport, OperatorError> {
        let mut report = OperatorReport::default();

        if let Some(gate) = self.gate.take() {
            tokio::select! {
                _ = self.cancel.cancelled() => return Ok(self.stopped(report)),
                arrived = gate.wait() => {
                    info!(category = %Category::Operator, arrived, "Everyone is in, starting the day");
                }
            }
        }

        let room = self.clients.room.clone();
        loop {
            if self.clients.registry.is_empty().await? {
                let closed = room.close().await?;
                info!(category = %Category::Operator, cycles = closed.cycle, "Nobody left in the cinema, closing for the day");
                return Ok(report);
            }

            let opened = room.open().await?;
            info!(category = %Category::Operator, cycle = opened.cycle, "The room is open");
            if !self.dwell(self.times.boarding).await {
                return Ok(self.stopped(report));
            }

            let projecting = room.start_projection().await?;
            report.cycles.push(CycleReport {
                cycle: projecting.cycle,
                audience: projecting.occupants,
            });
            if !self.dwell(self.times.screening).await {
                return Ok(self.stopped(report));
            }

            room.end_projection().await?;
            room.clean().await?;
            if !self.dwell(self.times.cleaning).await {
                return Ok(self.stopped(report));
            }
        }
    }

    /// Sleeps for one phase. `false` if cancelled first.
    async fn dwell(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(duration) => true,
        }
    }

    fn stopped(&self, mut report: OperatorReport) -> OperatorReport {
        warn!(category = %Category::Operator, shows = report.cycles.len(), "Cancelled, leaving the room as it is");
        report.cancelled = true;
        report
    }
}
