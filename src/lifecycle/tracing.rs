//! # Observability & Tracing
//!
//! Structured logging for the whole cinema, built on `tracing`.
//!
//! Every domain event carries a `category` field naming the part of the cinema that
//! emitted it (see [`Category`]); customers additionally carry their `visitor` ID and
//! `name`. Mailbox plumbing in [`framework`](crate::framework) logs at `debug`/`trace`,
//! so `RUST_LOG=info` shows only the story of the day:
//!
//! ```text
//! INFO 6 tickets for today category=cinema
//! INFO is entering the cinema category=customer visitor=visitor_1 name="Ada"
//! INFO Tickets remaining category=ticket-counter remaining=5
//! INFO Room state changed category=screening-room state=OPEN cycle=1
//! INFO just entered the projection room category=customer visitor=visitor_1 name="Ada"
//! INFO 4 clients are enjoying the film category=screening-room
//! ```
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run                       # the story of the day
//! RUST_LOG=debug cargo run                      # plus actor lifecycles
//! RUST_LOG=cinema_recipe::framework=trace cargo run
//! ```

use std::fmt::Display;

/// The part of the cinema an event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cinema,
    Customer,
    Operator,
    TicketCounter,
    ScreeningRoom,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Cinema => "cinema",
            Category::Customer => "customer",
            Category::Operator => "operator",
            Category::TicketCounter => "ticket-counter",
            Category::ScreeningRoom => "screening-room",
        };
        f.write_str(label)
    }
}

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG`; falls back to `info` when it is unset or unparsable.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
