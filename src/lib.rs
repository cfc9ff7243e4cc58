//! # Cinema Recipe
//!
//! > **A day at a small cinema, built from resource-oriented actors.**
//!
//! Customers compete for two scarce resources, a ticket booth and a screening
//! room, while an operator drives the room through its show cycle. Every shared
//! resource is owned by exactly one actor; nothing in the crate takes a lock.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner per resource
//! The ticket booth, the screening room and the visitor registry each live inside a
//! [`ResourceActor`](framework::ResourceActor). The actor's mailbox is the resource's
//! private critical section: requests are handled one at a time, and no caller ever
//! holds two resources at once.
//!
//! ### Waiting without lost wake-ups
//! Customers block on the room's two waiter groups (film over, next opening). A
//! waiter is registered inside the same mailbox turn that refused or admitted the
//! customer, so a transition can never slip in between the check and the wait.
//! See [`model::waiters`].
//!
//! ### Cancellation
//! Every wait and every dwell races a shared
//! [`CancellationToken`](tokio_util::sync::CancellationToken), driven by
//! [`Cinema::shutdown`](lifecycle::Cinema::shutdown) or a configured deadline.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>` / `ResourceClient<T>` plumbing and the [`ActorEntity`](framework::ActorEntity) trait.
//!
//! ### 2. The Resources ([`ticket_booth`], [`screening_room`], [`registry`])
//! `ActorEntity` implementations over the data in [`model`].
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients: [`TicketBoothClient`](clients::TicketBoothClient),
//! [`ScreeningRoomClient`](clients::ScreeningRoomClient), [`RegistryClient`](clients::RegistryClient).
//!
//! ### 4. The Actors ([`customer`], [`operator`])
//! Plain Tokio tasks that only talk to resources through the clients.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Cinema`](lifecycle::Cinema) wires everything together from a [`config::CinemaConfig`].
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CINEMA_CLIENT_COUNT=20 CINEMA_SCREENING_MS=1000 cargo run
//! ```

pub mod clients;
pub mod config;
pub mod customer;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod names;
pub mod operator;
pub mod registry;
pub mod screening_room;
pub mod ticket_booth;
