//! Waiter groups: broadcast wake-ups that cannot be lost.
//!
//! A [`WaiterGroup`] is a `watch` channel carrying a generation counter. Every
//! [`broadcast`](WaiterGroup::broadcast) bumps the generation and wakes every
//! [`Waiter`] subscribed before it.
//!
//! The room subscribes a waiter while it is still evaluating the admission
//! predicate, inside its own mailbox turn. A `watch::Receiver` remembers the last
//! generation it has seen, so any broadcast processed after that turn is observed
//! by `changed()`, even if the customer only starts waiting much later. That is the
//! "release the lock and wait" step of a monitor, without the window in between.

use tokio::sync::watch;

/// Owned by exactly one broadcaster; waiters only ever get a [`Waiter`].
#[derive(Debug)]
pub struct WaiterGroup {
    generation: watch::Sender<u64>,
}

impl Default for WaiterGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl WaiterGroup {
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation }
    }

    /// Registers a new waiter that will wake on the next broadcast.
    pub fn subscribe(&self) -> Waiter {
        Waiter {
            rx: self.generation.subscribe(),
        }
    }

    /// Wakes every waiter subscribed so far. Returns the new generation.
    pub(crate) fn broadcast(&self) -> u64 {
        self.generation.send_modify(|g| *g += 1);
        *self.generation.borrow()
    }

    /// Waiters currently subscribed and not yet dropped.
    pub fn waiting(&self) -> usize {
        self.generation.receiver_count()
    }
}

/// One customer's place in a waiter group.
#[derive(Debug)]
pub struct Waiter {
    rx: watch::Receiver<u64>,
}

/// The group's owner went away before broadcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("waiter group closed before broadcasting")]
pub struct WaitInterrupted;

impl Waiter {
    /// Suspends until the next broadcast and returns its generation.
    pub async fn wait(mut self) -> Result<u64, WaitInterrupted> {
        self.rx.changed().await.map_err(|_| WaitInterrupted)?;
        let generation = *self.rx.borrow_and_update();
        Ok(generation)
    }
}
