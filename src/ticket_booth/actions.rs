//! Custom actions for the ticket booth.

/// Operations on a [`TicketBooth`](crate::model::TicketBooth) beyond CRUD.
#[derive(Debug, Clone)]
pub enum BoothAction {
    /// Sell one ticket if any are left.
    TryIssue,
}

/// Result of a single sale attempt. A denial is final for that attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketOutcome {
    Issued { remaining: u32 },
    Denied,
}
