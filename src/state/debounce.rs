/// Cancellable timer for search-as-you-type
///
/// Every keystroke schedules a new recomputation and cancels the pending one.
/// Only the ticket that is still pending when its timer elapses is allowed to fire.

use std::time::Duration;

/// Handle for one scheduled recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Last ticket handed out
    generation: u64,
    /// Ticket that may still fire
    pending: Option<u64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel whatever is pending and schedule a new recomputation
    pub fn schedule(&mut self) -> Ticket {
        self.cancel();
        self.generation += 1;
        self.pending = Some(self.generation);
        Ticket(self.generation)
    }

    /// Drop the pending recomputation, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consume `ticket` once its timer elapsed
    ///
    /// Returns true only if the ticket is still the pending one.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Sleep for `delay`, then hand the ticket back to the caller
pub async fn wait(delay: Duration, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}
