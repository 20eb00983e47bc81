//! Lifecycle of a single in-flight backend request.
//!
//! A `Request` hands out a ticket per attempt. Only the holder of the current
//! ticket may settle it, so a superseded or cancelled attempt that resolves
//! late cannot overwrite newer state.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestStatus<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(ApiError),
    Cancelled,
}

impl<T> Default for RequestStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Proof of which attempt a completion belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request<T> {
    status: RequestStatus<T>,
    generation: u64,
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self { status: RequestStatus::Idle, generation: 0 }
    }
}

impl<T> Request<T> {
    #[must_use]
    pub fn status(&self) -> &RequestStatus<T> {
        &self.status
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.status, RequestStatus::Idle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.status {
            RequestStatus::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            RequestStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Begin a new attempt, superseding any pending one.
    pub fn start(&mut self) -> RequestTicket {
        self.generation += 1;
        self.status = RequestStatus::Pending;
        RequestTicket(self.generation)
    }

    /// Record the outcome of `ticket`'s attempt. Returns `false` and changes
    /// nothing when the attempt was superseded, cancelled or already settled.
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation || !self.is_pending() {
            return false;
        }
        self.status = match result {
            Ok(value) => RequestStatus::Succeeded(value),
            Err(e) => RequestStatus::Failed(e),
        };
        true
    }

    /// Abandon the pending attempt, if any.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.generation += 1;
        self.status = RequestStatus::Cancelled;
        true
    }

    /// Forget any outcome and invalidate outstanding tickets.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = RequestStatus::Idle;
    }
}
