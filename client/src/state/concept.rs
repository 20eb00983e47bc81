//! Daily-concept view state for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard walks `checking session → authenticated (fetching) →
//! authenticated (showing concept | showing error)`. The category defaults
//! to the user's first interest; a fetch fires once per category, and only a
//! category change (or logout) leaves the terminal state.

#[cfg(test)]
#[path = "concept_test.rs"]
mod concept_test;

use super::auth::AuthState;
use super::request::{Request, RequestStatus, RequestTicket};
use crate::net::error::ApiError;
use crate::net::types::{Concept, User};

/// What the dashboard's concept area should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    /// Stored session not read yet.
    Checking,
    /// No session; the page redirects to login.
    Unauthenticated,
    /// Authenticated without a category: greeting only.
    Greeting,
    Fetching,
    Showing(Concept),
    Failed(ApiError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyConceptState {
    pub category: String,
    pub request: Request<Concept>,
}

impl DailyConceptState {
    /// Default the category to the user's first interest when none has been
    /// chosen. Returns whether the category changed.
    pub fn adopt_default_category(&mut self, user: &User) -> bool {
        if !self.category.is_empty() {
            return false;
        }
        match user.interests.first() {
            Some(first) => {
                self.category.clone_from(first);
                true
            }
            None => false,
        }
    }

    /// Switch to `category`, discarding the held concept. No-op when it is
    /// already selected.
    pub fn select_category(&mut self, category: &str) -> bool {
        if self.category == category {
            return false;
        }
        category.clone_into(&mut self.category);
        self.request.reset();
        true
    }

    /// A fetch is due: there is a category and nothing held or in flight.
    #[must_use]
    pub fn should_fetch(&self) -> bool {
        !self.category.is_empty() && self.request.is_idle()
    }

    /// Start the due fetch, returning its ticket and category.
    pub fn begin_fetch(&mut self) -> Option<(RequestTicket, String)> {
        if !self.should_fetch() {
            return None;
        }
        Some((self.request.start(), self.category.clone()))
    }

    pub fn settle(&mut self, ticket: RequestTicket, result: Result<Concept, ApiError>) -> bool {
        self.request.settle(ticket, result)
    }

    /// Clear a failed outcome so the fetch fires again.
    pub fn retry(&mut self) -> bool {
        if self.request.error().is_none() {
            return false;
        }
        self.request.reset();
        true
    }

    /// Abandon an in-flight fetch (component teardown).
    pub fn cancel(&mut self) {
        self.request.cancel();
    }
}

#[must_use]
pub fn dashboard_view(auth: &AuthState, state: &DailyConceptState) -> DashboardView {
    if auth.loading {
        return DashboardView::Checking;
    }
    if auth.user.is_none() {
        return DashboardView::Unauthenticated;
    }
    if state.category.is_empty() {
        return DashboardView::Greeting;
    }
    match state.request.status() {
        RequestStatus::Idle | RequestStatus::Pending => DashboardView::Fetching,
        RequestStatus::Cancelled => DashboardView::Greeting,
        RequestStatus::Succeeded(concept) => DashboardView::Showing(concept.clone()),
        RequestStatus::Failed(e) => DashboardView::Failed(e.clone()),
    }
}
