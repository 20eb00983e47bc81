//! Interest list editing with serialized backend mutations.
//!
//! DESIGN
//! ======
//! Edits show up locally right away, but at most one add/remove request is
//! in flight per user; later edits queue behind it in issue order. The
//! visible list is always `confirmed` with the in-flight and queued edits
//! replayed on top, so a failed edit is simply dropped and the list falls
//! back without any bookkeeping of its own.

#[cfg(test)]
#[path = "interests_test.rs"]
mod interests_test;

use std::collections::VecDeque;

use crate::net::api::{ApiClient, InterestAction};
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;

/// Trimmed interest, or `None` when blank.
#[must_use]
pub fn normalize_interest(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parse a comma-separated list: trimmed, blanks and duplicates dropped,
/// first occurrence order kept.
#[must_use]
pub fn parse_interest_list(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for interest in raw.split(',').filter_map(normalize_interest) {
        if !out.contains(&interest) {
            out.push(interest);
        }
    }
    out
}

/// One pending change to the interest list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterestMutation {
    pub action: InterestAction,
    pub interest: String,
}

impl InterestMutation {
    fn apply(&self, list: &mut Vec<String>) {
        match self.action {
            InterestAction::Add => {
                if !list.contains(&self.interest) {
                    list.push(self.interest.clone());
                }
            }
            InterestAction::Remove => list.retain(|existing| existing != &self.interest),
        }
    }
}

/// Local view of one user's interests plus their outstanding mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterestEditor {
    confirmed: Vec<String>,
    in_flight: Option<InterestMutation>,
    queued: VecDeque<InterestMutation>,
}

impl InterestEditor {
    #[must_use]
    pub fn new(interests: Vec<String>) -> Self {
        Self { confirmed: interests, in_flight: None, queued: VecDeque::new() }
    }

    /// The list as the backend has acknowledged it.
    #[must_use]
    pub fn confirmed(&self) -> &[String] {
        &self.confirmed
    }

    /// The list as the user should see it.
    #[must_use]
    pub fn interests(&self) -> Vec<String> {
        let mut list = self.confirmed.clone();
        for mutation in self.in_flight.iter().chain(self.queued.iter()) {
            mutation.apply(&mut list);
        }
        list
    }

    /// Queue an add. Blank input and interests already shown are ignored and
    /// queue nothing; returns whether a mutation was queued.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(interest) = normalize_interest(raw) else {
            return false;
        };
        if self.interests().contains(&interest) {
            return false;
        }
        self.queued.push_back(InterestMutation { action: InterestAction::Add, interest });
        true
    }

    /// Queue a remove. Always queued, even when the interest is not shown.
    pub fn remove(&mut self, interest: &str) {
        self.queued.push_back(InterestMutation { action: InterestAction::Remove, interest: interest.to_owned() });
    }

    /// Move the next queued mutation in flight, unless one already is.
    pub fn start_next(&mut self) -> Option<InterestMutation> {
        if self.in_flight.is_some() {
            return None;
        }
        let next = self.queued.pop_front()?;
        self.in_flight = Some(next.clone());
        Some(next)
    }

    /// Settle the in-flight mutation. Success folds it into the confirmed
    /// list; failure drops it and hands the error back.
    pub fn finish(&mut self, result: Result<(), ApiError>) -> Option<ApiError> {
        let mutation = self.in_flight.take()?;
        match result {
            Ok(()) => {
                mutation.apply(&mut self.confirmed);
                None
            }
            Err(e) => {
                log::warn!("dropping {:?} of {:?}: {e}", mutation.action, mutation.interest);
                Some(e)
            }
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || !self.queued.is_empty()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        usize::from(self.in_flight.is_some()) + self.queued.len()
    }
}

/// Send mutations one at a time until `next` runs dry, handing each outcome
/// to `settle` before the next request is issued.
pub async fn drain_mutations<T, N, S>(api: &ApiClient<T>, user_id: &str, token: Option<&str>, mut next: N, mut settle: S)
where
    T: HttpTransport,
    N: FnMut() -> Option<InterestMutation>,
    S: FnMut(Result<(), ApiError>),
{
    while let Some(mutation) = next() {
        let result = api.mutate_interest(mutation.action, user_id, &mutation.interest, token).await;
        settle(result);
    }
}
