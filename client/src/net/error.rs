//! Error taxonomy for backend calls.
//!
//! `Display` output is the user-visible message; pages render it verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Backend operation a request was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    FetchConcept,
    CreateUser,
    LogIn,
    AddInterest,
    RemoveInterest,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FetchConcept => "fetch concept",
            Self::CreateUser => "create user",
            Self::LogIn => "log in",
            Self::AddInterest => "add interest",
            Self::RemoveInterest => "remove interest",
        };
        f.write_str(label)
    }
}

/// Failure of a single API call, decoded at the client boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 on login.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// 401 on an authenticated endpoint.
    #[error("Your session has expired. Please log in again")]
    SessionExpired,
    /// 403 on an authenticated endpoint. The session stays intact.
    #[error("Access denied")]
    AccessDenied,
    /// 429.
    #[error("Too many requests. Please wait a moment and try again")]
    RateLimited,
    /// Any 5xx.
    #[error("Server error ({0}). Please try again later")]
    Server(u16),
    /// The request never completed.
    #[error("Connection error. Please check your network and try again")]
    Network(String),
    /// Non-2xx with a message supplied by the backend.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx without anything more specific to say.
    #[error("Failed to {0}")]
    Failed(Operation),
    /// 2xx whose body did not match the expected shape.
    #[error("Unexpected response from server")]
    Decode(String),
}

impl ApiError {
    /// Whether trying the same action again later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Server(_) | Self::Network(_))
    }

    /// Whether the stored session should be considered dead.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
