//! REST API client for the concept backend.
//!
//! Every operation issues exactly one request through an [`HttpTransport`]
//! and decodes the outcome into a typed value or an [`ApiError`]. Nothing is
//! retried or cached here.
//!
//! ERROR HANDLING
//! ==============
//! Status-to-error mapping is done by small pure functions per endpoint so
//! the branching is testable without a transport. Transport failures always
//! become [`ApiError::Network`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, Operation};
use super::http::{BrowserTransport, HttpRequest, HttpResponse, HttpTransport};
use super::types::{CategoryConcept, Concept, CreatedUser, Credentials, NewUser, User, backend_message};
use crate::config::ClientConfig;

/// Which way an interest mutation goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterestAction {
    Add,
    Remove,
}

impl InterestAction {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    #[must_use]
    pub fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::AddInterest,
            Self::Remove => Operation::RemoveInterest,
        }
    }
}

fn concept_by_category_endpoint(base: &str, category: &str) -> String {
    format!("{base}/get-concept?category={}", urlencoding::encode(category))
}

fn create_user_endpoint(base: &str) -> String {
    format!("{base}/users")
}

fn login_endpoint(base: &str) -> String {
    format!("{base}/login")
}

fn daily_concept_endpoint(base: &str, user_id: &str, category: &str) -> String {
    format!(
        "{base}/daily-concept?category={}&user_id={}",
        urlencoding::encode(category),
        urlencoding::encode(user_id)
    )
}

fn interest_endpoint(base: &str, user_id: &str, action: InterestAction) -> String {
    format!("{base}/user/{}/interests/{}", urlencoding::encode(user_id), action.path_segment())
}

fn concept_by_category_error(status: u16) -> ApiError {
    match status {
        429 => ApiError::RateLimited,
        _ => ApiError::Failed(Operation::FetchConcept),
    }
}

fn create_user_error(body: &str) -> ApiError {
    backend_message(body).map_or(ApiError::Failed(Operation::CreateUser), ApiError::Rejected)
}

fn login_error(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::InvalidCredentials,
        429 => ApiError::RateLimited,
        s if s >= 500 => ApiError::Server(s),
        _ => backend_message(body).map_or(ApiError::Failed(Operation::LogIn), ApiError::Rejected),
    }
}

fn daily_concept_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::SessionExpired,
        403 => ApiError::AccessDenied,
        _ => ApiError::Failed(Operation::FetchConcept),
    }
}

fn interest_error(action: InterestAction) -> ApiError {
    ApiError::Failed(action.operation())
}

fn decode<D: DeserializeOwned>(resp: &HttpResponse) -> Result<D, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<P: Serialize>(operation: Operation, payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| {
        log::warn!("{operation}: could not encode payload: {e}");
        ApiError::Failed(operation)
    })
}

/// Backend client bound to a base URL and a transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Client for the deployment-configured backend.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(&ClientConfig::from_build_env().api_base_url, BrowserTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn new(base_url: &str, transport: T) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a public concept for a free-text category.
    ///
    /// # Errors
    ///
    /// [`ApiError::RateLimited`] on 429, [`ApiError::Failed`] on any other
    /// non-2xx, [`ApiError::Network`] when the request never completed.
    pub async fn fetch_concept_by_category(&self, category: &str) -> Result<CategoryConcept, ApiError> {
        let request = HttpRequest::get(concept_by_category_endpoint(&self.base_url, category));
        let resp = self.execute(Operation::FetchConcept, request).await?;
        if !resp.is_success() {
            return Err(concept_by_category_error(resp.status));
        }
        decode(&resp)
    }

    /// Register a new user. The returned record is filled from `user` where
    /// the backend does not echo a field back.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] with the backend message when one is provided,
    /// otherwise [`ApiError::Failed`]; [`ApiError::Network`] on transport
    /// failure.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let body = encode(Operation::CreateUser, user)?;
        let request = HttpRequest::post(create_user_endpoint(&self.base_url), body);
        let resp = self.execute(Operation::CreateUser, request).await?;
        if !resp.is_success() {
            return Err(create_user_error(&resp.body));
        }
        let created: CreatedUser = decode(&resp)?;
        Ok(created.into_user(user))
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// 401 → [`ApiError::InvalidCredentials`], 429 → [`ApiError::RateLimited`],
    /// 5xx → [`ApiError::Server`], other → backend message or
    /// [`ApiError::Failed`]. Transport failure → [`ApiError::Network`].
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let body = encode(Operation::LogIn, credentials)?;
        let request = HttpRequest::post(login_endpoint(&self.base_url), body);
        let resp = self.execute(Operation::LogIn, request).await?;
        if !resp.is_success() {
            return Err(login_error(resp.status, &resp.body));
        }
        decode(&resp)
    }

    /// Fetch the personalized concept for `user_id` in `category`.
    ///
    /// # Errors
    ///
    /// 401 → [`ApiError::SessionExpired`], 403 → [`ApiError::AccessDenied`],
    /// other non-2xx → [`ApiError::Failed`].
    pub async fn fetch_daily_concept(
        &self,
        user_id: &str,
        category: &str,
        token: Option<&str>,
    ) -> Result<Concept, ApiError> {
        let request = HttpRequest::get(daily_concept_endpoint(&self.base_url, user_id, category)).with_bearer(token);
        let resp = self.execute(Operation::FetchConcept, request).await?;
        if !resp.is_success() {
            return Err(daily_concept_error(resp.status));
        }
        decode(&resp)
    }

    /// Add one interest to the user's list on the backend.
    ///
    /// # Errors
    ///
    /// [`ApiError::Failed`] naming the operation on any non-2xx.
    pub async fn add_interest(&self, user_id: &str, interest: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.mutate_interest(InterestAction::Add, user_id, interest, token).await
    }

    /// Remove one interest from the user's list on the backend.
    ///
    /// # Errors
    ///
    /// [`ApiError::Failed`] naming the operation on any non-2xx.
    pub async fn remove_interest(&self, user_id: &str, interest: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.mutate_interest(InterestAction::Remove, user_id, interest, token).await
    }

    /// Shared body of [`Self::add_interest`] and [`Self::remove_interest`].
    ///
    /// # Errors
    ///
    /// [`ApiError::Failed`] naming the operation on any non-2xx.
    pub async fn mutate_interest(
        &self,
        action: InterestAction,
        user_id: &str,
        interest: &str,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let operation = action.operation();
        let body = encode(operation, &interest)?;
        let request = HttpRequest::post(interest_endpoint(&self.base_url, user_id, action), body).with_bearer(token);
        let resp = self.execute(operation, request).await?;
        if !resp.is_success() {
            return Err(interest_error(action));
        }
        Ok(())
    }

    async fn execute(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let resp = self.transport.send(request).await.map_err(|e| {
            log::warn!("{operation}: {e}");
            ApiError::Network(e.to_string())
        })?;
        if !resp.is_success() {
            log::warn!("{operation}: backend responded {}", resp.status);
        }
        Ok(resp)
    }
}
