//! Auth-session state and the signup/login/logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages to coordinate login redirects
//! and identity-dependent rendering. The flows validate first, call the
//! backend second, and only write the session record after success.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionStore;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::User;
use crate::util::storage::KeyValueStorage;
use crate::util::validation::{LoginForm, SignupForm, ValidationError, validate_login, validate_signup};

/// Authentication state tracking the current user and whether the stored
/// session has been read yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the stored session has been read.
    #[must_use]
    pub fn checking() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Why a signup or login attempt did not establish a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Could not save your session. Please try again")]
    Persist(String),
}

fn persist<S: KeyValueStorage>(store: &SessionStore<S>, user: &User) -> Result<(), AuthError> {
    store.save(user).map_err(|e| {
        log::warn!("could not persist session: {e}");
        AuthError::Persist(e.to_string())
    })
}

/// Validate, register and persist a new user.
///
/// # Errors
///
/// [`AuthError::Invalid`] without any request when the form fails
/// validation; [`AuthError::Api`] when the backend call fails (nothing is
/// stored); [`AuthError::Persist`] when the record cannot be saved.
pub async fn sign_up<T, S>(api: &ApiClient<T>, store: &SessionStore<S>, form: &SignupForm) -> Result<User, AuthError>
where
    T: HttpTransport,
    S: KeyValueStorage,
{
    let new_user = validate_signup(form)?;
    let user = api.create_user(&new_user).await?;
    persist(store, &user)?;
    log::info!("signed up {}", user.username);
    Ok(user)
}

/// Validate credentials, log in and persist the returned user.
///
/// # Errors
///
/// Same contract as [`sign_up`].
pub async fn log_in<T, S>(api: &ApiClient<T>, store: &SessionStore<S>, form: &LoginForm) -> Result<User, AuthError>
where
    T: HttpTransport,
    S: KeyValueStorage,
{
    let credentials = validate_login(form)?;
    let user = api.login(&credentials).await?;
    persist(store, &user)?;
    log::info!("logged in {}", user.username);
    Ok(user)
}

/// Remove the session record.
pub fn log_out<S: KeyValueStorage>(store: &SessionStore<S>) {
    store.clear();
    log::info!("logged out");
}
