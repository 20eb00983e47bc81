//! Persisted session record and its single in-app owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` reads and writes the one JSON user record kept under
//! [`SESSION_STORAGE_KEY`]. `SessionContext` is provided once by the root
//! component and is the only code path that loads, saves or clears it; pages
//! read identity from its `AuthState` signal instead of parsing storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::{AuthError, AuthState, log_in, log_out, sign_up};
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::util::storage::{KeyValueStorage, LocalStorage, StorageError};
use crate::util::validation::{LoginForm, SignupForm};

/// Storage key of the session record.
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("could not encode session record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Access token of `user`, if it carries a non-empty one.
#[must_use]
pub fn token_for(user: &User) -> Option<&str> {
    user.access_token.as_deref().filter(|token| !token.is_empty())
}

/// Save/load/clear of the session record over a storage backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `user`, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the record cannot be encoded or stored.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// The stored record, or `None` when absent or unparsable.
    #[must_use]
    pub fn load(&self) -> Option<User> {
        let raw = self.storage.get_item(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring unparsable session record: {e}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.storage.remove_item(SESSION_STORAGE_KEY);
    }
}

/// Reactive session handle provided via context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    auth: RwSignal<AuthState>,
    store: SessionStore<LocalStorage>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self { auth: RwSignal::new(AuthState::checking()), store: SessionStore::new(LocalStorage) }
    }

    #[must_use]
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Current user without subscribing to changes.
    #[must_use]
    pub fn user_untracked(&self) -> Option<User> {
        self.auth.with_untracked(|state| state.user.clone())
    }

    /// Token of the current user without subscribing to changes.
    #[must_use]
    pub fn token_untracked(&self) -> Option<String> {
        self.auth
            .with_untracked(|state| state.user.as_ref().and_then(token_for).map(str::to_owned))
    }

    /// Read the stored record once; ends the "checking session" phase.
    pub fn restore(&self) {
        let user = self.store.load();
        match &user {
            Some(u) => log::debug!("restored session for {}", u.username),
            None => log::debug!("no stored session"),
        }
        self.auth.set(AuthState::resolved(user));
    }

    /// Register, persist and publish the new user.
    ///
    /// # Errors
    ///
    /// See [`sign_up`].
    pub async fn sign_up(self, form: SignupForm) -> Result<User, AuthError> {
        let user = sign_up(&ApiClient::browser(), &self.store, &form).await?;
        self.auth.set(AuthState::resolved(Some(user.clone())));
        Ok(user)
    }

    /// Authenticate, persist and publish the user.
    ///
    /// # Errors
    ///
    /// See [`log_in`].
    pub async fn log_in(self, form: LoginForm) -> Result<User, AuthError> {
        let user = log_in(&ApiClient::browser(), &self.store, &form).await?;
        self.auth.set(AuthState::resolved(Some(user.clone())));
        Ok(user)
    }

    /// Drop the stored record and publish the signed-out state.
    pub fn log_out(&self) {
        log_out(&self.store);
        self.auth.set(AuthState::resolved(None));
    }

    /// Replace the current user's interests in storage and in the signal.
    pub fn replace_interests(&self, interests: Vec<String>) {
        let Some(user) = self.user_untracked() else {
            return;
        };
        let updated = user.with_interests(interests);
        if let Err(e) = self.store.save(&updated) {
            log::warn!("could not persist interests: {e}");
        }
        self.auth.update(|state| state.user = Some(updated));
    }
}
