//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages send
//! visitors without a session to `/login`, and the signup/login forms send
//! visitors who already have one to `/dashboard`. An explicit logout lands
//! on `/` instead of `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LANDING_PATH: &str = "/";

/// Session has been read and there is no user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Session has been read and a user is already signed in.
#[must_use]
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Where a protected page sends a visitor without a session: `/` right
/// after they logged out, `/login` otherwise.
#[must_use]
pub fn unauth_redirect_target(state: &AuthState, logging_out: bool) -> Option<&'static str> {
    if !should_redirect_unauth(state) {
        return None;
    }
    Some(if logging_out { LANDING_PATH } else { LOGIN_PATH })
}

/// Redirect away whenever auth has loaded and no user is present. Set
/// `logging_out` before clearing the session to land on `/`.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, logging_out: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = auth.with(|state| unauth_redirect_target(state, logging_out.get()));
        if let Some(path) = target {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever auth has loaded and a user is present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_authed) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
