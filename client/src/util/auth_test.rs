use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "a@b.com".to_owned(),
        interests: vec!["physics".to_owned()],
        access_token: Some("tok".to_owned()),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_unauth_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn signed_in_visitor_is_sent_to_dashboard() {
    let state = AuthState::resolved(Some(user()));
    assert!(should_redirect_authed(&state));
}

#[test]
fn missing_session_redirects_to_login() {
    let state = AuthState::resolved(None);
    assert_eq!(unauth_redirect_target(&state, false), Some(LOGIN_PATH));
}

#[test]
fn logout_lands_on_landing_page_not_login() {
    let state = AuthState::resolved(None);
    assert_eq!(unauth_redirect_target(&state, true), Some("/"));
}

#[test]
fn logout_flag_alone_does_not_redirect() {
    let signed_in = AuthState::resolved(Some(user()));
    assert_eq!(unauth_redirect_target(&signed_in, true), None);
    assert_eq!(unauth_redirect_target(&AuthState::checking(), true), None);
    assert_eq!(unauth_redirect_target(&AuthState::checking(), false), None);
}
