use super::*;

#[test]
fn failed_names_the_operation() {
    assert_eq!(ApiError::Failed(Operation::CreateUser).to_string(), "Failed to create user");
    assert_eq!(ApiError::Failed(Operation::AddInterest).to_string(), "Failed to add interest");
    assert_eq!(ApiError::Failed(Operation::RemoveInterest).to_string(), "Failed to remove interest");
    assert_eq!(ApiError::Failed(Operation::FetchConcept).to_string(), "Failed to fetch concept");
}

#[test]
fn rejected_shows_backend_text_verbatim() {
    let err = ApiError::Rejected("User with this email already exists".to_owned());
    assert_eq!(err.to_string(), "User with this email already exists");
}

#[test]
fn server_message_includes_status() {
    assert_eq!(ApiError::Server(503).to_string(), "Server error (503). Please try again later");
}

#[test]
fn network_message_hides_transport_detail() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert!(!err.to_string().contains("TypeError"));
}

#[test]
fn retryable_covers_transient_failures_only() {
    assert!(ApiError::Server(500).is_retryable());
    assert!(ApiError::RateLimited.is_retryable());
    assert!(ApiError::Network(String::new()).is_retryable());
    assert!(!ApiError::InvalidCredentials.is_retryable());
    assert!(!ApiError::AccessDenied.is_retryable());
    assert!(!ApiError::Failed(Operation::LogIn).is_retryable());
}

#[test]
fn only_session_expired_reports_expiry() {
    assert!(ApiError::SessionExpired.is_session_expired());
    assert!(!ApiError::AccessDenied.is_session_expired());
}
