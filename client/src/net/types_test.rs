use super::*;

fn submitted() -> NewUser {
    NewUser {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        interests: vec!["math".to_owned(), "physics".to_owned()],
    }
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u1","username":"ada","email":"ada@example.com"}"#)
        .expect("user should parse");
    assert!(user.interests.is_empty());
    assert_eq!(user.access_token, None);
}

#[test]
fn user_null_interests_decode_as_empty() {
    let user: User = serde_json::from_str(r#"{"id":"u1","username":"ada","email":"ada@example.com","interests":null}"#)
        .expect("user should parse");
    assert!(user.interests.is_empty());
}

#[test]
fn user_serialization_omits_missing_token() {
    let user = User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        interests: vec!["math".to_owned()],
        access_token: None,
    };
    let json = serde_json::to_value(&user).expect("serialize");
    assert!(json.get("access_token").is_none());
    assert_eq!(json["interests"], serde_json::json!(["math"]));
}

#[test]
fn with_interests_replaces_only_the_list() {
    let user = User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        interests: vec!["math".to_owned()],
        access_token: Some("tok".to_owned()),
    };
    let updated = user.with_interests(vec!["art".to_owned()]);
    assert_eq!(updated.interests, vec!["art".to_owned()]);
    assert_eq!(updated.access_token.as_deref(), Some("tok"));
    assert_eq!(updated.id, "u1");
}

#[test]
fn created_user_accepts_user_id_alias_and_fills_from_form() {
    let created: CreatedUser =
        serde_json::from_str(r#"{"message":"User created successfully","user_id":"abc"}"#).expect("parse");
    let user = created.into_user(&submitted());
    assert_eq!(user.id, "abc");
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.interests, vec!["math".to_owned(), "physics".to_owned()]);
    assert_eq!(user.access_token, None);
}

#[test]
fn created_user_prefers_backend_values() {
    let created: CreatedUser = serde_json::from_str(
        r#"{"id":"u9","username":"ada_l","email":"ada@example.com","interests":["math"],"access_token":"t"}"#,
    )
    .expect("parse");
    let user = created.into_user(&submitted());
    assert_eq!(user.username, "ada_l");
    assert_eq!(user.interests, vec!["math".to_owned()]);
    assert_eq!(user.access_token.as_deref(), Some("t"));
}

#[test]
fn backend_message_reads_detail_string() {
    assert_eq!(
        backend_message(r#"{"detail":"User with this email already exists"}"#),
        Some("User with this email already exists".to_owned())
    );
}

#[test]
fn backend_message_reads_first_validation_msg() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#;
    assert_eq!(backend_message(body), Some("value is not a valid email address".to_owned()));
}

#[test]
fn backend_message_falls_back_to_message_field() {
    assert_eq!(backend_message(r#"{"message":"nope"}"#), Some("nope".to_owned()));
}

#[test]
fn backend_message_ignores_blank_and_non_json_bodies() {
    assert_eq!(backend_message(r#"{"detail":"   "}"#), None);
    assert_eq!(backend_message("Internal Server Error"), None);
    assert_eq!(backend_message(""), None);
}
