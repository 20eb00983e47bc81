use super::*;
use crate::util::storage::MemoryStorage;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        interests: vec!["math".to_owned(), "physics".to_owned()],
        access_token: Some("tok".to_owned()),
    }
}

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

#[test]
fn load_without_record_is_none() {
    assert_eq!(store().load(), None);
}

#[test]
fn save_then_load_returns_same_record() {
    let store = store();
    store.save(&user()).expect("save");
    assert_eq!(store.load(), Some(user()));
}

#[test]
fn save_replaces_prior_record() {
    let store = store();
    store.save(&user()).expect("save");
    let other = User { id: "u2".to_owned(), interests: Vec::new(), access_token: None, ..user() };
    store.save(&other).expect("save");
    assert_eq!(store.load(), Some(other));
    assert_eq!(store.storage().len(), 1);
}

#[test]
fn unparsable_record_is_treated_as_no_session() {
    let store = SessionStore::new(MemoryStorage::with_item(SESSION_STORAGE_KEY, "{not json"));
    assert_eq!(store.load(), None);
}

#[test]
fn record_with_null_interests_loads_with_empty_list() {
    let store = SessionStore::new(MemoryStorage::with_item(
        SESSION_STORAGE_KEY,
        r#"{"id":"u1","username":"ada","email":"a@b.com","interests":null}"#,
    ));
    let user = store.load().expect("session");
    assert_eq!(user.id, "u1");
    assert!(user.interests.is_empty());
}

#[test]
fn record_missing_required_fields_is_treated_as_no_session() {
    let store = SessionStore::new(MemoryStorage::with_item(SESSION_STORAGE_KEY, r#"{"username":"ada"}"#));
    assert_eq!(store.load(), None);
}

#[test]
fn clear_always_leaves_no_session() {
    let seeded = [
        None,
        Some(r#"{"id":"u1","username":"ada","email":"a@b.com"}"#),
        Some("garbage"),
    ];
    for raw in seeded {
        let storage = raw.map_or_else(MemoryStorage::default, |value| {
            MemoryStorage::with_item(SESSION_STORAGE_KEY, value)
        });
        let store = SessionStore::new(storage);
        store.clear();
        assert_eq!(store.load(), None);
        assert!(store.storage().is_empty());
    }
}

#[test]
fn token_for_returns_token_when_present() {
    assert_eq!(token_for(&user()), Some("tok"));
}

#[test]
fn token_for_treats_missing_or_empty_as_absent() {
    let mut u = user();
    u.access_token = None;
    assert_eq!(token_for(&u), None);
    u.access_token = Some(String::new());
    assert_eq!(token_for(&u), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_local_storage_refuses_writes() {
    let store = SessionStore::new(LocalStorage);
    assert!(store.save(&user()).is_err());
    assert_eq!(store.load(), None);
}
