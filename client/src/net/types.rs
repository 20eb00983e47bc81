//! Shared DTOs for the client/backend HTTP boundary.
//!
//! DESIGN
//! ======
//! Every endpoint decodes into one of these types at the API-client boundary
//! so pages never touch untyped JSON. `User` doubles as the persisted session
//! record shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated user as returned by login and stored in the session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    pub username: String,
    pub email: String,
    /// Ordered, unique interests. The first one is the default category.
    /// Missing and `null` both decode as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
    /// Bearer token for authenticated endpoints, when the backend issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Copy of this user with a replaced interest list.
    #[must_use]
    pub fn with_interests(&self, interests: Vec<String>) -> Self {
        Self { interests, ..self.clone() }
    }
}

/// Signup payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub interests: Vec<String>,
}

/// Login payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Personalized concept from `/daily-concept`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub explanation: String,
}

/// Public concept from `/get-concept`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryConcept {
    pub concept: String,
    /// Sanitized category echoed by the backend, if any.
    #[serde(default)]
    pub category: Option<String>,
}

/// Response of `POST /users`.
///
/// Backends differ in how much of the record they echo back (some only return
/// `user_id`), so everything but the identifier is optional and filled from the
/// submitted form by [`CreatedUser::into_user`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    #[serde(alias = "user_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl CreatedUser {
    /// Build the session record, preferring backend values over the form.
    #[must_use]
    pub fn into_user(self, submitted: &NewUser) -> User {
        User {
            id: self.id,
            username: self.username.unwrap_or_else(|| submitted.username.clone()),
            email: self.email.unwrap_or_else(|| submitted.email.clone()),
            interests: self.interests.unwrap_or_else(|| submitted.interests.clone()),
            access_token: self.access_token.filter(|token| !token.is_empty()),
        }
    }
}

/// Error payload shapes the backend uses: `{"detail": "..."}`,
/// `{"detail": [{"msg": "..."}]}` or `{"message": "..."}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract a human-readable message from a backend error body, if any.
#[must_use]
pub fn backend_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let from_detail = match parsed.detail {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        _ => None,
    };
    from_detail
        .or(parsed.message)
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
