//! Telegram Mini App `initData` parsing
//!
//! `initData` is a URL-query-encoded string handed to the Mini App by the
//! Telegram client. The `user` key holds a JSON-encoded profile; everything
//! else (auth_date, hash, query_id) is ignored here. Signature verification
//! is out of scope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value the web client sends when it runs outside of Telegram.
/// Treated the same as an absent token.
const PLACEHOLDER: &str = "test";

/// User profile carried inside `initData`.
///
/// The id comes from Telegram and is never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TgUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Error)]
pub enum InitDataError {
    /// No token, the placeholder token, or a token without a `user` key.
    #[error("no user identity in initData")]
    Missing,

    #[error("initData is not a valid query string: {0}")]
    MalformedQuery(serde_urlencoded::de::Error),

    #[error("user field is not a valid profile: {0}")]
    MalformedUser(serde_json::Error),
}

/// Extract the user identity from a raw `initData` token.
///
/// Pure decode, no side effects. Callers decide whether a missing identity
/// is fatal (save: 400) or degrades to an anonymous response (load).
pub fn parse_init_data(raw: &str) -> Result<TgUser, InitDataError> {
    if raw.is_empty() || raw == PLACEHOLDER {
        return Err(InitDataError::Missing);
    }

    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(raw).map_err(InitDataError::MalformedQuery)?;

    let user_json = pairs
        .iter()
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or(InitDataError::Missing)?;

    serde_json::from_str(user_json).map_err(InitDataError::MalformedUser)
}
