//! Wire DTOs for the moderation API surface.
//!
//! DESIGN
//! ======
//! The backend serializes content ids as integers while every page and
//! endpoint treats them as opaque strings, so id fields deserialize
//! leniently from either representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A flagged content item awaiting review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Content identifier, normalized to a string for URL building.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    /// The content text under review.
    #[serde(default)]
    pub text: String,
    /// Why the moderation pipeline flagged this item (e.g. `"Spam"`).
    #[serde(default)]
    pub reason: String,
}

/// A reviewer's verdict on a flagged item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Wire literal for the `{"action": ...}` review payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_id_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    /// Access role; `"admin"` unlocks the analytics and users pages.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "client".to_owned()
}

/// One bar of the moderation analytics chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Moderation category label (e.g. `"Spam"`).
    pub category: String,
    /// Number of flags recorded for the category.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub count: i64,
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        _ => Err(D::Error::custom("expected number")),
    }
}
