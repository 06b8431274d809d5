// src/github/models.rs
// =============================================================================
// Typed records for the two GitHub responses we consume, plus the boundary
// functions that turn untrusted JSON into them.
//
// GitHub's API is a third-party service: fields can be null, missing, or the
// whole body can be an error object instead of the list we asked for. All of
// that is handled here, once. Code downstream of these functions can rely on:
// - a Profile is either fully parsed or absent
// - the repository list is always a Vec (possibly empty)
// - counters are plain u64 values (null/missing becomes 0)
//
// Rust concepts:
// - serde attributes: #[serde(default)] and deserialize_with
// - serde_json::Value: Untyped JSON we can inspect before trusting it
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Public account metadata from `GET /users/{username}`.
///
/// Every field is optional; presentation code substitutes fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u64>,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique within the list; the only required field
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u64,
}

// GitHub sometimes sends `null` where we want a plain number.
// #[serde(default)] only covers *missing* fields, so null needs this helper.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Narrows a profile response body to a Profile.
//
// Returns None when the body is not a JSON object or does not fit the
// Profile shape (e.g. `public_repos: "lots"`).
pub fn profile_from_json(body: Value) -> Option<Profile> {
    if !body.is_object() {
        warn!(kind = json_kind(&body), "profile response is not a JSON object");
        return None;
    }

    match serde_json::from_value(body) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(error = %e, "profile response has an unexpected shape");
            None
        }
    }
}

// Narrows a repositories response body to a list of Repository records.
//
// - A body that is not an array becomes an empty list
// - Array entries that cannot be read as a Repository (no name, wrong types)
//   are skipped; the rest keep their original order
pub fn repositories_from_json(body: Value) -> Vec<Repository> {
    let entries = match body {
        Value::Array(entries) => entries,
        other => {
            warn!(kind = json_kind(&other), "repositories response is not a JSON array");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Repository>(entry) {
            Ok(repo) => Some(repo),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed repository entry");
                None
            }
        })
        .collect()
}

// Short name of a JSON value's type, for log messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
