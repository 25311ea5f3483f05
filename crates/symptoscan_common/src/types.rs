//! Data model and wire shapes shared by the daemon and the CLI.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Normalized symptom identifier (lowercase, spaces as underscores).
pub type SymptomKey = String;

/// Display name of a possible condition.
pub type ConditionName = String;

/// Title used when a feed entry carries no usable title.
pub const UNKNOWN_CONDITION: &str = "Unknown Condition";

/// Ordered, deduplicated condition names. First-seen order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Vec<ConditionName>);

impl QueryResult {
    /// Build from any sequence, dropping repeats after their first occurrence
    pub fn from_ordered<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ConditionName>,
    {
        let mut seen = HashSet::new();
        let unique = items
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect();
        Self(unique)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[ConditionName] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ConditionName> {
        self.0
    }
}

/// Where a set of results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Remote,
    Fallback,
}

// ============================================================================
// /api/symptoms wire shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleValue {
    #[serde(rename = "_value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: TitleValue,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: TitleValue {
                value: title.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub entry: Vec<FeedEntry>,
}

/// Body of `{ feed: { entry: [...] } }` replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub feed: Feed,
}

impl FeedResponse {
    pub fn from_titles(titles: &[String]) -> Self {
        Self {
            feed: Feed {
                entry: titles.iter().map(FeedEntry::new).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackResponse {
    pub fallback: Vec<ConditionName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub table_entries: usize,
}

/// What the CLI makes of an `/api/symptoms` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    /// Titles from the remote feed (may be empty)
    Remote(Vec<ConditionName>),
    /// The proxy already resolved locally
    Fallback(Vec<ConditionName>),
    /// The proxy rejected the query
    Rejected(String),
}

impl ApiReply {
    /// Interpret a reply body. Pass-through JSON without a feed counts as an
    /// empty remote result.
    pub fn from_json(body: &Value) -> Self {
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return ApiReply::Rejected(error.to_string());
        }
        if let Some(list) = body.get("fallback").and_then(Value::as_array) {
            let names = list
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            return ApiReply::Fallback(names);
        }
        ApiReply::Remote(feed_titles(body))
    }
}

/// Extract `feed.entry[].title._value`. `entry` may be a single object.
pub fn feed_titles(body: &Value) -> Vec<ConditionName> {
    let entries = match body.get("feed").and_then(|feed| feed.get("entry")) {
        Some(Value::Array(list)) => list.iter().collect::<Vec<_>>(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![single],
    };

    entries
        .into_iter()
        .map(|entry| {
            entry
                .get("title")
                .and_then(|title| title.get("_value"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_CONDITION)
                .to_string()
        })
        .collect()
}
