//! Parsing of health-topics search responses.
//!
//! The search service answers either with an XML feed or with JSON. The body
//! is sniffed on its first non-whitespace character: `<` selects
//! [`MarkupTitles`], anything else [`JsonPassthrough`].

use crate::error::RemoteError;
use crate::types::{feed_titles, ConditionName};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// A successfully parsed remote body
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteBody {
    /// Titles pulled out of a markup feed, feed title already removed
    Titles(Vec<ConditionName>),
    /// JSON document, forwarded as-is
    Json(Value),
}

impl RemoteBody {
    pub fn condition_names(&self) -> Vec<ConditionName> {
        match self {
            RemoteBody::Titles(titles) => titles.clone(),
            RemoteBody::Json(value) => feed_titles(value),
        }
    }
}

/// One way of reading a response body
pub trait ResponseFormat: Send + Sync {
    fn name(&self) -> &'static str;

    fn parse(&self, body: &str) -> Result<RemoteBody, RemoteError>;
}

/// `<title>` extraction for XML feeds
pub struct MarkupTitles;

/// JSON bodies pass straight through
pub struct JsonPassthrough;

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("title pattern is valid")
    })
}

impl ResponseFormat for MarkupTitles {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn parse(&self, body: &str) -> Result<RemoteBody, RemoteError> {
        let titles: Vec<String> = title_pattern()
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
            // first title names the feed itself
            .skip(1)
            .collect();

        if titles.is_empty() {
            return Err(RemoteError::NoResults);
        }
        Ok(RemoteBody::Titles(titles))
    }
}

impl ResponseFormat for JsonPassthrough {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, body: &str) -> Result<RemoteBody, RemoteError> {
        serde_json::from_str(body)
            .map(RemoteBody::Json)
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

/// Pick the format for a (trimmed) body
pub fn sniff(body: &str) -> &'static dyn ResponseFormat {
    if body.starts_with('<') {
        &MarkupTitles
    } else {
        &JsonPassthrough
    }
}

/// Parse a raw response body into condition names or a JSON document
pub fn parse_remote_body(body: &str) -> Result<RemoteBody, RemoteError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(RemoteError::EmptyBody);
    }
    sniff(trimmed).parse(trimmed)
}
