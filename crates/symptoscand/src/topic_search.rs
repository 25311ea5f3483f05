//! Remote health-topics search.
//!
//! `TopicSearch` is the seam between the HTTP routes and the search service.
//! Production code uses `HealthTopicsClient`; tests use `FakeTopicSearch`
//! with a canned outcome.

use async_trait::async_trait;
use symptoscan_common::config::RemoteConfig;
use symptoscan_common::{parse_remote_body, RemoteBody, RemoteError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

// ============================================================================
// Topic Search Trait
// ============================================================================

#[async_trait]
pub trait TopicSearch: Send + Sync {
    /// Search for the raw (non-normalized) query text
    async fn search(&self, query: &str) -> Result<RemoteBody, RemoteError>;
}

// ============================================================================
// Real Client (Production)
// ============================================================================

pub struct HealthTopicsClient {
    http: reqwest::Client,
    base_url: String,
    db: String,
}

impl HealthTopicsClient {
    pub fn new(config: &RemoteConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("SymptoScan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            db: config.db.clone(),
        })
    }
}

#[async_trait]
impl TopicSearch for HealthTopicsClient {
    async fn search(&self, query: &str) -> Result<RemoteBody, RemoteError> {
        debug!("Querying {} for {:?}", self.base_url, query);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("db", self.db.as_str()), ("term", query)])
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        parse_remote_body(&body)
    }
}

// ============================================================================
// Fake Search (Testing)
// ============================================================================

/// Replays a fixed body (or failure) and counts calls
pub struct FakeTopicSearch {
    body: Option<String>,
    calls: AtomicUsize,
}

impl FakeTopicSearch {
    /// Every search parses `body` as if the service had returned it
    pub fn returning(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every search fails with a network error
    pub fn unreachable() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopicSearch for FakeTopicSearch {
    async fn search(&self, _query: &str) -> Result<RemoteBody, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => parse_remote_body(body),
            None => Err(RemoteError::Network("connection refused".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_counts_calls() {
        let fake = FakeTopicSearch::unreachable();
        assert!(fake.search("fever").await.is_err());
        assert!(fake.search("fever").await.is_err());
        assert_eq!(fake.calls(), 2);
    }

    #[tokio::test]
    async fn test_fake_parses_markup() {
        let fake = FakeTopicSearch::returning("<feed><title>t</title><title>Flu</title></feed>");
        let body = fake.search("fever").await.unwrap();
        assert_eq!(body.condition_names(), vec!["Flu"]);
    }

    /// Serve `app` on a free local port and point a config at it
    async fn local_remote(app: axum::Router) -> RemoteConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        RemoteConfig {
            base_url: format!("http://{}/ws/query", addr),
            timeout_secs: 5,
            ..RemoteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_real_client_non_success_status() {
        let app = axum::Router::new().route(
            "/ws/query",
            axum::routing::get(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "<feed><title>t</title><title>Flu</title></feed>",
                )
            }),
        );
        let client = HealthTopicsClient::new(&local_remote(app).await).unwrap();

        let err = client.search("fever").await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(500)));
    }

    #[tokio::test]
    async fn test_real_client_parses_success_body() {
        let app = axum::Router::new().route(
            "/ws/query",
            axum::routing::get(|| async { "<feed><title>Health Topics</title><title>Flu</title></feed>" }),
        );
        let client = HealthTopicsClient::new(&local_remote(app).await).unwrap();

        let body = client.search("fever").await.unwrap();
        assert_eq!(body, RemoteBody::Titles(vec!["Flu".to_string()]));
    }

    #[tokio::test]
    async fn test_real_client_unreachable_host() {
        let config = RemoteConfig {
            base_url: "http://127.0.0.1:1/ws/query".to_string(),
            timeout_secs: 2,
            ..RemoteConfig::default()
        };
        let client = HealthTopicsClient::new(&config).unwrap();
        let err = client.search("fever").await.unwrap_err();
        assert!(matches!(err, RemoteError::Network(_)));
    }
}
