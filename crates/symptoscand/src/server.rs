//! HTTP server for symptoscand

use crate::routes;
use crate::topic_search::{HealthTopicsClient, TopicSearch};
use anyhow::{Context, Result};
use axum::http::{header::CONTENT_TYPE, Method};
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use symptoscan_common::{Resolver, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub search: Arc<dyn TopicSearch>,
    pub resolver: Resolver,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(search: Arc<dyn TopicSearch>, resolver: Resolver) -> Self {
        Self {
            search,
            resolver,
            start_time: Instant::now(),
        }
    }

    /// Production state: real search client plus the configured table
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let table = config
            .fallback_table()
            .context("Failed to load fallback table")?;
        info!("  Fallback table: {} symptoms", table.len());

        let search = HealthTopicsClient::new(&config.remote)
            .context("Failed to build HTTP client")?;

        Ok(Self::new(Arc::new(search), Resolver::new(Arc::new(table))))
    }
}

/// Build the router (also used by tests)
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .merge(routes::symptom_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
