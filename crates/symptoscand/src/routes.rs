//! API routes for symptoscand

use crate::server::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use symptoscan_common::{
    normalize, ErrorResponse, FallbackResponse, FeedResponse, HealthResponse, RemoteBody,
    SymptomError,
};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Symptom Routes
// ============================================================================

pub fn symptom_routes() -> Router<AppStateArc> {
    Router::new().route("/api/symptoms", get(search_symptoms))
}

#[derive(Debug, Deserialize)]
pub struct SymptomParams {
    pub q: Option<String>,
}

async fn search_symptoms(
    State(state): State<AppStateArc>,
    params: Result<Query<SymptomParams>, QueryRejection>,
) -> Response {
    let raw = match params {
        Ok(Query(params)) => params.q.unwrap_or_default(),
        Err(rejection) => {
            warn!("Unreadable query string: {}", rejection);
            return no_symptoms();
        }
    };

    if normalize(&raw).require_non_empty().is_err() {
        return no_symptoms();
    }

    let span = tracing::info_span!("symptoms", request_id = %Uuid::new_v4());
    async move {
        info!("User input: {:?}", raw);

        match state.search.search(&raw).await {
            Ok(RemoteBody::Titles(titles)) => {
                info!("Remote returned {} topics", titles.len());
                Json(FeedResponse::from_titles(&titles)).into_response()
            }
            Ok(RemoteBody::Json(value)) => Json(value).into_response(),
            Err(e) => {
                warn!("Remote search failed ({}), using fallback table", e);
                let fallback = state.resolver.resolve_raw(&raw).into_vec();
                Json(FallbackResponse { fallback }).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

fn no_symptoms() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: SymptomError::NoSymptoms.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        table_entries: state.resolver.table().len(),
    })
}
