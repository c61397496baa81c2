use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::any;
use axum::Json;
use axum::Router;
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;
use crate::models::eta::{Eta, EtaRequest};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", any(lookup_eta))
}

async fn lookup_eta(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Eta>, AppError> {
    let result = resolve_eta(&state, &body).await;

    match &result {
        Ok(_) => state.metrics.record_lookup("success"),
        Err(err) => {
            warn!(error = %err, outcome = err.outcome(), "directions lookup failed");
            state.metrics.record_lookup(err.outcome());
        }
    }

    result.map(Json)
}

async fn resolve_eta(state: &AppState, body: &[u8]) -> Result<Eta, AppError> {
    let body: Value = serde_json::from_slice(body)?;
    let request = EtaRequest::from_body(body)?;

    if !state.directions.is_configured() {
        return Err(AppError::Configuration);
    }

    let (origin, destination) = request.endpoints()?;

    let start = Instant::now();
    let response = state
        .directions
        .fetch_directions(&origin, &destination)
        .await;
    let outcome = if response.is_ok() { "success" } else { "error" };
    state
        .metrics
        .observe_upstream(outcome, start.elapsed().as_secs_f64());

    response?.into_eta()
}
