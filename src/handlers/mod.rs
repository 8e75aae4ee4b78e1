pub mod attendees;
pub mod availability_responses;
pub mod events;
pub mod time_slots;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared router state: the one pool, injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(events::routes())
        .merge(time_slots::routes())
        .merge(attendees::routes())
        .merge(availability_responses::routes())
        .fallback(unmatched_route)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Scheme for share-link construction: honor a proxy's forwarded protocol,
/// default to http.
pub(crate) fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Slotpick API",
        "version": version,
        "description": "Event scheduling coordination API",
        "endpoints": {
            "events": "/events[/:id|:uniqueUrl]",
            "time_slots": "/time_slots[/:id], /time_slots/event/:eventId",
            "attendees": "/attendees[/:id], /attendees/event/:eventId",
            "availability_responses": "/availability_responses[/:id]",
            "health": "/health",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "message": "Database connected",
                "timestamp": now,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "Database connection failed",
                    "timestamp": now,
                })),
            )
        }
    }
}

async fn unmatched_route() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found." })),
    )
}
