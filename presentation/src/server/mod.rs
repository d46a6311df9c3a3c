//! HTTP transport for debates
//!
//! Routes (all under `/api`):
//!
//! | Method | Path            | Response                                |
//! |--------|-----------------|-----------------------------------------|
//! | GET    | `/health`       | liveness text, never authenticated      |
//! | GET    | `/config`       | agent labels and iteration limits       |
//! | POST   | `/debate`       | the finished [`DebateResult`] as JSON   |
//! | POST   | `/debate/stream`| one SSE message per debate event        |
//!
//! [`DebateResult`]: crossfire_domain::DebateResult

mod auth;
mod error;
mod routes;
mod sse;

pub use auth::BasicAuth;
pub use error::ApiError;
pub use routes::{ConfigView, DebateBody, HEALTH_MESSAGE};
pub use sse::SsePayload;

use crate::config::ServerConfig;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use crossfire_application::{DebateParams, RunDebateUseCase};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Shared state of the debate API
#[derive(Clone)]
pub struct AppState {
    use_case: RunDebateUseCase,
    params: DebateParams,
}

impl AppState {
    pub fn new(use_case: RunDebateUseCase, params: DebateParams) -> Self {
        Self { use_case, params }
    }
}

/// Build the API router
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut api = Router::new()
        .route("/config", get(routes::config))
        .route("/debate", post(routes::debate))
        .route("/debate/stream", post(routes::debate_stream));

    if let Some(auth) = &config.auth {
        info!(username = auth.username(), "Basic authentication enabled");
        api = api.route_layer(middleware::from_fn_with_state(
            Arc::new(auth.clone()),
            auth::require_basic_auth,
        ));
    }

    // Added after the auth layer so it stays public.
    let api = api.route("/health", get(routes::health));

    Router::new()
        .nest("/api", api)
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Serve the API until `shutdown` resolves
pub async fn serve(
    state: AppState,
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!(address = %listener.local_addr()?, "Debate API listening");

    axum::serve(listener, router(state, &config))
        .with_graceful_shutdown(shutdown)
        .await
}
