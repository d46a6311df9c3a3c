//! Debate API handlers

use super::AppState;
use super::error::ApiError;
use super::sse::to_sse_event;
use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use crossfire_application::{EventSink, RunDebateError, RunDebateInput, event_channel};
use crossfire_domain::{DebateEvent, DebateRequest, DebateResult, MAX_ITERATIONS_LIMIT};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const HEALTH_MESSAGE: &str = "Crossfire API is running";

/// Request body of both debate endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateBody {
    #[serde(default)]
    pub prompt: String,
    pub max_iterations: Option<usize>,
}

/// Public view of the server setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigView {
    pub proposer_model: String,
    pub challenger_model: String,
    pub default_max_iterations: usize,
    pub max_iterations_limit: usize,
}

impl AppState {
    fn request(&self, body: DebateBody) -> Result<DebateRequest, ApiError> {
        let max_iterations = body
            .max_iterations
            .unwrap_or(self.params.default_max_iterations);
        let request = DebateRequest::new(body.prompt).with_max_iterations(max_iterations);
        request.validate()?;
        Ok(request)
    }
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn config(State(state): State<AppState>) -> Json<ConfigView> {
    Json(ConfigView {
        proposer_model: state.use_case.proposer().label().to_string(),
        challenger_model: state.use_case.challenger().label().to_string(),
        default_max_iterations: state.params.default_max_iterations,
        max_iterations_limit: MAX_ITERATIONS_LIMIT,
    })
}

/// Run a debate to completion and return the result
pub async fn debate(
    State(state): State<AppState>,
    Json(body): Json<DebateBody>,
) -> Result<Json<DebateResult>, ApiError> {
    let request = state.request(body)?;
    let run_timeout = state.params.run_timeout;
    info!(max_iterations = request.max_iterations, "Debate requested");

    match tokio::time::timeout(run_timeout, state.use_case.execute(request.into())).await {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(RunDebateError::Cancelled)) => Err(ApiError::Cancelled),
        Err(_) => {
            warn!(timeout_secs = run_timeout.as_secs(), "Debate timed out");
            Err(ApiError::Timeout(run_timeout))
        }
    }
}

/// Run a debate, streaming every event as it happens
pub async fn debate_stream(
    State(state): State<AppState>,
    Json(body): Json<DebateBody>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let request = state.request(body)?;
    let run_timeout = state.params.run_timeout;
    info!(max_iterations = request.max_iterations, "Streaming debate requested");

    let (sink, mut events) = event_channel(state.params.stream_buffer, state.params.sink_timeout);
    let token = CancellationToken::new();
    let input = RunDebateInput::from(request).with_cancellation(token.clone());
    let use_case = state.use_case.clone();

    tokio::spawn({
        let token = token.clone();
        async move {
            match tokio::time::timeout(run_timeout, use_case.execute_with_sink(input, &sink)).await
            {
                Ok(Ok(result)) => debug!(
                    status = %result.final_status,
                    iterations = result.total_iterations,
                    "Streaming debate finished"
                ),
                Ok(Err(RunDebateError::Cancelled)) => debug!("Streaming debate cancelled"),
                Err(_) => {
                    token.cancel();
                    warn!(timeout_secs = run_timeout.as_secs(), "Streaming debate timed out");
                    let event = DebateEvent::Error {
                        message: ApiError::Timeout(run_timeout).to_string(),
                        turn: None,
                    };
                    if let Err(e) = sink.accept(event).await {
                        debug!(error = %e, "Could not report timeout to stream consumer");
                    }
                }
            }
        }
    });

    // Dropping the response stream cancels the run.
    let guard = token.drop_guard();
    let stream = async_stream::stream! {
        let _guard = guard;
        while let Some(event) = events.recv().await {
            if let Some(sse) = to_sse_event(&event) {
                yield Ok::<_, Infallible>(sse);
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
