// ABOUTME: Local preview server exposing the rendered widget, its link, and the admin schema.
// ABOUTME: Axum router with shared immutable state; one resolved config per server instance.

use anyhow::{Context, Result};
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ButtonConfig;
use crate::error::Error;
use crate::schema::admin_schema;
use crate::templates::{render_button, PreviewTemplate};

/// Shared state for the preview server. The configuration is resolved
/// once at startup and never mutated, so handlers only ever read it.
#[derive(Clone)]
pub struct PreviewState {
    pub config: Arc<ButtonConfig>,
}

#[derive(Debug, Serialize)]
struct LinkResponse {
    link: String,
}

/// Build the preview router. State is attached by the caller, which
/// keeps the router testable without binding a socket.
pub fn preview_router() -> Router<PreviewState> {
    Router::new()
        .route("/", get(preview_page))
        .route("/snippet", get(snippet))
        .route("/link", get(link))
        .route("/schema", get(schema))
        .route("/healthz", get(healthz))
}

// ============================================================================
// Handlers
// ============================================================================

async fn preview_page(State(state): State<PreviewState>) -> Response {
    let widget = match render_button(&state.config) {
        Ok(html) => html,
        Err(e) => return render_failure(e),
    };
    let page = PreviewTemplate {
        title: "WhatsApp Button Preview".to_string(),
        link: state.config.deep_link(),
        widget,
    };
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e.into()),
    }
}

async fn snippet(State(state): State<PreviewState>) -> Response {
    match render_button(&state.config) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e),
    }
}

async fn link(State(state): State<PreviewState>) -> Json<LinkResponse> {
    Json(LinkResponse {
        link: state.config.deep_link(),
    })
}

async fn schema() -> Json<serde_json::Value> {
    Json(admin_schema())
}

async fn healthz() -> &'static str {
    "ok"
}

fn render_failure(e: Error) -> Response {
    tracing::error!(error = %e, "Failed to render widget");
    (StatusCode::INTERNAL_SERVER_ERROR, "render error").into_response()
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ButtonConfig, host: &str, port: u16) -> Result<()> {
    let state = PreviewState {
        config: Arc::new(config),
    };
    let app = preview_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    tracing::info!(addr = %addr, "Starting preview server");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind preview server to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
