// Protocol server - exposes the inspector as a tool + UI resource
//
// POST /mcp  JSON-RPC 2.0 (one message per request)
// GET  /     plain banner
//
// Stateless: every resources/read renders the page fresh from the token sheet.

mod error;
pub mod rpc;

use crate::controller::ViewController;
use crate::render::HtmlTarget;
use crate::theme::{Environment, TokenSheet};
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use error::ServerError;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state for the protocol server
#[derive(Clone)]
pub struct ServerState {
    sheet: Arc<TokenSheet>,
}

impl ServerState {
    pub fn new(sheet: TokenSheet) -> Self {
        Self {
            sheet: Arc::new(sheet),
        }
    }

    /// The inspector page in its initial state (Variables tab, light theme)
    pub fn page(&self) -> String {
        let env = Environment::new(self.sheet.as_ref().clone());
        ViewController::new(env, HtmlTarget::new()).document()
    }
}

/// Routes for the protocol endpoint
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/mcp", post(mcp_handler))
        .route("/mcp/", post(mcp_handler))
        .with_state(state)
}

/// Start the protocol server and run until Ctrl+C
pub async fn start_server(bind_addr: SocketAddr, sheet: TokenSheet) -> Result<()> {
    let app = router(ServerState::new(sheet));

    tracing::info!("Starting protocol server on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("Protocol server listening on http://{}/mcp", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await
        .context("Server error")?;

    tracing::info!("Protocol server shut down gracefully");
    Ok(())
}

async fn banner() -> &'static str {
    "MCP Theme Inspector"
}

async fn mcp_handler(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Response, ServerError> {
    let message: Value =
        serde_json::from_slice(&body).map_err(|e| ServerError::Parse(e.to_string()))?;
    if !message.is_object() {
        return Err(ServerError::InvalidRequest("expected a single JSON object".into()));
    }

    Ok(match rpc::handle_message(&state, &message) {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ServerState {
        ServerState::new(TokenSheet::bundled())
    }

    #[tokio::test]
    async fn test_handler_replies_with_json() {
        let body = Bytes::from_static(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        let response = mcp_handler(State(state()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_handler_accepts_notifications() {
        let body = Bytes::from_static(br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);
        let response = mcp_handler(State(state()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_handler_rejects_garbage() {
        let body = Bytes::from_static(b"{not json");
        let err = mcp_handler(State(state()), body).await.unwrap_err();
        assert!(matches!(err, ServerError::Parse(_)));

        let body = Bytes::from_static(b"[1, 2]");
        let err = mcp_handler(State(state()), body).await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidRequest(_)));
    }

    #[test]
    fn test_page_is_rendered_from_sheet() {
        let page = state().page();
        assert!(page.contains(r#"data-theme="light""#));
        assert!(page.contains("<title>Theme Inspector</title>"));
    }
}
