//! Error types for the protocol endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
        }
    }

    /// Full error envelope for a request id
    pub fn to_response(&self, id: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": self.code, "message": self.message}
        })
    }
}

/// Failures before a message can be dispatched
#[derive(Debug)]
pub(crate) enum ServerError {
    Parse(String),
    InvalidRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            ServerError::Parse(msg) => (PARSE_ERROR, format!("Parse error: {}", msg)),
            ServerError::InvalidRequest(msg) => {
                (INVALID_REQUEST, format!("Invalid request: {}", msg))
            }
        };

        tracing::warn!("Rejected message: {}", message);

        let body = RpcError { code, message }.to_response(Value::Null);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_bad_request() {
        let response = ServerError::Parse("eof".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_envelope() {
        let value = RpcError::method_not_found("foo/bar").to_response(json!(3));
        assert_eq!(value["id"], 3);
        assert_eq!(value["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(value["error"]["message"], "Method not found: foo/bar");
    }
}
