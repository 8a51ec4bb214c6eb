// JSON-RPC dispatch for the protocol endpoint
//
// One tool (inspect-theme) and one resource (ui://theme-inspector). The
// resource body is the rendered inspector page; the tool only tells the host
// which resource to open.

use super::error::RpcError;
use super::ServerState;
use serde_json::{json, Value};

pub const SERVER_NAME: &str = "mcp-theme-inspector";
pub const TOOL_NAME: &str = "inspect-theme";
pub const RESOURCE_URI: &str = "ui://theme-inspector";
pub const RESOURCE_MIME_TYPE: &str = "text/html;profile=mcp-app";

fn tool_descriptor() -> Value {
    json!({
        "name": TOOL_NAME,
        "title": "Theme Inspector",
        "description": "Inspect the current host theme variables and preview UI components.",
        "inputSchema": {"type": "object", "properties": {}},
        "annotations": {
            "readOnlyHint": true,
            "idempotentHint": true,
            "openWorldHint": false
        },
        "_meta": {"ui": {"resourceUri": RESOURCE_URI}}
    })
}

fn resource_descriptor() -> Value {
    json!({
        "uri": RESOURCE_URI,
        "name": "Theme Inspector UI",
        "description": "Theme Inspector: CSS variable viewer and UI preview",
        "mimeType": RESOURCE_MIME_TYPE
    })
}

/// Result for a single method call
pub fn dispatch(state: &ServerState, method: &str, params: &Value) -> Result<Value, RpcError> {
    match method {
        "initialize" => {
            let version = params
                .get("protocolVersion")
                .and_then(Value::as_str)
                .unwrap_or(crate::host::session::PROTOCOL_VERSION);
            Ok(json!({
                "protocolVersion": version,
                "capabilities": {
                    "tools": {"listChanged": false},
                    "resources": {"listChanged": false}
                },
                "serverInfo": {"name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION")}
            }))
        }
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({"tools": [tool_descriptor()]})),
        "tools/call" => {
            let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
            if name != TOOL_NAME {
                return Err(RpcError::invalid_params(format!("Unknown tool: {}", name)));
            }
            tracing::info!("Tool {} called", TOOL_NAME);
            Ok(json!({
                "content": [{"type": "text", "text": "Theme inspector opened."}]
            }))
        }
        "resources/list" => Ok(json!({"resources": [resource_descriptor()]})),
        "resources/read" => {
            let uri = params.get("uri").and_then(Value::as_str).unwrap_or_default();
            if uri != RESOURCE_URI {
                return Err(RpcError::invalid_params(format!("Unknown resource: {}", uri)));
            }
            Ok(json!({
                "contents": [{
                    "uri": RESOURCE_URI,
                    "mimeType": RESOURCE_MIME_TYPE,
                    "text": state.page()
                }]
            }))
        }
        other => Err(RpcError::method_not_found(other)),
    }
}

/// Handle one decoded message; None for notifications (no reply)
pub fn handle_message(state: &ServerState, message: &Value) -> Option<Value> {
    let method = message.get("method").and_then(Value::as_str).unwrap_or_default();
    let id = message.get("id").cloned().filter(|id| !id.is_null());

    let Some(id) = id else {
        tracing::debug!("Notification {}", method);
        return None;
    };

    let params = message.get("params").cloned().unwrap_or(Value::Null);
    tracing::debug!("Request {} ({})", method, id);

    Some(match dispatch(state, method, &params) {
        Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Err(err) => err.to_response(id),
    })
}

#[cfg(test)]
mod tests {
    use super::super::error::{INVALID_PARAMS, METHOD_NOT_FOUND};
    use super::*;
    use crate::theme::TokenSheet;

    fn state() -> ServerState {
        ServerState::new(TokenSheet::bundled())
    }

    fn call(method: &str, params: Value) -> Value {
        handle_message(
            &state(),
            &json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params}),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_names_server() {
        let reply = call("initialize", json!({"protocolVersion": "2025-03-26"}));
        assert_eq!(reply["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(reply["result"]["protocolVersion"], "2025-03-26");
        assert!(reply["result"]["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_tools_list_shape() {
        let reply = call("tools/list", json!({}));
        let tool = &reply["result"]["tools"][0];
        assert_eq!(tool["name"], "inspect-theme");
        assert_eq!(tool["title"], "Theme Inspector");
        assert_eq!(tool["annotations"]["readOnlyHint"], true);
        assert_eq!(tool["annotations"]["idempotentHint"], true);
        assert_eq!(tool["annotations"]["openWorldHint"], false);
        assert_eq!(tool["_meta"]["ui"]["resourceUri"], "ui://theme-inspector");
    }

    #[test]
    fn test_tools_call() {
        let reply = call("tools/call", json!({"name": "inspect-theme", "arguments": {}}));
        assert_eq!(reply["result"]["content"][0]["type"], "text");
        assert_eq!(reply["result"]["content"][0]["text"], "Theme inspector opened.");
    }

    #[test]
    fn test_unknown_tool_is_invalid_params() {
        let reply = call("tools/call", json!({"name": "nope"}));
        assert_eq!(reply["error"]["code"], INVALID_PARAMS);
        assert!(reply.get("result").is_none());
    }

    #[test]
    fn test_resources_read_serves_page() {
        let reply = call("resources/read", json!({"uri": "ui://theme-inspector"}));
        let content = &reply["result"]["contents"][0];
        assert_eq!(content["mimeType"], "text/html;profile=mcp-app");
        let text = content["text"].as_str().unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("Color Groups"));

        let reply = call("resources/read", json!({"uri": "ui://other"}));
        assert_eq!(reply["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_resources_list() {
        let reply = call("resources/list", json!({}));
        let resource = &reply["result"]["resources"][0];
        assert_eq!(resource["uri"], RESOURCE_URI);
        assert_eq!(resource["name"], "Theme Inspector UI");
    }

    #[test]
    fn test_unknown_method() {
        let reply = call("prompts/list", json!({}));
        assert_eq!(reply["error"]["code"], METHOD_NOT_FOUND);
    }

    #[test]
    fn test_notification_gets_no_reply() {
        let msg = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_message(&state(), &msg).is_none());
    }
}
