// Host session - handshake and the inbound message loop
//
// App -> host:  ui/initialize (request), ui/notifications/initialized
// Host -> app:  ui/notifications/host-context-changed, ping
//
// A session either comes up Connected or the inspector runs Standalone. The
// failure reason is kept for the status bar and the log; it is never an error
// the user has to deal with.

use super::channel::JsonLinesChannel;
use super::HostContext;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

pub const METHOD_INITIALIZE: &str = "ui/initialize";
pub const NOTIFY_INITIALIZED: &str = "ui/notifications/initialized";
pub const NOTIFY_CONTEXT_CHANGED: &str = "ui/notifications/host-context-changed";
pub const PROTOCOL_VERSION: &str = "2025-06-18";

const APP_NAME: &str = "theme-inspector";
const INITIALIZE_ID: i64 = 1;
const METHOD_NOT_FOUND: i64 = -32601;

// ─────────────────────────────────────────────────────────────────────────────
// Outcome types
// ─────────────────────────────────────────────────────────────────────────────

/// Why the inspector is running without a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandaloneReason {
    NoHost,
    ConnectFailed(String),
    HandshakeFailed(String),
    TimedOut,
    ChannelClosed,
}

impl fmt::Display for StandaloneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHost => write!(f, "no host configured"),
            Self::ConnectFailed(e) => write!(f, "connection failed: {}", e),
            Self::HandshakeFailed(e) => write!(f, "handshake failed: {}", e),
            Self::TimedOut => write!(f, "handshake timed out"),
            Self::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

/// Host identity from the initialize response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.version.is_empty()) {
            (true, _) => write!(f, "unknown host"),
            (false, true) => write!(f, "{}", self.name),
            (false, false) => write!(f, "{} {}", self.name, self.version),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult {
    #[serde(default)]
    host_info: HostInfo,
    #[serde(default)]
    host_context: Option<HostContext>,
}

/// Session state as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Connecting,
    Connected(HostInfo),
    Standalone(StandaloneReason),
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connecting => write!(f, "connecting to host"),
            Self::Connected(host) => write!(f, "connected to {}", host),
            Self::Standalone(reason) => write!(f, "standalone ({})", reason),
        }
    }
}

pub enum SessionOutcome {
    Connected(HostSession),
    Standalone(StandaloneReason),
}

impl SessionOutcome {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Connected(session) => SessionStatus::Connected(session.host.clone()),
            Self::Standalone(reason) => SessionStatus::Standalone(reason.clone()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inbound classification
// ─────────────────────────────────────────────────────────────────────────────

enum Inbound {
    Response { id: Value, result: Result<Value, String> },
    Request { id: Value, method: String },
    Notification { method: String, params: Value },
}

fn classify(message: Value) -> Option<Inbound> {
    let method = message.get("method").and_then(Value::as_str).map(str::to_string);
    let id = message.get("id").cloned().filter(|id| !id.is_null());

    match (method, id) {
        (Some(method), Some(id)) => Some(Inbound::Request { id, method }),
        (Some(method), None) => Some(Inbound::Notification {
            method,
            params: message.get("params").cloned().unwrap_or(Value::Null),
        }),
        (None, Some(id)) => {
            let result = match message.get("error") {
                Some(err) => Err(err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string()),
                None => Ok(message.get("result").cloned().unwrap_or(Value::Null)),
            };
            Some(Inbound::Response { id, result })
        }
        (None, None) => None,
    }
}

/// Answer a host request: pings get `{}`, everything else method-not-found
async fn answer_request(
    channel: &mut JsonLinesChannel,
    id: Value,
    method: &str,
) -> anyhow::Result<()> {
    let reply = if method == "ping" {
        json!({"jsonrpc": "2.0", "id": id, "result": {}})
    } else {
        tracing::debug!("Host called unsupported method '{}'", method);
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": METHOD_NOT_FOUND, "message": format!("Method not found: {}", method)}
        })
    };
    channel.send(&reply).await
}

// ─────────────────────────────────────────────────────────────────────────────
// Establishment
// ─────────────────────────────────────────────────────────────────────────────

async fn handshake(channel: &mut JsonLinesChannel) -> Result<InitializeResult, StandaloneReason> {
    let request = json!({
        "jsonrpc": "2.0",
        "id": INITIALIZE_ID,
        "method": METHOD_INITIALIZE,
        "params": {
            "appInfo": {"name": APP_NAME, "version": env!("CARGO_PKG_VERSION")},
            "appCapabilities": {},
            "protocolVersion": PROTOCOL_VERSION,
        }
    });
    channel
        .send(&request)
        .await
        .map_err(|e| StandaloneReason::HandshakeFailed(e.to_string()))?;

    let result = loop {
        let message = match channel.recv().await {
            Ok(Some(message)) => message,
            Ok(None) => return Err(StandaloneReason::ChannelClosed),
            Err(e) => return Err(StandaloneReason::HandshakeFailed(e.to_string())),
        };

        match classify(message) {
            Some(Inbound::Response { id, result }) if id == json!(INITIALIZE_ID) => {
                break result.map_err(StandaloneReason::HandshakeFailed)?;
            }
            Some(Inbound::Request { id, method }) => {
                answer_request(channel, id, &method)
                    .await
                    .map_err(|e| StandaloneReason::HandshakeFailed(e.to_string()))?;
            }
            Some(Inbound::Notification { method, .. }) => {
                tracing::debug!("Ignoring '{}' before initialize completed", method);
            }
            Some(Inbound::Response { id, .. }) => {
                tracing::debug!("Ignoring response to unknown request {}", id);
            }
            None => tracing::debug!("Ignoring message without method or id"),
        }
    };

    let init: InitializeResult = serde_json::from_value(result)
        .map_err(|e| StandaloneReason::HandshakeFailed(format!("bad initialize result: {}", e)))?;

    channel
        .send(&json!({"jsonrpc": "2.0", "method": NOTIFY_INITIALIZED, "params": {}}))
        .await
        .map_err(|e| StandaloneReason::HandshakeFailed(e.to_string()))?;

    Ok(init)
}

/// Run the handshake on an open channel
///
/// With `timeout` set, a host that never answers yields
/// `Standalone(TimedOut)`; without it the handshake waits indefinitely.
pub async fn establish(
    mut channel: JsonLinesChannel,
    timeout: Option<Duration>,
) -> SessionOutcome {
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, handshake(&mut channel)).await {
            Ok(result) => result,
            Err(_) => Err(StandaloneReason::TimedOut),
        },
        None => handshake(&mut channel).await,
    };

    match result {
        Ok(init) => {
            tracing::info!("Connected to {}", init.host_info);
            SessionOutcome::Connected(HostSession {
                channel,
                host: init.host_info,
                initial_context: init.host_context,
            })
        }
        Err(reason) => {
            tracing::warn!("Host session unavailable: {}", reason);
            SessionOutcome::Standalone(reason)
        }
    }
}

/// Connect to a host address (if any) and establish a session
pub async fn connect(addr: Option<&str>, timeout: Option<Duration>) -> SessionOutcome {
    let Some(addr) = addr else {
        tracing::info!("No host configured, running standalone");
        return SessionOutcome::Standalone(StandaloneReason::NoHost);
    };

    match JsonLinesChannel::connect(addr).await {
        Ok(channel) => establish(channel, timeout).await,
        Err(e) => {
            tracing::warn!("{:#}", e);
            SessionOutcome::Standalone(StandaloneReason::ConnectFailed(format!("{:#}", e)))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

pub struct HostSession {
    channel: JsonLinesChannel,
    host: HostInfo,
    initial_context: Option<HostContext>,
}

impl HostSession {
    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    /// Context delivered with the initialize response (taken once)
    pub fn take_initial_context(&mut self) -> Option<HostContext> {
        self.initial_context.take()
    }

    /// Wait for the next host-context-changed notification
    ///
    /// Pings are answered along the way. None means the host went away.
    pub async fn next_context(&mut self) -> Option<HostContext> {
        loop {
            let message = match self.channel.recv().await {
                Ok(Some(message)) => message,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!("Host channel error: {:#}", e);
                    return None;
                }
            };

            match classify(message) {
                Some(Inbound::Notification { method, params })
                    if method == NOTIFY_CONTEXT_CHANGED =>
                {
                    match HostContext::from_value(params) {
                        Ok(ctx) => return Some(ctx),
                        Err(e) => tracing::warn!("Ignoring malformed host context: {}", e),
                    }
                }
                Some(Inbound::Request { id, method }) => {
                    if let Err(e) = answer_request(&mut self.channel, id, &method).await {
                        tracing::warn!("Failed to answer host request: {:#}", e);
                        return None;
                    }
                }
                Some(Inbound::Notification { method, .. }) => {
                    tracing::trace!("Ignoring host notification '{}'", method);
                }
                Some(Inbound::Response { .. }) | None => {}
            }
        }
    }
}
