//! Host context synchronization
//!
//! - `context`: wire form of a host context
//! - `sync`: applying a context to state and environment
//! - `channel`: newline-delimited JSON transport
//! - `session`: handshake, session outcome, inbound loop

pub mod channel;
mod context;
pub mod session;
mod sync;

pub use context::HostContext;
pub use session::{SessionStatus, StandaloneReason};
pub use sync::apply_host_context;

use crate::events::InspectorEvent;
use session::{connect, SessionOutcome};
use std::time::Duration;
use tokio::sync::mpsc;

/// Session task for interactive front-ends
///
/// Returns when the host disconnects or the receiver is dropped.
pub async fn run_session(
    addr: Option<String>,
    timeout: Option<Duration>,
    events: mpsc::Sender<InspectorEvent>,
) {
    let outcome = connect(addr.as_deref(), timeout).await;
    forward_session(outcome, events).await;
}

/// Report the session outcome, then forward the initial context and every
/// pushed context as events, ending with `ChannelClosed` when the host goes away
async fn forward_session(outcome: SessionOutcome, events: mpsc::Sender<InspectorEvent>) {
    if events.send(InspectorEvent::Session(outcome.status())).await.is_err() {
        return;
    }

    let SessionOutcome::Connected(mut session) = outcome else {
        return;
    };

    if let Some(ctx) = session.take_initial_context() {
        if events.send(InspectorEvent::HostContextChanged(ctx)).await.is_err() {
            return;
        }
    }

    while let Some(ctx) = session.next_context().await {
        if events.send(InspectorEvent::HostContextChanged(ctx)).await.is_err() {
            return;
        }
    }

    tracing::info!("Host {} disconnected", session.host());
    let _ = events
        .send(InspectorEvent::Session(SessionStatus::Standalone(
            StandaloneReason::ChannelClosed,
        )))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_session_without_host_reports_standalone() {
        let (tx, mut rx) = mpsc::channel(8);
        run_session(None, None, tx).await;
        assert_eq!(
            rx.recv().await,
            Some(InspectorEvent::Session(SessionStatus::Standalone(
                StandaloneReason::NoHost
            )))
        );
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_connected_session_forwards_contexts_until_close() {
        use super::channel::JsonLinesChannel;
        use super::session::establish;
        use serde_json::json;

        let (app, host) = tokio::io::duplex(4096);
        let (app_read, app_write) = tokio::io::split(app);
        let (host_read, host_write) = tokio::io::split(host);
        let app = JsonLinesChannel::new(app_read, app_write);
        let mut host = JsonLinesChannel::new(host_read, host_write);

        let host_task = tokio::spawn(async move {
            let init = host.recv().await.unwrap().unwrap();
            host.send(&json!({
                "jsonrpc": "2.0",
                "id": init["id"].clone(),
                "result": {
                    "protocolVersion": session::PROTOCOL_VERSION,
                    "hostInfo": {"name": "test-host", "version": "0.1"},
                    "hostContext": {"theme": "dark"}
                }
            }))
            .await
            .unwrap();
            // initialized notification
            host.recv().await.unwrap().unwrap();

            host.send(&json!({
                "jsonrpc": "2.0",
                "method": session::NOTIFY_CONTEXT_CHANGED,
                "params": {"styles": {"variables": {"--color-ring-info": "rgb(0,0,255)"}}}
            }))
            .await
            .unwrap();
            // Dropping the host end closes the channel
        });

        let outcome = establish(app, None).await;
        let (tx, mut rx) = mpsc::channel(8);
        let forward = tokio::spawn(forward_session(outcome, tx));
        host_task.await.unwrap();

        match rx.recv().await {
            Some(InspectorEvent::Session(SessionStatus::Connected(info))) => {
                assert_eq!(info.name, "test-host")
            }
            other => panic!("expected connected status, got {:?}", other),
        }
        assert_eq!(
            rx.recv().await,
            Some(InspectorEvent::HostContextChanged(HostContext::with_theme("dark")))
        );
        match rx.recv().await {
            Some(InspectorEvent::HostContextChanged(ctx)) => assert_eq!(
                ctx.style_variables().unwrap(),
                vec![("--color-ring-info".to_string(), "rgb(0,0,255)".to_string())]
            ),
            other => panic!("expected pushed context, got {:?}", other),
        }
        assert_eq!(
            rx.recv().await,
            Some(InspectorEvent::Session(SessionStatus::Standalone(
                StandaloneReason::ChannelClosed
            )))
        );
        assert_eq!(rx.recv().await, None);
        forward.await.unwrap();
    }
}
