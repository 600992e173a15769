//! # Feature: Command Usage Tracking
//!
//! Fire-and-forget notification of every handled command to an external
//! analytics webhook. Delivery runs on a background task and never affects
//! the reply sent to the user.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Record command outcome (ok / error)
//! - 1.0.0: Initial release with async background delivery

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;

/// Per-request timeout for the analytics webhook
pub const DELIVERY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandOutcome {
    Ok,
    Error,
}

/// One handled command, as posted to the analytics webhook
#[derive(Debug, Clone, Serialize)]
pub struct CommandEvent {
    pub command: String,
    pub user_id: String,
    pub user_name: String,
    pub channel_id: String,
    pub guild_id: Option<String>,
    pub outcome: CommandOutcome,
    pub timestamp: DateTime<Utc>,
}

impl CommandEvent {
    pub fn new(
        command: &str,
        user_id: &str,
        user_name: &str,
        channel_id: &str,
        guild_id: Option<&str>,
        outcome: CommandOutcome,
    ) -> Self {
        Self {
            command: command.to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            channel_id: channel_id.to_string(),
            guild_id: guild_id.map(String::from),
            outcome,
            timestamp: Utc::now(),
        }
    }
}

/// Queues command events for non-blocking delivery
#[derive(Clone)]
pub struct UsageTracker {
    sender: mpsc::UnboundedSender<CommandEvent>,
}

impl UsageTracker {
    /// Create a tracker with a background delivery task.
    ///
    /// Without a webhook URL events are only written to the debug log.
    /// Must be called inside a tokio runtime.
    pub fn new(webhook_url: Option<String>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::spawn(Self::background_sender(webhook_url, receiver));

        UsageTracker { sender }
    }

    /// Queue a command event (non-blocking)
    pub fn log_command(&self, event: CommandEvent) {
        if let Err(e) = self.sender.send(event) {
            warn!("Failed to queue command usage event: {e}");
        }
    }

    async fn background_sender(
        webhook_url: Option<String>,
        mut receiver: mpsc::UnboundedReceiver<CommandEvent>,
    ) {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(DELIVERY_TIMEOUT_SECS))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("Analytics client unavailable, usage events will only be logged: {e}");
                while let Some(event) = receiver.recv().await {
                    debug!("Usage event (not delivered): {event:?}");
                }
                return;
            }
        };

        while let Some(event) = receiver.recv().await {
            match webhook_url.as_deref() {
                Some(url) => {
                    if let Err(e) = Self::deliver(&client, url, &event).await {
                        warn!("Failed to deliver usage event for /{}: {e}", event.command);
                    }
                }
                None => debug!(
                    "Usage: /{} by {} ({}) -> {:?}",
                    event.command, event.user_name, event.user_id, event.outcome
                ),
            }
        }
    }

    async fn deliver(client: &reqwest::Client, url: &str, event: &CommandEvent) -> anyhow::Result<()> {
        let response = client.post(url).json(event).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "analytics webhook returned {}",
                response.status()
            ));
        }

        debug!("Delivered usage event for /{}", event.command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn event(outcome: CommandOutcome) -> CommandEvent {
        CommandEvent::new("falta", "42", "valen", "1001", None, outcome)
    }

    #[test]
    fn test_event_serialization() {
        let value = serde_json::to_value(event(CommandOutcome::Ok)).unwrap();
        assert_eq!(value["command"], "falta");
        assert_eq!(value["user_id"], "42");
        assert_eq!(value["user_name"], "valen");
        assert_eq!(value["channel_id"], "1001");
        assert!(value["guild_id"].is_null());
        assert_eq!(value["outcome"], "ok");
        assert!(value["timestamp"].is_string());

        let value = serde_json::to_value(event(CommandOutcome::Error)).unwrap();
        assert_eq!(value["outcome"], "error");
    }

    #[tokio::test]
    async fn test_log_without_webhook_keeps_receiver_alive() {
        let tracker = UsageTracker::new(None);
        for _ in 0..100 {
            tracker.log_command(event(CommandOutcome::Ok));
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!tracker.sender.is_closed());
    }

    /// Minimal HTTP endpoint: forwards each request body, answers the first
    /// request with `first_status` and the rest with 200.
    async fn spawn_webhook(first_status: &'static str) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/usage", listener.local_addr().unwrap());
        let (bodies, received) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut status = first_status;
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let body = read_body(&mut stream).await;
                let response =
                    format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
                stream.write_all(response.as_bytes()).await.ok();
                stream.shutdown().await.ok();
                if bodies.send(body).is_err() {
                    return;
                }
                status = "200 OK";
            }
        });

        (url, received)
    }

    async fn read_body(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return String::new();
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let start = end + 4;
            if buf.len() >= start + length {
                return String::from_utf8_lossy(&buf[start..start + length]).into_owned();
            }
        }
    }

    async fn next_body(received: &mut mpsc::UnboundedReceiver<String>) -> serde_json::Value {
        let body = tokio::time::timeout(Duration::from_secs(5), received.recv())
            .await
            .expect("webhook received nothing")
            .expect("webhook server stopped");
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_event_is_posted_as_json() {
        let (url, mut received) = spawn_webhook("200 OK").await;
        let tracker = UsageTracker::new(Some(url));

        tracker.log_command(event(CommandOutcome::Ok));

        let body = next_body(&mut received).await;
        assert_eq!(body["command"], "falta");
        assert_eq!(body["user_id"], "42");
        assert_eq!(body["outcome"], "ok");
    }

    #[tokio::test]
    async fn test_failed_delivery_is_dropped_and_next_event_still_sent() {
        let (url, mut received) = spawn_webhook("500 Internal Server Error").await;
        let tracker = UsageTracker::new(Some(url));

        tracker.log_command(event(CommandOutcome::Ok));
        tracker.log_command(event(CommandOutcome::Error));

        let first = next_body(&mut received).await;
        assert_eq!(first["outcome"], "ok");

        // The 500 is not retried: the next request carries the second event
        let second = next_body(&mut received).await;
        assert_eq!(second["command"], "falta");
        assert_eq!(second["outcome"], "error");
        assert!(!tracker.sender.is_closed());
    }
}
