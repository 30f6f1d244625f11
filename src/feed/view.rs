// ============================================================================
// Feed View
// ============================================================================
//
// Keeps a terminal rendition of the wall fresh:
// - a spawned poller re-fetches the full feed on an interval and hands each
//   snapshot to the view, which replaces its list wholesale
// - lines read from stdin become new messages; `/delete <id>` removes one
// - a submission is awaited before the next line is accepted, so at most one
//   write is in flight per user action
//
// ============================================================================

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use std::io::Write;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::db::Message;
use crate::feed::FeedClient;

/// What one line of user input asks the feed to do
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Post the contained text
    Post(String),
    /// Delete the message with this id
    Delete(i64),
    /// Nothing actionable (blank line, or malformed command)
    Ignore,
}

impl Input {
    /// Interpret one line of user input. Blank input is rejected locally,
    /// mirroring the server-side validation.
    fn parse(line: &str) -> Input {
        let line = line.trim();

        if line.is_empty() {
            return Input::Ignore;
        }

        if let Some(rest) = line.strip_prefix("/delete") {
            return match rest.trim().parse::<i64>() {
                Ok(id) => Input::Delete(id),
                Err(_) => Input::Ignore,
            };
        }

        Input::Post(line.to_string())
    }
}

/// The rendered state of the feed
pub struct FeedView {
    messages: Vec<Message>,
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Replace the whole view with a fresh snapshot. Returns true when the
    /// snapshot differs from what is currently shown.
    pub fn replace(&mut self, snapshot: Vec<Message>) -> bool {
        if self.messages == snapshot {
            return false;
        }

        self.messages = snapshot;
        true
    }

    /// Render the feed, newest entry last (the terminal equivalent of
    /// scrolling to the bottom).
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- wall ({} messages) ---", self.messages.len())?;

        if self.messages.is_empty() {
            writeln!(out, "No messages yet. Be the first to post!")?;
            return Ok(());
        }

        for message in &self.messages {
            writeln!(
                out,
                "[{}] {}",
                time_label(&message.created_at),
                message.content
            )?;
        }

        Ok(())
    }
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

/// Localized time-of-day label, e.g. "3:04 PM"
fn time_label(created_at: &DateTime<Utc>) -> String {
    let label = created_at
        .with_timezone(&Local)
        .format("%l:%M %p")
        .to_string();

    label.trim_start().to_string()
}

/// Drive the feed: spawn the poller, render snapshots, submit input lines.
///
/// Returns when stdin closes or ctrl-c is received; the poller is aborted
/// before returning so no timer outlives the view.
pub async fn run_feed(client: FeedClient, poll_interval: Duration) -> Result<()> {
    let mut view = FeedView::new();
    let mut stdout = std::io::stdout();

    // Initial load, before the first tick.
    match client.fetch_messages().await {
        Ok(snapshot) => {
            view.replace(snapshot);
            view.render(&mut stdout)?;
        }
        Err(e) => tracing::warn!(error = %e, "Initial fetch failed"),
    }

    let (snapshot_tx, mut snapshot_rx) = mpsc::channel::<Vec<Message>>(1);
    let poller = tokio::spawn(poll_feed(client.clone(), poll_interval, snapshot_tx));

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            snapshot = snapshot_rx.recv() => {
                match snapshot {
                    Some(snapshot) => {
                        if view.replace(snapshot) {
                            view.render(&mut stdout)?;
                        }
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if submit(&client, &line).await {
                            // A write went through; refresh immediately rather
                            // than waiting for the next poll.
                            match client.fetch_messages().await {
                                Ok(snapshot) => {
                                    view.replace(snapshot);
                                    view.render(&mut stdout)?;
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "Refresh after submit failed")
                                }
                            }
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read input");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    poller.abort();

    Ok(())
}

/// Apply one line of input. Returns true when a write reached the server.
async fn submit(client: &FeedClient, line: &str) -> bool {
    match Input::parse(line) {
        Input::Post(content) => match client.post_message(&content).await {
            Ok(message) => {
                tracing::debug!(id = message.id, "Message posted");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error posting message");
                false
            }
        },
        Input::Delete(id) => match client.delete_message(id).await {
            Ok(()) => {
                tracing::debug!(id = id, "Message deleted");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error deleting message");
                false
            }
        },
        Input::Ignore => false,
    }
}

/// Re-fetch the full feed on a fixed interval and hand each snapshot to the
/// view. Stops when the receiving side goes away.
async fn poll_feed(
    client: FeedClient,
    poll_interval: Duration,
    snapshot_tx: mpsc::Sender<Vec<Message>>,
) {
    let mut ticker = interval(poll_interval);

    // The first tick completes immediately; the initial load already happened.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match client.fetch_messages().await {
            Ok(snapshot) => {
                if snapshot_tx.send(snapshot).await.is_err() {
                    break;
                }
            }
            Err(e) => tracing::warn!(error = %e, "Error fetching messages"),
        }
    }
}
