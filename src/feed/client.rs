//! HTTP client for the messages resource.

use anyhow::{Context, Result};
use serde_json::json;

use crate::db::Message;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Feed client for talking to a wall server
#[derive(Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new client for the wall at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full feed, oldest first.
    pub async fn fetch_messages(&self) -> Result<Vec<Message>> {
        let url = format!("{}/api/messages", self.base_url);

        let messages = self
            .http_client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch messages")?
            .error_for_status()
            .context("Server rejected the list request")?
            .json::<Vec<Message>>()
            .await
            .context("Failed to decode message list")?;

        Ok(messages)
    }

    /// Post a new message, returning the stored record.
    pub async fn post_message(&self, content: &str) -> Result<Message> {
        let url = format!("{}/api/messages", self.base_url);

        let message = self
            .http_client
            .post(&url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .context("Failed to post message")?
            .error_for_status()
            .context("Server rejected the message")?
            .json::<Message>()
            .await
            .context("Failed to decode created message")?;

        Ok(message)
    }

    /// Delete a message by id.
    pub async fn delete_message(&self, id: i64) -> Result<()> {
        let url = format!("{}/api/messages", self.base_url);

        self.http_client
            .delete(&url)
            .query(&[("id", id)])
            .send()
            .await
            .context("Failed to delete message")?
            .error_for_status()
            .context("Server rejected the delete request")?;

        Ok(())
    }
}
