//! Chat API

use crate::models::{ChatListResponse, ChatStart, MessageCreate, MessageResponse};
use crate::services::ApiClient;
use crate::utils::error::AppResult;
use crate::utils::validation::validate_message;
use futures::{Stream, StreamExt};
use reqwest::Method;
use std::time::Duration;
use tokio_stream::wrappers::IntervalStream;

/// Interval the chat screen refreshes messages at
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Shortest interval `poll_messages` will tick at
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct ChatApi {
    client: ApiClient,
}

impl ChatApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /chats/`
    pub async fn get_my_chats(&self) -> AppResult<Vec<ChatListResponse>> {
        self.client.get("/chats/").await
    }

    /// `POST /chats/start`
    ///
    /// The server returns the existing chat when the caller already has one
    /// for this listing.
    pub async fn start_chat(&self, data: &ChatStart) -> AppResult<ChatListResponse> {
        self.client.send_json(Method::POST, "/chats/start", data).await
    }

    /// `GET /chats/{id}/messages`
    pub async fn get_chat_messages(&self, chat_id: &str) -> AppResult<Vec<MessageResponse>> {
        self.client.get(&format!("/chats/{}/messages", chat_id)).await
    }

    /// `POST /chats/{id}/messages`
    pub async fn send_message(&self, chat_id: &str, message: &MessageCreate) -> AppResult<MessageResponse> {
        validate_message(message)?;
        self.client
            .send_json(Method::POST, &format!("/chats/{}/messages", chat_id), message)
            .await
    }

    /// Fetch the chat's messages once per `every`, starting immediately.
    ///
    /// Each tick is an independent request; failures are yielded, not retried,
    /// and the stream keeps going. `every` is raised to [`MIN_POLL_INTERVAL`].
    pub fn poll_messages(
        &self,
        chat_id: &str,
        every: Duration,
    ) -> impl Stream<Item = AppResult<Vec<MessageResponse>>> + '_ {
        let chat_id = chat_id.to_string();
        let every = every.max(MIN_POLL_INTERVAL);
        IntervalStream::new(tokio::time::interval(every)).then(move |_| {
            let chat_id = chat_id.clone();
            async move { self.get_chat_messages(&chat_id).await }
        })
    }
}
