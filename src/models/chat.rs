//! Chat and message models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chat summary in the inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatListResponse {
    pub id: String,
    pub participants: Vec<String>,
    pub listing_id: String,
    pub status: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_time: Option<String>,
    /// Unread counts keyed by participant id
    #[serde(default)]
    pub unread_count: HashMap<String, u32>,
    #[serde(default)]
    pub listing_title: Option<String>,
    #[serde(default)]
    pub listing_image: Option<String>,
}

impl ChatListResponse {
    /// Unread messages for one participant
    pub fn unread_for(&self, user_id: &str) -> u32 {
        self.unread_count.get(user_id).copied().unwrap_or(0)
    }
}

/// Body of `POST /chats/start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatStart {
    pub listing_id: String,
}

/// New chat message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl MessageCreate {
    /// Plain text message
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            message_type: Some("text".to_string()),
            media_url: None,
        }
    }
}

/// Chat message as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
