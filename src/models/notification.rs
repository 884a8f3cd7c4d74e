//! Notification models

use serde::{Deserialize, Serialize};

/// Notification as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub recipient_id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub related_item_id: Option<String>,
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}
