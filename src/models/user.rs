//! User models

use super::location::Location;
use serde::{Deserialize, Serialize};

/// Profile statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub carbon_saved: Option<f64>,
    #[serde(default)]
    pub items_donated: Option<u32>,
    #[serde(default)]
    pub items_received: Option<u32>,
}

/// User profile as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub fcm_token: Option<String>,
    #[serde(default)]
    pub verification_doc: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub stats: Option<UserStats>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
