//! Page placeholder
//!
//! Pages are rendered by the front end; the gate server answers requests that
//! passed the gate with a small JSON description instead.

use axum::{extract::Request, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PagePlaceholder {
    pub path: String,
    pub status: String,
}

/// Fallback for every path that passed the gate
pub async fn page_placeholder(request: Request) -> Json<PagePlaceholder> {
    Json(PagePlaceholder {
        path: request.uri().path().to_string(),
        status: "allowed".to_string(),
    })
}
