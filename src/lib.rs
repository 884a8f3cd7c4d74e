//! Loopa client library
//!
//! Typed client core for the Loopa marketplace API: bearer token store,
//! request client, domain APIs and the route gate that guards page paths.

pub mod api;
pub mod config;
pub mod credentials;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use api::LoopaClient;
pub use config::Settings;
pub use credentials::{CredentialProvider, TokenStore};
pub use handlers::{create_router, AppState};
pub use middleware::GateDecision;
pub use services::{ApiClient, RequestOptions};
pub use utils::error::{ApiError, AppError, AppResult, ErrorBody};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
