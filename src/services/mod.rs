//! Services module
//!
//! Contains the typed request client every domain API goes through

pub mod client;

pub use client::{ApiClient, RequestOptions};
