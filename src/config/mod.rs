//! Configuration management module
//!
//! Loads client, credential, gate and logging settings from the environment

pub mod settings;

pub use settings::{ApiConfig, CredentialConfig, GateConfig, LoggingConfig, ServerConfig, Settings};
