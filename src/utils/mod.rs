//! Utilities module
//!
//! Contains error handling, logging helpers and caller-side validation

pub mod error;
pub mod logging;
pub mod validation;
