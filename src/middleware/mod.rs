//! Middleware module
//!
//! Route gate and request logging for the gate server

pub mod gate;
pub mod logging;

pub use gate::{decide, evaluate, has_cookie, is_excluded, route_gate, GateDecision};
pub use logging::request_logging_middleware;
