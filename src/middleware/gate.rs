//! Route gate
//!
//! Decides per request path whether a visitor may proceed, must log in, or
//! is already logged in and should leave the auth pages. Only the presence
//! of the token cookie is checked; validating it is the API's job.

use crate::config::GateConfig;
use crate::handlers::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::debug;

/// Outcome of the gate for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through
    PassThrough,
    /// Redirect to the given path
    Redirect(String),
}

/// Whether the gate skips `path` entirely (framework assets, API routes, favicon)
pub fn is_excluded(rules: &GateConfig, path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    rules
        .excluded_prefixes
        .iter()
        .any(|prefix| rest.starts_with(prefix.as_str()))
}

/// Decide from the path and whether the token cookie is present
pub fn decide(rules: &GateConfig, path: &str, token_present: bool) -> GateDecision {
    let on_auth_page = path.starts_with(rules.auth_prefix.as_str());

    match (on_auth_page, token_present) {
        (true, true) => GateDecision::Redirect(rules.home_path.clone()),
        (true, false) => GateDecision::PassThrough,
        (false, false) => GateDecision::Redirect(rules.login_path.clone()),
        (false, true) => GateDecision::PassThrough,
    }
}

/// [`decide`], except that excluded paths always pass
pub fn evaluate(rules: &GateConfig, path: &str, token_present: bool) -> GateDecision {
    if is_excluded(rules, path) {
        return GateDecision::PassThrough;
    }
    decide(rules, path, token_present)
}

/// Whether a cookie named `name` is present, whatever its value
pub fn has_cookie(headers: &HeaderMap, name: &str) -> bool {
    CookieJar::from_headers(headers).get(name).is_some()
}

/// Route gate middleware
pub async fn route_gate(
    State(state): State<Arc<AppState>>,
    cookies: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let rules = &state.settings.gate;
    let path = request.uri().path().to_string();
    let token_present = cookies.get(&rules.cookie_name).is_some();

    match evaluate(rules, &path, token_present) {
        GateDecision::PassThrough => next.run(request).await,
        GateDecision::Redirect(to) => {
            debug!("Gate redirecting {} -> {} (token present: {})", path, to, token_present);
            Redirect::temporary(&to).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderValue};

    #[test]
    fn test_decision_table() {
        let rules = GateConfig::default();
        assert_eq!(decide(&rules, "/auth/login", true), GateDecision::Redirect("/".to_string()));
        assert_eq!(decide(&rules, "/auth/login", false), GateDecision::PassThrough);
        assert_eq!(decide(&rules, "/profile", false), GateDecision::Redirect("/auth/login".to_string()));
        assert_eq!(decide(&rules, "/profile", true), GateDecision::PassThrough);
    }

    #[test]
    fn test_excluded_paths() {
        let rules = GateConfig::default();
        assert!(is_excluded(&rules, "/_next/static/chunks/main.js"));
        assert!(is_excluded(&rules, "/_next/image"));
        assert!(is_excluded(&rules, "/favicon.ico"));
        assert!(is_excluded(&rules, "/api/health"));
        assert!(!is_excluded(&rules, "/"));
        assert!(!is_excluded(&rules, "/_next/data/build.json"));
        assert_eq!(evaluate(&rules, "/favicon.ico", false), GateDecision::PassThrough);
    }

    #[test]
    fn test_has_cookie() {
        let mut headers = HeaderMap::new();
        assert!(!has_cookie(&headers, "access_token"));

        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; access_token=tok123"));
        assert!(has_cookie(&headers, "access_token"));
        assert!(!has_cookie(&headers, "session"));

        headers.insert(COOKIE, HeaderValue::from_static("access_token_old=x"));
        assert!(!has_cookie(&headers, "access_token"));

        // Presence only, the value is never inspected
        headers.insert(COOKIE, HeaderValue::from_static("access_token="));
        assert!(has_cookie(&headers, "access_token"));

        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("access_token=tok123"));
        assert!(has_cookie(&headers, "access_token"));
    }
}
