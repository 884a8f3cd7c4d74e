//! Auth cookie target
//!
//! The cookie is what the route gate sees, so it carries the same expiry
//! as the persistent entry.

use super::{StoredCredential, SyncTarget};
use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use cookie::{Cookie, SameSite};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, UNIX_EPOCH};
use time::OffsetDateTime;

/// The bearer token cookie
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCookie {
    cookie: Cookie<'static>,
    expires: DateTime<Utc>,
}

impl AuthCookie {
    /// Site-wide `SameSite=Lax` cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>, expires: DateTime<Utc>) -> AppResult<Self> {
        let at = OffsetDateTime::from_unix_timestamp(expires.timestamp())
            .map_err(|e| AppError::Storage(format!("Cookie expiry {} out of range: {}", expires, e)))?;

        Ok(Self {
            cookie: build_cookie(name.into(), value.into(), at),
            expires,
        })
    }

    /// Empty cookie that expired at the epoch, used to delete the real one
    pub fn expired(name: impl Into<String>) -> Self {
        let at = OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(1);
        Self {
            cookie: build_cookie(name.into(), String::new(), at),
            expires: DateTime::<Utc>::from(UNIX_EPOCH + Duration::from_secs(1)),
        }
    }

    pub fn name(&self) -> &str {
        self.cookie.name()
    }

    pub fn value(&self) -> &str {
        self.cookie.value()
    }

    pub fn expires(&self) -> DateTime<Utc> {
        self.expires
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// `Set-Cookie` header value
    pub fn header_value(&self) -> String {
        self.cookie.to_string()
    }
}

fn build_cookie(name: String, value: String, expires: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .expires(expires)
        .build()
}

/// Holds the latest auth cookie issued for the session
#[derive(Debug)]
pub struct CookieJar {
    name: String,
    cookie: Mutex<Option<AuthCookie>>,
}

impl CookieJar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cookie: Mutex::new(None),
        }
    }

    /// Latest cookie, including deletion cookies
    pub fn current(&self) -> Option<AuthCookie> {
        self.cookie
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, cookie: AuthCookie) {
        *self.cookie.lock().unwrap_or_else(PoisonError::into_inner) = Some(cookie);
    }
}

impl SyncTarget for CookieJar {
    fn name(&self) -> &'static str {
        "cookie"
    }

    fn write(&self, credential: &StoredCredential) -> AppResult<()> {
        self.replace(AuthCookie::new(
            self.name.as_str(),
            credential.access_token.as_str(),
            credential.expires_at,
        )?);
        Ok(())
    }

    fn erase(&self) -> AppResult<()> {
        self.replace(AuthCookie::expired(self.name.as_str()));
        Ok(())
    }

    fn set_cookie(&self) -> Option<String> {
        self.current().map(|c| c.header_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_value() {
        let expires = Utc.with_ymd_and_hms(2026, 10, 26, 12, 0, 0).unwrap();
        let cookie = AuthCookie::new("access_token", "tok123", expires).unwrap();
        assert_eq!(
            cookie.header_value(),
            "access_token=tok123; SameSite=Lax; Path=/; Expires=Mon, 26 Oct 2026 12:00:00 GMT"
        );
        assert_eq!(cookie.name(), "access_token");
        assert_eq!(cookie.value(), "tok123");
    }

    #[test]
    fn test_expired_cookie() {
        let cookie = AuthCookie::expired("access_token");
        assert!(cookie.is_expired_at(Utc::now()));
        assert_eq!(cookie.expires().timestamp(), 1);
        assert_eq!(
            cookie.header_value(),
            "access_token=; SameSite=Lax; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT"
        );
    }

    #[test]
    fn test_header_parses_back() {
        let expires = Utc.with_ymd_and_hms(2026, 10, 26, 12, 0, 0).unwrap();
        let header = AuthCookie::new("access_token", "tok123", expires).unwrap().header_value();

        let parsed = Cookie::parse(header).unwrap();
        assert_eq!(parsed.name_value(), ("access_token", "tok123"));
        assert_eq!(parsed.path(), Some("/"));
        assert_eq!(parsed.same_site(), Some(SameSite::Lax));
        assert_eq!(
            parsed.expires_datetime().map(|t| t.unix_timestamp()),
            Some(expires.timestamp())
        );
    }

    #[test]
    fn test_expiry_beyond_cookie_range_is_an_error() {
        let far = Utc.with_ymd_and_hms(262000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            AuthCookie::new("access_token", "tok123", far),
            Err(AppError::Storage(_))
        ));
    }
}
