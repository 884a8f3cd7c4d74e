//! Credential management
//!
//! A single [`TokenStore`] owns the bearer credential and mirrors it into
//! every configured [`SyncTarget`] (a persistent store and the auth cookie),
//! so set and clear always reach both places together.

pub mod cookie;
pub mod file;
pub mod memory;

pub use cookie::{AuthCookie, CookieJar};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::Settings;
use crate::models::Token;
use crate::utils::error::{helpers::validation_error, AppResult};
use crate::utils::logging::redact_token;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Source of the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;
}

/// Fixed token, or none
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl CredentialProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Credential plus the expiry shared by every sync target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredCredential {
    /// Bearer credential expiring `ttl_days` from now
    pub fn new(access_token: impl Into<String>, ttl_days: u32) -> AppResult<Self> {
        let expires_at = Utc::now()
            .checked_add_signed(Duration::days(i64::from(ttl_days)))
            .ok_or_else(|| validation_error(format!("token lifetime of {} days is out of range", ttl_days)))?;

        Ok(Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            expires_at,
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// One place the credential is mirrored to
pub trait SyncTarget: Send + Sync + Debug {
    /// Target name used in logs
    fn name(&self) -> &'static str;

    /// Persist the credential
    fn write(&self, credential: &StoredCredential) -> AppResult<()>;

    /// Remove the credential
    fn erase(&self) -> AppResult<()>;

    /// Credential previously persisted by this target
    fn load(&self) -> AppResult<Option<StoredCredential>> {
        Ok(None)
    }

    /// `Set-Cookie` value for targets that are cookies
    fn set_cookie(&self) -> Option<String> {
        None
    }
}

/// Bearer token store with redundant sync targets
#[derive(Debug)]
pub struct TokenStore {
    targets: Vec<Box<dyn SyncTarget>>,
    state: RwLock<Option<StoredCredential>>,
    attached: bool,
}

impl TokenStore {
    /// Create a store over the given targets, starting empty
    pub fn new(targets: Vec<Box<dyn SyncTarget>>) -> Self {
        Self {
            targets,
            state: RwLock::new(None),
            attached: true,
        }
    }

    /// Create a store and hydrate it from the first target holding a credential.
    ///
    /// An expired credential is cleared from every target instead of loaded.
    pub fn open(targets: Vec<Box<dyn SyncTarget>>) -> AppResult<Self> {
        let store = Self::new(targets);

        let mut loaded = None;
        for target in &store.targets {
            if let Some(credential) = target.load()? {
                debug!("Loaded credential from {}", target.name());
                loaded = Some(credential);
                break;
            }
        }

        match loaded {
            Some(credential) if credential.is_expired() => {
                info!("Stored credential expired at {}, clearing", credential.expires_at);
                store.clear()?;
            }
            Some(credential) => {
                // Re-mirror so every target agrees with the loaded credential
                store.write_all(&credential)?;
                *store.state.write().unwrap_or_else(PoisonError::into_inner) = Some(credential);
            }
            None => {}
        }

        Ok(store)
    }

    /// File-backed store plus auth cookie, as configured
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let targets: Vec<Box<dyn SyncTarget>> = vec![
            Box::new(FileStore::new(
                settings.credential_store_path(),
                settings.credentials.key.clone(),
            )),
            Box::new(CookieJar::new(settings.gate.cookie_name.clone())),
        ];
        Self::open(targets)
    }

    /// In-process store plus auth cookie
    pub fn in_memory(cookie_name: &str) -> Self {
        Self::new(vec![
            Box::new(MemoryStore::new()),
            Box::new(CookieJar::new(cookie_name)),
        ])
    }

    /// Store for environments without any storage; every operation is a no-op
    pub fn detached() -> Self {
        Self {
            targets: Vec::new(),
            state: RwLock::new(None),
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Store a bearer token for `ttl_days`
    pub fn set(&self, access_token: &str, ttl_days: u32) -> AppResult<()> {
        self.set_credential(StoredCredential::new(access_token, ttl_days)?)
    }

    /// Store a token returned by login or register
    pub fn set_token(&self, token: &Token, ttl_days: u32) -> AppResult<()> {
        let mut credential = StoredCredential::new(token.access_token.as_str(), ttl_days)?;
        credential.token_type = token.token_type.clone();
        self.set_credential(credential)
    }

    fn set_credential(&self, credential: StoredCredential) -> AppResult<()> {
        if !self.attached {
            return Ok(());
        }

        // Targets are written under the state lock
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if let Err(e) = self.write_all(&credential) {
            warn!("Failed to store credential, clearing all targets: {}", e);
            self.erase_all();
            *state = None;
            return Err(e);
        }

        info!(
            "Stored credential {} until {}",
            redact_token(&credential.access_token),
            credential.expires_at
        );
        *state = Some(credential);
        Ok(())
    }

    /// Remove the credential from every target
    pub fn clear(&self) -> AppResult<()> {
        if !self.attached {
            return Ok(());
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.clear_locked(&mut state)
    }

    /// Clear only if `expected` is still the stored credential.
    ///
    /// Returns whether anything was cleared; a credential stored since
    /// `expected` was read is left alone.
    fn clear_if_current(&self, expected: &StoredCredential) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.as_ref() != Some(expected) {
            return false;
        }

        if let Err(e) = self.clear_locked(&mut state) {
            warn!("Failed to clear expired credential: {}", e);
        }
        true
    }

    fn clear_locked(&self, state: &mut Option<StoredCredential>) -> AppResult<()> {
        *state = None;

        let mut first_error = None;
        for target in &self.targets {
            if let Err(e) = target.erase() {
                warn!("Failed to erase credential from {}: {}", target.name(), e);
                first_error.get_or_insert(e);
            }
        }

        debug!("Credential cleared");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Current credential, expired ones included
    pub fn current(&self) -> Option<StoredCredential> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `Set-Cookie` value of the cookie target, if one is configured
    pub fn set_cookie_header(&self) -> Option<String> {
        self.targets.iter().find_map(|t| t.set_cookie())
    }

    fn write_all(&self, credential: &StoredCredential) -> AppResult<()> {
        for target in &self.targets {
            target.write(credential)?;
        }
        Ok(())
    }

    fn erase_all(&self) {
        for target in &self.targets {
            if let Err(e) = target.erase() {
                warn!("Failed to erase credential from {}: {}", target.name(), e);
            }
        }
    }
}

impl CredentialProvider for TokenStore {
    fn access_token(&self) -> Option<String> {
        let credential = self.current()?;

        if !credential.is_expired() {
            return Some(credential.access_token);
        }

        if self.clear_if_current(&credential) {
            info!("Credential expired at {}, cleared", credential.expires_at);
            return None;
        }

        // Replaced while we were reading; answer with the newer credential
        self.current()
            .filter(|fresh| !fresh.is_expired())
            .map(|fresh| fresh.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_reach_every_target() {
        let store = TokenStore::in_memory("access_token");
        store.set("tok123", 7).unwrap();

        assert_eq!(store.access_token(), Some("tok123".to_string()));
        let cookie = store.set_cookie_header().unwrap();
        assert!(cookie.starts_with("access_token=tok123;"));

        store.clear().unwrap();
        assert_eq!(store.access_token(), None);
        let cookie = store.set_cookie_header().unwrap();
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:01 GMT"));
    }

    #[test]
    fn test_detached_store_is_inert() {
        let store = TokenStore::detached();
        store.set("tok123", 7).unwrap();
        assert_eq!(store.access_token(), None);
        assert!(store.clear().is_ok());
        assert!(store.set_cookie_header().is_none());
    }

    #[test]
    fn test_expiry_check() {
        let credential = StoredCredential::new("tok", 7).unwrap();
        assert!(!credential.is_expired());
        assert!(credential.is_expired_at(credential.expires_at));
    }

    #[test]
    fn test_lifetime_overflow_is_an_error() {
        assert!(matches!(
            StoredCredential::new("tok", u32::MAX),
            Err(crate::utils::error::AppError::Validation(_))
        ));

        let store = TokenStore::in_memory("access_token");
        assert!(store.set("tok123", u32::MAX).is_err());
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_expired_read_does_not_clear_newer_credential() {
        let store = TokenStore::in_memory("access_token");
        store.set("tok-old", 0).unwrap();
        let stale = store.current().unwrap();
        assert!(stale.is_expired());

        // A login lands between reading the expired token and clearing it
        store.set("tok-new", 7).unwrap();
        assert!(!store.clear_if_current(&stale));

        assert_eq!(store.access_token(), Some("tok-new".to_string()));
        assert!(store.set_cookie_header().unwrap().starts_with("access_token=tok-new;"));
    }
}
