//! Token store tests

use chrono::{Duration, Utc};
use loopa_client::credentials::{
    CookieJar, CredentialProvider, FileStore, MemoryStore, StoredCredential, SyncTarget, TokenStore,
};
use loopa_client::models::Token;
use loopa_client::{AppError, Settings};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn expired_credential() -> StoredCredential {
    StoredCredential {
        access_token: "old".to_string(),
        token_type: "bearer".to_string(),
        expires_at: Utc::now() - Duration::days(1),
    }
}

#[test]
fn test_file_and_cookie_written_together() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("loopa").join("credentials.json");

    let store = TokenStore::new(vec![
        Box::new(FileStore::new(&path, "access_token")),
        Box::new(CookieJar::new("access_token")),
    ]);
    let token = Token {
        access_token: "tok123".to_string(),
        token_type: "bearer".to_string(),
    };
    store.set_token(&token, 7).unwrap();

    let file = read_json(&path);
    assert_eq!(file["access_token"]["access_token"], "tok123");
    assert_eq!(file["access_token"]["token_type"], "bearer");

    let cookie = store.set_cookie_header().unwrap();
    let stored = store.current().unwrap();
    assert_eq!(
        cookie,
        format!(
            "access_token=tok123; SameSite=Lax; Path=/; Expires={}",
            stored.expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    );
    let ttl = stored.expires_at - Utc::now();
    assert!(ttl > Duration::days(6) && ttl <= Duration::days(7));
}

#[test]
fn test_clear_removes_entry_and_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let store = TokenStore::new(vec![
        Box::new(FileStore::new(&path, "access_token")),
        Box::new(CookieJar::new("access_token")),
    ]);
    store.set("tok123", 7).unwrap();
    store.clear().unwrap();

    let file = read_json(&path);
    assert!(file.get("access_token").is_none());
    assert_eq!(file["theme"], "dark");
    assert_eq!(store.access_token(), None);
    assert_eq!(
        store.set_cookie_header().unwrap(),
        "access_token=; SameSite=Lax; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT"
    );
}

#[test]
fn test_open_hydrates_from_persistent_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");

    let first = TokenStore::new(vec![Box::new(FileStore::new(&path, "access_token"))]);
    first.set("tok123", 7).unwrap();

    let reopened = TokenStore::open(vec![
        Box::new(FileStore::new(&path, "access_token")),
        Box::new(CookieJar::new("access_token")),
    ])
    .unwrap();

    assert_eq!(reopened.access_token(), Some("tok123".to_string()));
    // The cookie is re-issued so the gate agrees with the store
    assert!(reopened
        .set_cookie_header()
        .unwrap()
        .starts_with("access_token=tok123;"));
}

#[test]
fn test_open_clears_expired_credential_everywhere() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    FileStore::new(&path, "access_token")
        .write(&expired_credential())
        .unwrap();

    let store = TokenStore::open(vec![
        Box::new(FileStore::new(&path, "access_token")),
        Box::new(CookieJar::new("access_token")),
    ])
    .unwrap();

    assert_eq!(store.access_token(), None);
    assert!(read_json(&path).get("access_token").is_none());
    assert!(store
        .set_cookie_header()
        .unwrap()
        .contains("Expires=Thu, 01 Jan 1970 00:00:01 GMT"));
}

#[test]
fn test_credential_expiring_in_session_is_cleared_on_read() {
    let memory = MemoryStore::new();
    memory.write(&expired_credential()).unwrap();
    assert!(memory.load().unwrap().is_some());

    let store = TokenStore::new(vec![
        Box::new(MemoryStore::new()),
        Box::new(CookieJar::new("access_token")),
    ]);
    // Zero days expires immediately
    store.set("tok123", 0).unwrap();
    assert!(store.current().is_some());

    assert_eq!(store.access_token(), None);
    assert!(store.current().is_none());
    assert!(store
        .set_cookie_header()
        .unwrap()
        .contains("Expires=Thu, 01 Jan 1970 00:00:01 GMT"));
}

#[test]
fn test_malformed_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, "{not json").unwrap();

    let store = TokenStore::open(vec![Box::new(FileStore::new(&path, "access_token"))]).unwrap();
    assert_eq!(store.access_token(), None);

    store.set("tok123", 7).unwrap();
    assert_eq!(read_json(&path)["access_token"]["access_token"], "tok123");
}

#[test]
fn test_failed_write_leaves_no_credential() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes every write fail
    let path = dir.path().join("credentials.json");
    fs::create_dir(&path).unwrap();

    let store = TokenStore::new(vec![
        Box::new(CookieJar::new("access_token")),
        Box::new(FileStore::new(&path, "access_token")),
    ]);

    assert!(store.set("tok123", 7).is_err());
    assert_eq!(store.access_token(), None);
    assert!(store
        .set_cookie_header()
        .unwrap()
        .contains("Expires=Thu, 01 Jan 1970 00:00:01 GMT"));
}

#[test]
fn test_from_settings_uses_configured_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let mut settings = Settings::default();
    settings.credentials.store_path = Some(path.clone());

    let store = TokenStore::from_settings(&settings).unwrap();
    store.set("tok123", settings.credentials.ttl_days).unwrap();

    assert!(path.exists());
    let reopened = TokenStore::from_settings(&settings).unwrap();
    assert_eq!(reopened.access_token(), Some("tok123".to_string()));
}

#[test]
fn test_out_of_range_lifetime_is_rejected_without_storing() {
    let store = TokenStore::in_memory("access_token");
    store.set("tok-old", 7).unwrap();

    let result = store.set("tok123", 200_000_000);
    assert!(matches!(result, Err(AppError::Validation(_))));
    // Nothing was written, the previous credential stays
    assert_eq!(store.access_token(), Some("tok-old".to_string()));

    let token = Token {
        access_token: "tok123".to_string(),
        token_type: "bearer".to_string(),
    };
    assert!(store.set_token(&token, u32::MAX).is_err());
    assert_eq!(store.access_token(), Some("tok-old".to_string()));
}

#[test]
fn test_concurrent_reads_and_logins_keep_the_latest_token() {
    let store = std::sync::Arc::new(TokenStore::in_memory("access_token"));
    store.set("tok-old", 0).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let _ = store.access_token();
                }
            })
        })
        .collect();

    store.set("tok-new", 7).unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.access_token(), Some("tok-new".to_string()));
    assert!(store.set_cookie_header().unwrap().starts_with("access_token=tok-new;"));
}
