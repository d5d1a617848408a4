use chrono::{Duration, Utc};
use std::fs::File;
use std::sync::Arc;
use std::time::SystemTime;
use tda_rs::{FileTokenCache, MemoryTokenCache, TokenCache};

use crate::common::{client_with_cache, mock_token, setup_server};

fn backdate(path: &std::path::Path, minutes: u64) {
    let when = SystemTime::now() - std::time::Duration::from_secs(minutes * 60);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(when)
        .unwrap();
}

#[tokio::test]
async fn fresh_cached_token_skips_network() {
    let server = setup_server();
    let mock = mock_token(&server, "from-server");
    let cache = Arc::new(MemoryTokenCache::with_token(
        "from-cache",
        Utc::now() - Duration::minutes(5),
    ));

    let token = client_with_cache(&server, cache).access_token().await.unwrap();

    mock.assert_calls(0);
    assert_eq!(token, "from-cache");
}

#[tokio::test]
async fn stale_cached_token_is_refreshed_and_overwritten() {
    let server = setup_server();
    let mock = mock_token(&server, "new-token");
    let cache = Arc::new(MemoryTokenCache::with_token(
        "old-token",
        Utc::now() - Duration::minutes(25),
    ));

    let token = client_with_cache(&server, cache.clone())
        .access_token()
        .await
        .unwrap();

    mock.assert_calls(1);
    assert_eq!(token, "new-token");
    let stored = cache.get().unwrap();
    assert_eq!(stored.token, "new-token");
    assert!(stored.is_fresh(Utc::now()));
}

#[tokio::test]
async fn empty_cached_value_is_always_stale() {
    let server = setup_server();
    let mock = mock_token(&server, "new-token");
    let cache = Arc::new(MemoryTokenCache::with_token("", Utc::now()));

    let token = client_with_cache(&server, cache).access_token().await.unwrap();

    mock.assert_calls(1);
    assert_eq!(token, "new-token");
}

#[tokio::test]
async fn cache_miss_refreshes_then_reuses() {
    let server = setup_server();
    let mock = mock_token(&server, "tok-1");
    let cache = Arc::new(MemoryTokenCache::new());
    let client = client_with_cache(&server, cache);

    let first = client.access_token().await.unwrap();
    let second = client.access_token().await.unwrap();

    mock.assert_calls(1);
    assert_eq!(first, "tok-1");
    assert_eq!(second, "tok-1");
}

#[tokio::test]
async fn file_cache_round_trip_avoids_second_refresh() {
    let server = setup_server();
    let mock = mock_token(&server, "file-token");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tda").join("token");
    let client = client_with_cache(&server, Arc::new(FileTokenCache::new(&path)));

    assert_eq!(client.access_token().await.unwrap(), "file-token");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "file-token");

    // A fresh client sharing the same file reuses the token.
    let other = client_with_cache(&server, Arc::new(FileTokenCache::new(&path)));
    assert_eq!(other.access_token().await.unwrap(), "file-token");

    mock.assert_calls(1);
}

#[tokio::test]
async fn file_cache_older_than_window_is_replaced() {
    let server = setup_server();
    let mock = mock_token(&server, "replacement");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "expired").unwrap();
    backdate(&path, 26);

    let cache = FileTokenCache::new(&path);
    let before = cache.load().unwrap().unwrap();
    assert_eq!(before.token, "expired");
    assert!(!before.is_fresh(Utc::now()));

    let client = client_with_cache(&server, Arc::new(cache.clone()));
    assert_eq!(client.access_token().await.unwrap(), "replacement");

    mock.assert_calls(1);
    let after = cache.load().unwrap().unwrap();
    assert_eq!(after.token, "replacement");
    assert!(after.is_fresh(Utc::now()));
}

#[tokio::test]
async fn file_cache_within_window_is_reused() {
    let server = setup_server();
    let mock = mock_token(&server, "unused");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "still-good").unwrap();
    backdate(&path, 20);

    let client = client_with_cache(&server, Arc::new(FileTokenCache::new(&path)));

    assert_eq!(client.access_token().await.unwrap(), "still-good");
    mock.assert_calls(0);
}

#[tokio::test]
async fn failed_refresh_leaves_cache_untouched() {
    let server = setup_server();
    let mock = crate::common::mock_token_status(&server, 401);
    let cache = Arc::new(MemoryTokenCache::with_token(
        "old-token",
        Utc::now() - Duration::minutes(40),
    ));

    let err = client_with_cache(&server, cache.clone())
        .access_token()
        .await
        .unwrap_err();

    mock.assert();
    assert!(err.is_auth());
    assert_eq!(cache.get().unwrap().token, "old-token");
}

#[tokio::test]
async fn undecodable_cache_file_is_refreshed_and_overwritten() {
    let server = setup_server();
    let mock = mock_token(&server, "clean-token");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let client = client_with_cache(&server, Arc::new(FileTokenCache::new(&path)));

    assert_eq!(client.access_token().await.unwrap(), "clean-token");
    mock.assert_calls(1);
    assert_eq!(std::fs::read(&path).unwrap(), b"clean-token");
}
