//! Integration tests for the sync command against a mock remote

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{init_with_remote, quotebook_cmd, OFFLINE_REMOTE};

fn stored_quotes(temp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(temp.path().join(".quotebook/storage/quotes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Run a CLI command off the async runtime so the mock server keeps serving
async fn run_sync(dir: std::path::PathBuf) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || quotebook_cmd().current_dir(dir).arg("sync").assert())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_replaces_local_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "remote one", "body": ""},
            {"id": 2, "title": "remote two", "body": ""}
        ])))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    init_with_remote(temp.path(), &format!("{}/posts", server.uri()));

    run_sync(temp.path().to_path_buf())
        .await
        .success()
        .stdout(predicate::str::contains("Synced 2 quotes from remote"));

    assert_eq!(
        stored_quotes(&temp),
        json!([
            {"text": "remote one", "category": "Inspiration"},
            {"text": "remote two", "category": "Inspiration"}
        ])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_respects_fetch_limit_and_category_flag() {
    let server = MockServer::start().await;
    let records: Vec<_> = (0..12)
        .map(|i| json!({"title": format!("t{}", i), "category": "Life"}))
        .collect();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    init_with_remote(temp.path(), &format!("{}/posts", server.uri()));
    quotebook_cmd()
        .current_dir(temp.path())
        .args(["config", "preserve_remote_category", "true"])
        .assert()
        .success();

    run_sync(temp.path().to_path_buf()).await.success();

    let stored = stored_quotes(&temp);
    let quotes = stored.as_array().unwrap();
    assert_eq!(quotes.len(), 10);
    assert!(quotes.iter().all(|q| q["category"] == "Life"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_server_error_keeps_local_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    init_with_remote(temp.path(), &format!("{}/posts", server.uri()));
    quotebook_cmd()
        .current_dir(temp.path())
        .args(["add", "Stay hungry", "Motivation"])
        .assert()
        .success();
    let before = stored_quotes(&temp);

    run_sync(temp.path().to_path_buf())
        .await
        .code(5)
        .stderr(predicate::str::contains("local quotes unchanged"));

    assert_eq!(stored_quotes(&temp), before);
}

#[test]
fn test_sync_unreachable_remote() {
    let temp = TempDir::new().unwrap();
    init_with_remote(temp.path(), OFFLINE_REMOTE);

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Network error"));

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Motivation\nLife\nInspiration\n");
}
