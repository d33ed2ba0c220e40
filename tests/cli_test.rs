//! Tests for the `trivia` binary.

#![cfg(feature = "cli")]

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trivia() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trivia"));
    cmd.env_remove("TRIVIA_BASE_URL").env("RUST_LOG", "off");
    cmd
}

#[tokio::test]
async fn key_prints_query_and_cache_key() {
    let output = trivia()
        .args(["key", "--difficulty", "hard", "--offset", "20", "--limit", "10"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("query: difficulty=hard&offset=20&limit=10"));
    assert!(stdout.contains("cache: trivia-cache:difficulty=hard&offset=20&limit=10"));
}

#[tokio::test]
async fn fetch_prints_questions_from_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trivia"))
        .and(query_param("difficulty", "easy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "difficulty": "easy",
            "offset": 0,
            "limit": 1,
            "total": 3,
            "items": [
                {"question": "2+2?", "difficulty": "easy", "answers": ["3", "4"], "correctIndex": 1}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = trivia()
        .args(["--base-url", &server.uri()])
        .args(["fetch", "--difficulty", "easy", "--limit", "1", "--answers"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 questions (easy), 0-1 of 3"));
    assert!(stdout.contains("1. 2+2?"));
    assert!(stdout.contains("* b) 4"));
    assert!(stdout.contains("more available: --offset 1"));
}

#[tokio::test]
async fn fetch_reports_an_empty_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trivia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "difficulty": "all",
            "offset": 50,
            "limit": null,
            "total": 3,
            "items": []
        })))
        .mount(&server)
        .await;

    let output = trivia()
        .args(["--base-url", &server.uri()])
        .args(["fetch", "--offset", "50"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0 questions (all), 50-50 of 3"));
    assert!(stdout.contains("(no questions in this range)"));
}

#[tokio::test]
async fn fetch_fails_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trivia"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = trivia()
        .args(["--base-url", &server.uri()])
        .arg("fetch")
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Trivia request failed (500)"));
}
