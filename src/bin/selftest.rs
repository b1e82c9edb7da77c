//! Smoke test a running formrelay instance over plain HTTP.
//!
//! Usage: `selftest [BASE_URL]`. The base URL falls back to
//! `FORMRELAY_SELFTEST_URL`, then to `http://localhost:8001`. `/api` is
//! appended automatically.

use std::process::ExitCode;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let base = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FORMRELAY_SELFTEST_URL").ok())
        .unwrap_or_else(|| "http://localhost:8001".to_string());
    let api = format!("{}/api", base.trim_end_matches('/'));

    let client = match Client::builder().timeout(Duration::from_secs(10)).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Testing backend at {api}");

    let checks = [
        ("health check", check_health(&client, &api).await),
        ("status endpoints", check_status(&client, &api).await),
        ("cors headers", check_cors(&client, &api).await),
    ];

    let mut failed = 0;
    for (name, result) in &checks {
        match result {
            Ok(()) => println!("PASS {name}"),
            Err(e) => {
                failed += 1;
                println!("FAIL {name}: {e}");
            }
        }
    }

    println!("Passed {}/{}", checks.len() - failed, checks.len());

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn check_health(client: &Client, api: &str) -> Result<(), String> {
    let resp = client
        .get(format!("{api}/"))
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    let body = expect_ok(resp).await?;
    if body["message"] != "Hello World" {
        return Err(format!("unexpected body: {body}"));
    }
    Ok(())
}

async fn check_status(client: &Client, api: &str) -> Result<(), String> {
    let client_name = format!("test_client_{}", &Uuid::new_v4().simple().to_string()[..8]);

    let resp = client
        .post(format!("{api}/status"))
        .json(&json!({ "client_name": client_name }))
        .send()
        .await
        .map_err(|e| format!("POST /status failed: {e}"))?;
    let created = expect_ok(resp).await?;

    for field in ["id", "client_name", "timestamp"] {
        if created.get(field).is_none() {
            return Err(format!("created record missing '{field}': {created}"));
        }
    }
    if created["client_name"] != client_name.as_str() {
        return Err(format!(
            "client_name mismatch: expected {client_name}, got {}",
            created["client_name"]
        ));
    }

    let resp = client
        .get(format!("{api}/status"))
        .send()
        .await
        .map_err(|e| format!("GET /status failed: {e}"))?;
    let list = expect_ok(resp).await?;

    let records = list
        .as_array()
        .ok_or_else(|| format!("expected a list, got {list}"))?;
    if !records.iter().any(|r| r["client_name"] == client_name.as_str()) {
        return Err(format!("{client_name} not found among {} records", records.len()));
    }
    Ok(())
}

async fn check_cors(client: &Client, api: &str) -> Result<(), String> {
    let resp = client
        .get(format!("{api}/"))
        .header("Origin", "http://selftest.invalid")
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if resp.headers().contains_key("access-control-allow-origin") {
        Ok(())
    } else {
        Err("access-control-allow-origin header missing".to_string())
    }
}

async fn expect_ok(resp: reqwest::Response) -> Result<Value, String> {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if status != StatusCode::OK {
        return Err(format!("status {status}: {text}"));
    }
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON ({e}): {text}"))
}
