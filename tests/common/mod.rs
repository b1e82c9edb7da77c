#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use formrelay::config::{Config, CorsOrigins, MailConfig};
use formrelay::email::{Notifier, RenderedEmail};
use formrelay::state::SharedState;

/// Notifier double that records every email it is asked to send.
pub struct RecordingNotifier {
    sent: Mutex<Vec<RenderedEmail>>,
    delay: Duration,
    succeed: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Sleep for `delay` inside every send, after recording the call.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            delay,
            succeed: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
            succeed: false,
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<RenderedEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Poll until at least `n` sends were recorded or `timeout` elapses.
    pub async fn wait_for_calls(&self, n: usize, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if self.calls() >= n {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.calls() >= n
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: &RenderedEmail) -> bool {
        self.sent.lock().unwrap().push(email.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.succeed
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub state: SharedState,
    pub notifier: Arc<RecordingNotifier>,
    /// Set when the app owns a dedicated test database.
    pub db_name: Option<String>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a form notification request, return (body, status).
    pub async fn send_form(&self, form_type: &str, form_data: Value) -> (Value, StatusCode) {
        self.post(
            "/api/send-form-notification",
            &json!({
                "form_data": form_data,
                "form_type": form_type,
                "recipient_email": "ignored@example.com",
            }),
        )
        .await
    }

    pub async fn create_status(&self, client_name: &str) -> (Value, StatusCode) {
        self.post("/api/status", &json!({ "client_name": client_name }))
            .await
    }
}

pub fn test_config(database_url: &str, database_name: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        database_name: database_name.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        cors_origins: CorsOrigins::Any,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        mail: MailConfig {
            api_key: Some("re_test_key".to_string()),
            api_url: "http://127.0.0.1:9".to_string(),
            from: "Collective Vox <onboarding@resend.dev>".to_string(),
            to: "collectivevox@gmail.com".to_string(),
            timeout: Duration::from_secs(5),
        },
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let db_name = format!("formrelay_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(formrelay::db::connect_options(&base_url, "postgres").unwrap())
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(formrelay::db::connect_options(&base_url, &db_name).unwrap())
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = test_config(&base_url, &db_name);
    serve(pool, config, Arc::new(RecordingNotifier::new()), Some(db_name)).await
}

/// Spawn a test app whose pool never connects. Enough for every route
/// that does not touch the status collection.
pub async fn spawn_app_without_db() -> TestApp {
    spawn_app_with_notifier(Arc::new(RecordingNotifier::new())).await
}

pub async fn spawn_app_with_notifier(notifier: Arc<RecordingNotifier>) -> TestApp {
    let database_url = "postgres://postgres@127.0.0.1:1/unused";
    let pool = PgPoolOptions::new()
        .connect_lazy(database_url)
        .expect("Failed to build lazy pool");

    let config = test_config(database_url, "unused");
    serve(pool, config, notifier, None).await
}

async fn serve(
    pool: PgPool,
    config: Config,
    notifier: Arc<RecordingNotifier>,
    db_name: Option<String>,
) -> TestApp {
    let (app, state) = formrelay::build_app(pool.clone(), &config, notifier.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        state,
        notifier,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    app.pool.close().await;

    let Some(db_name) = app.db_name else {
        return;
    };

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(formrelay::db::connect_options(&base_url, "postgres").unwrap())
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
