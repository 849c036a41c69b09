use std::net::SocketAddr;

use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tempfile::TempDir;

use leadcapture::config::{AdminCredentials, Config, EXPORT_FILE_NAME};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "correct-horse";

/// A running test server instance with its own SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub config: Config,
    // Keeps the database and export files alive for the test's duration.
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit the login form, return the raw response.
    pub async fn login(&self, username: &str, password: &str) -> Response {
        self.client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("login request failed")
    }

    /// Log in with the configured admin account and assert it succeeded.
    pub async fn login_admin(&self) {
        let resp = self.login(ADMIN_USER, ADMIN_PASS).await;
        assert!(resp.status().is_redirection(), "admin login did not redirect");
    }

    /// Post a submission as JSON, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/clients"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Post a complete, valid submission for `name`.
    pub async fn submit_lead(&self, name: &str) {
        let (body, status) = self
            .submit(&json!({
                "name": name,
                "email": format!("{}@example.com", name.to_lowercase()),
                "phone": "5551234567",
                "message": "Please call me back",
            }))
            .await;
        assert_eq!(status, StatusCode::OK, "submit failed: {body}");
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
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

    /// POST without a body and decode the JSON response.
    pub async fn post_empty(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn row_count(&self) -> i64 {
        leadcapture::db::clients::count(&self.pool)
            .await
            .expect("count query failed")
    }
}

/// Read one part of an xlsx (zip) archive as text.
pub fn xlsx_part(bytes: &[u8], name: &str) -> String {
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("export is not a complete zip");
    let mut part = archive.by_name(name).expect("missing workbook part");
    let mut text = String::new();
    std::io::Read::read_to_string(&mut part, &mut text).expect("workbook part is not UTF-8");
    text
}

/// Insert `n` submissions directly through the storage layer.
pub async fn insert_clients(app: &TestApp, n: usize) {
    for i in 0..n {
        let client = leadcapture::models::NewClient {
            name: format!("Lead {i}"),
            email: format!("lead{i}@example.com"),
            phone: format!("555{i:07}"),
            message: format!("Message number {i}"),
        };
        leadcapture::db::clients::create(&app.pool, &client)
            .await
            .expect("insert failed");
    }
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Spawn a test app backed by a fresh database in a temporary directory.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like `spawn_app`, letting the test adjust the config (paths live in the temp dir).
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut config = Config {
        instance_dir: dir.path().to_path_buf(),
        database_path: dir.path().join("app.db"),
        export_path: dir.path().join(EXPORT_FILE_NAME),
        secret_key: "test-secret-key".to_string(),
        admin: AdminCredentials {
            username: ADMIN_USER.to_string(),
            password: ADMIN_PASS.to_string(),
        },
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    };
    configure(&mut config);

    let pool = leadcapture::db::connect(&config.database_path)
        .await
        .expect("Failed to open test database");
    leadcapture::db::init(&pool)
        .await
        .expect("Failed to initialize test database");

    let app = leadcapture::build_app(pool.clone(), config.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        config,
        _dir: dir,
    }
}
