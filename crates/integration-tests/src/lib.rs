//! Integration tests for Studio Pro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p studio-pro-integration-tests
//! ```
//!
//! Each [`TestContext`] serves the full dashboard on an ephemeral port, backed
//! by its own `SQLite` session database in the system temp directory, and
//! talks to it over real HTTP with a cookie-keeping client.
//!
//! # Test Categories
//!
//! - `session_gate` - Route guard, login and logout
//! - `directory_search` - CRM page and directory API filtering

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use reqwest::Client;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use studio_pro_admin::config::AdminConfig;
use studio_pro_admin::data::StudioData;
use studio_pro_admin::db;
use studio_pro_admin::routes;
use studio_pro_admin::state::AppState;

/// Admin email every test context signs in with.
pub const ADMIN_EMAIL: &str = "owner@teststudio.com";
/// Admin password every test context signs in with.
pub const ADMIN_PASSWORD: &str = "c0rrect-h0rse-battery";
/// Admin display name.
pub const ADMIN_NAME: &str = "Test Owner";

/// A running dashboard plus an HTTP client pointed at it.
pub struct TestContext {
    /// Cookie-keeping client that does not follow redirects.
    pub client: Client,
    /// `http://127.0.0.1:<port>`
    pub base_url: String,
    /// Session database pool.
    pub pool: SqlitePool,
    db_path: PathBuf,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a dashboard on a fresh session database.
    pub async fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!("studio-{}.db", uuid::Uuid::new_v4()));
        let client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");
        let (base_url, pool, server) = serve(&db_path).await;

        Self {
            client,
            base_url,
            pool,
            db_path,
            server,
        }
    }

    /// Stop the server and start a new one on the same session database.
    ///
    /// The client keeps its cookies, so this behaves like the dashboard being
    /// redeployed while a browser stays open.
    pub async fn restart(&mut self) {
        self.server.abort();
        self.pool.close().await;

        let (base_url, pool, server) = serve(&self.db_path).await;
        self.base_url = base_url;
        self.pool = pool;
        self.server = server;
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` without following redirects.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Submit the login form.
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/auth/login"))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Login request failed")
    }

    /// Sign in with the configured admin account.
    pub async fn login_as_admin(&self) -> reqwest::Response {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Submit the logout form.
    pub async fn logout(&self) -> reqwest::Response {
        self.client
            .post(self.url("/auth/logout"))
            .send()
            .await
            .expect("Logout request failed")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
        let _ = std::fs::remove_file(&self.db_path);
    }
}

async fn serve(db_path: &Path) -> (String, SqlitePool, JoinHandle<()>) {
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let config = AdminConfig::from_lookup(|key| match key {
        "STUDIO_DATABASE_URL" => Some(database_url.clone()),
        "STUDIO_ADMIN_EMAIL" => Some(ADMIN_EMAIL.to_string()),
        "STUDIO_ADMIN_PASSWORD" => Some(ADMIN_PASSWORD.to_string()),
        "STUDIO_ADMIN_NAME" => Some(ADMIN_NAME.to_string()),
        _ => None,
    })
    .expect("Failed to build test config");

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to open session database");
    let store = db::migrate_session_store(&pool)
        .await
        .expect("Failed to migrate session store");
    let data = StudioData::embedded().expect("Embedded data is valid");

    let app = routes::app(AppState::new(config, pool.clone(), data), store);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    (format!("http://{addr}"), pool, server)
}

/// The `Location` header of a redirect, if any.
#[must_use]
pub fn location(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
