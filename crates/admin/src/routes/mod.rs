//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (session database)
//!
//! # Auth (public)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login form submission
//! POST /auth/logout            - Logout
//!
//! # Pages (signed in)
//! GET  /                       - Dashboard overview
//! GET  /crm                    - Members and leads (?tab=members|leads&q=...)
//! GET  /marketing              - Campaigns, email, social (?tab=campaigns|email|social)
//!
//! # JSON API (signed in, 401 otherwise)
//! GET  /api/session            - Current identity
//! GET  /api/members            - Members matching ?q=
//! GET  /api/leads              - Leads matching ?q=
//! ```

pub mod api;
pub mod auth;
pub mod crm;
pub mod dashboard;
pub mod health;
pub mod marketing;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tower_sessions::SessionStore;
use tracing::Span;

use crate::middleware::{create_session_layer, require_session};
use crate::models::UserIdentity;
use crate::state::AppState;

/// Signed-in admin as shown in the navigation bar.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub email: String,
}

impl From<&UserIdentity> for AdminUserView {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            name: identity.display_name.clone(),
            email: identity.email.to_string(),
        }
    }
}

/// All application routes, with the auth gate applied to protected ones.
pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(dashboard::router())
        .merge(crm::router())
        .merge(marketing::router())
        .merge(api::router())
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(auth::router())
        .merge(protected)
}

/// The complete application: routes, sessions, tracing and Sentry.
pub fn app<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = create_session_layer(store, state.config());

    routes(&state)
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::config::AdminConfig;
    use crate::data::StudioData;
    use crate::middleware::LOGIN_PATH;

    async fn test_app() -> Router {
        let config = AdminConfig::from_lookup(|_| None).unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let state = AppState::new(config, pool, StudioData::embedded().unwrap());
        app(state, MemoryStore::default())
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = test_app().await;

        assert_eq!(get(app.clone(), "/health").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pages_redirect_without_session() {
        let app = test_app().await;

        for uri in ["/", "/crm", "/crm?tab=leads&q=davi", "/marketing?tab=email"] {
            let response = get(app.clone(), uri).await;
            assert!(response.status().is_redirection(), "{uri}");
            assert_eq!(
                response.headers().get(header::LOCATION).unwrap(),
                LOGIN_PATH,
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_api_is_401_without_session() {
        let app = test_app().await;

        for uri in ["/api/session", "/api/members?q=jane", "/api/leads"] {
            assert_eq!(
                get(app.clone(), uri).await.status(),
                StatusCode::UNAUTHORIZED,
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_login_page_is_public() {
        let app = test_app().await;
        let response = get(app, "/auth/login?error=credentials").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Invalid credentials"));
        assert!(body.contains("name=\"password\""));
    }

    #[tokio::test]
    async fn test_failed_login_redirects_with_error() {
        let app = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=admin%40yourstudio.com&password=wrong"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/login?error=credentials"
        );
    }
}
