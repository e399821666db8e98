//! Authentication route handlers.
//!
//! Email/password login against the configured admin account, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use studio_pro_core::Credential;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::middleware::{LOGIN_PATH, OptionalAdminAuth};
use crate::services::{AuthError, SessionManager};
use crate::state::AppState;

/// Login form data.
///
/// No `Debug`: the password must not end up in logs.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for Credential {
    fn from(form: LoginForm) -> Self {
        Self::new(form.email, form.password)
    }
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login))
        .route("/auth/logout", post(logout))
}

/// Map an error code from the query string to a message.
fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid credentials",
        _ => "Login failed, please try again",
    }
}

/// Display the login page, or go straight to the dashboard when signed in.
///
/// GET /auth/login
async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        error: query.error.as_deref().map(error_message),
    }
    .into_response()
}

/// Handle login form submission.
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Redirect {
    let mut manager = SessionManager::restore(session, state.config().admin()).await;

    match manager.login(&Credential::from(form)).await {
        Ok(identity) => {
            set_sentry_user(&identity.id, Some(identity.email.as_str()));
            Redirect::to("/")
        }
        Err(AuthError::InvalidCredentials) => Redirect::to("/auth/login?error=credentials"),
        Err(AuthError::Storage(e)) => {
            tracing::error!(error = %e, "Failed to persist session after login");
            Redirect::to("/auth/login?error=session")
        }
    }
}

/// Logout and clear the session.
///
/// POST /auth/logout
async fn logout(State(state): State<AppState>, session: Session) -> Redirect {
    let mut manager = SessionManager::restore(session, state.config().admin()).await;

    if let Err(e) = manager.logout().await {
        tracing::error!(error = %e, "Failed to remove auth token on logout");
    }
    clear_sentry_user();

    Redirect::to(LOGIN_PATH)
}
