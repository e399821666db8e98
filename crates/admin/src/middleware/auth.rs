//! Authentication middleware and extractors for the dashboard.
//!
//! [`require_session`] is the single gate for every protected route: it
//! restores the visitor's session, asks [`access::decide`], and either
//! stores the [`UserIdentity`] in request extensions or turns the visitor
//! away. Handlers then pull the identity out with [`RequireAdminAuth`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::UserIdentity;
use crate::services::session::{Access, SessionManager, access};
use crate::state::AppState;

/// Where signed-out visitors are sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Gate a protected route on a signed-in session.
///
/// Page requests without a session are redirected to [`LOGIN_PATH`];
/// `/api/` requests get 401 instead.
pub async fn require_session(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let manager = SessionManager::restore(session, state.config().admin()).await;

    match access::decide(manager.current_session()) {
        Access::Granted(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Access::RedirectToLogin => AdminAuthRejection::for_path(request.uri().path()).into_response(),
    }
}

/// Extractor for the identity admitted by [`require_session`].
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.display_name)
/// }
/// ```
pub struct RequireAdminAuth(pub UserIdentity);

/// Error returned when admin authentication is required but the user is not logged in.
#[derive(Debug, PartialEq, Eq)]
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl AdminAuthRejection {
    /// Pick the rejection for a request path.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("/api/") {
            Self::Unauthorized
        } else {
            Self::RedirectToLogin
        }
    }
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(Self)
            .ok_or_else(|| AdminAuthRejection::for_path(parts.uri.path()))
    }
}

/// Extractor that optionally restores the current admin.
///
/// Used on public pages (the login page) that behave differently for a
/// signed-in visitor. Never rejects.
pub struct OptionalAdminAuth(pub Option<UserIdentity>);

impl FromRequestParts<AppState> for OptionalAdminAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            return Ok(Self(None));
        };

        let manager = SessionManager::restore(session, state.config().admin()).await;
        Ok(Self(manager.into_session().identity().cloned()))
    }
}
