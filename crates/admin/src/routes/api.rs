//! JSON API for the dashboard.
//!
//! All endpoints sit behind the auth gate and answer 401 without a session.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use studio_pro_core::{DirectoryRecord, directory};

use crate::{middleware::RequireAdminAuth, models::UserIdentity, state::AppState};

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Current session response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: UserIdentity,
}

/// Filtered directory response.
#[derive(Debug, Serialize)]
pub struct DirectoryResponse<'a, R> {
    pub query: &'a str,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub count: usize,
    pub records: Vec<&'a R>,
}

impl<'a, R: DirectoryRecord> DirectoryResponse<'a, R> {
    fn search(records: &'a [R], query: &'a str) -> Self {
        let matched = directory::filter(records, query);
        Self {
            query,
            total: records.len(),
            count: matched.len(),
            records: matched,
        }
    }
}

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/session", get(session))
        .route("/api/members", get(members))
        .route("/api/leads", get(leads))
}

/// GET /api/session
async fn session(RequireAdminAuth(admin): RequireAdminAuth) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
        user: admin,
    })
}

/// GET /api/members?q=...
#[instrument(skip(_admin, state))]
async fn members(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    Json(DirectoryResponse::search(&state.data().crm.members, &query.q)).into_response()
}

/// GET /api/leads?q=...
#[instrument(skip(_admin, state))]
async fn leads(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    Json(DirectoryResponse::search(&state.data().crm.leads, &query.q)).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::data::StudioData;

    #[test]
    fn test_directory_response_shape() {
        let data = StudioData::embedded().unwrap();
        let response = DirectoryResponse::search(&data.crm.members, "jane");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["query"], "jane");
        assert_eq!(json["total"], 5);
        assert_eq!(json["count"], 1);
        assert_eq!(json["records"][0]["name"], "Jane Smith");
        assert_eq!(json["records"][0]["membershipType"], "Premium");
    }

    #[test]
    fn test_directory_response_empty_query() {
        let data = StudioData::embedded().unwrap();
        let response = DirectoryResponse::search(&data.crm.leads, "");

        assert_eq!(response.count, response.total);
        assert_eq!(response.records.len(), 3);
    }
}
