//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::{
    filters,
    middleware::RequireAdminAuth,
    models::dashboard::{Kpis, Sale, TopClass},
    state::AppState,
};

use super::AdminUserView;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub admin_user: AdminUserView,
    pub current_path: &'static str,
    pub studio_name: String,
    pub kpis: Kpis,
    pub active_share: Option<Decimal>,
    pub top_classes: Vec<TopClass>,
    pub recent_sales: Vec<Sale>,
}

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Dashboard overview page.
///
/// GET /
#[instrument(skip(admin, state))]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> DashboardTemplate {
    let dashboard = &state.data().dashboard;

    DashboardTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/",
        studio_name: state.config().studio_name.clone(),
        kpis: dashboard.kpis.clone(),
        active_share: dashboard.kpis.active_member_share(),
        top_classes: dashboard.top_classes.clone(),
        recent_sales: dashboard.recent_sales.clone(),
    }
}
