//! Marketing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use std::str::FromStr;

use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::AppError,
    filters,
    middleware::RequireAdminAuth,
    models::marketing::{Campaign, EmailMetrics, PlatformSummary},
    state::AppState,
};

use super::AdminUserView;

/// Marketing tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarketingTab {
    #[default]
    Campaigns,
    Email,
    Social,
}

impl MarketingTab {
    /// Query string value for this tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Campaigns => "campaigns",
            Self::Email => "email",
            Self::Social => "social",
        }
    }
}

impl FromStr for MarketingTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Campaigns, Self::Email, Self::Social]
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("unknown marketing tab: {s}")))
    }
}

/// Marketing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct MarketingQuery {
    pub tab: Option<String>,
}

/// Marketing page template.
#[derive(Template, WebTemplate)]
#[template(path = "marketing/index.html")]
pub struct MarketingTemplate {
    pub admin_user: AdminUserView,
    pub current_path: &'static str,
    pub tab: MarketingTab,
    pub campaigns: Vec<Campaign>,
    pub email: EmailMetrics,
    pub platforms: Vec<PlatformSummary>,
}

/// Build the marketing router.
pub fn router() -> Router<AppState> {
    Router::new().route("/marketing", get(index))
}

/// Marketing page handler.
///
/// GET /marketing?tab=campaigns|email|social
#[instrument(skip(admin, state))]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<MarketingQuery>,
) -> Result<MarketingTemplate, AppError> {
    let tab = query
        .tab
        .as_deref()
        .map_or(Ok(MarketingTab::default()), str::parse)?;
    let marketing = &state.data().marketing;

    Ok(MarketingTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/marketing",
        tab,
        campaigns: marketing.campaigns.clone(),
        email: marketing.email_metrics.clone(),
        platforms: marketing.social_media_metrics.platforms(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trips_through_query_value() {
        for tab in [MarketingTab::Campaigns, MarketingTab::Email, MarketingTab::Social] {
            assert_eq!(tab.as_str().parse::<MarketingTab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_unknown_tab_is_bad_request() {
        assert!(matches!(
            "Email".parse::<MarketingTab>(),
            Err(AppError::BadRequest(_))
        ));
    }
}
