//! CRM route handler.
//!
//! Members and leads tabs, each searched through the directory filter on
//! every request.

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

use studio_pro_core::{Lead, Member, directory};

use crate::{error::AppError, filters, middleware::RequireAdminAuth, state::AppState};

use super::AdminUserView;

/// CRM tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrmTab {
    #[default]
    Members,
    Leads,
}

impl CrmTab {
    /// Whether this is the leads tab.
    #[must_use]
    pub const fn is_leads(self) -> bool {
        matches!(self, Self::Leads)
    }
}

impl FromStr for CrmTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "members" => Ok(Self::Members),
            "leads" => Ok(Self::Leads),
            other => Err(AppError::BadRequest(format!("unknown CRM tab: {other}"))),
        }
    }
}

/// CRM query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CrmQuery {
    pub tab: Option<String>,
    /// Search text; missing means show everything.
    #[serde(default)]
    pub q: String,
}

/// CRM page template.
#[derive(Template, WebTemplate)]
#[template(path = "crm/index.html")]
pub struct CrmTemplate {
    pub admin_user: AdminUserView,
    pub current_path: &'static str,
    pub tab: CrmTab,
    pub query: String,
    pub member_count: usize,
    pub lead_count: usize,
    pub members: Vec<Member>,
    pub leads: Vec<Lead>,
}

impl CrmQuery {
    /// The requested tab, members when absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unknown tab name.
    pub fn tab(&self) -> Result<CrmTab, AppError> {
        self.tab.as_deref().map_or(Ok(CrmTab::default()), str::parse)
    }
}

impl CrmTemplate {
    /// Whether the active tab has no matching records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.tab {
            CrmTab::Members => self.members.is_empty(),
            CrmTab::Leads => self.leads.is_empty(),
        }
    }
}

/// Build the CRM router.
pub fn router() -> Router<AppState> {
    Router::new().route("/crm", get(index))
}

/// CRM page handler.
///
/// GET /crm?tab=members|leads&q=...
#[instrument(skip(admin, state))]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<CrmQuery>,
) -> Result<CrmTemplate, AppError> {
    let tab = query.tab()?;
    let crm = &state.data().crm;

    let (members, leads) = match tab {
        CrmTab::Members => (
            directory::filter(&crm.members, &query.q)
                .into_iter()
                .cloned()
                .collect(),
            Vec::new(),
        ),
        CrmTab::Leads => (
            Vec::new(),
            directory::filter(&crm.leads, &query.q)
                .into_iter()
                .cloned()
                .collect(),
        ),
    };

    Ok(CrmTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/crm",
        tab,
        query: query.q,
        member_count: crm.members.len(),
        lead_count: crm.leads.len(),
        members,
        leads,
    })
}
