//! Studio sample data.
//!
//! All dashboard, CRM and marketing figures come from one JSON document with
//! `dashboard`, `crm` and `marketing` sections. A copy is compiled into the
//! binary; `STUDIO_DATA_PATH` swaps in a file of the same shape. The data is
//! loaded once at startup and never modified.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use studio_pro_core::{Lead, Member, Price};

use crate::models::{DashboardData, MarketingData};

const EMBEDDED_DATA: &str = include_str!("../data/sample_data.json");

/// Errors loading or validating a data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid studio data JSON.
    #[error("invalid studio data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but breaks a data rule.
    #[error("{} validation error(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// The CRM directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmData {
    pub members: Vec<Member>,
    pub leads: Vec<Lead>,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioData {
    pub dashboard: DashboardData,
    pub crm: CrmData,
    pub marketing: MarketingData,
}

impl StudioData {
    /// The sample data compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `DataError` only if the embedded document is broken.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED_DATA)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` for malformed JSON or `DataError::Invalid`
    /// when validation fails.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(json)?;

        let errors = data.validate();
        if !errors.is_empty() {
            return Err(DataError::Invalid(errors));
        }
        Ok(data)
    }

    /// Read, parse and validate a data file.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, the embedded copy otherwise.
    ///
    /// # Errors
    ///
    /// See [`StudioData::from_path`].
    pub fn load(path: Option<&Path>) -> Result<Self, DataError> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading studio data file");
                Self::from_path(path)
            }
            None => Self::embedded(),
        }
    }

    /// Check data rules that serde cannot express.
    ///
    /// Returns one message per problem; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        duplicate_ids("member", self.crm.members.iter().map(|m| m.id), &mut errors);
        duplicate_ids("lead", self.crm.leads.iter().map(|l| l.id), &mut errors);
        duplicate_ids(
            "sale",
            self.dashboard.recent_sales.iter().map(|s| s.id),
            &mut errors,
        );
        duplicate_ids(
            "campaign",
            self.marketing.campaigns.iter().map(|c| c.id),
            &mut errors,
        );

        let kpis = &self.dashboard.kpis;
        if kpis.active_members > kpis.total_members {
            errors.push(format!(
                "kpis: activeMembers ({}) exceeds totalMembers ({})",
                kpis.active_members, kpis.total_members
            ));
        }

        for campaign in &self.marketing.campaigns {
            if campaign.end_date < campaign.start_date {
                errors.push(format!(
                    "campaign {}: endDate {} is before startDate {}",
                    campaign.id, campaign.end_date, campaign.start_date
                ));
            }
            if campaign.budget < Price::ZERO || campaign.spent < Price::ZERO {
                errors.push(format!(
                    "campaign {}: budget ({}) and spent ({}) must not be negative",
                    campaign.id, campaign.budget, campaign.spent
                ));
            }
        }

        errors
    }
}

fn duplicate_ids<I>(kind: &str, ids: impl Iterator<Item = I>, errors: &mut Vec<String>)
where
    I: Eq + Hash + std::fmt::Display + Copy,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(format!("duplicate {kind} id {id}"));
        }
    }
}
