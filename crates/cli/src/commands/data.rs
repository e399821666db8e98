//! Studio data file checks.
//!
//! # Usage
//!
//! ```bash
//! studio-cli data check ./studio.json
//! ```

use std::path::Path;

use tracing::{error, info};

use studio_pro_admin::data::{DataError, StudioData};

/// Parse and validate a replacement data file.
///
/// Validation problems are logged one per line before the error is returned.
///
/// # Errors
///
/// Returns `DataError` if the file cannot be read, parsed or validated.
pub fn check(path: &Path) -> Result<(), DataError> {
    info!(path = %path.display(), "Checking studio data file");

    let data = match StudioData::from_path(path) {
        Ok(data) => data,
        Err(DataError::Invalid(errors)) => {
            error!("Data validation failed:");
            for err in &errors {
                error!("  - {err}");
            }
            return Err(DataError::Invalid(errors));
        }
        Err(e) => return Err(e),
    };

    info!(
        members = data.crm.members.len(),
        leads = data.crm.leads.len(),
        recent_sales = data.dashboard.recent_sales.len(),
        campaigns = data.marketing.campaigns.len(),
        "Studio data file is valid"
    );
    Ok(())
}
