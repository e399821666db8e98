//! Directory search from the command line.
//!
//! # Usage
//!
//! ```bash
//! studio-cli directory members jane
//! studio-cli directory leads --data ./studio.json --json
//! ```
//!
//! # Environment Variables
//!
//! - `STUDIO_DATA_PATH` - Data file used when `--data` is not given

use std::path::PathBuf;

use studio_pro_admin::data::StudioData;
use studio_pro_core::{Lead, Member, directory};

use crate::Collection;

/// Search `collection` for `query` and print the matches.
///
/// # Errors
///
/// Returns an error if the data file cannot be loaded or JSON output fails.
pub fn search(
    collection: Collection,
    query: &str,
    data_path: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let data_path = data_path.or_else(|| std::env::var_os("STUDIO_DATA_PATH").map(PathBuf::from));
    let data = StudioData::load(data_path.as_deref())?;

    let lines = match collection {
        Collection::Members => {
            let found = directory::filter(&data.crm.members, query);
            tracing::info!(query, matched = found.len(), total = data.crm.members.len(), "Searched members");
            if json {
                vec![serde_json::to_string_pretty(&found)?]
            } else {
                found.into_iter().map(member_line).collect()
            }
        }
        Collection::Leads => {
            let found = directory::filter(&data.crm.leads, query);
            tracing::info!(query, matched = found.len(), total = data.crm.leads.len(), "Searched leads");
            if json {
                vec![serde_json::to_string_pretty(&found)?]
            } else {
                found.into_iter().map(lead_line).collect()
            }
        }
    };

    #[allow(clippy::print_stdout)]
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// One tab-separated row per member.
fn member_line(member: &Member) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        member.id,
        member.name,
        member.email,
        member.status,
        member.membership_type,
        member.total_spent
    )
}

/// One tab-separated row per lead.
fn lead_line(lead: &Lead) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        lead.id, lead.name, lead.email, lead.status, lead.source, lead.interest
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_member_line() {
        let data = StudioData::embedded().unwrap();
        assert_eq!(
            member_line(&data.crm.members[0]),
            "1\tJane Smith\tjane.smith@email.com\tActive\tPremium\t$2,400"
        );
    }

    #[test]
    fn test_lead_line() {
        let data = StudioData::embedded().unwrap();
        assert_eq!(
            lead_line(&data.crm.leads[1]),
            "2\tEmma Davis\temma.davis@email.com\tContacted\tReferral\tPersonal Training"
        );
    }

    #[test]
    fn test_search_embedded_members() {
        let data = StudioData::embedded().unwrap();
        let lines: Vec<String> = directory::filter(&data.crm.members, "jane")
            .into_iter()
            .map(member_line)
            .collect();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Jane Smith"));
    }
}
