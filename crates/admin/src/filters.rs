//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use studio_pro_core::types::price::group_thousands;

/// Group the digits of a whole number with commas.
///
/// Usage in templates: `{{ metrics.total_sent|thousands }}` renders
/// `15,420`. Values that are not plain digit strings pass through unchanged.
#[askama::filter_fn]
pub fn thousands(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(group_thousands(&value.to_string()))
}

/// Format a date as `Jan 15, 2024`.
///
/// Usage in templates: `{{ sale.date|short_date }}`
#[askama::filter_fn]
pub fn short_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_short_date(&value.to_string()))
}

/// CSS class for a status badge.
///
/// Usage in templates: `{{ member.status|status_badge }}`
#[askama::filter_fn]
pub fn status_badge(
    status: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<&'static str> {
    Ok(badge_class(&status.to_string()))
}

/// Anything that is not an ISO `YYYY-MM-DD` date passes through unchanged.
fn format_short_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |date| date.format("%b %-d, %Y").to_string())
}

/// Unknown labels get the neutral badge.
fn badge_class(label: &str) -> &'static str {
    match label {
        "Active" => "badge badge-green",
        "Completed" | "Scheduled" => "badge badge-blue",
        "Paused" | "Contacted" => "badge badge-yellow",
        "Inactive" => "badge badge-red",
        _ => "badge badge-gray",
    }
}
