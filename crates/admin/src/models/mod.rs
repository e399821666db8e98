//! Domain models for the dashboard.
//!
//! - [`session`] - Signed-in identity and per-visitor auth state
//! - [`dashboard`] - KPIs, recent sales, top classes
//! - [`marketing`] - Campaigns, email and social metrics
//!
//! Directory records (members and leads) live in `studio_pro_core` so the
//! CLI can search them too.

pub mod dashboard;
pub mod marketing;
pub mod session;

pub use dashboard::DashboardData;
pub use marketing::MarketingData;
pub use session::{AuthSession, UserIdentity, keys as session_keys};
