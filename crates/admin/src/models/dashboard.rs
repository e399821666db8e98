//! Dashboard overview data.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use studio_pro_core::{Price, SaleId};

/// Headline studio numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_members: u32,
    pub active_members: u32,
    pub monthly_revenue: Price,
    pub classes_this_month: u32,
    /// Percentage, e.g. `89.2`.
    pub member_retention_rate: Decimal,
    pub average_class_size: Decimal,
}

impl Kpis {
    /// Active members as a whole percentage of all members.
    ///
    /// Returns `None` when the studio has no members.
    #[must_use]
    pub fn active_member_share(&self) -> Option<Decimal> {
        if self.total_members == 0 {
            return None;
        }
        let share = Decimal::from(self.active_members) / Decimal::from(self.total_members)
            * Decimal::ONE_HUNDRED;
        Some(share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// A completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub customer_name: String,
    pub service: String,
    pub amount: Price,
    pub date: NaiveDate,
}

/// Revenue for one month of the chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Short month label, e.g. `Jul`.
    pub month: String,
    pub revenue: Price,
}

/// Attendance percentage for one class type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAttendance {
    #[serde(rename = "class")]
    pub class_name: String,
    pub attendance: u32,
}

/// Member count for one age bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicBucket {
    pub age_group: String,
    pub count: u32,
}

/// A well-attended class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopClass {
    pub name: String,
    pub instructor: String,
    pub avg_attendance: u32,
    pub rating: Decimal,
}

/// Everything shown on the dashboard overview.
///
/// The chart series are kept so replacement data files stay complete, but
/// the dashboard renders only the KPI cards and the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpis: Kpis,
    pub recent_sales: Vec<Sale>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub class_attendance: Vec<ClassAttendance>,
    pub member_demographics: Vec<DemographicBucket>,
    pub top_classes: Vec<TopClass>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kpis(total: u32, active: u32) -> Kpis {
        Kpis {
            total_members: total,
            active_members: active,
            monthly_revenue: Price::dollars(28_500),
            classes_this_month: 95,
            member_retention_rate: Decimal::new(892, 1),
            average_class_size: Decimal::new(115, 1),
        }
    }

    #[test]
    fn test_active_member_share() {
        assert_eq!(kpis(150, 135).active_member_share(), Some(Decimal::from(90)));
        assert_eq!(kpis(3, 2).active_member_share(), Some(Decimal::from(67)));
        assert_eq!(kpis(0, 0).active_member_share(), None);
    }

    #[test]
    fn test_class_attendance_uses_class_key() {
        let row: ClassAttendance =
            serde_json::from_str(r#"{"class": "Yoga", "attendance": 85}"#).unwrap();
        assert_eq!(row.class_name, "Yoga");
        assert_eq!(row.attendance, 85);
    }
}
