//! Marketing campaign and channel metrics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use studio_pro_core::{CampaignChannel, CampaignId, CampaignStatus, Price};

/// A marketing campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    #[serde(rename = "type")]
    pub channel: CampaignChannel,
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Price,
    pub spent: Price,
    pub reach: u32,
    /// Engagement percentage.
    pub engagement: Decimal,
    pub conversions: u32,
}

impl Campaign {
    /// Spend as a whole percentage of budget, capped at 100.
    ///
    /// A zero budget reports 0.
    #[must_use]
    pub fn budget_used_percent(&self) -> Decimal {
        if self.budget > Price::ZERO && self.spent >= self.budget {
            return Decimal::ONE_HUNDRED;
        }
        self.spent
            .percent_of(self.budget)
            .map_or(Decimal::ZERO, |p| p.min(Decimal::ONE_HUNDRED))
    }
}

/// Aggregate email performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMetrics {
    pub total_sent: u32,
    pub delivered: u32,
    pub opened: u32,
    pub clicked: u32,
    pub unsubscribed: u32,
    pub open_rate: Decimal,
    pub click_rate: Decimal,
    pub unsubscribe_rate: Decimal,
}

/// One value per social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPlatform<T> {
    pub instagram: T,
    pub facebook: T,
    pub twitter: T,
}

impl<T: Copy> PerPlatform<T> {
    /// Values in display order, labelled by platform.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, T); 3] {
        [
            ("Instagram", self.instagram),
            ("Facebook", self.facebook),
            ("Twitter", self.twitter),
        ]
    }
}

/// Social media audience metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaMetrics {
    pub followers: PerPlatform<u32>,
    /// Engagement percentage.
    pub engagement: PerPlatform<Decimal>,
    pub reach: PerPlatform<u32>,
}

/// Metrics for one platform, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSummary {
    pub platform: &'static str,
    pub followers: u32,
    pub engagement: Decimal,
    pub reach: u32,
}

impl SocialMediaMetrics {
    /// One summary per platform, in display order.
    #[must_use]
    pub fn platforms(&self) -> Vec<PlatformSummary> {
        self.followers
            .entries()
            .into_iter()
            .zip(self.engagement.entries())
            .zip(self.reach.entries())
            .map(|(((platform, followers), (_, engagement)), (_, reach))| PlatformSummary {
                platform,
                followers,
                engagement,
                reach,
            })
            .collect()
    }
}

/// Everything shown on the marketing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingData {
    pub campaigns: Vec<Campaign>,
    pub email_metrics: EmailMetrics,
    pub social_media_metrics: SocialMediaMetrics,
}
