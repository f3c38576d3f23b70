//! Promotion rows as the promotions list endpoint returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Promotion kind. `one-time` promotions are consumed per user; `automatic`
/// promotions apply to every qualifying transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionKind {
    Automatic,
    OneTime,
}

impl PromotionKind {
    /// Wire token, identical to the serde representation.
    pub fn as_token(&self) -> &'static str {
        match self {
            PromotionKind::Automatic => "automatic",
            PromotionKind::OneTime => "one-time",
        }
    }
}

/// One row of the Promotions list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PromotionKind,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub min_spending: Option<f64>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub points: Option<i64>,
}

impl PromotionSummary {
    /// Whether the promotion window contains `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now < self.end_time
    }
}
