//! Care activity log model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of care activity being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Watering,
    Fertilizing,
    Pruning,
    Repotting,
    Inspection,
    Harvesting,
    Other,
}

/// One logged care activity.
///
/// Owned by one user, references exactly one plant. Immutable once created
/// except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CareLog {
    /// Log document ID
    pub id: String,
    /// Owning user ID
    pub user_id: String,
    /// Plant this activity was performed on
    pub plant_id: String,
    /// What was done
    pub activity: ActivityType,
    /// When the activity occurred (callers default this to "now" when the
    /// request omits it)
    pub activity_date: DateTime<Utc>,
    /// Measured height in cm, if recorded
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub height_cm: Option<f32>,
    /// Health score observed during the activity
    #[serde(default)]
    #[validate(range(max = 100))]
    pub health_score: Option<u8>,
    /// Free-text issues noticed (spots, wilting, pests)
    #[serde(default)]
    pub issues_observed: Option<String>,
}
