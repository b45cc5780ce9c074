// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Plant model with its embedded care schedule and advisory info.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default growth time (days to maturity) when a species estimate is unknown.
pub const DEFAULT_GROWTH_TIME_DAYS: i64 = 90;

/// Stored plant record.
///
/// Owned by exactly one user. Soft-deleted via `is_active`; normal flows
/// never hard-delete. The derived fields inside `care_schedule` and
/// `plant_info` are maintained by the schedule engine, not set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Plant {
    /// Plant document ID
    pub id: String,
    /// Owning user ID
    pub user_id: String,
    /// User-chosen nickname
    pub nickname: String,
    /// Common species name (e.g. "tomato")
    pub species: String,
    /// Scientific name, if known
    pub scientific_name: Option<String>,
    /// Category for grouping and advice prompts
    pub category: PlantCategory,
    /// Date the plant was started; immutable input to harvest projection
    pub planted_date: DateTime<Utc>,
    /// Care frequencies, last-performed stamps, and derived due dates
    #[validate(nested)]
    pub care_schedule: CareSchedule,
    /// Advisory info and harvest projection
    pub plant_info: PlantInfo,
    /// Derived from the most recent health signal
    pub status: PlantStatus,
    /// Health score, clamped to [0, 100] before storage
    #[validate(range(max = 100))]
    pub health_score: u8,
    /// Soft-delete flag
    pub is_active: bool,
}

impl Plant {
    /// Apply a new health signal (e.g. a score logged with a care activity or
    /// returned by a diagnosis).
    ///
    /// Clamps the raw signal to [0, 100] and re-derives `status`. Dormant is a
    /// manual state and is never produced here; applying any signal to a
    /// dormant plant moves it back onto the score-derived ladder.
    pub fn apply_health_signal(&mut self, signal: i64) {
        self.health_score = clamp_health_score(signal);
        self.status = PlantStatus::from_health_score(self.health_score);
    }
}

/// Plant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Vegetable,
    Fruit,
    Flower,
    Herb,
    Indoor,
    Succulent,
    Tree,
    Other,
}

/// Plant health status.
///
/// `Dormant` is set manually (e.g. overwintering) and never auto-assigned
/// from a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantStatus {
    Healthy,
    NeedsAttention,
    Diseased,
    Dormant,
}

impl PlantStatus {
    /// Derive status from a clamped health score.
    ///
    /// score >= 80 healthy, 50..=79 needs-attention, below 50 diseased.
    pub fn from_health_score(score: u8) -> Self {
        if score >= 80 {
            PlantStatus::Healthy
        } else if score >= 50 {
            PlantStatus::NeedsAttention
        } else {
            PlantStatus::Diseased
        }
    }
}

/// Clamp a raw health signal to the storable [0, 100] range.
pub fn clamp_health_score(signal: i64) -> u8 {
    signal.clamp(0, 100) as u8
}

/// Coarse watering-need band, as reported by the plant database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringNeeds {
    Low,
    Moderate,
    High,
}

/// Embedded care schedule: frequencies, last-performed stamps, and the due
/// dates derived from them.
///
/// Frequencies are whole days and must be >= 1 once a plant exists; a
/// watering frequency of 0 means "not supplied" and is resolved through the
/// watering policy band table during plant creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CareSchedule {
    /// Days between waterings
    #[validate(range(min = 1))]
    pub watering_frequency_days: u32,
    /// When the plant was last watered (seeded to "now" at creation)
    #[serde(default)]
    pub last_watered: Option<DateTime<Utc>>,
    /// Derived: next watering due date
    #[serde(default)]
    pub next_watering_due: Option<DateTime<Utc>>,

    /// Days between fertilizings
    #[validate(range(min = 1))]
    pub fertilizing_frequency_days: u32,
    /// When the plant was last fertilized (unset until the first time)
    #[serde(default)]
    pub last_fertilized: Option<DateTime<Utc>>,
    /// Derived: next fertilizing due date (unset until first fertilizing)
    #[serde(default)]
    pub next_fertilizing_due: Option<DateTime<Utc>>,

    /// Days between prunings
    #[validate(range(min = 1))]
    pub pruning_frequency_days: u32,
    /// When the plant was last pruned
    #[serde(default)]
    pub last_pruned: Option<DateTime<Utc>>,
    /// Derived: next pruning due date. Stored but currently never projected;
    /// see `CareScheduleEngine::recompute_next_pruning`.
    #[serde(default)]
    pub next_pruning_due: Option<DateTime<Utc>>,
}

impl CareSchedule {
    /// Fresh schedule with the given frequencies and no history.
    pub fn new(
        watering_frequency_days: u32,
        fertilizing_frequency_days: u32,
        pruning_frequency_days: u32,
    ) -> Self {
        Self {
            watering_frequency_days,
            last_watered: None,
            next_watering_due: None,
            fertilizing_frequency_days,
            last_fertilized: None,
            next_fertilizing_due: None,
            pruning_frequency_days,
            last_pruned: None,
            next_pruning_due: None,
        }
    }
}

/// Embedded advisory info plus the harvest projection inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantInfo {
    /// Watering-need band (drives the default watering frequency)
    #[serde(default)]
    pub watering_needs: Option<WateringNeeds>,
    /// Sunlight needs (e.g. "full sun")
    #[serde(default)]
    pub sunlight_needs: Option<String>,
    /// Soil type (e.g. "loamy, well-drained")
    #[serde(default)]
    pub soil_type: Option<String>,
    /// Ideal temperature range, free text
    #[serde(default)]
    pub ideal_temperature: Option<String>,
    /// Days from planting to maturity
    #[serde(default = "default_growth_time")]
    pub growth_time_days: i64,
    /// Derived: projected harvest date (unset while `growth_time_days <= 0`)
    #[serde(default)]
    pub estimated_harvest_date: Option<DateTime<Utc>>,
}

fn default_growth_time() -> i64 {
    DEFAULT_GROWTH_TIME_DAYS
}

impl Default for PlantInfo {
    fn default() -> Self {
        Self {
            watering_needs: None,
            sunlight_needs: None,
            soil_type: None,
            ideal_temperature: None,
            growth_time_days: DEFAULT_GROWTH_TIME_DAYS,
            estimated_harvest_date: None,
        }
    }
}
