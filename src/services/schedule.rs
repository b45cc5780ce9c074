// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Care schedule engine.
//!
//! Pure date arithmetic over a plant's embedded schedule:
//! 1. Derive next-due dates from last-performed stamps and frequencies
//! 2. Project the harvest date from planting date and growth time
//! 3. Fold a logged care activity into the schedule
//!
//! No I/O and no wall-clock reads; callers pass "now" in and persist the
//! mutated plant themselves. Every operation is idempotent: recomputing with
//! unchanged inputs yields the same derived fields.

use chrono::{DateTime, Utc};

use crate::models::{ActivityType, CareSchedule, Plant, PlantInfo, WateringNeeds};
use crate::time_utils::{days_after, end_of_day};

/// Default watering frequency (days) per watering-need band, used when a
/// plant is created without an explicit frequency.
///
/// Kept as a named table so the mapping is testable and swappable rather
/// than buried in conditionals.
#[derive(Debug, Clone, Copy)]
pub struct WateringPolicy {
    /// High water need (e.g. seedlings, thirsty tropicals)
    pub high_days: u32,
    /// Low water need (e.g. succulents)
    pub low_days: u32,
    /// Everything else, including unknown needs
    pub default_days: u32,
}

impl Default for WateringPolicy {
    fn default() -> Self {
        Self {
            high_days: 1,
            low_days: 7,
            default_days: 2,
        }
    }
}

impl WateringPolicy {
    /// Resolve a watering frequency from a (possibly unknown) need band.
    pub fn frequency_for(&self, needs: Option<WateringNeeds>) -> u32 {
        match needs {
            Some(WateringNeeds::High) => self.high_days,
            Some(WateringNeeds::Low) => self.low_days,
            Some(WateringNeeds::Moderate) | None => self.default_days,
        }
    }
}

/// Recomputes a plant's derived care dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareScheduleEngine {
    policy: WateringPolicy,
}

impl CareScheduleEngine {
    pub fn new(policy: WateringPolicy) -> Self {
        Self { policy }
    }

    /// Recompute `next_watering_due = last_watered + watering_frequency_days`.
    ///
    /// Preconditions (caller validation, not defended here):
    /// `last_watered` is seeded at plant creation and
    /// `watering_frequency_days >= 1`. With `last_watered` unset the due date
    /// is left unset.
    pub fn recompute_next_watering(&self, schedule: &mut CareSchedule) {
        debug_assert!(schedule.watering_frequency_days >= 1);
        if let Some(last) = schedule.last_watered {
            schedule.next_watering_due =
                Some(days_after(last, schedule.watering_frequency_days as i64));
        }
    }

    /// Recompute `next_fertilizing_due`.
    ///
    /// A plant that has never been fertilized has no due date: unlike
    /// watering (seeded with "now" at creation), fertilizing has no schedule
    /// until the first logged action. No-op while `last_fertilized` is unset.
    pub fn recompute_next_fertilizing(&self, schedule: &mut CareSchedule) {
        debug_assert!(schedule.fertilizing_frequency_days >= 1);
        if let Some(last) = schedule.last_fertilized {
            schedule.next_fertilizing_due = Some(days_after(
                last,
                schedule.fertilizing_frequency_days as i64,
            ));
        }
    }

    /// Intentionally never projects `next_pruning_due`.
    ///
    /// The frequency and last-pruned stamp are stored, but pruning due dates
    /// never surface in the needs-care query today. Whether they should is a
    /// pending product decision; until then this stays an explicit no-op so
    /// the behavior is visible rather than accidental.
    pub fn recompute_next_pruning(&self, _schedule: &mut CareSchedule) {}

    /// Project `estimated_harvest_date = planted_date + growth_time_days`.
    ///
    /// No-op while `growth_time_days <= 0`.
    pub fn recompute_harvest_date(&self, info: &mut PlantInfo, planted_date: DateTime<Utc>) {
        if info.growth_time_days > 0 {
            info.estimated_harvest_date = Some(days_after(planted_date, info.growth_time_days));
        }
    }

    /// Recompute every derived field on a plant. Used by the create and
    /// update flows.
    pub fn recompute_all(&self, plant: &mut Plant) {
        self.recompute_next_watering(&mut plant.care_schedule);
        self.recompute_next_fertilizing(&mut plant.care_schedule);
        self.recompute_next_pruning(&mut plant.care_schedule);
        self.recompute_harvest_date(&mut plant.plant_info, plant.planted_date);
    }

    /// Initialize the schedule for a freshly created plant.
    ///
    /// Resolves a missing watering frequency (0 on the wire) through the
    /// policy band table, seeds `last_watered` to `now`, then computes all
    /// derived dates.
    pub fn on_plant_created(&self, plant: &mut Plant, now: DateTime<Utc>) {
        if plant.care_schedule.watering_frequency_days == 0 {
            let resolved = self.policy.frequency_for(plant.plant_info.watering_needs);
            tracing::debug!(
                plant_id = %plant.id,
                needs = ?plant.plant_info.watering_needs,
                frequency_days = resolved,
                "Watering frequency resolved from policy band"
            );
            plant.care_schedule.watering_frequency_days = resolved;
        }
        plant.care_schedule.last_watered = Some(now);
        self.recompute_all(plant);
    }

    /// Fold a logged care activity into the plant's schedule.
    ///
    /// Invoked by the persistence layer whenever a care log is created.
    /// Watering, fertilizing, and pruning update their last-performed stamp
    /// and recompute the matching due date; every other activity type leaves
    /// the schedule untouched.
    pub fn on_activity_logged(
        &self,
        plant: &mut Plant,
        activity: ActivityType,
        activity_date: DateTime<Utc>,
    ) {
        match activity {
            ActivityType::Watering => {
                plant.care_schedule.last_watered = Some(activity_date);
                self.recompute_next_watering(&mut plant.care_schedule);
                tracing::info!(
                    plant_id = %plant.id,
                    next_due = ?plant.care_schedule.next_watering_due,
                    "Watering logged, schedule updated"
                );
            }
            ActivityType::Fertilizing => {
                plant.care_schedule.last_fertilized = Some(activity_date);
                self.recompute_next_fertilizing(&mut plant.care_schedule);
                tracing::info!(
                    plant_id = %plant.id,
                    next_due = ?plant.care_schedule.next_fertilizing_due,
                    "Fertilizing logged, schedule updated"
                );
            }
            ActivityType::Pruning => {
                plant.care_schedule.last_pruned = Some(activity_date);
                self.recompute_next_pruning(&mut plant.care_schedule);
                tracing::info!(plant_id = %plant.id, "Pruning logged");
            }
            _ => {
                tracing::debug!(
                    plant_id = %plant.id,
                    activity = ?activity,
                    "Activity has no schedule impact"
                );
            }
        }
    }
}

/// Whether a due date counts as due on the day of `as_of`.
///
/// Day-granularity comparison: due at or before the end of `as_of`'s day
/// means due today (or overdue).
pub fn is_due_today(due_date: DateTime<Utc>, as_of: DateTime<Utc>) -> bool {
    due_date <= end_of_day(as_of)
}

/// Whether any of a plant's care activities is due on the day of `as_of`.
///
/// ORs the predicate across the three due-date fields; soft-deleted plants
/// never need care. This is the single definition behind the "plants needing
/// care" query.
pub fn needs_care(plant: &Plant, as_of: DateTime<Utc>) -> bool {
    if !plant.is_active {
        return false;
    }
    [
        plant.care_schedule.next_watering_due,
        plant.care_schedule.next_fertilizing_due,
        plant.care_schedule.next_pruning_due,
    ]
    .into_iter()
    .flatten()
    .any(|due| is_due_today(due, as_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlantCategory, PlantStatus};
    use chrono::{Duration, TimeZone};

    fn make_plant(watering_freq: u32) -> Plant {
        Plant {
            id: "plant-1".to_string(),
            user_id: "user-1".to_string(),
            nickname: "Cherry".to_string(),
            species: "tomato".to_string(),
            scientific_name: Some("Solanum lycopersicum".to_string()),
            category: PlantCategory::Vegetable,
            planted_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            care_schedule: CareSchedule::new(watering_freq, 14, 30),
            plant_info: PlantInfo::default(),
            status: PlantStatus::Healthy,
            health_score: 100,
            is_active: true,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_watering_policy_bands() {
        let policy = WateringPolicy::default();
        assert_eq!(policy.frequency_for(Some(WateringNeeds::High)), 1);
        assert_eq!(policy.frequency_for(Some(WateringNeeds::Low)), 7);
        assert_eq!(policy.frequency_for(Some(WateringNeeds::Moderate)), 2);
        assert_eq!(policy.frequency_for(None), 2);
    }

    #[test]
    fn test_next_watering_is_last_plus_frequency() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(3);
        plant.care_schedule.last_watered = Some(date(2024, 1, 10));

        engine.recompute_next_watering(&mut plant.care_schedule);

        assert_eq!(plant.care_schedule.next_watering_due, Some(date(2024, 1, 13)));
    }

    #[test]
    fn test_next_watering_preserves_time_of_day() {
        let engine = CareScheduleEngine::default();
        let mut schedule = CareSchedule::new(2, 14, 30);
        let last = Utc.with_ymd_and_hms(2024, 1, 1, 7, 30, 0).unwrap();
        schedule.last_watered = Some(last);

        engine.recompute_next_watering(&mut schedule);

        assert_eq!(
            schedule.next_watering_due,
            Some(Utc.with_ymd_and_hms(2024, 1, 3, 7, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_fertilizing_noop_until_first_action() {
        let engine = CareScheduleEngine::default();
        let mut schedule = CareSchedule::new(2, 14, 30);

        engine.recompute_next_fertilizing(&mut schedule);

        assert_eq!(schedule.next_fertilizing_due, None);
    }

    #[test]
    fn test_fertilizing_due_after_first_action() {
        let engine = CareScheduleEngine::default();
        let mut schedule = CareSchedule::new(2, 14, 30);
        schedule.last_fertilized = Some(date(2024, 2, 1));

        engine.recompute_next_fertilizing(&mut schedule);

        assert_eq!(schedule.next_fertilizing_due, Some(date(2024, 2, 15)));
    }

    #[test]
    fn test_pruning_never_projects_due_date() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        engine.on_activity_logged(&mut plant, ActivityType::Pruning, date(2024, 3, 1));

        assert_eq!(plant.care_schedule.last_pruned, Some(date(2024, 3, 1)));
        assert_eq!(plant.care_schedule.next_pruning_due, None);
    }

    #[test]
    fn test_harvest_date_projection() {
        let engine = CareScheduleEngine::default();
        let mut info = PlantInfo {
            growth_time_days: 90,
            ..PlantInfo::default()
        };

        engine.recompute_harvest_date(&mut info, date(2024, 1, 1));

        assert_eq!(info.estimated_harvest_date, Some(date(2024, 3, 31)));
    }

    #[test]
    fn test_harvest_noop_for_non_positive_growth_time() {
        let engine = CareScheduleEngine::default();
        for growth in [0, -5] {
            let mut info = PlantInfo {
                growth_time_days: growth,
                ..PlantInfo::default()
            };
            engine.recompute_harvest_date(&mut info, date(2024, 1, 1));
            assert_eq!(info.estimated_harvest_date, None, "growth {}", growth);
        }
    }

    #[test]
    fn test_on_plant_created_seeds_watering() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        let now = date(2024, 1, 1);

        engine.on_plant_created(&mut plant, now);

        assert_eq!(plant.care_schedule.last_watered, Some(now));
        assert_eq!(plant.care_schedule.next_watering_due, Some(date(2024, 1, 3)));
        // Never fertilized, so no fertilizing schedule yet
        assert_eq!(plant.care_schedule.next_fertilizing_due, None);
        assert_eq!(
            plant.plant_info.estimated_harvest_date,
            Some(date(2024, 3, 31))
        );
    }

    #[test]
    fn test_on_plant_created_resolves_frequency_from_policy() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(0);
        plant.plant_info.watering_needs = Some(WateringNeeds::Low);

        engine.on_plant_created(&mut plant, date(2024, 1, 1));

        assert_eq!(plant.care_schedule.watering_frequency_days, 7);
        assert_eq!(plant.care_schedule.next_watering_due, Some(date(2024, 1, 8)));
    }

    #[test]
    fn test_on_plant_created_keeps_explicit_frequency() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(5);
        plant.plant_info.watering_needs = Some(WateringNeeds::High);

        engine.on_plant_created(&mut plant, date(2024, 1, 1));

        assert_eq!(plant.care_schedule.watering_frequency_days, 5);
    }

    #[test]
    fn test_on_activity_logged_watering() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        engine.on_plant_created(&mut plant, date(2024, 1, 1));

        engine.on_activity_logged(&mut plant, ActivityType::Watering, date(2024, 1, 5));

        assert_eq!(plant.care_schedule.last_watered, Some(date(2024, 1, 5)));
        assert_eq!(plant.care_schedule.next_watering_due, Some(date(2024, 1, 7)));
    }

    #[test]
    fn test_on_activity_logged_other_types_leave_schedule_untouched() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        engine.on_plant_created(&mut plant, date(2024, 1, 1));
        let before = plant.care_schedule.clone();

        for activity in [
            ActivityType::Repotting,
            ActivityType::Inspection,
            ActivityType::Harvesting,
            ActivityType::Other,
        ] {
            engine.on_activity_logged(&mut plant, activity, date(2024, 2, 1));
        }

        assert_eq!(plant.care_schedule, before);
    }

    #[test]
    fn test_recompute_all_is_idempotent() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        engine.on_plant_created(&mut plant, date(2024, 1, 1));

        let once = plant.clone();
        engine.recompute_all(&mut plant);

        assert_eq!(plant, once);
    }

    #[test]
    fn test_is_due_today_boundaries() {
        let as_of = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();

        // Midnight today: due
        assert!(is_due_today(date(2024, 6, 15), as_of));
        // Overdue from last week: due
        assert!(is_due_today(date(2024, 6, 8), as_of));
        // Last instant of today: due
        assert!(is_due_today(
            date(2024, 6, 16) - Duration::milliseconds(1),
            as_of
        ));
        // Midnight tomorrow: not due
        assert!(!is_due_today(date(2024, 6, 16), as_of));
    }

    #[test]
    fn test_needs_care_ors_across_due_dates() {
        let engine = CareScheduleEngine::default();
        let as_of = date(2024, 6, 15);

        // Watering due, fertilizing not
        let mut plant = make_plant(2);
        engine.on_activity_logged(&mut plant, ActivityType::Watering, date(2024, 6, 13));
        engine.on_activity_logged(&mut plant, ActivityType::Fertilizing, date(2024, 6, 14));
        assert!(needs_care(&plant, as_of));

        // Nothing due yet
        let mut rested = make_plant(7);
        engine.on_activity_logged(&mut rested, ActivityType::Watering, as_of);
        assert!(!needs_care(&rested, as_of));

        // Only fertilizing due
        let mut hungry = make_plant(30);
        engine.on_activity_logged(&mut hungry, ActivityType::Watering, as_of);
        hungry.care_schedule.last_fertilized = Some(date(2024, 6, 1));
        engine.recompute_next_fertilizing(&mut hungry.care_schedule);
        assert!(needs_care(&hungry, as_of));
    }

    #[test]
    fn test_needs_care_false_for_soft_deleted_plant() {
        let engine = CareScheduleEngine::default();
        let mut plant = make_plant(2);
        engine.on_activity_logged(&mut plant, ActivityType::Watering, date(2024, 6, 1));

        plant.is_active = false;

        assert!(!needs_care(&plant, date(2024, 6, 15)));
    }
}
