// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accuracy;
pub mod schedule;

pub use accuracy::accuracy_score;
pub use schedule::{is_due_today, needs_care, CareScheduleEngine, WateringPolicy};
