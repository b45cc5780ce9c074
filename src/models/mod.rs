// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod care_log;
pub mod diagnosis;
pub mod plant;

pub use care_log::{ActivityType, CareLog};
pub use diagnosis::{DiagnosisSignals, PlantContext};
pub use plant::{CareSchedule, Plant, PlantCategory, PlantInfo, PlantStatus, WateringNeeds};
