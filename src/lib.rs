// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sprout-Tracker: care scheduling and diagnosis scoring for tracked plants
//!
//! This crate provides the pure computation core of the plant-care backend:
//! deriving next-due dates for care activities from a plant's schedule, and
//! scoring how trustworthy an AI disease diagnosis is given the plant context
//! that was available when it was made.
//!
//! The HTTP routes, persistence, and AI clients live in the surrounding
//! application; everything here is synchronous, deterministic, and free of
//! I/O, so callers thread "now" in explicitly.

pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use services::{CareScheduleEngine, WateringPolicy};
