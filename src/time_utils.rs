// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date arithmetic at day granularity.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Add a whole number of days to a UTC timestamp.
pub fn days_after(date: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    date + Duration::days(days)
}

/// Normalize a timestamp to the last representable instant of its UTC day
/// (23:59:59.999).
///
/// Due-date comparisons happen at day granularity: anything due at or before
/// the end of "today" counts as due today.
pub fn end_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(date.year(), date.month(), date.day(), 23, 59, 59)
        .single()
        .unwrap_or(date)
        + Duration::milliseconds(999)
}

/// Meteorological season, northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Derive the season from an explicit date.
    ///
    /// Takes the date as a parameter rather than reading the wall clock so
    /// advice prompts and tests can fix the season deterministically.
    pub fn for_date(date: DateTime<Utc>) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Lowercase name as used in advice prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}
