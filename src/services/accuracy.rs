// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Diagnosis accuracy scoring.
//!
//! The AI provider's raw confidence number is not trustworthy on its own: it
//! can be high even when we supplied almost no plant-specific context. The
//! displayed score blends "how much supporting data we actually had" with the
//! model's confidence, so a high badge means both.
//!
//! The weights and blend ratios below are tuning values carried over for
//! behavioral compatibility; displayed scores must stay reproducible across
//! releases.

use crate::models::{DiagnosisSignals, PlantContext};

/// Context baseline: the season is always derivable from the date alone, so
/// some context exists even for an otherwise empty record.
const CONTEXT_BASELINE: u32 = 20;

const SPECIES_WEIGHT: u32 = 20;
const CATEGORY_WEIGHT: u32 = 10;
const SOIL_TYPE_WEIGHT: u32 = 15;
const LOCATION_WEIGHT: u32 = 10;
const SUNLIGHT_WEIGHT: u32 = 10;
const CITY_WEIGHT: u32 = 10;
const CLIMATE_ZONE_WEIGHT: u32 = 5;

/// The weights above can sum past 100; the context score is capped here.
const CONTEXT_CAP: u32 = 100;

/// Blend ratio between context completeness and model confidence.
const CONTEXT_BLEND: f64 = 0.45;
const CONFIDENCE_BLEND: f64 = 0.55;

/// Substituted when the model did not report a confidence.
const DEFAULT_CONFIDENCE: f64 = 50.0;

/// A species mismatch can never produce a high-accuracy badge.
const MISMATCH_CAP: i64 = 55;

/// Displayed scores never read as fully untrustworthy.
const SCORE_FLOOR: i64 = 15;
const SCORE_CEILING: i64 = 100;

/// How much plant-specific context was available, in [20, 100].
///
/// Each present field contributes a fixed, independent weight; order does
/// not matter.
pub fn context_score(context: Option<&PlantContext>) -> u32 {
    let Some(ctx) = context else {
        return CONTEXT_BASELINE;
    };

    let mut score = CONTEXT_BASELINE;
    if ctx.species.is_some() {
        score += SPECIES_WEIGHT;
    }
    if ctx.category.is_some() {
        score += CATEGORY_WEIGHT;
    }
    if ctx.soil_type.is_some() {
        score += SOIL_TYPE_WEIGHT;
    }
    if ctx.location.is_some() {
        score += LOCATION_WEIGHT;
    }
    if ctx.sunlight.is_some() {
        score += SUNLIGHT_WEIGHT;
    }
    if ctx.city.is_some() {
        score += CITY_WEIGHT;
    }
    if ctx.climate_zone.is_some() {
        score += CLIMATE_ZONE_WEIGHT;
    }
    score.min(CONTEXT_CAP)
}

/// Accuracy/trust score for a diagnosis, in [15, 100].
///
/// Blends the context score with the model confidence, caps the result when
/// the model flagged a species mismatch, and clamps to the displayable range.
/// Never fails: every input is defaultable.
pub fn accuracy_score(context: Option<&PlantContext>, signals: &DiagnosisSignals) -> u8 {
    let ctx = context_score(context) as f64;
    let confidence = signals.confidence.unwrap_or(DEFAULT_CONFIDENCE);

    let blended = (ctx * CONTEXT_BLEND + confidence * CONFIDENCE_BLEND).round() as i64;

    let capped = if signals.plant_mismatch {
        tracing::debug!(blended, "Species mismatch flagged, capping accuracy score");
        blended.min(MISMATCH_CAP)
    } else {
        blended
    };

    capped.clamp(SCORE_FLOOR, SCORE_CEILING) as u8
}
