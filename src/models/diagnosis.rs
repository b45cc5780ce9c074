// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Inputs to diagnosis accuracy scoring.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Context the system had about a plant when requesting a diagnosis.
///
/// Only presence matters for scoring; the values themselves go into the AI
/// prompt, not into the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantContext {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sunlight: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub climate_zone: Option<String>,
}

/// Signals extracted from an AI diagnosis response that feed the accuracy
/// score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosisSignals {
    /// Model-reported confidence in [0, 100], if it supplied one
    pub confidence: Option<f64>,
    /// Whether the detected plant appears to be a different species than the
    /// one on record
    pub plant_mismatch: bool,
}

impl DiagnosisSignals {
    /// Extract scoring signals from a raw AI response value.
    ///
    /// The providers are inconsistent about field presence and casing, so
    /// extraction is lenient: a missing confidence stays `None` (the scorer
    /// substitutes its default) and a missing mismatch flag reads as false.
    /// Only a response that is not a JSON object at all is an error.
    pub fn from_ai_response(value: &serde_json::Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            AppError::AiResponse("diagnosis response is not a JSON object".to_string())
        })?;

        let confidence = obj.get("confidence").and_then(|v| {
            v.as_f64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        });

        let plant_mismatch = obj
            .get("plantMismatch")
            .or_else(|| obj.get("plant_mismatch"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok(Self {
            confidence,
            plant_mismatch,
        })
    }
}
