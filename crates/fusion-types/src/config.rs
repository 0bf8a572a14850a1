// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Collision Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{FusionError, FusionResult};
use serde::{Deserialize, Serialize};

/// Variance-reduction parameters of the stochastic fusion sampler.
///
/// `fusion_multiplier` artificially raises the per-pair reaction probability
/// while the product weight drops by the same factor, so the expected yield
/// is unchanged. `multiplier_ratio` corrects for candidate pairs the pairing
/// layer never sampled. The threshold/target pair drives the adaptive
/// multiplier reduction once the linear probability estimate stops being
/// trustworthy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbabilityParameters {
    /// User-chosen variance-reduction factor (>= 1).
    #[serde(default = "default_fusion_multiplier")]
    pub fusion_multiplier: f64,
    /// Unsampled-pair correction factor (>= 1).
    #[serde(default = "default_multiplier_ratio")]
    pub multiplier_ratio: f64,
    /// Probability above which the multiplier is reduced (in (0,1)).
    #[serde(default = "default_probability_threshold")]
    pub probability_threshold: f64,
    /// Probability aimed for after reduction (in (0, threshold]).
    #[serde(default = "default_probability_target_value")]
    pub probability_target_value: f64,
}

fn default_fusion_multiplier() -> f64 {
    1.0
}
fn default_multiplier_ratio() -> f64 {
    1.0
}
fn default_probability_threshold() -> f64 {
    0.02
}
fn default_probability_target_value() -> f64 {
    0.01
}

impl Default for ProbabilityParameters {
    fn default() -> Self {
        ProbabilityParameters {
            fusion_multiplier: default_fusion_multiplier(),
            multiplier_ratio: default_multiplier_ratio(),
            probability_threshold: default_probability_threshold(),
            probability_target_value: default_probability_target_value(),
        }
    }
}

impl ProbabilityParameters {
    /// Check the parameter invariants. The per-pair evaluation itself never
    /// re-validates; this runs once at the configuration boundary.
    pub fn validate(&self) -> FusionResult<()> {
        if !self.fusion_multiplier.is_finite() || self.fusion_multiplier < 1.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "fusion_multiplier must be finite and >= 1, got {}",
                self.fusion_multiplier
            )));
        }
        if !self.multiplier_ratio.is_finite() || self.multiplier_ratio < 1.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "multiplier_ratio must be finite and >= 1, got {}",
                self.multiplier_ratio
            )));
        }
        if !self.probability_threshold.is_finite()
            || self.probability_threshold <= 0.0
            || self.probability_threshold >= 1.0
        {
            return Err(FusionError::PhysicsViolation(format!(
                "probability_threshold must lie in (0, 1), got {}",
                self.probability_threshold
            )));
        }
        if !self.probability_target_value.is_finite()
            || self.probability_target_value <= 0.0
            || self.probability_target_value > self.probability_threshold
        {
            return Err(FusionError::PhysicsViolation(format!(
                "probability_target_value must lie in (0, {}], got {}",
                self.probability_threshold, self.probability_target_value
            )));
        }
        Ok(())
    }
}

/// Top-level configuration for one binary-collision fusion channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Reaction channel name, e.g. "deuterium_tritium" or "proton_boron".
    pub reaction: String,
    /// Collision timestep (s).
    pub timestep_s: f64,
    /// Cell volume the pair densities refer to (m^3).
    pub cell_volume_m3: f64,
    /// Base seed for the per-pair random streams.
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub probability: ProbabilityParameters,
}

impl CollisionConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> FusionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> FusionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FusionResult<()> {
        if self.reaction.trim().is_empty() {
            return Err(FusionError::ConfigError(
                "reaction name must be non-empty".to_string(),
            ));
        }
        if !self.timestep_s.is_finite() || self.timestep_s <= 0.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "timestep_s must be finite and > 0, got {}",
                self.timestep_s
            )));
        }
        if !self.cell_volume_m3.is_finite() || self.cell_volume_m3 <= 0.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "cell_volume_m3 must be finite and > 0, got {}",
                self.cell_volume_m3
            )));
        }
        self.probability.validate()
    }
}
