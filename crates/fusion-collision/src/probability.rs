// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Fusion Probability Estimator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-pair fusion probability with adaptive variance reduction.

use fusion_types::config::ProbabilityParameters;

/// Switch point between the linear probability and the 1 - exp(-p) form.
///
/// The exponential is exact for a Poisson-rate model but only improves on
/// the linear value once it resolves the p^2/2 term of its Taylor
/// expansion, i.e. once p^2 exceeds the machine epsilon. 5e-8 is the f64
/// value; an f32 build would use 1e-3.
pub const EXP_SWITCH_THRESHOLD: f64 = 5.0e-8;

/// Probability of one pair fusing during the timestep, together with the
/// variance-reduction multiplier actually applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionProbability {
    /// Final reaction probability, in [0, 1].
    pub probability: f64,
    /// Effective multiplier after the adaptive correction, in
    /// [1, fusion_multiplier]. Product weights divide by this value.
    pub effective_multiplier: f64,
}

/// Combine cross section, relative velocity and densities into the per-pair
/// reaction probability.
///
/// The cross section and relative velocity live in the center-of-mass
/// frame while the particle densities (weight over cell volume) are
/// lab-frame quantities; `lab_to_com_factor` reconciles the two.
pub fn fusion_probability(
    cross_section_m2: f64,
    v_rel_m_s: f64,
    lab_to_com_factor: f64,
    w_max: f64,
    dt_s: f64,
    cell_volume_m3: f64,
    params: &ProbabilityParameters,
) -> FusionProbability {
    let mut probability_estimate = params.multiplier_ratio
        * params.fusion_multiplier
        * lab_to_com_factor
        * w_max
        * cross_section_m2
        * v_rel_m_s
        * dt_s
        / cell_volume_m3;

    let mut multiplier_eff = params.fusion_multiplier;

    // Once the estimate leaves the linear regime, a multiplier above one
    // systematically under-counts the fusion yield. Aim the probability back
    // at the target value; the multiplier never drops below one.
    if probability_estimate > params.probability_threshold {
        multiplier_eff = (params.fusion_multiplier * params.probability_target_value
            / probability_estimate)
            .max(1.0);
        probability_estimate *= multiplier_eff / params.fusion_multiplier;
    }

    // 1 - exp(-p) is the exact Poisson form but rounds to 0 for tiny p,
    // where the linear estimate is the more accurate value.
    let probability = if probability_estimate < EXP_SWITCH_THRESHOLD {
        probability_estimate
    } else {
        1.0 - (-probability_estimate).exp()
    };

    FusionProbability {
        probability,
        effective_multiplier: multiplier_eff,
    }
}
