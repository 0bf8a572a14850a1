// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Single Fusion Event
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stochastic evaluation of one candidate colliding pair.

use crate::cross_section::ReactionType;
use crate::kinematics::{ComKinematics, ParticlePair};
use crate::probability::{fusion_probability, FusionProbability};
use fusion_types::config::ProbabilityParameters;
use rand::Rng;

/// Outcome of one pair evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionEvent {
    /// True if the pair fused during this timestep.
    pub occurred: bool,
    /// Statistical weight of the fusion products, min(w1, w2) divided by
    /// the effective multiplier. Zero when no fusion occurred.
    pub product_weight: f64,
    /// The probability the draw was compared against.
    pub probability: f64,
    /// Variance-reduction multiplier actually applied.
    pub effective_multiplier: f64,
}

/// Evaluate one pair. Consumes exactly one uniform draw from `rng`,
/// whether or not the reaction fires.
pub fn evaluate_pair(
    pair: &ParticlePair,
    reaction: ReactionType,
    params: &ProbabilityParameters,
    dt_s: f64,
    cell_volume_m3: f64,
    rng: &mut impl Rng,
) -> FusionEvent {
    let kin = ComKinematics::from_pair(pair);
    let sigma = reaction.cross_section(kin.e_kin_star_j);

    let FusionProbability {
        probability,
        effective_multiplier,
    } = fusion_probability(
        sigma,
        kin.v_rel_m_s,
        kin.lab_to_com_factor,
        pair.w_max(),
        dt_s,
        cell_volume_m3,
        params,
    );

    let draw: f64 = rng.gen();

    // A NaN probability (negative-energy tail of the kinematics) compares
    // false here, so it can never register as a fusion event.
    if draw < probability {
        FusionEvent {
            occurred: true,
            product_weight: pair.w_min() / effective_multiplier,
            probability,
            effective_multiplier,
        }
    } else {
        FusionEvent {
            occurred: false,
            product_weight: 0.0,
            probability,
            effective_multiplier,
        }
    }
}

/// Evaluate one pair and record the outcome through caller-owned output
/// slots at `pair_index`. The weight slot is written only when fusion
/// occurred; behind a false mask its previous content is preserved and
/// must not be read.
#[allow(clippy::too_many_arguments)]
pub fn single_fusion_event(
    pair: &ParticlePair,
    reaction: ReactionType,
    params: &ProbabilityParameters,
    dt_s: f64,
    cell_volume_m3: f64,
    pair_index: usize,
    masks: &mut [bool],
    reaction_weights: &mut [f64],
    rng: &mut impl Rng,
) {
    let event = evaluate_pair(pair, reaction, params, dt_s, cell_volume_m3, rng);
    masks[pair_index] = event.occurred;
    if event.occurred {
        reaction_weights[pair_index] = event.product_weight;
    }
}
