//! Batch drivers over candidate-pair lists.
//!
//! Every pair owns one mask slot and one weight slot, so evaluations are
//! independent and the parallel driver needs no synchronization. Each pair
//! gets its own counter-derived random stream; given the same base seed the
//! parallel and sequential drivers produce identical output.

use crate::cross_section::ReactionType;
use crate::event::{evaluate_pair, FusionEvent};
use crate::kinematics::ParticlePair;
use fusion_types::config::ProbabilityParameters;
use fusion_types::error::{FusionError, FusionResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// splitmix64 finalizer; decorrelates consecutive pair indices into
/// well-separated seeds.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Independent random stream for one pair slot.
fn pair_stream(base_seed: u64, pair_index: usize) -> StdRng {
    StdRng::seed_from_u64(splitmix64(base_seed ^ splitmix64(pair_index as u64)))
}

fn check_slots(n_pairs: usize, n_masks: usize, n_weights: usize) -> FusionResult<()> {
    if n_masks != n_pairs || n_weights != n_pairs {
        return Err(FusionError::PhysicsViolation(format!(
            "output slot count mismatch: {n_pairs} pairs, {n_masks} masks, {n_weights} weights"
        )));
    }
    Ok(())
}

#[inline]
fn write_slots(event: &FusionEvent, mask: &mut bool, weight: &mut f64) {
    *mask = event.occurred;
    if event.occurred {
        *weight = event.product_weight;
    }
}

/// Evaluate a pair list sequentially.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_pairs(
    pairs: &[ParticlePair],
    reaction: ReactionType,
    params: &ProbabilityParameters,
    dt_s: f64,
    cell_volume_m3: f64,
    base_seed: u64,
    masks: &mut [bool],
    reaction_weights: &mut [f64],
) -> FusionResult<()> {
    check_slots(pairs.len(), masks.len(), reaction_weights.len())?;
    for (i, ((pair, mask), weight)) in pairs
        .iter()
        .zip(masks.iter_mut())
        .zip(reaction_weights.iter_mut())
        .enumerate()
    {
        let mut rng = pair_stream(base_seed, i);
        let event = evaluate_pair(pair, reaction, params, dt_s, cell_volume_m3, &mut rng);
        write_slots(&event, mask, weight);
    }
    Ok(())
}

/// Evaluate a pair list on the rayon thread pool. Bit-identical to
/// `evaluate_pairs` for the same base seed.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_pairs_parallel(
    pairs: &[ParticlePair],
    reaction: ReactionType,
    params: &ProbabilityParameters,
    dt_s: f64,
    cell_volume_m3: f64,
    base_seed: u64,
    masks: &mut [bool],
    reaction_weights: &mut [f64],
) -> FusionResult<()> {
    check_slots(pairs.len(), masks.len(), reaction_weights.len())?;
    pairs
        .par_iter()
        .zip(masks.par_iter_mut())
        .zip(reaction_weights.par_iter_mut())
        .enumerate()
        .for_each(|(i, ((pair, mask), weight))| {
            let mut rng = pair_stream(base_seed, i);
            let event = evaluate_pair(pair, reaction, params, dt_s, cell_volume_m3, &mut rng);
            write_slots(&event, mask, weight);
        });
    Ok(())
}
