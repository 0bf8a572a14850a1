// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Maxwellian Reactivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Maxwell-averaged reaction rate coefficient <sigma*v>.
//!
//! Integrates the fitted cross sections against the relative-energy
//! Maxwellian on a log-spaced grid:
//!
//!   <sigma v> = sqrt(8/(pi mu)) (kT)^(-3/2) * integral sigma(E) E exp(-E/kT) dE
//!
//! Serves as an independent cross-check of the cross-section fits against
//! published reactivity magnitudes.

use crate::cross_section::ReactionType;
use fusion_types::constants::KEV_TO_JOULE;
use fusion_types::error::{FusionError, FusionResult};
use ndarray::Array1;
use std::f64::consts::PI;

/// Default quadrature resolution.
const DEFAULT_POINTS: usize = 2000;

/// Lower integration bound (keV); the Gamow suppression makes anything
/// below this irrelevant for both channels.
const E_MIN_KEV: f64 = 0.1;

/// Upper integration bound as a multiple of the temperature.
const E_MAX_FACTOR: f64 = 100.0;

/// Reaction rate coefficient (m^3/s) at temperature `t_kev`.
pub fn maxwellian_reactivity(reaction: ReactionType, t_kev: f64) -> FusionResult<f64> {
    maxwellian_reactivity_n(reaction, t_kev, DEFAULT_POINTS)
}

/// Reaction rate coefficient with an explicit quadrature resolution.
pub fn maxwellian_reactivity_n(
    reaction: ReactionType,
    t_kev: f64,
    n_points: usize,
) -> FusionResult<f64> {
    if !t_kev.is_finite() || t_kev <= 0.0 {
        return Err(FusionError::PhysicsViolation(format!(
            "temperature must be finite and > 0 keV, got {t_kev}"
        )));
    }
    if n_points < 2 {
        return Err(FusionError::PhysicsViolation(format!(
            "quadrature needs at least 2 points, got {n_points}"
        )));
    }

    let mu = reaction.reduced_mass();
    let kt_j = t_kev * KEV_TO_JOULE;

    let log_grid = Array1::linspace(
        E_MIN_KEV.log10(),
        (t_kev * E_MAX_FACTOR).log10(),
        n_points,
    );
    let e_j = log_grid.mapv(|x| 10.0_f64.powf(x) * KEV_TO_JOULE);
    let integrand = e_j.mapv(|e| reaction.cross_section(e) * e * (-e / kt_j).exp());

    let mut integral = 0.0;
    for i in 1..n_points {
        integral += 0.5 * (integrand[i] + integrand[i - 1]) * (e_j[i] - e_j[i - 1]);
    }

    Ok((8.0 / (PI * mu)).sqrt() * kt_j.powf(-1.5) * integral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_reactivity_at_10_kev() {
        // Published D-T value at 10 keV is about 1.1e-22 m^3/s.
        let sv = maxwellian_reactivity(ReactionType::DeuteriumTritium, 10.0).unwrap();
        assert!(
            sv > 0.9e-22 && sv < 1.4e-22,
            "D-T <sigma v>(10 keV) out of band: {sv}"
        );
    }

    #[test]
    fn test_dt_reactivity_rises_with_temperature() {
        let dt = ReactionType::DeuteriumTritium;
        let low = maxwellian_reactivity(dt, 5.0).unwrap();
        let mid = maxwellian_reactivity(dt, 10.0).unwrap();
        let high = maxwellian_reactivity(dt, 20.0).unwrap();
        assert!(low < mid && mid < high);
        // Roughly two orders of magnitude between 5 and 20 keV.
        assert!(high / low > 10.0);
    }

    #[test]
    fn test_pb_reactivity_magnitude() {
        // p-B11 burns orders of magnitude slower than D-T at reactor
        // temperatures and only becomes competitive above ~200 keV.
        let pb = ReactionType::ProtonBoron;
        let cold = maxwellian_reactivity(pb, 10.0).unwrap();
        let hot = maxwellian_reactivity(pb, 300.0).unwrap();
        let dt_cold = maxwellian_reactivity(ReactionType::DeuteriumTritium, 10.0).unwrap();
        assert!(cold > 0.0 && cold < dt_cold / 100.0);
        assert!(hot > 1.0e-23 && hot < 1.0e-21, "p-B11 <sigma v>(300 keV): {hot}");
    }

    #[test]
    fn test_quadrature_converges() {
        let coarse =
            maxwellian_reactivity_n(ReactionType::DeuteriumTritium, 10.0, 500).unwrap();
        let fine =
            maxwellian_reactivity_n(ReactionType::DeuteriumTritium, 10.0, 4000).unwrap();
        let rel = (coarse - fine).abs() / fine;
        assert!(rel < 1e-2, "quadrature not converged: {rel}");
    }

    #[test]
    fn test_rejects_invalid_temperature() {
        for bad in [0.0, -5.0, f64::NAN] {
            let err = maxwellian_reactivity(ReactionType::DeuteriumTritium, bad).unwrap_err();
            match err {
                FusionError::PhysicsViolation(msg) => assert!(msg.contains("temperature")),
                other => panic!("Unexpected error: {other:?}"),
            }
        }
        assert!(maxwellian_reactivity_n(ReactionType::DeuteriumTritium, 10.0, 1).is_err());
    }
}
