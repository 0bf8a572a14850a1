// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Fusion Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Empirical total fusion cross sections per reaction channel.
//!
//! References:
//! - H.-S. Bosch and G.M. Hale, Nucl. Fusion 32, 611 (1992)
//! - W.M. Nevins and R. Swain, Nucl. Fusion 40, 865 (2000)
//!
//! Both fits take the kinetic energy in the center-of-mass frame (J) and
//! return the total cross section (m^2). Outside each fit's validated
//! energy range the expression is still evaluated as-is; a negative input
//! (round-off tail of the kinematics) reaches the square roots unclamped
//! and the resulting NaN makes every probability comparison false.

use fusion_types::constants::{
    ALPHA_FINE, C_LIGHT, JOULE_TO_KEV, M_BORON11, M_DEUTERIUM, M_PROTON, M_TRITIUM,
};
use fusion_types::error::{FusionError, FusionResult};
use ndarray::Array1;
use std::f64::consts::PI;

#[inline]
fn sq(x: f64) -> f64 {
    x * x
}

/// Reduced mass of the deuterium/tritium pair (kg).
const REDUCED_MASS_DT: f64 = M_DEUTERIUM / (1.0 + M_DEUTERIUM / M_TRITIUM);

/// Reduced mass of the proton/boron-11 pair (kg).
const REDUCED_MASS_PB: f64 = M_BORON11 / (1.0 + M_BORON11 / M_PROTON);

const MILLIBARN_TO_SQM: f64 = 1.0e-31;
const BARN_TO_SQM: f64 = 1.0e-28;

/// Supported fusion reaction channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    DeuteriumTritium,
    ProtonBoron,
}

impl ReactionType {
    /// Parse a configuration reaction name.
    pub fn from_name(name: &str) -> FusionResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "deuterium_tritium" | "dt" | "d-t" => Ok(ReactionType::DeuteriumTritium),
            "proton_boron" | "pb" | "p-b11" | "pb11" => Ok(ReactionType::ProtonBoron),
            other => Err(FusionError::ConfigError(format!(
                "unknown reaction channel '{other}'"
            ))),
        }
    }

    /// Rest masses of the two reactants (kg).
    pub fn reactant_masses(self) -> (f64, f64) {
        match self {
            ReactionType::DeuteriumTritium => (M_DEUTERIUM, M_TRITIUM),
            ReactionType::ProtonBoron => (M_PROTON, M_BORON11),
        }
    }

    /// Reduced mass of the reactant pair (kg).
    pub fn reduced_mass(self) -> f64 {
        match self {
            ReactionType::DeuteriumTritium => REDUCED_MASS_DT,
            ReactionType::ProtonBoron => REDUCED_MASS_PB,
        }
    }

    /// Total fusion cross section (m^2) at the given center-of-mass
    /// kinetic energy (J).
    pub fn cross_section(self, e_kin_star_j: f64) -> f64 {
        match self {
            ReactionType::DeuteriumTritium => deuterium_tritium(e_kin_star_j),
            ReactionType::ProtonBoron => proton_boron(e_kin_star_j),
        }
    }
}

/// Total D-T fusion cross section, Bosch-Hale rational S-factor fit
/// (Eqs. 8-9 and Table IV of the 1992 paper). Validated for
/// 0.5 keV < E < 550 keV.
fn deuterium_tritium(e_kin_star_j: f64) -> f64 {
    let e_kev = e_kin_star_j * JOULE_TO_KEV;

    // Exact zero short-circuits the 1/E and 1/sqrt(E) terms below.
    if e_kev == 0.0 {
        return 0.0;
    }

    // Gamow constant in keV^(1/2), Z1 Z2 = 1 for D-T (Eq. 3).
    let b_g = PI * ALPHA_FINE * (2.0 * REDUCED_MASS_DT * C_LIGHT * C_LIGHT * JOULE_TO_KEV).sqrt();

    const A1: f64 = 6.927e4;
    const A2: f64 = 7.454e8;
    const A3: f64 = 2.050e6;
    const A4: f64 = 5.2002e4;
    const B1: f64 = 6.38e1;
    const B2: f64 = -9.95e-1;
    const B3: f64 = 6.981e-5;
    const B4: f64 = 1.728e-4;

    // Astrophysical S-factor in keV millibarn.
    let s_factor = (A1 + e_kev * (A2 + e_kev * (A3 + e_kev * A4)))
        / (1.0 + e_kev * (B1 + e_kev * (B2 + e_kev * (B3 + e_kev * B4))));

    MILLIBARN_TO_SQM * s_factor / e_kev * (-b_g / e_kev.sqrt()).exp()
}

/// S-factor boundary value between the mid-range polynomial and the
/// high-energy tail (MeV barn).
const PB_S_AT_TAIL_BOUNDARY: f64 = 239.94;
/// High-energy S-factor plateau (MeV barn).
const PB_S_TAIL_FLOOR: f64 = 40.0;
/// Decay scale of the high-energy tail (keV).
const PB_S_TAIL_DECAY_KEV: f64 = 700.0;

/// Total p-B11 fusion cross section, Nevins-Swain S-factor fit. The
/// low-energy region carries the 148 keV resonance; above the last fitted
/// region boundary the S-factor continues as a smooth exponential decay
/// toward the high-energy plateau. (Note the sign of the Gamow exponential:
/// sigma = S(E)/E * exp(-sqrt(E_G/E)).)
fn proton_boron(e_kin_star_j: f64) -> f64 {
    let e_kev = e_kin_star_j * JOULE_TO_KEV;

    if e_kev == 0.0 {
        return 0.0;
    }

    // Gamow energy in keV: E_G = 2 m_r c^2 (pi alpha Z1 Z2)^2, ~22.59 MeV.
    const Z_BORON: f64 = 5.0;
    let e_gamow_kev =
        2.0 * REDUCED_MASS_PB * C_LIGHT * C_LIGHT * JOULE_TO_KEV * sq(PI * ALPHA_FINE * Z_BORON);

    const E_LIM1_KEV: f64 = 400.0;
    const E_LIM2_KEV: f64 = 642.0;

    // Astrophysical S-factor in MeV barn.
    let s_factor = if e_kev < E_LIM1_KEV {
        const C0: f64 = 197.0;
        const C1: f64 = 0.24;
        const C2: f64 = 2.31e-4;
        const A_L: f64 = 1.82e4;
        const E_L_KEV: f64 = 148.0;
        const DE_L_SQ: f64 = 2.35 * 2.35;
        C0 + C1 * e_kev + C2 * sq(e_kev) + A_L / (sq(e_kev - E_L_KEV) + DE_L_SQ)
    } else if e_kev < E_LIM2_KEV {
        const D0: f64 = 330.0;
        const D1: f64 = 66.1;
        const D2: f64 = -20.3;
        const D5: f64 = -1.58;
        let x = (e_kev - E_LIM1_KEV) * 1.0e-2;
        D0 + D1 * x + D2 * sq(x) + D5 * sq(x) * sq(x) * x
    } else {
        PB_S_TAIL_FLOOR
            + (PB_S_AT_TAIL_BOUNDARY - PB_S_TAIL_FLOOR)
                * (-(e_kev - E_LIM2_KEV) / PB_S_TAIL_DECAY_KEV).exp()
    };

    let e_mev = e_kev * 1.0e-3;
    BARN_TO_SQM * s_factor / e_mev * (-(e_gamow_kev / e_kev).sqrt()).exp()
}

/// Cross sections over an energy grid (J), for table-driven consumers.
pub fn tabulate(reaction: ReactionType, energies_j: &Array1<f64>) -> Array1<f64> {
    energies_j.mapv(|e| reaction.cross_section(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_types::constants::KEV_TO_JOULE;

    #[test]
    fn test_zero_energy_is_exactly_zero() {
        assert_eq!(ReactionType::DeuteriumTritium.cross_section(0.0), 0.0);
        assert_eq!(ReactionType::ProtonBoron.cross_section(0.0), 0.0);
    }

    #[test]
    fn test_dt_peak_region_magnitude() {
        // Bosch-Hale near the resonance peak: about 5 barn at 64 keV.
        let sigma = ReactionType::DeuteriumTritium.cross_section(64.0 * KEV_TO_JOULE);
        assert!(
            sigma > 4.8e-28 && sigma < 5.3e-28,
            "D-T cross section at 64 keV out of band: {sigma}"
        );
    }

    #[test]
    fn test_dt_rises_below_peak() {
        let dt = ReactionType::DeuteriumTritium;
        let mut prev = dt.cross_section(5.0 * KEV_TO_JOULE);
        for e_kev in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0] {
            let sigma = dt.cross_section(e_kev * KEV_TO_JOULE);
            assert!(sigma > prev, "expected rise toward the peak at {e_kev} keV");
            prev = sigma;
        }
    }

    #[test]
    fn test_pb_resonance_magnitude() {
        // 148 keV resonance: about 0.1 barn.
        let sigma = ReactionType::ProtonBoron.cross_section(148.0 * KEV_TO_JOULE);
        assert!(
            sigma > 0.8e-29 && sigma < 1.3e-29,
            "p-B11 cross section at 148 keV out of band: {sigma}"
        );
    }

    #[test]
    fn test_pb_main_peak_magnitude() {
        // About 1.2 barn near 600 keV.
        let sigma = ReactionType::ProtonBoron.cross_section(600.0 * KEV_TO_JOULE);
        assert!(
            sigma > 1.0e-28 && sigma < 1.4e-28,
            "p-B11 cross section at 600 keV out of band: {sigma}"
        );
    }

    #[test]
    fn test_pb_fit_regions_join_continuously() {
        let pb = ReactionType::ProtonBoron;
        for boundary_kev in [400.0, 642.0] {
            let below = pb.cross_section((boundary_kev - 1e-6) * KEV_TO_JOULE);
            let above = pb.cross_section((boundary_kev + 1e-6) * KEV_TO_JOULE);
            let jump = (above - below).abs() / below;
            assert!(
                jump < 5e-3,
                "S-factor regions disagree at {boundary_kev} keV: {below} vs {above}"
            );
        }
    }

    #[test]
    fn test_positive_over_validated_range() {
        for reaction in [ReactionType::DeuteriumTritium, ReactionType::ProtonBoron] {
            for i in 1..=300 {
                let e_kev = i as f64 * 10.0;
                let sigma = reaction.cross_section(e_kev * KEV_TO_JOULE);
                assert!(
                    sigma > 0.0 && sigma.is_finite(),
                    "{reaction:?} cross section not positive at {e_kev} keV: {sigma}"
                );
            }
        }
    }

    #[test]
    fn test_negative_energy_tail_yields_nan_not_panic() {
        // Round-off can push the COM kinetic energy slightly negative near
        // threshold. The fits evaluate sqrt of a negative number; the NaN
        // compares false against any draw, so no event can fire. Kept as-is
        // rather than clamped.
        for reaction in [ReactionType::DeuteriumTritium, ReactionType::ProtonBoron] {
            let sigma = reaction.cross_section(-1.0e-22);
            assert!(sigma.is_nan(), "{reaction:?} should pass the tail through");
        }
    }

    #[test]
    fn test_tabulate_matches_pointwise() {
        let energies = Array1::linspace(1.0, 500.0, 64).mapv(|e| e * KEV_TO_JOULE);
        let table = tabulate(ReactionType::DeuteriumTritium, &energies);
        assert_eq!(table.len(), 64);
        for (e, sigma) in energies.iter().zip(table.iter()) {
            assert_eq!(*sigma, ReactionType::DeuteriumTritium.cross_section(*e));
        }
    }

    #[test]
    fn test_reaction_names_parse() {
        assert_eq!(
            ReactionType::from_name("deuterium_tritium").unwrap(),
            ReactionType::DeuteriumTritium
        );
        assert_eq!(
            ReactionType::from_name(" DT ").unwrap(),
            ReactionType::DeuteriumTritium
        );
        assert_eq!(
            ReactionType::from_name("proton_boron").unwrap(),
            ReactionType::ProtonBoron
        );
        assert!(ReactionType::from_name("muon_catalyzed").is_err());
    }

    #[test]
    fn test_reduced_masses() {
        let (m1, m2) = ReactionType::DeuteriumTritium.reactant_masses();
        let mu = m1 * m2 / (m1 + m2);
        let rel = (ReactionType::DeuteriumTritium.reduced_mass() - mu).abs() / mu;
        assert!(rel < 1e-14);
        assert!(ReactionType::ProtonBoron.reduced_mass() < M_PROTON);
    }
}
