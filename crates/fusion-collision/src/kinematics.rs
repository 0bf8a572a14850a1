// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Relativistic Pair Kinematics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lab-frame to center-of-mass transform for one colliding pair.
//!
//! All quantities derive from the Lorentz invariance of the four-momentum
//! norm; nothing here depends on the reaction channel.

use bytemuck::{Pod, Zeroable};
use fusion_types::constants::C_LIGHT;

#[inline]
fn sq(x: f64) -> f64 {
    x * x
}

/// Simulation macro-particle entering a binary collision.
///
/// `u` is momentum per unit mass (gamma times velocity, m/s), the native
/// momentum variable of the particle pusher. `weight` is the number of real
/// particles this macro-particle stands for.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Macroparticle {
    pub u: [f64; 3],
    pub mass_kg: f64,
    pub weight: f64,
}

impl Macroparticle {
    /// Lab-frame Lorentz factor, sqrt(1 + |u|^2/c^2).
    pub fn lorentz_factor(&self) -> f64 {
        let u_sq = sq(self.u[0]) + sq(self.u[1]) + sq(self.u[2]);
        (1.0 + u_sq / (C_LIGHT * C_LIGHT)).sqrt()
    }

    /// Lab-frame momentum components (kg m/s).
    pub fn momentum(&self) -> [f64; 3] {
        [
            self.u[0] * self.mass_kg,
            self.u[1] * self.mass_kg,
            self.u[2] * self.mass_kg,
        ]
    }
}

/// One candidate colliding pair.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticlePair {
    pub first: Macroparticle,
    pub second: Macroparticle,
}

impl ParticlePair {
    pub fn new(first: Macroparticle, second: Macroparticle) -> Self {
        ParticlePair { first, second }
    }

    /// Smaller of the two statistical weights.
    pub fn w_min(&self) -> f64 {
        self.first.weight.min(self.second.weight)
    }

    /// Larger of the two statistical weights.
    pub fn w_max(&self) -> f64 {
        self.first.weight.max(self.second.weight)
    }

    /// Zero-total-momentum pair along z with the requested center-of-mass
    /// kinetic energy (J). The momentum follows from inverting
    /// E* = sqrt(p^2 c^2 + m1^2 c^4) + sqrt(p^2 c^2 + m2^2 c^4).
    pub fn counter_propagating(
        m1_kg: f64,
        m2_kg: f64,
        e_kin_star_j: f64,
        w1: f64,
        w2: f64,
    ) -> Self {
        let c = C_LIGHT;
        let c_sq = c * c;
        let e_star = e_kin_star_j + (m1_kg + m2_kg) * c_sq;
        let m_sum = (m1_kg + m2_kg) * c_sq;
        let m_diff = (m1_kg - m2_kg) * c_sq;
        let p_star =
            ((sq(e_star) - sq(m_sum)) * (sq(e_star) - sq(m_diff))).sqrt() / (2.0 * e_star * c);
        ParticlePair {
            first: Macroparticle {
                u: [0.0, 0.0, p_star / m1_kg],
                mass_kg: m1_kg,
                weight: w1,
            },
            second: Macroparticle {
                u: [0.0, 0.0, -p_star / m2_kg],
                mass_kg: m2_kg,
                weight: w2,
            },
        }
    }
}

/// Center-of-mass invariants of one pair.
///
/// `e_kin_star_j` is deliberately not clamped at zero: a slightly negative
/// value from round-off at very low relative energy propagates downstream
/// unchanged (the cross-section fits turn it into a non-event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComKinematics {
    /// Lab-frame Lorentz factors.
    pub gamma1: f64,
    pub gamma2: f64,
    /// Kinetic energy in the center-of-mass frame (J).
    pub e_kin_star_j: f64,
    /// Squared momentum of either particle in the center-of-mass frame.
    pub p_star_sq: f64,
    /// Center-of-mass Lorentz factors.
    pub gamma1_star: f64,
    pub gamma2_star: f64,
    /// Relative velocity in the center-of-mass frame (m/s).
    pub v_rel_m_s: f64,
    /// Converts a center-of-mass rate into a lab-frame density-weighted
    /// probability (Perez et al., Phys. Plasmas 19, 083104 (2012)).
    pub lab_to_com_factor: f64,
}

impl ComKinematics {
    pub fn from_pair(pair: &ParticlePair) -> Self {
        let c_sq = C_LIGHT * C_LIGHT;
        let m1 = pair.first.mass_kg;
        let m2 = pair.second.mass_kg;

        let gamma1 = pair.first.lorentz_factor();
        let gamma2 = pair.second.lorentz_factor();

        let p1 = pair.first.momentum();
        let p2 = pair.second.momentum();
        let p_total_sq = sq(p1[0] + p2[0]) + sq(p1[1] + p2[1]) + sq(p1[2] + p2[2]);

        // Total energy in the lab frame, then the invariant four-momentum
        // norm gives the squared total energy in the center-of-mass frame.
        let e_lab = (m1 * gamma1 + m2 * gamma2) * c_sq;
        let e_star_sq = e_lab * e_lab - c_sq * p_total_sq;

        let e_star = e_star_sq.sqrt();
        let e_kin_star_j = e_star - (m1 + m2) * c_sq;

        // Momentum of one particle in the center-of-mass frame, from
        // inverting E^2 = p^2 c^2 + m^2 c^4 for each particle. This form
        // avoids returning small negative values from cancellation at low
        // relative energy; the naive difference form does not.
        let e_ratio = e_star / ((m1 + m2) * c_sq);
        let p_star_sq = m1 * m2 * c_sq * (sq(e_ratio) - 1.0)
            + sq(m1 - m2) * c_sq * 0.25 * sq(e_ratio - 1.0 / e_ratio);

        let gamma1_star = (1.0 + p_star_sq / (m1 * m1 * c_sq)).sqrt();
        let gamma2_star = (1.0 + p_star_sq / (m2 * m2 * c_sq)).sqrt();

        let v_rel_m_s =
            p_star_sq.sqrt() * (1.0 / (m1 * gamma1_star) + 1.0 / (m2 * gamma2_star));

        let lab_to_com_factor = gamma1_star * gamma2_star / (gamma1 * gamma2);

        ComKinematics {
            gamma1,
            gamma2,
            e_kin_star_j,
            p_star_sq,
            gamma1_star,
            gamma2_star,
            v_rel_m_s,
            lab_to_com_factor,
        }
    }
}
