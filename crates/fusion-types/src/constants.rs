// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants (CODATA 2018, SI units) and reactant rest masses.

/// Speed of light in vacuum (m/s).
pub const C_LIGHT: f64 = 299_792_458.0;

/// Elementary charge (C).
pub const Q_E: f64 = 1.602_176_634e-19;

/// Unified atomic mass unit (kg).
pub const M_U: f64 = 1.660_539_066_60e-27;

/// Proton mass (kg).
pub const M_PROTON: f64 = 1.672_621_923_69e-27;

/// Fine-structure constant.
pub const ALPHA_FINE: f64 = 7.297_352_5693e-3;

/// Vacuum permittivity (F/m).
pub const EPSILON_0: f64 = 8.854_187_8128e-12;

/// Reduced Planck constant (J s).
pub const HBAR: f64 = 1.054_571_817e-34;

/// Deuterium rest mass (kg), 2.01410177812 u (atomic mass).
pub const M_DEUTERIUM: f64 = 2.014_101_778_12 * M_U;

/// Tritium rest mass (kg), 3.0160492779 u (atomic mass).
pub const M_TRITIUM: f64 = 3.016_049_277_9 * M_U;

/// Boron-11 rest mass (kg), 11.00930536 u (atomic mass).
pub const M_BORON11: f64 = 11.009_305_36 * M_U;

/// Joule → keV conversion.
pub const JOULE_TO_KEV: f64 = 1.0e-3 / Q_E;

/// keV → Joule conversion.
pub const KEV_TO_JOULE: f64 = 1.0e3 * Q_E;
