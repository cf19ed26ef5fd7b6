//! Physical constants and unit conversions used by the mode derivations.
//!
//! Values follow the 2019 SI redefinition (CODATA 2018); the Planck and
//! Boltzmann constants and the electronvolt are exact by definition.

/// Reduced Planck constant ħ in eV·s.
pub const H_BAR_EV_S: f64 = 6.582_119_569e-16;

/// Boltzmann constant in eV/K.
pub const KB_EV_PER_K: f64 = 8.617_333_262e-5;

/// One unified atomic mass unit in kg.
pub const AMU_TO_KG: f64 = 1.660_539_066_60e-27;

/// Square angstroms to square meters.
pub const ANGSTROM_SQ_TO_M_SQ: f64 = 1e-20;

/// One electronvolt in joules.
pub const EV_TO_J: f64 = 1.602_176_634e-19;
