//! # Modes Module
//!
//! This module implements the per-mode statistical-mechanics models that
//! contribute to the total thermodynamic state functions of a molecular
//! species. Each mode is constructed once per species, is immutable
//! thereafter, and is queried repeatedly at different temperatures.
//!
//! ## Architecture
//!
//! - **Rotational Mode** ([`rot`]) - Rigid-rotor model: geometry
//!   classification, rotational-temperature derivation, and the
//!   geometry-dependent closed-form thermodynamic formulas
//! - **Diagnostics** ([`diagnostics`]) - Structured, caller-visible channel
//!   for non-fatal physical inconsistencies found during derivation
//! - **Species Configuration** ([`config`]) - Declarative species definitions
//!   loaded from TOML data files
//! - **Symmetry Data** ([`symmetry`]) - Point-group symmetry number lookup
//! - **Errors** ([`error`]) - Fatal physical-inconsistency errors
//!
//! All query operations are side-effect-free functions of immutable instance
//! state plus the passed-in temperature, so concurrent read-only use requires
//! no synchronization.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod rot;
pub mod symmetry;

/// The dimensionless thermodynamic contract a mode exposes to aggregation
/// layers.
///
/// Every quantity is expressed divided by R (and by RT where applicable), so
/// contributions from different modes can be summed directly. Signatures are
/// uniform in temperature even for quantities a particular mode evaluates as
/// temperature-independent.
pub trait ThermoMode {
    /// Partition function q(T).
    fn partition_function(&self, temperature: f64) -> f64;
    /// Dimensionless heat capacity at constant volume, Cv/R.
    fn cv_over_r(&self, temperature: f64) -> f64;
    /// Dimensionless heat capacity at constant pressure, Cp/R.
    fn cp_over_r(&self, temperature: f64) -> f64;
    /// Dimensionless internal energy, U/RT.
    fn u_over_rt(&self, temperature: f64) -> f64;
    /// Dimensionless enthalpy, H/RT.
    fn h_over_rt(&self, temperature: f64) -> f64;
    /// Dimensionless entropy, S/R.
    fn s_over_r(&self, temperature: f64) -> f64;
    /// Dimensionless Helmholtz energy, A/RT.
    fn a_over_rt(&self, temperature: f64) -> f64;
    /// Dimensionless Gibbs energy, G/RT.
    fn g_over_rt(&self, temperature: f64) -> f64;
}
