use super::ThermoMode;
use super::diagnostics::{Diagnostic, DiagnosticReporter};
use super::error::RotModeError;
use crate::core::constants::{AMU_TO_KG, ANGSTROM_SQ_TO_M_SQ, EV_TO_J, H_BAR_EV_S, KB_EV_PER_K};
use crate::core::models::molecule::AtomicStructure;
use crate::core::utils::numeric::{DEFAULT_RTOL, is_close, is_close_default};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{instrument, warn};

/// Default tolerance for the collinearity test, in degrees.
///
/// Equilibrium geometries carry optimization noise, so angles are compared
/// against 0° and 180° within this band rather than exactly.
pub const DEFAULT_ANGLE_TOLERANCE_DEGREES: f64 = 5.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Geometry '{0}' is not supported")]
pub struct ParseGeometryError(pub String);

/// Geometry class of a molecule for rotational-mode purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// A single atom; no rotational degrees of freedom.
    Monatomic,
    /// All atoms collinear; two degenerate rotational axes.
    Linear,
    /// Everything else; up to three distinct rotational axes.
    Nonlinear,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Geometry::Monatomic => "monatomic",
            Geometry::Linear => "linear",
            Geometry::Nonlinear => "nonlinear",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Geometry {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monatomic" => Ok(Geometry::Monatomic),
            "linear" => Ok(Geometry::Linear),
            "nonlinear" => Ok(Geometry::Nonlinear),
            _ => Err(ParseGeometryError(s.to_string())),
        }
    }
}

/// Infers the geometry class of a structure from its interior angles.
///
/// One atom is monatomic and two are linear by definition. Larger structures
/// are scanned over every unordered index triple; the first interior angle
/// not within `angle_tolerance_degrees` of 0° or 180° classifies the
/// structure as nonlinear. A structure with no disqualifying angle is linear.
///
/// O(n³) in atom count, which is acceptable for the small molecules this
/// classifies.
pub fn classify_geometry<S: AtomicStructure + ?Sized>(
    structure: &S,
    angle_tolerance_degrees: f64,
) -> Geometry {
    match structure.atom_count() {
        1 => Geometry::Monatomic,
        2 => Geometry::Linear,
        n => {
            for i in 0..n {
                for j in (i + 1)..n {
                    for k in (j + 1)..n {
                        let angle = structure.angle_degrees(i, j, k);
                        if !is_close(angle, 0.0, DEFAULT_RTOL, angle_tolerance_degrees)
                            && !is_close(angle, 180.0, DEFAULT_RTOL, angle_tolerance_degrees)
                        {
                            return Geometry::Nonlinear;
                        }
                    }
                }
            }
            Geometry::Linear
        }
    }
}

/// Derives the characteristic rotational temperatures of a structure, in
/// kelvin.
///
/// Principal moments numerically indistinguishable from zero correspond to
/// non-rotational axes and are dropped before conversion; each retained
/// moment is converted to SI units and mapped through Θ = ħ² / (2·k_B·I).
/// The result is post-processed by geometry class:
///
/// - `Monatomic`: every moment must be ≈0; returns `[0.0]`.
/// - `Linear`: the two retained values are expected to be degenerate. If they
///   are not, a [`Diagnostic::DegenerateAxesDiverged`] event is reported and
///   the larger value is used. Returns a one-element list.
/// - `Nonlinear`: returns all retained values in order, unaveraged.
///
/// # Errors
///
/// [`RotModeError::MonatomicWithRotation`] if a monatomic structure retained
/// a nonzero moment, and [`RotModeError::NoRotationalAxes`] if a rotating
/// geometry retained none.
#[instrument(level = "trace", skip_all, fields(geometry = %geometry))]
pub fn rotational_temperatures<S: AtomicStructure + ?Sized>(
    structure: &S,
    geometry: Geometry,
    reporter: &DiagnosticReporter,
) -> Result<Vec<f64>, RotModeError> {
    let mut temperatures = Vec::with_capacity(3);
    for moment in structure.moments_of_inertia() {
        if is_close_default(0.0, moment) {
            continue;
        }
        let moment_si = moment * AMU_TO_KG * ANGSTROM_SQ_TO_M_SQ;
        temperatures.push(H_BAR_EV_S.powi(2) / (2.0 * KB_EV_PER_K * moment_si) * EV_TO_J);
    }

    match geometry {
        Geometry::Monatomic => {
            let total: f64 = temperatures.iter().sum();
            if !is_close_default(total, 0.0) {
                return Err(RotModeError::MonatomicWithRotation {
                    rot_temperatures: temperatures,
                });
            }
            Ok(vec![0.0])
        }
        Geometry::Linear => {
            if temperatures.is_empty() {
                return Err(RotModeError::NoRotationalAxes { geometry });
            }
            let degenerate_pair =
                temperatures.len() == 2 && is_close_default(temperatures[0], temperatures[1]);
            if !degenerate_pair {
                warn!(
                    rot_temperatures = ?temperatures,
                    "expected two nearly equal rotational temperatures for a linear structure"
                );
                reporter.report(Diagnostic::DegenerateAxesDiverged {
                    rot_temperatures: temperatures.clone(),
                });
            }
            let representative = temperatures.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Ok(vec![representative])
        }
        Geometry::Nonlinear => {
            if temperatures.is_empty() {
                return Err(RotModeError::NoRotationalAxes { geometry });
            }
            Ok(temperatures)
        }
    }
}

/// Rotational mode under the rigid-rotor assumption.
///
/// Holds the symmetry number, geometry class, and rotational temperatures of
/// one molecular species. Instances are created once at species setup time,
/// are immutable thereafter, and are queried per temperature for each
/// dimensionless thermodynamic quantity.
///
/// The symmetry number counts the indistinguishable orientations reachable by
/// rigid rotation; it is caller-supplied and can be looked up by point group
/// via [`super::symmetry::symmetry_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidRotor {
    symmetry_number: u32,
    geometry: Geometry,
    rot_temperatures: Vec<f64>,
}

impl RigidRotor {
    /// Creates a rigid rotor from explicit rotational temperatures (kelvin).
    pub fn from_rot_temperatures(
        symmetry_number: u32,
        geometry: Geometry,
        rot_temperatures: Vec<f64>,
    ) -> Self {
        Self {
            symmetry_number,
            geometry,
            rot_temperatures,
        }
    }

    /// Creates a rigid rotor from an atomic structure, inferring the geometry
    /// class and deriving the rotational temperatures at construction time.
    pub fn from_structure<S: AtomicStructure + ?Sized>(
        symmetry_number: u32,
        structure: &S,
        reporter: &DiagnosticReporter,
    ) -> Result<Self, RotModeError> {
        let geometry = classify_geometry(structure, DEFAULT_ANGLE_TOLERANCE_DEGREES);
        Self::from_structure_with_geometry(symmetry_number, structure, geometry, reporter)
    }

    /// Creates a rigid rotor from an atomic structure with an explicitly
    /// supplied geometry class, bypassing classification.
    pub fn from_structure_with_geometry<S: AtomicStructure + ?Sized>(
        symmetry_number: u32,
        structure: &S,
        geometry: Geometry,
        reporter: &DiagnosticReporter,
    ) -> Result<Self, RotModeError> {
        let rot_temperatures = rotational_temperatures(structure, geometry, reporter)?;
        Ok(Self {
            symmetry_number,
            geometry,
            rot_temperatures,
        })
    }

    pub fn symmetry_number(&self) -> u32 {
        self.symmetry_number
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Rotational temperatures in kelvin.
    pub fn rot_temperatures(&self) -> &[f64] {
        &self.rot_temperatures
    }

    #[inline]
    fn rot_temperature_product(&self) -> f64 {
        self.rot_temperatures.iter().product()
    }

    /// Rotational partition function at `temperature` (kelvin).
    pub fn partition_function(&self, temperature: f64) -> f64 {
        let sigma = f64::from(self.symmetry_number);
        match self.geometry {
            Geometry::Monatomic => 0.0,
            Geometry::Linear => temperature / (sigma * self.rot_temperature_product()),
            Geometry::Nonlinear => {
                PI.sqrt() / sigma
                    * (temperature.powi(3) / self.rot_temperature_product()).sqrt()
            }
        }
    }

    /// Dimensionless heat capacity at constant volume, Cv/R.
    pub fn cv_over_r(&self) -> f64 {
        match self.geometry {
            Geometry::Monatomic => 0.0,
            Geometry::Linear => 1.0,
            Geometry::Nonlinear => 1.5,
        }
    }

    /// Dimensionless heat capacity at constant pressure, Cp/R.
    ///
    /// The rotational mode contributes no P·V term, so this equals Cv/R.
    pub fn cp_over_r(&self) -> f64 {
        self.cv_over_r()
    }

    /// Dimensionless internal energy, U/RT.
    pub fn u_over_rt(&self) -> f64 {
        match self.geometry {
            Geometry::Monatomic => 0.0,
            Geometry::Linear => 1.0,
            Geometry::Nonlinear => 1.5,
        }
    }

    /// Dimensionless enthalpy, H/RT.
    ///
    /// Equal to U/RT for this mode; there is no PV correction.
    pub fn h_over_rt(&self) -> f64 {
        self.u_over_rt()
    }

    /// Dimensionless entropy, S/R, at `temperature` (kelvin).
    pub fn s_over_r(&self, temperature: f64) -> f64 {
        match self.geometry {
            Geometry::Monatomic => 0.0,
            Geometry::Linear => self.partition_function(temperature).ln() + 1.0,
            Geometry::Nonlinear => self.partition_function(temperature).ln() + 1.5,
        }
    }

    /// Dimensionless Helmholtz energy, A/RT, at `temperature` (kelvin).
    pub fn a_over_rt(&self, temperature: f64) -> f64 {
        self.u_over_rt() - self.s_over_r(temperature)
    }

    /// Dimensionless Gibbs energy, G/RT, at `temperature` (kelvin).
    pub fn g_over_rt(&self, temperature: f64) -> f64 {
        self.h_over_rt() - self.s_over_r(temperature)
    }
}

impl ThermoMode for RigidRotor {
    fn partition_function(&self, temperature: f64) -> f64 {
        RigidRotor::partition_function(self, temperature)
    }

    fn cv_over_r(&self, _temperature: f64) -> f64 {
        RigidRotor::cv_over_r(self)
    }

    fn cp_over_r(&self, _temperature: f64) -> f64 {
        RigidRotor::cp_over_r(self)
    }

    fn u_over_rt(&self, _temperature: f64) -> f64 {
        RigidRotor::u_over_rt(self)
    }

    fn h_over_rt(&self, _temperature: f64) -> f64 {
        RigidRotor::h_over_rt(self)
    }

    fn s_over_r(&self, temperature: f64) -> f64 {
        RigidRotor::s_over_r(self, temperature)
    }

    fn a_over_rt(&self, temperature: f64) -> f64 {
        RigidRotor::a_over_rt(self, temperature)
    }

    fn g_over_rt(&self, temperature: f64) -> f64 {
        RigidRotor::g_over_rt(self, temperature)
    }
}
