use crate::core::utils::elements::atomic_mass;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// This struct carries the minimal information required for statistical
/// thermodynamics: the element identity, the nuclear mass, and the position
/// in the molecular frame. It is designed as a plain value type; structures
/// built from atoms are read-only once assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g., "H", "O").
    pub element: String,
    /// The atomic mass in amu.
    pub mass: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with an explicit mass.
    pub fn new(element: &str, mass: f64, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            mass,
            position,
        }
    }

    /// Creates a new `Atom` using the standard atomic weight for `symbol`.
    ///
    /// Returns `None` if the element symbol is not in the mass table.
    pub fn from_symbol(symbol: &str, position: Point3<f64>) -> Option<Self> {
        atomic_mass(symbol).map(|mass| Self::new(symbol.trim(), mass, position))
    }
}
