use super::atom::Atom;
use nalgebra::{Matrix3, Point3, Vector3};
use std::cmp::Ordering;

/// Read-only query contract over a 3D atomic structure.
///
/// This is the boundary the mode models consume: they never mutate or persist
/// the structure, and only ask for the atom count, the principal moments of
/// inertia, and interior angles between atom index triples. Implementing the
/// trait on an existing structure type is enough to drive every derivation in
/// [`crate::modes`].
pub trait AtomicStructure {
    /// Number of atoms in the structure.
    fn atom_count(&self) -> usize;

    /// Principal moments of inertia about the center of mass, in amu·Å²,
    /// sorted ascending.
    fn moments_of_inertia(&self) -> [f64; 3];

    /// Interior angle at atom `j` formed by atoms `i` and `k`, in degrees.
    fn angle_degrees(&self, i: usize, j: usize, k: usize) -> f64;
}

/// An ordered collection of atoms forming a molecule.
///
/// Positions are in Angstroms and masses in amu. The atom list is fixed at
/// construction; all derived quantities are computed on demand from the
/// immutable atom data.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Creates a molecule from an ordered atom list.
    ///
    /// An empty atom list is a caller contract violation; derived queries on
    /// an empty molecule are meaningless.
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// The atoms in construction order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Total mass in amu.
    pub fn total_mass(&self) -> f64 {
        self.atoms.iter().map(|a| a.mass).sum()
    }

    /// Mass-weighted center of the structure, in Angstroms.
    pub fn center_of_mass(&self) -> Point3<f64> {
        let total_mass = self.total_mass();
        let weighted: Vector3<f64> = self
            .atoms
            .iter()
            .map(|a| a.position.coords * a.mass)
            .sum();
        Point3::from(weighted / total_mass)
    }

    /// Inertia tensor about the center of mass, in amu·Å².
    pub fn inertia_tensor(&self) -> Matrix3<f64> {
        let com = self.center_of_mass();
        let mut tensor = Matrix3::zeros();
        for atom in &self.atoms {
            let r = atom.position - com;
            let m = atom.mass;
            tensor[(0, 0)] += m * (r.y * r.y + r.z * r.z);
            tensor[(1, 1)] += m * (r.x * r.x + r.z * r.z);
            tensor[(2, 2)] += m * (r.x * r.x + r.y * r.y);
            tensor[(0, 1)] -= m * r.x * r.y;
            tensor[(0, 2)] -= m * r.x * r.z;
            tensor[(1, 2)] -= m * r.y * r.z;
        }
        tensor[(1, 0)] = tensor[(0, 1)];
        tensor[(2, 0)] = tensor[(0, 2)];
        tensor[(2, 1)] = tensor[(1, 2)];
        tensor
    }
}

impl AtomicStructure for Molecule {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn moments_of_inertia(&self) -> [f64; 3] {
        let eigenvalues = self.inertia_tensor().symmetric_eigen().eigenvalues;
        let mut moments = [eigenvalues[0], eigenvalues[1], eigenvalues[2]];
        moments.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        moments
    }

    fn angle_degrees(&self, i: usize, j: usize, k: usize) -> f64 {
        let v_ji = self.atoms[i].position - self.atoms[j].position;
        let v_jk = self.atoms[k].position - self.atoms[j].position;
        v_ji.angle(&v_jk).to_degrees()
    }
}
