//! Molecular representation for the foundation layer.
//!
//! Provides the [`atom::Atom`] building block, the read-only
//! [`molecule::AtomicStructure`] query contract consumed by the mode models,
//! and the concrete [`molecule::Molecule`] implementation.

pub mod atom;
pub mod molecule;
