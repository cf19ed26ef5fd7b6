//! Shared utilities for the foundation layer: tolerance-parameterized
//! floating-point comparisons and static chemical lookup tables.

pub mod elements;
pub mod numeric;
