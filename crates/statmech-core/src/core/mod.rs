//! # Core Module
//!
//! This module provides the fundamental building blocks for statistical-mechanics
//! thermochemistry calculations, serving as the computational foundation of the
//! library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the foundation layer:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms and
//!   molecular structures, including principal moments of inertia and interior
//!   angle queries
//! - **Physical Constants** ([`constants`]) - Exact published values for the
//!   fundamental constants and unit conversions used in mode derivations
//! - **Utilities** ([`utils`]) - Tolerance-parameterized floating-point
//!   comparisons and static chemical lookup tables

pub mod constants;
pub mod models;
pub mod utils;
