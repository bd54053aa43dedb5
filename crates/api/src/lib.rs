//! Public API types for the calgebra library
//!
//! This crate carries the pieces every other calgebra crate agrees on: the
//! error taxonomy, the guard helpers used during construction, and the
//! capability model that classifies algebraic structures.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, CurveCheck, Error, Result};
pub use types::{Capabilities, Capability, Order};
