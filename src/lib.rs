//! # calgebra
//!
//! Algebraic structures for cryptographic protocols.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! calgebra = "0.3"
//! ```
//!
//! ```
//! use calgebra::prelude::*;
//!
//! let curve = standard_curve("secp256k1").unwrap();
//! let g = curve.default_generator().unwrap();
//! let order = curve.as_prime_curve().unwrap().order().clone();
//! assert!(g.self_apply(&order).unwrap().is_identity().unwrap());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`calgebra-api`]: error taxonomy and the capability model
//! - [`calgebra-common`]: number theory and uniform sampling
//! - [`calgebra-params`]: SEC 2 curve parameter tables
//! - [`calgebra-algorithms`]: fields, groups, curves and the structure interface

#![forbid(unsafe_code)]

pub use calgebra_algorithms as algorithms;
pub use calgebra_api as api;
pub use calgebra_common as common;
pub use calgebra_params as params;

pub use rand;

/// Common imports for calgebra users
pub mod prelude {
    pub use num_bigint::{BigInt, BigUint};

    pub use crate::api::{Capabilities, Capability, CurveCheck, Error, Order, Result};

    pub use crate::algorithms::{
        binary_curve, prime_curve, standard_curve, AlgebraicStructure, BinaryField,
        BinaryPolynomial, EcGroup, EcPoint, Element, EllipticCurve, FiniteField,
        StructureCache, Value, ZMod, ZModPrime,
    };
}
