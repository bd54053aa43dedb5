//! Algebraic structures for cryptographic protocols
//!
//! This crate implements the concrete structures of the calgebra library:
//!
//! - finite fields: integers modulo n ([`ZMod`], [`ZModPrime`]) and binary
//!   extension fields ([`BinaryField`])
//! - groups: the integers ([`ZPlus`]), unit monoids ([`ZTimesMod`]),
//!   prime-order subgroups of Z*_p ([`GStarModPrime`]) and direct products
//!   ([`ProductSet`])
//! - elliptic-curve groups over either field kind ([`EcGroup`]), built only
//!   from domain parameters that pass the SEC 1 validation, plus the SEC 2
//!   named curves
//!
//! Everything is reachable through the capability-checked
//! [`AlgebraicStructure`] interface, and shared instances can be obtained
//! from a [`StructureCache`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ec;
pub mod field;
pub mod group;
pub mod structure;

pub use calgebra_api::{Capabilities, Capability, CurveCheck, Error, Order, Result};

pub use ec::{
    binary_curve, prime_curve, standard_curve, CurveField, EcGroup, EcPoint, EllipticCurve,
};
pub use field::{BinaryField, BinaryPolynomial, FiniteField, ZMod, ZModPrime};
pub use group::{GStarModPrime, ProductSet, ZPlus, ZTimesMod};
pub use structure::{AlgebraicStructure, CacheKey, Element, StructureCache, Value};
