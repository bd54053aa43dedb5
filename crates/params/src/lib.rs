//! Constant domain parameters for the calgebra library
//!
//! Every table entry is a literal copy of the published hex constants, so
//! downstream test vectors can rely on exact curve identity. Parsing and
//! validation happen in `calgebra-algorithms`.

#![cfg_attr(not(test), no_std)]

pub mod sec2;

pub use sec2::{SEC2_BINARY_CURVES, SEC2_PRIME_CURVES};

/// Kind of field a curve is defined over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Prime field GF(p)
    Prime,
    /// Binary extension field GF(2^m)
    Binary,
}

/// Elliptic-curve domain parameters as big-endian hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Standard name, e.g. `secp256k1`
    pub name: &'static str,
    /// Field kind
    pub field_type: FieldType,
    /// Prime modulus, or reduction polynomial for binary fields
    pub field: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Prime order of the generator
    pub order: &'static str,
    /// Cofactor h = #E / n
    pub cofactor: u32,
    /// Approximate security level in bits
    pub security_level: u32,
}

/// Look up a standard curve by name (case-insensitive)
pub fn by_name(name: &str) -> Option<&'static CurveParams> {
    SEC2_PRIME_CURVES
        .iter()
        .chain(SEC2_BINARY_CURVES.iter())
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Iterate over every table entry, prime curves first
pub fn all_curves() -> impl Iterator<Item = &'static CurveParams> {
    SEC2_PRIME_CURVES.iter().chain(SEC2_BINARY_CURVES.iter())
}

/// Curves whose security level is at most `bits`
pub fn curves_up_to(bits: u32) -> impl Iterator<Item = &'static CurveParams> {
    all_curves().filter(move |c| c.security_level <= bits)
}
