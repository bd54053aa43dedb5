//! Elements tagged with the structure that owns them

use core::fmt;

use calgebra_api::Result;
use num_bigint::{BigInt, BigUint};

use super::AlgebraicStructure;
use crate::ec::EcPoint;
use crate::field::BinaryPolynomial;

/// Canonical representation of an element value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Residue in [0, n)
    Integer(BigUint),
    /// Member of the integers
    SignedInteger(BigInt),
    /// Element of GF(2^m) in polynomial basis
    Polynomial(BinaryPolynomial),
    /// Point of a curve over GF(p)
    PrimePoint(EcPoint<BigUint>),
    /// Point of a curve over GF(2^m)
    BinaryPoint(EcPoint<BinaryPolynomial>),
    /// Tuple of a direct product
    Tuple(Vec<Element>),
}

impl From<BigUint> for Value {
    fn from(v: BigUint) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Integer(BigUint::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::SignedInteger(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::SignedInteger(BigInt::from(v))
    }
}

impl From<BinaryPolynomial> for Value {
    fn from(v: BinaryPolynomial) -> Self {
        Value::Polynomial(v)
    }
}

impl From<EcPoint<BigUint>> for Value {
    fn from(p: EcPoint<BigUint>) -> Self {
        Value::PrimePoint(p)
    }
}

impl From<EcPoint<BinaryPolynomial>> for Value {
    fn from(p: EcPoint<BinaryPolynomial>) -> Self {
        Value::BinaryPoint(p)
    }
}

impl From<Vec<Element>> for Value {
    fn from(es: Vec<Element>) -> Self {
        Value::Tuple(es)
    }
}

fn write_point<E: fmt::Display>(f: &mut fmt::Formatter<'_>, p: &EcPoint<E>) -> fmt::Result {
    match p {
        EcPoint::Infinity => f.write_str("O"),
        EcPoint::Affine { x, y } => write!(f, "({}, {})", x, y),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::SignedInteger(v) => write!(f, "{}", v),
            Value::Polynomial(p) => write!(f, "{}", p),
            Value::PrimePoint(p) => write_point(f, p),
            Value::BinaryPoint(p) => write_point(f, p),
            Value::Tuple(es) => {
                f.write_str("(")?;
                for (i, e) in es.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// A value together with the structure it was validated against
///
/// Only [`AlgebraicStructure`] creates elements, so the value is always the
/// canonical form of a member. Two elements are equal when both the
/// structure and the value agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    structure: AlgebraicStructure,
    value: Value,
}

impl Element {
    pub(crate) fn new(structure: AlgebraicStructure, value: Value) -> Self {
        Self { structure, value }
    }

    /// The owning structure
    pub fn structure(&self) -> &AlgebraicStructure {
        &self.structure
    }

    /// The canonical value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Drop the structure tag
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Residue value, for modular structures
    pub fn as_integer(&self) -> Option<&BigUint> {
        match &self.value {
            Value::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Integer value, for [`AlgebraicStructure::ZPlus`]
    pub fn as_signed_integer(&self) -> Option<&BigInt> {
        match &self.value {
            Value::SignedInteger(v) => Some(v),
            _ => None,
        }
    }

    /// Binary-field value
    pub fn as_polynomial(&self) -> Option<&BinaryPolynomial> {
        match &self.value {
            Value::Polynomial(p) => Some(p),
            _ => None,
        }
    }

    /// Point of a prime-field curve
    pub fn as_prime_point(&self) -> Option<&EcPoint<BigUint>> {
        match &self.value {
            Value::PrimePoint(p) => Some(p),
            _ => None,
        }
    }

    /// Point of a binary-field curve
    pub fn as_binary_point(&self) -> Option<&EcPoint<BinaryPolynomial>> {
        match &self.value {
            Value::BinaryPoint(p) => Some(p),
            _ => None,
        }
    }

    /// Components of a product element
    pub fn as_tuple(&self) -> Option<&[Element]> {
        match &self.value {
            Value::Tuple(es) => Some(es),
            _ => None,
        }
    }

    /// Group operation with `other`
    pub fn apply(&self, other: &Element) -> Result<Element> {
        self.structure.apply(self, other)
    }

    /// Group inverse
    pub fn invert(&self) -> Result<Element> {
        self.structure.invert(self)
    }

    /// `self` combined with the inverse of `other`
    pub fn apply_inverse(&self, other: &Element) -> Result<Element> {
        self.structure.apply_inverse(self, other)
    }

    /// `self` applied to itself `k` times
    pub fn self_apply(&self, k: &BigUint) -> Result<Element> {
        self.structure.self_apply(self, k)
    }

    /// Signed variant of [`Element::self_apply`]
    pub fn self_apply_signed(&self, k: &BigInt) -> Result<Element> {
        self.structure.self_apply_signed(self, k)
    }

    /// Whether this is the identity of its structure
    pub fn is_identity(&self) -> Result<bool> {
        Ok(self.structure.identity()? == *self)
    }

    /// Whether this generates its cyclic structure
    pub fn is_generator(&self) -> Result<bool> {
        self.structure.is_generator(self)
    }

    /// Ring product with `other`
    pub fn multiply(&self, other: &Element) -> Result<Element> {
        self.structure.multiply(self, other)
    }

    /// Ring power
    pub fn power(&self, k: &BigUint) -> Result<Element> {
        self.structure.power(self, k)
    }

    /// Field inverse
    pub fn multiplicative_inverse(&self) -> Result<Element> {
        self.structure.multiplicative_inverse(self)
    }

    /// Field quotient
    pub fn divide(&self, other: &Element) -> Result<Element> {
        self.structure.divide(self, other)
    }

    /// Field square root
    pub fn sqrt(&self) -> Result<Element> {
        self.structure.sqrt(self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
