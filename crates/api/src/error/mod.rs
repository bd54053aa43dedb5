//! Error handling for the algebra engine
//!
//! Every failure in this library is local and synchronous. A failing call
//! returns one of the kinds below and never a partially built value.

use std::borrow::Cow;

use thiserror::Error as ThisError;

use crate::types::Capability;

pub mod validate;

/// Domain-parameter check that rejected an elliptic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveCheck {
    /// The underlying field is not a field (composite modulus)
    FieldNotPrime,
    /// The binary reduction polynomial factors over GF(2)
    ReduciblePolynomial,
    /// Coefficient `a` or `b` is not a canonical field element
    CoefficientOutOfField,
    /// A generator coordinate is not a canonical field element
    GeneratorOutOfField,
    /// The generator does not satisfy the curve equation
    GeneratorNotOnCurve,
    /// The curve discriminant vanishes
    Singular,
    /// The cofactor exceeds the accepted bound
    CofactorTooLarge,
    /// The declared order is zero
    ZeroOrder,
    /// The declared order is composite
    OrderNotPrime,
    /// `order * generator` is not the point at infinity
    GeneratorOrderMismatch,
    /// The order equals the field size (anomalous curve)
    AnomalousOrder,
    /// `q^k = 1 mod n` for a small embedding degree `k` (MOV reduction)
    SmallEmbeddingDegree,
}

impl CurveCheck {
    /// Short human readable description of the failed check
    pub fn describe(self) -> &'static str {
        match self {
            CurveCheck::FieldNotPrime => "field modulus is not prime",
            CurveCheck::ReduciblePolynomial => "reduction polynomial is reducible",
            CurveCheck::CoefficientOutOfField => "curve coefficient outside the field",
            CurveCheck::GeneratorOutOfField => "generator coordinate outside the field",
            CurveCheck::GeneratorNotOnCurve => "generator is not on the curve",
            CurveCheck::Singular => "curve is singular",
            CurveCheck::CofactorTooLarge => "cofactor too large",
            CurveCheck::ZeroOrder => "order must be positive",
            CurveCheck::OrderNotPrime => "order is not prime",
            CurveCheck::GeneratorOrderMismatch => "generator does not have the declared order",
            CurveCheck::AnomalousOrder => "order equals the field size",
            CurveCheck::SmallEmbeddingDegree => "embedding degree too small (MOV)",
        }
    }
}

impl core::fmt::Display for CurveCheck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe())
    }
}

/// The error type for algebraic operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed constructor or operation input
    #[error("Invalid argument for {context}: {message}")]
    InvalidArgument {
        /// Where the argument was rejected
        context: &'static str,
        /// Why it was rejected
        message: Cow<'static, str>,
    },

    /// Operation requires a capability the structure lacks
    #[error("{structure} does not support {capability} operations")]
    UnsupportedCapability {
        /// Kind of the structure the operation was invoked on
        structure: &'static str,
        /// Capability the operation requires
        capability: Capability,
    },

    /// Multiplicative inverse of zero
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// Square root of a non-residue
    #[error("No square root exists in {context}")]
    NoSquareRoot {
        /// Field the root was requested in
        context: &'static str,
    },

    /// Elliptic-curve domain parameters failed validation
    #[error("Invalid curve parameters: {check}")]
    InvalidCurveParameters {
        /// The check that failed
        check: CurveCheck,
    },

    /// Value or element does not belong to the expected structure
    #[error("Not a member of {structure}: {reason}")]
    NotAMember {
        /// Kind of the structure that rejected the value
        structure: &'static str,
        /// Why the value was rejected
        reason: Cow<'static, str>,
    },

    /// Bounded rejection sampling ran out of attempts
    #[error("Random sampling in {context} gave up after {attempts} attempts")]
    SamplingExhausted {
        /// Structure being sampled
        context: &'static str,
        /// Number of candidates drawn
        attempts: usize,
    },
}

impl Error {
    /// Shorthand to create an InvalidArgument error
    pub fn param<R: Into<Cow<'static, str>>>(context: &'static str, message: R) -> Self {
        Error::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a NotAMember error
    pub fn not_member<R: Into<Cow<'static, str>>>(structure: &'static str, reason: R) -> Self {
        Error::NotAMember {
            structure,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an UnsupportedCapability error
    pub fn unsupported(structure: &'static str, capability: Capability) -> Self {
        Error::UnsupportedCapability {
            structure,
            capability,
        }
    }
}

/// Result type for algebraic operations
pub type Result<T> = core::result::Result<T, Error>;
