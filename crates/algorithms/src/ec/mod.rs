//! Elliptic curves over prime and binary fields
//!
//! [`EllipticCurve`] is the bare Weierstrass arithmetic. [`EcGroup`] wraps a
//! curve together with a generator, its order and the cofactor, and only
//! exists once the domain parameters passed the SEC 1 checks. The
//! field-specific formulas live behind [`CurveField`], implemented for
//! [`ZModPrime`](crate::field::ZModPrime) (short Weierstrass,
//! y^2 = x^3 + ax + b) and [`BinaryField`](crate::field::BinaryField)
//! (y^2 + xy = x^3 + ax^2 + b).

use core::fmt;

use calgebra_api::Result;

use crate::field::FiniteField;

mod binary;
mod curve;
mod group;
mod point;
mod prime;
pub mod standard;

pub use curve::EllipticCurve;
pub use group::{EcGroup, MAX_COFACTOR, MAX_SAMPLING_ATTEMPTS, MOV_BOUND};
pub use point::EcPoint;
pub use standard::{binary_curve, prime_curve, standard_curve};

/// Curve-shape formulas of a field
///
/// The group law is the same chord-and-tangent construction over every
/// field, but the curve equation and therefore the slope formulas differ
/// between odd characteristic and characteristic 2.
pub trait CurveField: FiniteField + fmt::Display {
    /// Structure name of groups over this field kind
    const GROUP_KIND: &'static str;

    /// Reject fields the curve form cannot live on
    fn check_curve_field(&self) -> Result<()>;

    /// Whether the curve with coefficients `a`, `b` is singular
    fn is_singular(&self, a: &Self::Elem, b: &Self::Elem) -> bool;

    /// Whether (x, y) satisfies the curve equation
    fn on_curve(&self, a: &Self::Elem, b: &Self::Elem, x: &Self::Elem, y: &Self::Elem) -> bool;

    /// y-coordinate of -(x, y)
    fn negate_y(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// 2(x, y) for an affine point on the curve
    fn double(&self, a: &Self::Elem, x: &Self::Elem, y: &Self::Elem)
        -> Result<EcPoint<Self::Elem>>;

    /// P + Q for affine points with distinct x-coordinates
    fn add_distinct(
        &self,
        a: &Self::Elem,
        p: (&Self::Elem, &Self::Elem),
        q: (&Self::Elem, &Self::Elem),
    ) -> Result<EcPoint<Self::Elem>>;

    /// Whether some point on the curve has x-coordinate `x`
    fn has_point_at(&self, a: &Self::Elem, b: &Self::Elem, x: &Self::Elem) -> bool;

    /// Whether [`CurveField::recover_y`] is available
    fn can_recover_y(&self) -> bool {
        true
    }

    /// One y with (x, y) on the curve, or `None` when no such point exists
    fn recover_y(
        &self,
        a: &Self::Elem,
        b: &Self::Elem,
        x: &Self::Elem,
    ) -> Result<Option<Self::Elem>>;
}

#[cfg(test)]
mod tests;
