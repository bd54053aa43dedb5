//! Weierstrass curve arithmetic without domain-parameter validation

use calgebra_api::{validate, CurveCheck, Error, Result};
use num_bigint::BigUint;

use super::{CurveField, EcPoint};

/// An elliptic curve over a finite field
///
/// Construction only checks that the coefficients are field elements and the
/// curve is non-singular. No generator, order or security property is
/// attached; see [`EcGroup`](super::EcGroup) for a validated group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EllipticCurve<F: CurveField> {
    field: F,
    a: F::Elem,
    b: F::Elem,
}

impl<F: CurveField> EllipticCurve<F> {
    /// Curve with coefficients `a`, `b` over `field`
    pub fn new(field: F, a: F::Elem, b: F::Elem) -> Result<Self> {
        field.check_curve_field()?;
        validate::curve(
            field.contains(&a) && field.contains(&b),
            CurveCheck::CoefficientOutOfField,
        )?;
        validate::curve(!field.is_singular(&a, &b), CurveCheck::Singular)?;
        Ok(Self { field, a, b })
    }

    /// The underlying field
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Coefficient a
    pub fn a(&self) -> &F::Elem {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &F::Elem {
        &self.b
    }

    /// Whether the coordinates are field elements satisfying the equation
    pub fn contains_xy(&self, x: &F::Elem, y: &F::Elem) -> bool {
        self.field.contains(x)
            && self.field.contains(y)
            && self.field.on_curve(&self.a, &self.b, x, y)
    }

    /// Whether `point` lies on the curve (the identity always does)
    pub fn contains(&self, point: &EcPoint<F::Elem>) -> bool {
        match point {
            EcPoint::Infinity => true,
            EcPoint::Affine { x, y } => self.contains_xy(x, y),
        }
    }

    /// Whether some point has x-coordinate `x`
    ///
    /// An x without a matching y is an ordinary negative answer.
    pub fn contains_x(&self, x: &F::Elem) -> bool {
        self.field.contains(x) && self.field.has_point_at(&self.a, &self.b, x)
    }

    /// Affine point (x, y), checked against the equation
    pub fn point(&self, x: F::Elem, y: F::Elem) -> Result<EcPoint<F::Elem>> {
        validate::member(
            self.contains_xy(&x, &y),
            F::GROUP_KIND,
            "point does not satisfy the curve equation",
        )?;
        Ok(EcPoint::affine(x, y))
    }

    /// A point with x-coordinate `x`
    ///
    /// Of the two candidates (P and -P) the one found by the field's root
    /// extraction is returned.
    pub fn lift_x(&self, x: F::Elem) -> Result<EcPoint<F::Elem>> {
        validate::member(self.field.contains(&x), F::GROUP_KIND, "x outside the field")?;
        match self.field.recover_y(&self.a, &self.b, &x)? {
            Some(y) => Ok(EcPoint::affine(x, y)),
            None => Err(Error::not_member(
                F::GROUP_KIND,
                "no curve point has this x-coordinate",
            )),
        }
    }

    /// Reject operands that do not satisfy the curve equation
    fn check_point(&self, point: &EcPoint<F::Elem>) -> Result<()> {
        validate::member(
            self.contains(point),
            F::GROUP_KIND,
            "point does not satisfy the curve equation",
        )
    }

    /// -P
    pub fn negate(&self, point: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        self.check_point(point)?;
        Ok(match point {
            EcPoint::Infinity => EcPoint::Infinity,
            EcPoint::Affine { x, y } => EcPoint::affine(x.clone(), self.field.negate_y(x, y)),
        })
    }

    /// P + Q; both operands must lie on the curve
    pub fn add(&self, p: &EcPoint<F::Elem>, q: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        self.check_point(p)?;
        self.check_point(q)?;
        self.sum(p, q)
    }

    /// Chord-and-tangent sum of operands already known to be on the curve
    fn sum(&self, p: &EcPoint<F::Elem>, q: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        let ((x1, y1), (x2, y2)) = match (p.coordinates(), q.coordinates()) {
            (None, _) => return Ok(q.clone()),
            (_, None) => return Ok(p.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        if x1 != x2 {
            return self.field.add_distinct(&self.a, (x1, y1), (x2, y2));
        }
        if *y2 == self.field.negate_y(x1, y1) {
            return Ok(EcPoint::Infinity);
        }
        // same x, not inverses: on the curve this leaves only P == Q
        self.field.double(&self.a, x1, y1)
    }

    /// 2P
    pub fn double(&self, p: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        self.add(p, p)
    }

    /// kP by double-and-add over the bits of k, most significant first
    pub fn mul(&self, p: &EcPoint<F::Elem>, k: &BigUint) -> Result<EcPoint<F::Elem>> {
        self.check_point(p)?;
        let mut acc = EcPoint::Infinity;
        if p.is_infinity() {
            return Ok(acc);
        }
        for i in (0..k.bits()).rev() {
            acc = self.sum(&acc, &acc)?;
            if k.bit(i) {
                acc = self.sum(&acc, p)?;
            }
        }
        Ok(acc)
    }
}
