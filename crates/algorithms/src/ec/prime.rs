//! Short Weierstrass curves y^2 = x^3 + ax + b over GF(p), p > 3

use calgebra_api::{validate, Result};
use num_bigint::BigUint;

use super::{CurveField, EcPoint};
use crate::field::{FiniteField, ZModPrime};

impl ZModPrime {
    /// x^3 + ax + b
    fn curve_rhs(&self, a: &BigUint, b: &BigUint, x: &BigUint) -> BigUint {
        let x3 = self.mul(&self.square(x), x);
        self.add(&self.add(&x3, &self.mul(a, x)), b)
    }
}

impl CurveField for ZModPrime {
    const GROUP_KIND: &'static str = "ECZModPrime";

    fn check_curve_field(&self) -> Result<()> {
        validate::parameter(
            self.modulus() > &BigUint::from(3u32),
            Self::GROUP_KIND,
            "short Weierstrass form needs characteristic above 3",
        )
    }

    /// 4a^3 + 27b^2 = 0
    fn is_singular(&self, a: &BigUint, b: &BigUint) -> bool {
        let a3 = self.mul(&self.square(a), a);
        let disc = self.add(
            &self.mul(&BigUint::from(4u32), &a3),
            &self.mul(&BigUint::from(27u32), &self.square(b)),
        );
        self.is_zero(&disc)
    }

    fn on_curve(&self, a: &BigUint, b: &BigUint, x: &BigUint, y: &BigUint) -> bool {
        self.square(y) == self.curve_rhs(a, b, x)
    }

    fn negate_y(&self, _x: &BigUint, y: &BigUint) -> BigUint {
        self.neg(y)
    }

    fn double(&self, a: &BigUint, x: &BigUint, y: &BigUint) -> Result<EcPoint<BigUint>> {
        if self.is_zero(y) {
            return Ok(EcPoint::Infinity);
        }
        // λ = (3x^2 + a) / 2y
        let num = self.add(&self.mul(&BigUint::from(3u32), &self.square(x)), a);
        let lambda = self.div(&num, &self.add(y, y))?;
        let x3 = self.sub(&self.square(&lambda), &self.add(x, x));
        let y3 = self.sub(&self.mul(&lambda, &self.sub(x, &x3)), y);
        Ok(EcPoint::affine(x3, y3))
    }

    fn add_distinct(
        &self,
        _a: &BigUint,
        (x1, y1): (&BigUint, &BigUint),
        (x2, y2): (&BigUint, &BigUint),
    ) -> Result<EcPoint<BigUint>> {
        // λ = (y2 - y1) / (x2 - x1)
        let lambda = self.div(&self.sub(y2, y1), &self.sub(x2, x1))?;
        let x3 = self.sub(&self.sub(&self.square(&lambda), x1), x2);
        let y3 = self.sub(&self.mul(&lambda, &self.sub(x1, &x3)), y1);
        Ok(EcPoint::affine(x3, y3))
    }

    fn has_point_at(&self, a: &BigUint, b: &BigUint, x: &BigUint) -> bool {
        self.has_sqrt(&self.curve_rhs(a, b, x))
    }

    fn recover_y(&self, a: &BigUint, b: &BigUint, x: &BigUint) -> Result<Option<BigUint>> {
        let rhs = self.curve_rhs(a, b, x);
        if !self.has_sqrt(&rhs) {
            return Ok(None);
        }
        self.sqrt(&rhs).map(Some)
    }
}
