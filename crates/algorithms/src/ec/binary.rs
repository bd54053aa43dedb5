//! Non-supersingular curves y^2 + xy = x^3 + ax^2 + b over GF(2^m)

use calgebra_api::Result;

use super::{CurveField, EcPoint};
use crate::field::{BinaryField, BinaryPolynomial, FiniteField};

type Poly = BinaryPolynomial;

impl CurveField for BinaryField {
    const GROUP_KIND: &'static str = "ECBinaryField";

    fn check_curve_field(&self) -> Result<()> {
        Ok(())
    }

    /// The discriminant of this curve form is b
    fn is_singular(&self, _a: &Poly, b: &Poly) -> bool {
        b.is_zero()
    }

    fn on_curve(&self, a: &Poly, b: &Poly, x: &Poly, y: &Poly) -> bool {
        let x2 = self.square(x);
        let lhs = self.add(&self.square(y), &self.mul(x, y));
        let rhs = self.add(&self.add(&self.mul(&x2, x), &self.mul(a, &x2)), b);
        lhs == rhs
    }

    /// -(x, y) = (x, x + y)
    fn negate_y(&self, x: &Poly, y: &Poly) -> Poly {
        self.add(x, y)
    }

    fn double(&self, a: &Poly, x: &Poly, y: &Poly) -> Result<EcPoint<Poly>> {
        // (0, y) is its own negative
        if x.is_zero() {
            return Ok(EcPoint::Infinity);
        }
        // λ = x + y/x
        let lambda = self.add(x, &self.div(y, x)?);
        let x3 = self.add(&self.add(&self.square(&lambda), &lambda), a);
        let one = self.one();
        let y3 = self.add(&self.square(x), &self.mul(&self.add(&lambda, &one), &x3));
        Ok(EcPoint::affine(x3, y3))
    }

    fn add_distinct(
        &self,
        a: &Poly,
        (x1, y1): (&Poly, &Poly),
        (x2, y2): (&Poly, &Poly),
    ) -> Result<EcPoint<Poly>> {
        // λ = (y1 + y2) / (x1 + x2)
        let lambda = self.div(&self.add(y1, y2), &self.add(x1, x2))?;
        let x3 = self.add(
            &self.add(&self.add(&self.square(&lambda), &lambda), &self.add(x1, x2)),
            a,
        );
        let y3 = self.add(&self.add(&self.mul(&lambda, &self.add(x1, &x3)), &x3), y1);
        Ok(EcPoint::affine(x3, y3))
    }

    /// For x != 0 a point exists iff Tr(x + a + b/x^2) = 0
    fn has_point_at(&self, a: &Poly, b: &Poly, x: &Poly) -> bool {
        match self.substitution_constant(a, b, x) {
            Some(c) => !self.trace(&c),
            None => true,
        }
    }

    fn can_recover_y(&self) -> bool {
        self.degree() % 2 == 1
    }

    fn recover_y(&self, a: &Poly, b: &Poly, x: &Poly) -> Result<Option<Poly>> {
        let c = match self.substitution_constant(a, b, x) {
            Some(c) => c,
            // y^2 = b
            None => return self.sqrt(b).map(Some),
        };
        // y = xz with z^2 + z = c
        Ok(self.solve_quadratic(&c)?.map(|z| self.mul(x, &z)))
    }
}

impl BinaryField {
    /// c = x + a + b/x^2 from substituting y = xz, or `None` for x = 0
    fn substitution_constant(&self, a: &Poly, b: &Poly, x: &Poly) -> Option<Poly> {
        let inv_x2 = self.invert(&self.square(x)).ok()?;
        Some(self.add(&self.add(x, a), &self.mul(b, &inv_x2)))
    }
}
