//! Validated elliptic-curve groups

use core::fmt;
use core::hash::{Hash, Hasher};

use calgebra_api::{validate, CurveCheck, Error, Result};
use calgebra_common::{is_probable_prime, random_below};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use super::{CurveField, EcPoint, EllipticCurve};
use crate::field::{BinaryField, BinaryPolynomial, ZModPrime};

/// Largest accepted cofactor
pub const MAX_COFACTOR: u32 = 4;

/// Embedding degrees below this bound are rejected (MOV reduction)
pub const MOV_BOUND: u32 = 100;

/// Attempts before random point sampling gives up
pub const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// SEC 1 tag of the point at infinity
const TAG_INFINITY: u8 = 0x00;

/// SEC 1 tag of an uncompressed affine point
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Cyclic subgroup of an elliptic curve generated by a point of prime order
///
/// Every constructor runs the full domain-parameter validation, so a value
/// of this type always describes a checked curve.
#[derive(Debug, Clone)]
pub struct EcGroup<F: CurveField> {
    curve: EllipticCurve<F>,
    generator: EcPoint<F::Elem>,
    order: BigUint,
    cofactor: BigUint,
    name: Option<&'static str>,
}

/// Log which check rejected a curve
fn rejected(label: &str, check: CurveCheck) -> Error {
    debug!("rejecting curve {}: {}", label, check);
    Error::InvalidCurveParameters { check }
}

fn check(label: &str, passed: bool, check: CurveCheck) -> Result<()> {
    if !passed {
        return Err(rejected(label, check));
    }
    Ok(())
}

impl<F: CurveField> EcGroup<F> {
    /// Validate domain parameters and build the group
    ///
    /// `order` is the prime order n of the generator (gx, gy) and `cofactor`
    /// the index h of the generated subgroup in the full curve group.
    pub fn new(
        field: F,
        a: F::Elem,
        b: F::Elem,
        gx: F::Elem,
        gy: F::Elem,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        Self::build(None, field, a, b, gx, gy, order, cofactor)
    }

    /// Like [`EcGroup::new`], carrying a standard curve name
    #[allow(clippy::too_many_arguments)]
    pub fn named(
        name: &'static str,
        field: F,
        a: F::Elem,
        b: F::Elem,
        gx: F::Elem,
        gy: F::Elem,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        Self::build(Some(name), field, a, b, gx, gy, order, cofactor)
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        name: Option<&'static str>,
        field: F,
        a: F::Elem,
        b: F::Elem,
        gx: F::Elem,
        gy: F::Elem,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let label = name.unwrap_or(F::GROUP_KIND);
        field.check_curve_field()?;

        check(
            label,
            field.contains(&a) && field.contains(&b),
            CurveCheck::CoefficientOutOfField,
        )?;
        check(
            label,
            field.contains(&gx) && field.contains(&gy),
            CurveCheck::GeneratorOutOfField,
        )?;
        check(label, !field.is_singular(&a, &b), CurveCheck::Singular)?;
        check(
            label,
            field.on_curve(&a, &b, &gx, &gy),
            CurveCheck::GeneratorNotOnCurve,
        )?;

        validate::parameter(!cofactor.is_zero(), "EcGroup", "cofactor must be positive")?;
        check(
            label,
            cofactor <= BigUint::from(MAX_COFACTOR),
            CurveCheck::CofactorTooLarge,
        )?;
        check(label, !order.is_zero(), CurveCheck::ZeroOrder)?;
        check(label, is_probable_prime(&order), CurveCheck::OrderNotPrime)?;

        let q = field.size();
        check(label, order != q, CurveCheck::AnomalousOrder)?;

        // q^k != 1 (mod n) for every small embedding degree k
        let q_mod_n = &q % &order;
        let mut power = BigUint::one();
        for _ in 1..MOV_BOUND {
            power = (&power * &q_mod_n) % &order;
            check(label, !power.is_one(), CurveCheck::SmallEmbeddingDegree)?;
        }

        let curve = EllipticCurve::new(field, a, b)?;
        let generator = EcPoint::affine(gx, gy);
        check(
            label,
            curve.mul(&generator, &order)?.is_infinity(),
            CurveCheck::GeneratorOrderMismatch,
        )?;

        Ok(Self {
            curve,
            generator,
            order,
            cofactor,
            name,
        })
    }

    /// Structure name of this group kind
    pub fn kind(&self) -> &'static str {
        F::GROUP_KIND
    }

    /// Standard name, if built from a named parameter set
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The underlying curve
    pub fn curve(&self) -> &EllipticCurve<F> {
        &self.curve
    }

    /// The underlying field
    pub fn field(&self) -> &F {
        self.curve.field()
    }

    /// The default generator G
    pub fn generator(&self) -> &EcPoint<F::Elem> {
        &self.generator
    }

    /// Prime order n of G
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// The point at infinity
    pub fn identity(&self) -> EcPoint<F::Elem> {
        EcPoint::Infinity
    }

    /// Whether `point` satisfies the curve equation
    ///
    /// For h > 1 this accepts points outside the subgroup generated by G;
    /// [`EcGroup::is_generator`] tests subgroup membership.
    pub fn contains(&self, point: &EcPoint<F::Elem>) -> bool {
        self.curve.contains(point)
    }

    /// Whether some curve point has x-coordinate `x`
    pub fn contains_x(&self, x: &F::Elem) -> bool {
        self.curve.contains_x(x)
    }

    /// Checked affine point
    pub fn point(&self, x: F::Elem, y: F::Elem) -> Result<EcPoint<F::Elem>> {
        self.curve.point(x, y)
    }

    /// A point with the given x-coordinate
    pub fn lift_x(&self, x: F::Elem) -> Result<EcPoint<F::Elem>> {
        self.curve.lift_x(x)
    }

    /// P + Q, failing with `NotAMember` for points off the curve
    pub fn apply(&self, p: &EcPoint<F::Elem>, q: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        self.curve.add(p, q)
    }

    /// -P
    pub fn invert(&self, p: &EcPoint<F::Elem>) -> Result<EcPoint<F::Elem>> {
        self.curve.negate(p)
    }

    /// kP, failing with `NotAMember` for a point off the curve
    pub fn self_apply(&self, p: &EcPoint<F::Elem>, k: &BigUint) -> Result<EcPoint<F::Elem>> {
        self.curve.mul(p, k)
    }

    /// Whether `p` generates the order-n subgroup
    ///
    /// n is prime, so every non-identity point of order n qualifies.
    pub fn is_generator(&self, p: &EcPoint<F::Elem>) -> Result<bool> {
        if p.is_infinity() || !self.contains(p) {
            return Ok(false);
        }
        Ok(self.self_apply(p, &self.order)?.is_infinity())
    }

    /// Uniform point of the order-n subgroup other than the identity
    ///
    /// Draws x-coordinates until one lies on the curve, picks one of the two
    /// y values at random and clears the cofactor. Fields without root
    /// extraction fall back to kG for a uniform non-zero k.
    pub fn random_element<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<EcPoint<F::Elem>> {
        if !self.field().can_recover_y() {
            return self.random_multiple(rng);
        }

        let field = self.field();
        for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
            let x = field.random(rng)?;
            let y = match field.recover_y(self.curve.a(), self.curve.b(), &x)? {
                Some(y) => y,
                None => {
                    trace!("{}: no point at sampled x, attempt {}", self.kind(), attempt);
                    continue;
                }
            };

            let mut coin = [0u8; 1];
            rng.fill_bytes(&mut coin);
            let y = if coin[0] & 1 == 1 {
                field.negate_y(&x, &y)
            } else {
                y
            };

            let point = self.self_apply(&EcPoint::affine(x, y), &self.cofactor)?;
            if !point.is_infinity() {
                return Ok(point);
            }
            trace!("{}: cofactor cleared to identity, attempt {}", self.kind(), attempt);
        }
        Err(Error::SamplingExhausted {
            context: self.kind(),
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    /// kG for uniform k in [1, n)
    fn random_multiple<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<EcPoint<F::Elem>> {
        let upper = &self.order - 1u32;
        validate::parameter(!upper.is_zero(), self.kind(), "trivial group order")?;
        let k = random_below(rng, &upper)? + 1u32;
        self.self_apply(&self.generator, &k)
    }

    /// A random generator of the order-n subgroup
    pub fn random_generator<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<EcPoint<F::Elem>> {
        // every non-identity subgroup point generates
        self.random_element(rng)
    }

    /// Bytes per encoded coordinate
    pub fn coordinate_len(&self) -> usize {
        self.field().byte_len()
    }

    /// SEC 1 encoding: `00` for the identity, `04 || X || Y` otherwise
    pub fn encode(&self, point: &EcPoint<F::Elem>) -> Vec<u8> {
        let (x, y) = match point.coordinates() {
            None => return vec![TAG_INFINITY],
            Some(xy) => xy,
        };
        let len = self.coordinate_len();
        let mut out = Vec::with_capacity(1 + 2 * len);
        out.push(TAG_UNCOMPRESSED);
        for c in [x, y] {
            let bytes = self.field().to_biguint(c).to_bytes_be();
            out.resize(out.len() + len - bytes.len().min(len), 0);
            out.extend_from_slice(&bytes[bytes.len().saturating_sub(len)..]);
        }
        out
    }

    /// Decode and re-validate a SEC 1 uncompressed point
    pub fn decode(&self, bytes: &[u8]) -> Result<EcPoint<F::Elem>> {
        if bytes == [TAG_INFINITY] {
            return Ok(EcPoint::Infinity);
        }
        let len = self.coordinate_len();
        validate::parameter(
            bytes.len() == 1 + 2 * len,
            self.kind(),
            "encoded point has the wrong length",
        )?;
        validate::parameter(
            bytes[0] == TAG_UNCOMPRESSED,
            self.kind(),
            "unsupported point encoding tag",
        )?;

        let field = self.field();
        let x = field.from_biguint(&BigUint::from_bytes_be(&bytes[1..1 + len]))?;
        let y = field.from_biguint(&BigUint::from_bytes_be(&bytes[1 + len..]))?;
        self.point(x, y)
    }
}

impl EcGroup<ZModPrime> {
    /// Group over GF(p) from integer parameters
    ///
    /// A composite `p` fails with [`CurveCheck::FieldNotPrime`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_integers(
        name: Option<&'static str>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let label = name.unwrap_or(ZModPrime::GROUP_KIND);
        let field =
            ZModPrime::new(p).map_err(|_| rejected(label, CurveCheck::FieldNotPrime))?;
        Self::build(name, field, a, b, gx, gy, order, cofactor)
    }
}

impl EcGroup<BinaryField> {
    /// Group over GF(2^m) from a reduction polynomial and coordinates
    ///
    /// A reducible polynomial fails with [`CurveCheck::ReduciblePolynomial`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_polynomials(
        name: Option<&'static str>,
        modulus: BinaryPolynomial,
        a: BinaryPolynomial,
        b: BinaryPolynomial,
        gx: BinaryPolynomial,
        gy: BinaryPolynomial,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let label = name.unwrap_or(BinaryField::GROUP_KIND);
        let field = BinaryField::new(modulus)
            .map_err(|_| rejected(label, CurveCheck::ReduciblePolynomial))?;
        Self::build(name, field, a, b, gx, gy, order, cofactor)
    }
}

impl<F: CurveField> PartialEq for EcGroup<F> {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
            && self.generator == other.generator
            && self.order == other.order
            && self.cofactor == other.cofactor
    }
}

impl<F: CurveField> Eq for EcGroup<F> {}

impl<F: CurveField + Hash> Hash for EcGroup<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.curve.hash(state);
        self.generator.hash(state);
        self.order.hash(state);
        self.cofactor.hash(state);
    }
}

impl<F: CurveField> fmt::Display for EcGroup<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}[{}]", F::GROUP_KIND, name),
            None => write!(f, "{}[{}, n={}]", F::GROUP_KIND, self.field(), self.order),
        }
    }
}
