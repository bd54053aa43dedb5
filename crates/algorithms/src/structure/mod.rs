//! The closed family of algebraic structures
//!
//! [`AlgebraicStructure`] is a sum type over every concrete structure in this
//! crate. It reports a [`Capabilities`] set, and each operation of the
//! shared contract first checks the capability it needs, then that its
//! operands are members, and only then dispatches on the variant. Calling
//! `invert` on a monoid therefore yields `UnsupportedCapability` instead of
//! a failure somewhere inside the arithmetic.
//!
//! Structures are cheap to clone: every variant shares its parameters
//! behind an [`Arc`].

use core::fmt;
use std::sync::Arc;

use calgebra_api::{validate, Capabilities, Capability, Error, Order, Result};
use calgebra_common::is_probable_prime;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};

use crate::ec::{EcGroup, EcPoint, MAX_SAMPLING_ATTEMPTS};
use crate::field::{BinaryField, BinaryPolynomial, FiniteField, ZMod, ZModPrime};
use crate::group::{GStarModPrime, ProductSet, ZPlus, ZTimesMod};

mod cache;
mod element;

pub use cache::{CacheKey, StructureCache};
pub use element::{Element, Value};

/// Every concrete structure, behind one capability-checked interface
#[derive(Debug, Clone)]
pub enum AlgebraicStructure {
    /// The integers under addition
    ZPlus(ZPlus),
    /// Z_n as a ring (a field for prime n) and additive cyclic group
    ZMod(Arc<ZMod>),
    /// Z_n under multiplication
    ZTimesMod(Arc<ZTimesMod>),
    /// Prime-order subgroup of Z*_p
    GStarModPrime(Arc<GStarModPrime>),
    /// GF(2^m)
    BinaryField(Arc<BinaryField>),
    /// Elliptic-curve group over GF(p)
    EcPrime(Arc<EcGroup<ZModPrime>>),
    /// Elliptic-curve group over GF(2^m)
    EcBinary(Arc<EcGroup<BinaryField>>),
    /// Direct product
    Product(Arc<ProductSet>),
}

impl AlgebraicStructure {
    /// The integers
    pub fn zplus() -> Self {
        Self::ZPlus(ZPlus)
    }

    /// Z_n for n > 0
    pub fn zmod(modulus: BigUint) -> Result<Self> {
        Ok(Self::ZMod(Arc::new(ZMod::new(modulus)?)))
    }

    /// GF(p), rejecting a composite modulus
    pub fn zmod_prime(modulus: BigUint) -> Result<Self> {
        validate::parameter(is_probable_prime(&modulus), "ZModPrime", "modulus is not prime")?;
        Self::zmod(modulus)
    }

    /// Z_n under multiplication
    pub fn ztimes_mod(modulus: BigUint) -> Result<Self> {
        Ok(Self::ZTimesMod(Arc::new(ZTimesMod::new(modulus)?)))
    }

    /// Order-q subgroup of Z*_p
    pub fn gstar_mod_prime(modulus: BigUint, order: BigUint) -> Result<Self> {
        Ok(Self::GStarModPrime(Arc::new(GStarModPrime::new(modulus, order)?)))
    }

    /// Quadratic residues modulo a safe prime
    pub fn gstar_mod_safe_prime(modulus: BigUint) -> Result<Self> {
        Ok(Self::GStarModPrime(Arc::new(GStarModPrime::safe_prime(modulus)?)))
    }

    /// GF(2^m) for an irreducible reduction polynomial
    pub fn binary_field(modulus: BinaryPolynomial) -> Result<Self> {
        Ok(Self::BinaryField(Arc::new(BinaryField::new(modulus)?)))
    }

    /// Direct product of `components`
    pub fn product(components: Vec<AlgebraicStructure>) -> Self {
        Self::Product(Arc::new(ProductSet::new(components)))
    }

    /// Structure name used in errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ZPlus(_) => "ZPlus",
            Self::ZMod(z) => z.kind(),
            Self::ZTimesMod(_) => "ZTimesMod",
            Self::GStarModPrime(_) => "GStarModPrime",
            Self::BinaryField(_) => "BinaryField",
            Self::EcPrime(g) => g.kind(),
            Self::EcBinary(g) => g.kind(),
            Self::Product(_) => "ProductSet",
        }
    }

    /// What this structure offers
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::ZPlus(_) | Self::GStarModPrime(_) | Self::EcPrime(_) | Self::EcBinary(_) => {
                Capabilities::CYCLIC_GROUP
            }
            Self::ZMod(z) if z.is_field() => Capabilities::FIELD.with(Capability::Cyclic),
            Self::ZMod(_) => Capabilities::RING.with(Capability::Cyclic),
            Self::ZTimesMod(_) => Capabilities::MONOID,
            // (GF(2^m), +) is elementary abelian, not cyclic for m > 1
            Self::BinaryField(_) => Capabilities::FIELD,
            Self::Product(p) => p.capabilities(),
        }
    }

    /// Whether this structure offers `capability`
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().supports(capability)
    }

    fn require(&self, capability: Capability) -> Result<()> {
        validate::capability(self.capabilities(), capability, self.kind())
    }

    /// Number of elements
    pub fn order(&self) -> Order {
        match self {
            Self::ZPlus(_) => Order::Infinite,
            Self::ZMod(z) => Order::Finite(z.modulus().clone()),
            Self::ZTimesMod(z) => Order::Finite(z.modulus().clone()),
            Self::GStarModPrime(g) => Order::Finite(g.order().clone()),
            Self::BinaryField(f) => Order::Finite(f.size()),
            Self::EcPrime(g) => Order::Finite(g.order().clone()),
            Self::EcBinary(g) => Order::Finite(g.order().clone()),
            Self::Product(p) => p.order(),
        }
    }

    /// Whether `value` is the canonical form of a member
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::ZPlus(_), Value::SignedInteger(_)) => true,
            (Self::ZMod(z), Value::Integer(v)) => z.contains(v),
            (Self::ZTimesMod(z), Value::Integer(v)) => z.contains(v),
            (Self::GStarModPrime(g), Value::Integer(v)) => g.contains(v),
            (Self::BinaryField(f), Value::Polynomial(p)) => f.contains(p),
            (Self::EcPrime(g), Value::PrimePoint(p)) => g.contains(p),
            (Self::EcBinary(g), Value::BinaryPoint(p)) => g.contains(p),
            (Self::Product(p), Value::Tuple(es)) => p.contains(es),
            _ => false,
        }
    }

    /// Element of this structure, failing with `NotAMember`
    pub fn element(&self, value: impl Into<Value>) -> Result<Element> {
        let value = match (self, value.into()) {
            (Self::ZPlus(_), Value::Integer(v)) => Value::SignedInteger(BigInt::from(v)),
            (_, v) => v,
        };
        validate::member(self.contains(&value), self.kind(), "value outside the structure")?;
        Ok(self.wrap(value))
    }

    fn wrap(&self, value: Value) -> Element {
        Element::new(self.clone(), value)
    }

    fn check_member(&self, e: &Element) -> Result<()> {
        validate::member(
            e.structure() == self,
            self.kind(),
            "element belongs to a different structure",
        )
    }

    /// A member whose value has the wrong variant; construction rules this out
    fn representation_error(&self) -> Error {
        Error::not_member(self.kind(), "value has the wrong representation")
    }

    /// The group operation
    pub fn apply(&self, a: &Element, b: &Element) -> Result<Element> {
        self.require(Capability::SemiGroup)?;
        self.check_member(a)?;
        self.check_member(b)?;
        let value = match (self, a.value(), b.value()) {
            (Self::ZPlus(z), Value::SignedInteger(x), Value::SignedInteger(y)) => {
                Value::SignedInteger(z.apply(x, y))
            }
            (Self::ZMod(z), Value::Integer(x), Value::Integer(y)) => Value::Integer(z.add(x, y)),
            (Self::ZTimesMod(z), Value::Integer(x), Value::Integer(y)) => {
                Value::Integer(z.apply(x, y))
            }
            (Self::GStarModPrime(g), Value::Integer(x), Value::Integer(y)) => {
                Value::Integer(g.apply(x, y))
            }
            (Self::BinaryField(f), Value::Polynomial(x), Value::Polynomial(y)) => {
                Value::Polynomial(f.add(x, y))
            }
            (Self::EcPrime(g), Value::PrimePoint(p), Value::PrimePoint(q)) => {
                Value::PrimePoint(g.apply(p, q)?)
            }
            (Self::EcBinary(g), Value::BinaryPoint(p), Value::BinaryPoint(q)) => {
                Value::BinaryPoint(g.apply(p, q)?)
            }
            (Self::Product(_), Value::Tuple(xs), Value::Tuple(ys)) => Value::Tuple(
                xs.iter()
                    .zip(ys)
                    .map(|(x, y)| x.apply(y))
                    .collect::<Result<_>>()?,
            ),
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// The identity element
    pub fn identity(&self) -> Result<Element> {
        self.require(Capability::Monoid)?;
        let value = match self {
            Self::ZPlus(_) => Value::SignedInteger(BigInt::zero()),
            Self::ZMod(_) => Value::Integer(BigUint::zero()),
            Self::ZTimesMod(z) => Value::Integer(z.identity()),
            Self::GStarModPrime(_) => Value::Integer(BigUint::one()),
            Self::BinaryField(_) => Value::Polynomial(BinaryPolynomial::zero()),
            Self::EcPrime(_) => Value::PrimePoint(EcPoint::Infinity),
            Self::EcBinary(_) => Value::BinaryPoint(EcPoint::Infinity),
            Self::Product(p) => Value::Tuple(
                p.components()
                    .iter()
                    .map(AlgebraicStructure::identity)
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(self.wrap(value))
    }

    /// The inverse of `a`
    pub fn invert(&self, a: &Element) -> Result<Element> {
        self.require(Capability::Group)?;
        self.check_member(a)?;
        let value = match (self, a.value()) {
            (Self::ZPlus(z), Value::SignedInteger(x)) => Value::SignedInteger(z.invert(x)),
            (Self::ZMod(z), Value::Integer(x)) => Value::Integer(z.neg(x)),
            (Self::GStarModPrime(g), Value::Integer(x)) => Value::Integer(g.invert(x)?),
            (Self::BinaryField(_), Value::Polynomial(x)) => Value::Polynomial(x.clone()),
            (Self::EcPrime(g), Value::PrimePoint(p)) => Value::PrimePoint(g.invert(p)?),
            (Self::EcBinary(g), Value::BinaryPoint(p)) => Value::BinaryPoint(g.invert(p)?),
            (Self::Product(_), Value::Tuple(xs)) => {
                Value::Tuple(xs.iter().map(Element::invert).collect::<Result<_>>()?)
            }
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// a combined with the inverse of b
    pub fn apply_inverse(&self, a: &Element, b: &Element) -> Result<Element> {
        self.apply(a, &self.invert(b)?)
    }

    /// `a` applied to itself `k` times; k = 0 gives the identity
    pub fn self_apply(&self, a: &Element, k: &BigUint) -> Result<Element> {
        self.require(Capability::SemiGroup)?;
        self.check_member(a)?;
        if k.is_zero() {
            return self.identity();
        }
        let value = match (self, a.value()) {
            (Self::ZPlus(z), Value::SignedInteger(x)) => {
                Value::SignedInteger(z.self_apply(x, &BigInt::from(k.clone())))
            }
            (Self::ZMod(z), Value::Integer(x)) => Value::Integer(z.times(x, k)),
            (Self::ZTimesMod(z), Value::Integer(x)) => Value::Integer(z.self_apply(x, k)),
            (Self::GStarModPrime(g), Value::Integer(x)) => Value::Integer(g.self_apply(x, k)),
            // characteristic 2: a + a = 0
            (Self::BinaryField(_), Value::Polynomial(x)) => Value::Polynomial(if k.bit(0) {
                x.clone()
            } else {
                BinaryPolynomial::zero()
            }),
            (Self::EcPrime(g), Value::PrimePoint(p)) => Value::PrimePoint(g.self_apply(p, k)?),
            (Self::EcBinary(g), Value::BinaryPoint(p)) => Value::BinaryPoint(g.self_apply(p, k)?),
            (Self::Product(_), Value::Tuple(xs)) => Value::Tuple(
                xs.iter()
                    .map(|x| x.self_apply(k))
                    .collect::<Result<_>>()?,
            ),
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// `self_apply` for a signed count; negative counts invert first
    pub fn self_apply_signed(&self, a: &Element, k: &BigInt) -> Result<Element> {
        if k.is_negative() {
            let inverse = self.invert(a)?;
            return self.self_apply(&inverse, k.magnitude());
        }
        self.self_apply(a, k.magnitude())
    }

    /// The default generator of a cyclic group
    pub fn default_generator(&self) -> Result<Element> {
        self.require(Capability::Cyclic)?;
        let value = match self {
            Self::ZPlus(z) => Value::SignedInteger(z.generator()),
            Self::ZMod(z) => Value::Integer(z.one()),
            Self::GStarModPrime(g) => Value::Integer(g.generator().clone()),
            Self::EcPrime(g) => Value::PrimePoint(g.generator().clone()),
            Self::EcBinary(g) => Value::BinaryPoint(g.generator().clone()),
            _ => return Err(Error::unsupported(self.kind(), Capability::Cyclic)),
        };
        Ok(self.wrap(value))
    }

    /// Whether `a` generates this cyclic group
    pub fn is_generator(&self, a: &Element) -> Result<bool> {
        self.require(Capability::Cyclic)?;
        self.check_member(a)?;
        match (self, a.value()) {
            (Self::ZPlus(z), Value::SignedInteger(x)) => Ok(z.is_generator(x)),
            (Self::ZMod(z), Value::Integer(x)) => Ok(z.is_additive_generator(x)),
            (Self::GStarModPrime(g), Value::Integer(x)) => Ok(g.is_generator(x)),
            (Self::EcPrime(g), Value::PrimePoint(p)) => g.is_generator(p),
            (Self::EcBinary(g), Value::BinaryPoint(p)) => g.is_generator(p),
            _ => Err(self.representation_error()),
        }
    }

    /// Uniformly random element drawn from `rng`
    ///
    /// Curve groups return a point of the generated subgroup other than the
    /// identity. The integers admit no uniform distribution.
    pub fn random_element<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<Element> {
        let value = match self {
            Self::ZPlus(_) => {
                return Err(Error::param(
                    "ZPlus",
                    "no uniform distribution over the integers",
                ))
            }
            Self::ZMod(z) => Value::Integer(z.random(rng)?),
            Self::ZTimesMod(z) => Value::Integer(z.random(rng)?),
            Self::GStarModPrime(g) => Value::Integer(g.random_element(rng)?),
            Self::BinaryField(f) => Value::Polynomial(f.random(rng)?),
            Self::EcPrime(g) => Value::PrimePoint(g.random_element(rng)?),
            Self::EcBinary(g) => Value::BinaryPoint(g.random_element(rng)?),
            Self::Product(p) => Value::Tuple(
                p.components()
                    .iter()
                    .map(|c| c.random_element(&mut *rng))
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(self.wrap(value))
    }

    /// Random generator of a cyclic group
    pub fn random_generator<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Element> {
        self.require(Capability::Cyclic)?;
        if let Self::ZPlus(z) = self {
            let mut coin = [0u8; 1];
            rng.fill_bytes(&mut coin);
            let g = z.generator();
            let g = if coin[0] & 1 == 1 { z.invert(&g) } else { g };
            return Ok(self.wrap(Value::SignedInteger(g)));
        }
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let candidate = self.random_element(rng)?;
            if self.is_generator(&candidate)? {
                return Ok(candidate);
            }
        }
        Err(Error::SamplingExhausted {
            context: self.kind(),
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    /// Ring multiplication
    pub fn multiply(&self, a: &Element, b: &Element) -> Result<Element> {
        self.require(Capability::Ring)?;
        self.check_member(a)?;
        self.check_member(b)?;
        let value = match (self, a.value(), b.value()) {
            (Self::ZMod(z), Value::Integer(x), Value::Integer(y)) => Value::Integer(z.mul(x, y)),
            (Self::BinaryField(f), Value::Polynomial(x), Value::Polynomial(y)) => {
                Value::Polynomial(f.mul(x, y))
            }
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// The multiplicative identity of a ring
    pub fn one(&self) -> Result<Element> {
        self.require(Capability::Ring)?;
        let value = match self {
            Self::ZMod(z) => Value::Integer(z.one()),
            Self::BinaryField(_) => Value::Polynomial(BinaryPolynomial::one()),
            _ => return Err(Error::unsupported(self.kind(), Capability::Ring)),
        };
        Ok(self.wrap(value))
    }

    /// a^k in a ring
    pub fn power(&self, a: &Element, k: &BigUint) -> Result<Element> {
        self.require(Capability::Ring)?;
        self.check_member(a)?;
        let value = match (self, a.value()) {
            (Self::ZMod(z), Value::Integer(x)) => Value::Integer(z.pow(x, k)),
            (Self::BinaryField(f), Value::Polynomial(x)) => Value::Polynomial(f.pow(x, k)),
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// a^-1 in a field, failing with `DivisionByZero` on zero
    pub fn multiplicative_inverse(&self, a: &Element) -> Result<Element> {
        self.require(Capability::Field)?;
        self.check_member(a)?;
        let value = match (self, a.value()) {
            (Self::ZMod(z), Value::Integer(x)) => Value::Integer(z.mul_inverse(x)?),
            (Self::BinaryField(f), Value::Polynomial(x)) => Value::Polynomial(f.invert(x)?),
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// a / b in a field
    pub fn divide(&self, a: &Element, b: &Element) -> Result<Element> {
        self.multiply(a, &self.multiplicative_inverse(b)?)
    }

    /// Square root in a field, failing with `NoSquareRoot` on non-residues
    pub fn sqrt(&self, a: &Element) -> Result<Element> {
        self.require(Capability::Field)?;
        self.check_member(a)?;
        let value = match (self, a.value()) {
            (Self::ZMod(z), Value::Integer(x)) => Value::Integer(z.sqrt(x)?),
            (Self::BinaryField(f), Value::Polynomial(x)) => Value::Polynomial(f.sqrt(x)?),
            _ => return Err(self.representation_error()),
        };
        Ok(self.wrap(value))
    }

    /// The ring Z_n, if this is one
    pub fn as_zmod(&self) -> Option<&ZMod> {
        match self {
            Self::ZMod(z) => Some(z),
            _ => None,
        }
    }

    /// The binary field, if this is one
    pub fn as_binary_field(&self) -> Option<&BinaryField> {
        match self {
            Self::BinaryField(f) => Some(f),
            _ => None,
        }
    }

    /// The prime-field curve group, if this is one
    pub fn as_prime_curve(&self) -> Option<&EcGroup<ZModPrime>> {
        match self {
            Self::EcPrime(g) => Some(g),
            _ => None,
        }
    }

    /// The binary-field curve group, if this is one
    pub fn as_binary_curve(&self) -> Option<&EcGroup<BinaryField>> {
        match self {
            Self::EcBinary(g) => Some(g),
            _ => None,
        }
    }

    /// The product, if this is one
    pub fn as_product(&self) -> Option<&ProductSet> {
        match self {
            Self::Product(p) => Some(p),
            _ => None,
        }
    }
}

impl From<EcGroup<ZModPrime>> for AlgebraicStructure {
    fn from(group: EcGroup<ZModPrime>) -> Self {
        Self::EcPrime(Arc::new(group))
    }
}

impl From<EcGroup<BinaryField>> for AlgebraicStructure {
    fn from(group: EcGroup<BinaryField>) -> Self {
        Self::EcBinary(Arc::new(group))
    }
}

impl From<ProductSet> for AlgebraicStructure {
    fn from(product: ProductSet) -> Self {
        Self::Product(Arc::new(product))
    }
}

/// Same kind and same defining parameters
impl PartialEq for AlgebraicStructure {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
            Arc::ptr_eq(a, b) || a == b
        }
        match (self, other) {
            (Self::ZPlus(_), Self::ZPlus(_)) => true,
            (Self::ZMod(a), Self::ZMod(b)) => same(a, b),
            (Self::ZTimesMod(a), Self::ZTimesMod(b)) => same(a, b),
            (Self::GStarModPrime(a), Self::GStarModPrime(b)) => same(a, b),
            (Self::BinaryField(a), Self::BinaryField(b)) => same(a, b),
            (Self::EcPrime(a), Self::EcPrime(b)) => same(a, b),
            (Self::EcBinary(a), Self::EcBinary(b)) => same(a, b),
            (Self::Product(a), Self::Product(b)) => same(a, b),
            _ => false,
        }
    }
}

impl Eq for AlgebraicStructure {}

impl fmt::Display for AlgebraicStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZPlus(_) => f.write_str("Z"),
            Self::ZMod(z) => write!(f, "{}", z),
            Self::ZTimesMod(z) => write!(f, "Z*_{}", z.modulus()),
            Self::GStarModPrime(g) => write!(f, "{}", g),
            Self::BinaryField(b) => write!(f, "{}", b),
            Self::EcPrime(g) => write!(f, "{}", g),
            Self::EcBinary(g) => write!(f, "{}", g),
            Self::Product(p) => write!(f, "{}", p),
        }
    }
}
