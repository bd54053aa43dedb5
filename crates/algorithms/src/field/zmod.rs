//! Integers modulo n

use core::fmt;

use calgebra_api::{validate, Capability, Error, Result};
use calgebra_common::{
    gcd, has_sqrt_mod_prime, is_probable_prime, mod_inv, random_below, sqrt_mod_prime,
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use super::FiniteField;

/// The ring Z_n of residues modulo a positive modulus
///
/// When the modulus is prime the ring is also a field; [`ZMod::is_field`]
/// reports that and the field operations become available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZMod {
    modulus: BigUint,
    prime: bool,
}

impl ZMod {
    /// Integers modulo `modulus`
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(!modulus.is_zero(), "ZMod", "modulus must be positive")?;
        let prime = is_probable_prime(&modulus);
        Ok(Self { modulus, prime })
    }

    /// The modulus n
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether the modulus is prime
    pub fn is_field(&self) -> bool {
        self.prime
    }

    /// Structure name used in errors
    pub fn kind(&self) -> &'static str {
        if self.prime {
            "ZModPrime"
        } else {
            "ZMod"
        }
    }

    /// Whether `value` is a canonical residue
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Accept a canonical residue
    pub fn element(&self, value: &BigUint) -> Result<BigUint> {
        validate::member(self.contains(value), self.kind(), "value not below the modulus")?;
        Ok(value.clone())
    }

    /// Reduce an arbitrary integer to its canonical residue
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Reduce a signed integer to its canonical residue
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let n = BigInt::from(self.modulus.clone());
        // mod_floor is non-negative for a positive modulus
        value.mod_floor(&n).magnitude().clone()
    }

    /// a + b mod n
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// a - b mod n
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            (a - b) % &self.modulus
        } else {
            (&self.modulus - (b - a) % &self.modulus) % &self.modulus
        }
    }

    /// -a mod n
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// a * b mod n
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// a * k mod n, the additive group's scalar action
    pub fn times(&self, a: &BigUint, k: &BigUint) -> BigUint {
        self.mul(a, &self.reduce(k))
    }

    /// a^k mod n
    pub fn pow(&self, a: &BigUint, k: &BigUint) -> BigUint {
        if self.modulus.is_one() {
            return BigUint::zero();
        }
        a.modpow(k, &self.modulus)
    }

    /// The multiplicative identity (zero in the trivial ring)
    pub fn one(&self) -> BigUint {
        self.reduce(&BigUint::one())
    }

    /// Multiplicative inverse of a unit
    pub fn mul_inverse(&self, a: &BigUint) -> Result<BigUint> {
        validate::non_zero(a.is_zero(), self.kind())?;
        mod_inv(a, &self.modulus)
            .ok_or_else(|| Error::not_member(self.kind(), "value is not a unit"))
    }

    /// Whether `a` has a square root (prime modulus only)
    pub fn has_sqrt(&self, a: &BigUint) -> bool {
        self.prime && has_sqrt_mod_prime(a, &self.modulus)
    }

    /// Square root of a quadratic residue
    pub fn sqrt(&self, a: &BigUint) -> Result<BigUint> {
        if !self.prime {
            return Err(Error::unsupported(self.kind(), Capability::Field));
        }
        sqrt_mod_prime(a, &self.modulus).ok_or(Error::NoSquareRoot {
            context: self.kind(),
        })
    }

    /// Whether `a` generates the additive group Z_n
    pub fn is_additive_generator(&self, a: &BigUint) -> bool {
        gcd(a, &self.modulus).is_one()
    }

    /// Uniform residue
    pub fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        random_below(rng, &self.modulus)
    }

    /// Bytes in the big-endian encoding of the largest residue
    pub fn byte_len(&self) -> usize {
        ((self.modulus.bits() + 7) / 8) as usize
    }
}

/// The prime field GF(p)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZModPrime(ZMod);

impl ZModPrime {
    /// The field of residues modulo a prime `p`
    pub fn new(p: BigUint) -> Result<Self> {
        Self::try_from(ZMod::new(p)?)
    }

    /// The prime modulus
    pub fn modulus(&self) -> &BigUint {
        self.0.modulus()
    }

    /// The underlying ring
    pub fn as_ring(&self) -> &ZMod {
        &self.0
    }

    /// Whether `a` is a quadratic residue (zero included)
    pub fn has_sqrt(&self, a: &BigUint) -> bool {
        self.0.has_sqrt(a)
    }
}

impl TryFrom<ZMod> for ZModPrime {
    type Error = Error;

    fn try_from(ring: ZMod) -> Result<Self> {
        validate::parameter(ring.is_field(), "ZModPrime", "modulus is not prime")?;
        Ok(Self(ring))
    }
}

impl fmt::Display for ZMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z_{}", self.modulus)
    }
}

impl fmt::Display for ZModPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus())
    }
}

impl FiniteField for ZModPrime {
    type Elem = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }

    fn is_zero(&self, a: &BigUint) -> bool {
        a.is_zero()
    }

    fn contains(&self, a: &BigUint) -> bool {
        self.0.contains(a)
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.0.add(a, b)
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.0.sub(a, b)
    }

    fn neg(&self, a: &BigUint) -> BigUint {
        self.0.neg(a)
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.0.mul(a, b)
    }

    fn invert(&self, a: &BigUint) -> Result<BigUint> {
        self.0.mul_inverse(a)
    }

    fn pow(&self, a: &BigUint, k: &BigUint) -> BigUint {
        self.0.pow(a, k)
    }

    fn sqrt(&self, a: &BigUint) -> Result<BigUint> {
        self.0.sqrt(a)
    }

    fn characteristic(&self) -> BigUint {
        self.modulus().clone()
    }

    fn size(&self) -> BigUint {
        self.modulus().clone()
    }

    fn byte_len(&self) -> usize {
        self.0.byte_len()
    }

    fn to_biguint(&self, a: &BigUint) -> BigUint {
        a.clone()
    }

    fn from_biguint(&self, value: &BigUint) -> Result<BigUint> {
        self.0.element(value)
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        self.0.random(rng)
    }
}
