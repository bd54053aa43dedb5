//! Prime-order subgroups of Z*_p

use core::fmt;

use calgebra_api::{validate, Error, Result};
use calgebra_common::{is_probable_prime, random_in_range};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::field::ZMod;

/// The subgroup of Z*_p of prime order q, for q dividing p - 1
///
/// Elements are the residues v with v^q = 1 (mod p). Every element other
/// than 1 generates the group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GStarModPrime {
    field: ZMod,
    order: BigUint,
    cofactor: BigUint,
    generator: BigUint,
}

impl GStarModPrime {
    /// Order-`q` subgroup of Z*_`p`
    pub fn new(p: BigUint, q: BigUint) -> Result<Self> {
        validate::parameter(is_probable_prime(&p), "GStarModPrime", "modulus is not prime")?;
        validate::parameter(is_probable_prime(&q), "GStarModPrime", "order is not prime")?;
        let (cofactor, rem) = (&p - 1u32).div_rem(&q);
        validate::parameter(rem.is_zero(), "GStarModPrime", "order does not divide p - 1")?;

        let field = ZMod::new(p)?;
        let generator = Self::find_generator(&field, &cofactor)?;
        Ok(Self {
            field,
            order: q,
            cofactor,
            generator,
        })
    }

    /// Quadratic residues modulo a safe prime p = 2q + 1
    pub fn safe_prime(p: BigUint) -> Result<Self> {
        validate::parameter(
            p > BigUint::from(4u32),
            "GStarModPrime",
            "safe prime must be at least 5",
        )?;
        let q = (&p - 1u32) >> 1;
        Self::new(p, q)
    }

    /// h^((p-1)/q) for the smallest h >= 2 not mapped to 1
    fn find_generator(field: &ZMod, cofactor: &BigUint) -> Result<BigUint> {
        let mut h = BigUint::from(2u32);
        while &h < field.modulus() {
            let g = field.pow(&h, cofactor);
            if !g.is_one() {
                return Ok(g);
            }
            h += 1u32;
        }
        Err(Error::param("GStarModPrime", "no generator exists"))
    }

    /// The prime modulus p
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// The prime order q
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// (p - 1) / q
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// The default generator
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// 0 < v < p and v^q = 1
    pub fn contains(&self, value: &BigUint) -> bool {
        !value.is_zero() && self.field.contains(value) && self.field.pow(value, &self.order).is_one()
    }

    /// a * b mod p
    pub fn apply(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.field.mul(a, b)
    }

    /// a^-1 mod p
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        self.field.mul_inverse(a)
    }

    /// a^k mod p
    pub fn self_apply(&self, a: &BigUint, k: &BigUint) -> BigUint {
        self.field.pow(a, k)
    }

    /// Any member other than 1
    pub fn is_generator(&self, a: &BigUint) -> bool {
        !a.is_one() && self.contains(a)
    }

    /// h^((p-1)/q) for uniform h in [1, p): uniform over the subgroup
    pub fn random_element<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        let h = random_in_range(rng, &BigUint::one(), self.modulus())?;
        Ok(self.field.pow(&h, &self.cofactor))
    }
}

impl fmt::Display for GStarModPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G_{}(Z*_{})", self.order, self.modulus())
    }
}
