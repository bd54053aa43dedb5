//! The multiplicative monoid of integers modulo n

use calgebra_api::Result;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::field::ZMod;

/// Z_n under multiplication
///
/// Not a group: residues sharing a factor with n have no inverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZTimesMod {
    ring: ZMod,
}

impl ZTimesMod {
    /// Multiplicative monoid modulo `modulus`
    pub fn new(modulus: BigUint) -> Result<Self> {
        Ok(Self {
            ring: ZMod::new(modulus)?,
        })
    }

    /// The modulus n
    pub fn modulus(&self) -> &BigUint {
        self.ring.modulus()
    }

    /// Whether `value` is a canonical residue
    pub fn contains(&self, value: &BigUint) -> bool {
        self.ring.contains(value)
    }

    /// a * b mod n
    pub fn apply(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.ring.mul(a, b)
    }

    /// 1 mod n
    pub fn identity(&self) -> BigUint {
        self.ring.one()
    }

    /// a^k mod n
    pub fn self_apply(&self, a: &BigUint, k: &BigUint) -> BigUint {
        self.ring.pow(a, k)
    }

    /// Uniform residue
    pub fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        self.ring.random(rng)
    }
}
