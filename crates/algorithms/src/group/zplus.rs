//! The integers under addition

use num_bigint::BigInt;
use num_traits::{One, Signed};

/// The infinite cyclic group (Z, +), generated by 1 and -1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZPlus;

impl ZPlus {
    /// a + b
    pub fn apply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    /// -a
    pub fn invert(&self, a: &BigInt) -> BigInt {
        -a
    }

    /// k * a
    pub fn self_apply(&self, a: &BigInt, k: &BigInt) -> BigInt {
        a * k
    }

    /// The default generator 1
    pub fn generator(&self) -> BigInt {
        BigInt::one()
    }

    /// Only 1 and -1 generate Z
    pub fn is_generator(&self, a: &BigInt) -> bool {
        a.abs().is_one()
    }
}
