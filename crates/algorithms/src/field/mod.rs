//! Finite fields
//!
//! Two concrete realizations: integers modulo a prime ([`ZModPrime`], with the
//! general ring [`ZMod`] underneath) and binary extension fields
//! ([`BinaryField`]). Elliptic curves are generic over [`FiniteField`].

use core::fmt::Debug;
use core::hash::Hash;

use calgebra_api::Result;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

mod binary;
mod zmod;

pub use binary::{BinaryField, BinaryPolynomial};
pub use zmod::{ZMod, ZModPrime};

/// Arithmetic of a finite field with canonically reduced elements
///
/// Every method taking elements assumes they belong to this field; callers
/// check with [`FiniteField::contains`] at the boundary.
pub trait FiniteField: Clone + Debug + PartialEq + Eq + Send + Sync {
    /// Canonical element representation
    type Elem: Clone + Debug + PartialEq + Eq + Hash + Send + Sync;

    /// Additive identity
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity
    fn one(&self) -> Self::Elem;

    /// Whether `a` is the additive identity
    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }

    /// Whether `a` is a canonical element of this field
    fn contains(&self, a: &Self::Elem) -> bool;

    /// a + b
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// a - b
    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// -a
    fn neg(&self, a: &Self::Elem) -> Self::Elem;

    /// a * b
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// a^2
    fn square(&self, a: &Self::Elem) -> Self::Elem {
        self.mul(a, a)
    }

    /// a^-1, failing with `DivisionByZero` on zero
    fn invert(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// a / b
    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem> {
        Ok(self.mul(a, &self.invert(b)?))
    }

    /// a^k by square-and-multiply
    fn pow(&self, a: &Self::Elem, k: &BigUint) -> Self::Elem {
        let mut acc = self.one();
        for i in (0..k.bits()).rev() {
            acc = self.square(&acc);
            if k.bit(i) {
                acc = self.mul(&acc, a);
            }
        }
        acc
    }

    /// Square root, failing with `NoSquareRoot` on non-residues
    fn sqrt(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// Field characteristic
    fn characteristic(&self) -> BigUint;

    /// Number of elements q
    fn size(&self) -> BigUint;

    /// Bytes needed for one element in big-endian form
    fn byte_len(&self) -> usize;

    /// Canonical non-negative integer of an element
    fn to_biguint(&self, a: &Self::Elem) -> BigUint;

    /// Element from its canonical integer, failing with `NotAMember`
    fn from_biguint(&self, value: &BigUint) -> Result<Self::Elem>;

    /// Uniformly random element
    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<Self::Elem>;
}
