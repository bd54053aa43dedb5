//! Small validated groups and their known values

use calgebra_algorithms::{
    AlgebraicStructure, BinaryField, BinaryPolynomial, EcGroup, EllipticCurve, ZModPrime,
};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Shorthand for small unsigned constants
pub fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

/// Binary polynomial from a bit pattern
pub fn poly(bits: u64) -> BinaryPolynomial {
    BinaryPolynomial::from_limbs(vec![bits])
}

/// Deterministic generator for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// y^2 = x^3 + x + 1 over GF(23), 28 points
///
/// Too small for domain-parameter validation, so only the bare curve.
pub fn toy_curve() -> EllipticCurve<ZModPrime> {
    let field = ZModPrime::new(n(23)).unwrap();
    EllipticCurve::new(field, n(1), n(1)).unwrap()
}

/// Order of (3, 10) on [`toy_curve`]
pub const TOY_POINT_ORDER: u64 = 28;

/// y^2 = x^3 + x + 28 over GF(10007): prime order 9851, G = (2, 4582)
pub fn small_prime_group() -> EcGroup<ZModPrime> {
    EcGroup::from_integers(None, n(10007), n(1), n(28), n(2), n(4582), n(9851), n(1)).unwrap()
}

/// y^2 + xy = x^3 + x^2 + 9 over GF(2^13) with f = x^13 + x^4 + x^3 + x + 1
///
/// n = 4091, h = 2, G = (0x180d, 0x06c0) and 2G = (0x083f, 0x0bfd).
pub fn small_binary_group() -> EcGroup<BinaryField> {
    EcGroup::from_polynomials(
        None,
        BinaryPolynomial::from_exponents(&[13, 4, 3, 1, 0]),
        poly(1),
        poly(9),
        poly(0x180d),
        poly(0x06c0),
        n(4091),
        n(2),
    )
    .unwrap()
}

/// Both small groups behind the dynamic interface
pub fn small_structures() -> Vec<AlgebraicStructure> {
    vec![small_prime_group().into(), small_binary_group().into()]
}
