//! Uniform sampling from an injected randomness source
//!
//! Nothing here owns or seeds entropy; every function takes the caller's RNG.

use calgebra_api::{validate, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Uniform integer in `[0, 2^bits)`
pub fn random_bits<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let len = ((bits + 7) / 8) as usize;
    let mut buf = Zeroizing::new(vec![0u8; len]);
    rng.fill_bytes(buf.as_mut_slice());

    let excess = len * 8 - bits as usize;
    buf[0] &= 0xFFu8 >> excess;
    BigUint::from_bytes_be(buf.as_slice())
}

/// Uniform integer in `[0, bound)` by rejection sampling
///
/// Each candidate is accepted with probability above one half.
pub fn random_below<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint> {
    validate::parameter(!bound.is_zero(), "random_below", "bound must be positive")?;
    let bits = (bound - 1u32).bits();
    loop {
        let candidate = random_bits(rng, bits);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Uniform integer in `[low, high)`
pub fn random_in_range<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Result<BigUint> {
    validate::parameter(low < high, "random_in_range", "empty range")?;
    Ok(low + random_below(rng, &(high - low))?)
}
