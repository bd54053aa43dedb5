//! Common number theory for arbitrary-precision integers

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Small primes used for trial division and as Miller-Rabin witnesses
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
    89, 97,
];

/// Perform modular exponentiation (a^b mod m)
///
/// `m` must be non-zero.
pub fn mod_exp(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    a.modpow(b, m)
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns `None` when `a` and `m` are not coprime.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() || m.is_one() {
        return None;
    }

    let a = a % m;
    if a.is_zero() {
        return None;
    }

    let modulus = BigInt::from(m.clone());
    let (mut old_r, mut r) = (BigInt::from(a), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    old_s.mod_floor(&modulus).to_biguint()
}

/// Miller-Rabin probable-prime test
///
/// Uses the first 25 primes as witnesses, which is deterministic far beyond
/// 64-bit inputs and has negligible error for cryptographic sizes.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for p in SMALL_PRIMES {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0) as usize;
    let d = &n_minus_one >> s;

    'witness: for a in SMALL_PRIMES {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Euler's criterion: whether `a` is a square modulo the odd prime `p`
///
/// Zero counts as a square. For `p = 2` every residue is a square.
pub fn has_sqrt_mod_prime(a: &BigUint, p: &BigUint) -> bool {
    let a = a % p;
    if a.is_zero() || *p == BigUint::from(2u32) {
        return true;
    }
    let exponent = (p - 1u32) >> 1;
    a.modpow(&exponent, p).is_one()
}

/// Square root modulo a prime (Tonelli-Shanks)
///
/// Returns `None` if `a` is a non-residue. `p` must be prime.
pub fn sqrt_mod_prime(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(a);
    }
    if *p == BigUint::from(2u32) {
        return Some(a);
    }
    if !has_sqrt_mod_prime(&a, p) {
        return None;
    }

    // p = 3 mod 4 has the closed form a^((p+1)/4)
    if (p % 4u32) == BigUint::from(3u32) {
        return Some(a.modpow(&((p + 1u32) >> 2), p));
    }

    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0) as usize;
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while has_sqrt_mod_prime(&z, p) {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1), p);

    while !t.is_one() {
        let mut i = 0usize;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i == m {
                return None;
            }
        }
        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
    Some(r)
}
