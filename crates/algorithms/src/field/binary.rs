//! Binary extension fields GF(2^m)
//!
//! Elements are polynomials over GF(2) stored as little-endian 64-bit limbs,
//! bit i being the coefficient of x^i. Field elements are always reduced
//! below the degree m of the reduction polynomial.

use core::fmt;
use core::hash::{Hash, Hasher};

use calgebra_api::{validate, Error, Result};
use calgebra_common::random_bits;
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};

use super::FiniteField;

/// A polynomial over GF(2)
///
/// The limb vector never carries zero limbs at the top, so every polynomial
/// has exactly one representation.
#[derive(Clone, Default)]
pub struct BinaryPolynomial {
    limbs: Vec<u64>,
}

/// Carry-less product of two words
#[inline]
fn clmul(a: u64, b: u64) -> u128 {
    let a = a as u128;
    let mut r = 0u128;
    for i in 0..64 {
        if (b >> i) & 1 == 1 {
            r ^= a << i;
        }
    }
    r
}

/// Interleave zero bits: bit i moves to bit 2i
#[inline]
fn spread(w: u32) -> u64 {
    let mut x = w as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

impl BinaryPolynomial {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Polynomial from little-endian limbs
    pub fn from_limbs(limbs: Vec<u64>) -> Self {
        let mut p = Self { limbs };
        p.normalize();
        p
    }

    /// The monomial x^i
    pub fn monomial(i: usize) -> Self {
        let mut p = Self::zero();
        p.toggle_bit(i);
        p
    }

    /// Sum of the monomials x^e for each listed exponent
    pub fn from_exponents(exponents: &[usize]) -> Self {
        let mut p = Self::zero();
        for &e in exponents {
            p.toggle_bit(e);
        }
        p
    }

    /// Polynomial from a big-endian coefficient bit string
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; (bytes.len() + 7) / 8];
        for (i, &b) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (b as u64) << (8 * (i % 8));
        }
        Self::from_limbs(limbs)
    }

    /// Big-endian bytes, left-padded to at least `len` bytes
    pub fn to_bytes_be(&self, len: usize) -> Vec<u8> {
        let needed = self.degree().map_or(0, |d| d / 8 + 1);
        let width = needed.max(len);
        let mut out = vec![0u8; width];
        for i in 0..needed {
            out[width - 1 - i] = (self.limbs[i / 8] >> (8 * (i % 8))) as u8;
        }
        out
    }

    /// Polynomial whose coefficient bits are the binary digits of `value`
    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_limbs(value.to_u64_digits())
    }

    /// The integer whose binary digits are the coefficients
    pub fn to_biguint(&self) -> BigUint {
        let digits = self
            .limbs
            .iter()
            .flat_map(|&l| [l as u32, (l >> 32) as u32])
            .collect();
        BigUint::new(digits)
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Whether this is the constant 1
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Degree, or `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        let top = self.limbs.last()?;
        Some((self.limbs.len() - 1) * 64 + 63 - top.leading_zeros() as usize)
    }

    /// Coefficient of x^i
    pub fn bit(&self, i: usize) -> bool {
        self.limbs
            .get(i / 64)
            .map_or(false, |l| (l >> (i % 64)) & 1 == 1)
    }

    /// Exponents of the non-zero terms, ascending
    pub fn exponents(&self) -> Vec<usize> {
        let bits = self.degree().map_or(0, |d| d + 1);
        (0..bits).filter(|&i| self.bit(i)).collect()
    }

    fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }

    fn toggle_bit(&mut self, i: usize) {
        let limb = i / 64;
        if self.limbs.len() <= limb {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] ^= 1 << (i % 64);
        self.normalize();
    }

    /// self += other * x^shift
    fn xor_shifted(&mut self, other: &Self, shift: usize) {
        if other.is_zero() {
            return;
        }
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;
        let needed = other.limbs.len() + limb_shift + 1;
        if self.limbs.len() < needed {
            self.limbs.resize(needed, 0);
        }
        for (i, &w) in other.limbs.iter().enumerate() {
            self.limbs[i + limb_shift] ^= w << bit_shift;
            if bit_shift != 0 {
                self.limbs[i + limb_shift + 1] ^= w >> (64 - bit_shift);
            }
        }
        self.normalize();
    }

    /// Sum (XOR of coefficients)
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut limbs = long.limbs.clone();
        for (l, s) in limbs.iter_mut().zip(short.limbs.iter()) {
            *l ^= s;
        }
        Self::from_limbs(limbs)
    }

    /// Product in GF(2)[x], unreduced
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut out = vec![0u64; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.limbs.iter().enumerate() {
                let r = clmul(a, b);
                out[i + j] ^= r as u64;
                out[i + j + 1] ^= (r >> 64) as u64;
            }
        }
        Self::from_limbs(out)
    }

    /// Square in GF(2)[x], unreduced
    ///
    /// Squaring is linear in characteristic 2: coefficient i moves to 2i.
    pub fn square(&self) -> Self {
        let mut out = Vec::with_capacity(self.limbs.len() * 2);
        for &w in &self.limbs {
            out.push(spread(w as u32));
            out.push(spread((w >> 32) as u32));
        }
        Self::from_limbs(out)
    }

    /// Quotient and remainder, or `None` for a zero divisor
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let d = divisor.degree()?;
        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        while let Some(rd) = remainder.degree() {
            if rd < d {
                break;
            }
            let shift = rd - d;
            remainder.xor_shifted(divisor, shift);
            quotient.toggle_bit(shift);
        }
        Some((quotient, remainder))
    }

    /// Greatest common divisor in GF(2)[x]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = match a.div_rem(&b) {
                Some((_, r)) => r,
                None => break,
            };
            a = core::mem::replace(&mut b, r);
        }
        a
    }
}

impl ConstantTimeEq for BinaryPolynomial {
    fn ct_eq(&self, other: &Self) -> Choice {
        let len = self.limbs.len().max(other.limbs.len());
        let mut acc = Choice::from(1u8);
        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(0);
            let b = other.limbs.get(i).copied().unwrap_or(0);
            acc &= a.ct_eq(&b);
        }
        acc
    }
}

impl PartialEq for BinaryPolynomial {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for BinaryPolynomial {}

impl Hash for BinaryPolynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl fmt::Debug for BinaryPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryPolynomial(0x{:x})", self)
    }
}

impl fmt::LowerHex for BinaryPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes_be(1)))
    }
}

impl fmt::Display for BinaryPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let terms: Vec<String> = self
            .exponents()
            .into_iter()
            .rev()
            .map(|e| match e {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{}", e),
            })
            .collect();
        f.write_str(&terms.join(" + "))
    }
}

/// Distinct prime factors of `n`
fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// The field GF(2^m) = GF(2)[x] / (f) for an irreducible f of degree m
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryField {
    modulus: BinaryPolynomial,
    degree: usize,
    /// Exponents of f below the leading term
    terms: Vec<usize>,
}

impl BinaryField {
    /// Field defined by the reduction polynomial `modulus`
    ///
    /// The polynomial is checked for irreducibility (Rabin's test); a
    /// reducible polynomial does not define a field and is rejected.
    pub fn new(modulus: BinaryPolynomial) -> Result<Self> {
        let degree = modulus.degree().unwrap_or(0);
        validate::parameter(
            degree >= 1,
            "BinaryField",
            "reduction polynomial must have positive degree",
        )?;
        let mut terms = modulus.exponents();
        terms.pop();

        let field = Self {
            modulus,
            degree,
            terms,
        };
        validate::parameter(
            field.is_irreducible(),
            "BinaryField",
            "reduction polynomial is reducible",
        )?;
        Ok(field)
    }

    /// Field defined by the polynomial with the listed term exponents
    pub fn from_exponents(exponents: &[usize]) -> Result<Self> {
        Self::new(BinaryPolynomial::from_exponents(exponents))
    }

    /// The reduction polynomial f
    pub fn modulus(&self) -> &BinaryPolynomial {
        &self.modulus
    }

    /// Extension degree m
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Reduce an arbitrary polynomial modulo f
    pub fn reduce(&self, a: &BinaryPolynomial) -> BinaryPolynomial {
        let mut r = a.clone();
        while let Some(d) = r.degree() {
            if d < self.degree {
                break;
            }
            let shift = d - self.degree;
            // x^m = sum of the lower terms of f
            r.toggle_bit(d);
            for &t in &self.terms {
                r.toggle_bit(shift + t);
            }
        }
        r
    }

    /// Rabin's test: x^(2^m) = x mod f and gcd(x^(2^(m/r)) - x, f) = 1
    /// for every prime r dividing m
    fn is_irreducible(&self) -> bool {
        let m = self.degree;
        if m == 1 {
            return true;
        }
        let x = BinaryPolynomial::monomial(1);

        let mut frobenius = Vec::with_capacity(m + 1);
        let mut current = x.clone();
        frobenius.push(current.clone());
        for _ in 0..m {
            current = self.reduce(&current.square());
            frobenius.push(current.clone());
        }

        if frobenius[m] != x {
            return false;
        }
        prime_factors(m)
            .into_iter()
            .all(|r| frobenius[m / r].add(&x).gcd(&self.modulus).is_one())
    }

    /// Absolute trace Tr(a) = a + a^2 + ... + a^(2^(m-1)), which lies in GF(2)
    pub fn trace(&self, a: &BinaryPolynomial) -> bool {
        let mut t = a.clone();
        let mut sum = a.clone();
        for _ in 1..self.degree {
            t = self.square(&t);
            sum = sum.add(&t);
        }
        sum.is_one()
    }

    /// Half-trace H(a) = sum of a^(2^(2i)) for i in 0..=(m-1)/2
    ///
    /// Defined for odd m only. When Tr(a) = 0, z = H(a) solves z^2 + z = a.
    pub fn half_trace(&self, a: &BinaryPolynomial) -> Result<BinaryPolynomial> {
        validate::parameter(
            self.degree % 2 == 1,
            "BinaryField",
            "half-trace needs an odd extension degree",
        )?;
        let mut h = a.clone();
        let mut t = a.clone();
        for _ in 0..(self.degree - 1) / 2 {
            t = self.square(&self.square(&t));
            h = h.add(&t);
        }
        Ok(h)
    }

    /// A root of z^2 + z = c, or `None` when Tr(c) = 1 (odd m only)
    pub fn solve_quadratic(&self, c: &BinaryPolynomial) -> Result<Option<BinaryPolynomial>> {
        if self.trace(c) {
            return Ok(None);
        }
        self.half_trace(c).map(Some)
    }
}

impl fmt::Display for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.degree)
    }
}

impl FiniteField for BinaryField {
    type Elem = BinaryPolynomial;

    fn zero(&self) -> BinaryPolynomial {
        BinaryPolynomial::zero()
    }

    fn one(&self) -> BinaryPolynomial {
        BinaryPolynomial::one()
    }

    fn is_zero(&self, a: &BinaryPolynomial) -> bool {
        a.is_zero()
    }

    fn contains(&self, a: &BinaryPolynomial) -> bool {
        a.degree().map_or(true, |d| d < self.degree)
    }

    fn add(&self, a: &BinaryPolynomial, b: &BinaryPolynomial) -> BinaryPolynomial {
        a.add(b)
    }

    fn sub(&self, a: &BinaryPolynomial, b: &BinaryPolynomial) -> BinaryPolynomial {
        a.add(b)
    }

    fn neg(&self, a: &BinaryPolynomial) -> BinaryPolynomial {
        a.clone()
    }

    fn mul(&self, a: &BinaryPolynomial, b: &BinaryPolynomial) -> BinaryPolynomial {
        self.reduce(&a.mul(b))
    }

    fn square(&self, a: &BinaryPolynomial) -> BinaryPolynomial {
        self.reduce(&a.square())
    }

    /// Extended Euclid over GF(2)[x] keeping only the cofactor of `a`
    fn invert(&self, a: &BinaryPolynomial) -> Result<BinaryPolynomial> {
        validate::non_zero(a.is_zero(), "BinaryField")?;
        let mut u = self.reduce(a);
        let mut v = self.modulus.clone();
        let mut g1 = BinaryPolynomial::one();
        let mut g2 = BinaryPolynomial::zero();

        while !u.is_one() {
            let (Some(mut du), Some(mut dv)) = (u.degree(), v.degree()) else {
                // u reached zero: a shares a factor with f
                return Err(Error::DivisionByZero {
                    context: "BinaryField",
                });
            };
            if du < dv {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
                core::mem::swap(&mut du, &mut dv);
            }
            let j = du - dv;
            u.xor_shifted(&v, j);
            g1.xor_shifted(&g2, j);
        }
        Ok(self.reduce(&g1))
    }

    /// Every element is a square: sqrt(a) = a^(2^(m-1))
    fn sqrt(&self, a: &BinaryPolynomial) -> Result<BinaryPolynomial> {
        let mut r = a.clone();
        for _ in 1..self.degree {
            r = self.square(&r);
        }
        Ok(r)
    }

    fn characteristic(&self) -> BigUint {
        BigUint::from(2u32)
    }

    fn size(&self) -> BigUint {
        BigUint::one() << self.degree
    }

    fn byte_len(&self) -> usize {
        (self.degree + 7) / 8
    }

    fn to_biguint(&self, a: &BinaryPolynomial) -> BigUint {
        a.to_biguint()
    }

    fn from_biguint(&self, value: &BigUint) -> Result<BinaryPolynomial> {
        let p = BinaryPolynomial::from_biguint(value);
        validate::member(
            self.contains(&p),
            "BinaryField",
            "polynomial degree not below the field degree",
        )?;
        Ok(p)
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BinaryPolynomial> {
        Ok(BinaryPolynomial::from_biguint(&random_bits(
            rng,
            self.degree as u64,
        )))
    }
}
