//! Memoization of structure construction
//!
//! Building a structure can be expensive (primality tests, curve validation,
//! generator search). [`StructureCache`] hands out one shared instance per
//! set of defining parameters. It is an explicit object rather than a global:
//! callers that want sharing keep one around.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use calgebra_api::{validate, Result};
use calgebra_common::is_probable_prime;
use log::debug;
use num_bigint::BigUint;
use num_traits::One;

use super::AlgebraicStructure;
use crate::ec::standard_curve;
use crate::field::BinaryPolynomial;

/// Defining parameters of a cached structure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Z_n, prime or not
    ZMod(BigUint),
    /// Z_n under multiplication
    ZTimesMod(BigUint),
    /// Order-q subgroup of Z*_p
    GStarModPrime {
        /// p
        modulus: BigUint,
        /// q
        order: BigUint,
    },
    /// GF(2^m) by reduction polynomial
    BinaryField(BinaryPolynomial),
    /// Named curve, lowercased
    StandardCurve(String),
}

/// Thread-safe map from parameters to shared structures
///
/// Construction runs outside the lock. When two threads race on the same
/// key, the first insertion wins and both get that instance.
#[derive(Debug, Default)]
pub struct StructureCache {
    entries: Mutex<HashMap<CacheKey, AlgebraicStructure>>,
}

impl StructureCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, AlgebraicStructure>> {
        // entries are only ever inserted whole, so a poisoned map is still consistent
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn get_or_build<F>(&self, key: CacheKey, build: F) -> Result<AlgebraicStructure>
    where
        F: FnOnce() -> Result<AlgebraicStructure>,
    {
        if let Some(hit) = self.lock().get(&key) {
            return Ok(hit.clone());
        }
        let built = build()?;
        let mut entries = self.lock();
        let shared = entries.entry(key).or_insert_with(|| {
            debug!("cached {}", built);
            built
        });
        Ok(shared.clone())
    }

    /// Shared Z_n
    pub fn zmod(&self, modulus: BigUint) -> Result<AlgebraicStructure> {
        self.get_or_build(CacheKey::ZMod(modulus.clone()), || {
            AlgebraicStructure::zmod(modulus)
        })
    }

    /// Shared GF(p); a composite modulus is rejected before the lookup
    pub fn zmod_prime(&self, modulus: BigUint) -> Result<AlgebraicStructure> {
        validate::parameter(is_probable_prime(&modulus), "ZModPrime", "modulus is not prime")?;
        self.zmod(modulus)
    }

    /// Shared Z_n under multiplication
    pub fn ztimes_mod(&self, modulus: BigUint) -> Result<AlgebraicStructure> {
        self.get_or_build(CacheKey::ZTimesMod(modulus.clone()), || {
            AlgebraicStructure::ztimes_mod(modulus)
        })
    }

    /// Shared order-q subgroup of Z*_p
    pub fn gstar_mod_prime(&self, modulus: BigUint, order: BigUint) -> Result<AlgebraicStructure> {
        let key = CacheKey::GStarModPrime {
            modulus: modulus.clone(),
            order: order.clone(),
        };
        self.get_or_build(key, || AlgebraicStructure::gstar_mod_prime(modulus, order))
    }

    /// Shared quadratic-residue group of a safe prime
    ///
    /// Keyed like [`StructureCache::gstar_mod_prime`] with q = (p - 1) / 2, so
    /// both constructors share one instance.
    pub fn gstar_mod_safe_prime(&self, modulus: BigUint) -> Result<AlgebraicStructure> {
        let order = if modulus > BigUint::one() {
            (&modulus - 1u32) >> 1
        } else {
            BigUint::default()
        };
        let key = CacheKey::GStarModPrime {
            modulus: modulus.clone(),
            order,
        };
        self.get_or_build(key, || AlgebraicStructure::gstar_mod_safe_prime(modulus))
    }

    /// Shared GF(2^m)
    pub fn binary_field(&self, modulus: BinaryPolynomial) -> Result<AlgebraicStructure> {
        self.get_or_build(CacheKey::BinaryField(modulus.clone()), || {
            AlgebraicStructure::binary_field(modulus)
        })
    }

    /// Shared standard curve group, looked up case-insensitively
    pub fn standard_curve(&self, name: &str) -> Result<AlgebraicStructure> {
        self.get_or_build(CacheKey::StandardCurve(name.to_ascii_lowercase()), || {
            standard_curve(name)
        })
    }

    /// Number of cached structures
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget every cached structure; handed-out instances stay valid
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use calgebra_api::Error;

    use super::*;

    fn same_instance(a: &AlgebraicStructure, b: &AlgebraicStructure) -> bool {
        match (a, b) {
            (AlgebraicStructure::ZMod(x), AlgebraicStructure::ZMod(y)) => Arc::ptr_eq(x, y),
            (AlgebraicStructure::GStarModPrime(x), AlgebraicStructure::GStarModPrime(y)) => {
                Arc::ptr_eq(x, y)
            }
            (AlgebraicStructure::EcPrime(x), AlgebraicStructure::EcPrime(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }

    #[test]
    fn repeated_lookup_shares_instance() {
        let cache = StructureCache::new();
        let a = cache.zmod(BigUint::from(97u32)).unwrap();
        let b = cache.zmod_prime(BigUint::from(97u32)).unwrap();
        assert!(same_instance(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn safe_prime_and_explicit_order_share_key() {
        let cache = StructureCache::new();
        let a = cache.gstar_mod_safe_prime(BigUint::from(23u32)).unwrap();
        let b = cache
            .gstar_mod_prime(BigUint::from(23u32), BigUint::from(11u32))
            .unwrap();
        assert!(same_instance(&a, &b));
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = StructureCache::new();
        assert!(matches!(
            cache.zmod_prime(BigUint::from(91u32)),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(cache.zmod(BigUint::default()).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn curve_names_ignore_case() {
        let cache = StructureCache::new();
        let a = cache.standard_curve("secp160r1").unwrap();
        let b = cache.standard_curve("SECP160R1").unwrap();
        assert!(same_instance(&a, &b));
        cache.clear();
        assert!(cache.is_empty());
        let c = cache.standard_curve("secp160r1").unwrap();
        assert!(!same_instance(&a, &c));
        assert_eq!(a, c);
    }

    #[test]
    fn concurrent_lookups_converge() {
        let cache = Arc::new(StructureCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.zmod(BigUint::from(1_000_003u32)).unwrap())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for r in &results[1..] {
            assert!(same_instance(&results[0], r));
        }
        assert_eq!(cache.len(), 1);
    }
}
