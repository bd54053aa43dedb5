//! Every SEC 2 curve passes validation and behaves as a group of order n

use calgebra_algorithms::ec::standard::{from_binary_params, from_prime_params};
use calgebra_algorithms::{AlgebraicStructure, CurveField, EcGroup, StructureCache};
use calgebra_params::{all_curves, by_name, curves_up_to, CurveParams, FieldType};
use calgebra_tests::vectors::seeded_rng;
use num_bigint::BigUint;

fn check_group<F: CurveField>(group: &EcGroup<F>, seed: u64) {
    let name = group.name().unwrap();
    let g = group.generator();
    assert!(group.contains(g), "{}", name);
    assert!(group.self_apply(g, group.order()).unwrap().is_infinity(), "{}", name);
    assert!(group.cofactor() <= &BigUint::from(4u32), "{}", name);
    let full_order = group.order() * group.cofactor();
    assert!(group.self_apply(g, &full_order).unwrap().is_infinity(), "{}", name);

    let minus_g = group.self_apply(g, &(group.order() - 1u32)).unwrap();
    assert_eq!(minus_g, group.invert(g).unwrap(), "{}", name);

    let mut rng = seeded_rng(seed);
    let p = group.random_element(&mut rng).unwrap();
    let q = group.random_element(&mut rng).unwrap();
    let sum = group.apply(&p, &q).unwrap();
    assert!(group.contains(&sum), "{}", name);
    assert!(group.self_apply(&sum, group.order()).unwrap().is_infinity(), "{}", name);

    let encoded = group.encode(&p);
    assert_eq!(encoded.len(), 1 + 2 * group.coordinate_len(), "{}", name);
    assert_eq!(group.decode(&encoded).unwrap(), p, "{}", name);
}

#[test]
fn all_prime_curves() {
    let mut count = 0;
    for (i, params) in all_curves()
        .filter(|p| p.field_type == FieldType::Prime)
        .enumerate()
    {
        let group = from_prime_params(params).unwrap();
        check_group(&group, i as u64);
        count += 1;
    }
    assert_eq!(count, 11);
}

#[test]
fn all_binary_curves() {
    let mut count = 0;
    for (i, params) in all_curves()
        .filter(|p| p.field_type == FieldType::Binary)
        .enumerate()
    {
        let group = from_binary_params(params).unwrap();
        check_group(&group, 100 + i as u64);
        count += 1;
    }
    assert_eq!(count, 18);
}

const CLOSURE_PAIRS: usize = 100;

fn check_closure<F: CurveField>(group: &EcGroup<F>, seed: u64) {
    let name = group.name().unwrap();
    let mut rng = seeded_rng(seed);
    for _ in 0..CLOSURE_PAIRS {
        let p = group.random_element(&mut rng).unwrap();
        let q = group.random_element(&mut rng).unwrap();
        let sum = group.apply(&p, &q).unwrap();
        assert!(group.contains(&sum), "{}", name);
        assert_eq!(sum, group.apply(&q, &p).unwrap(), "{}", name);
        let difference = group.apply(&sum, &group.invert(&q).unwrap()).unwrap();
        assert_eq!(difference, p, "{}", name);
        assert!(group.contains(&group.apply(&p, &p).unwrap()), "{}", name);
    }
}

// Larger curves are covered once each by `check_group`
#[test]
fn sums_stay_on_curve_up_to_96_bit_security() {
    let small: Vec<&CurveParams> = curves_up_to(96).collect();
    assert_eq!(small.len(), 14);
    for (i, params) in small.into_iter().enumerate() {
        let seed = 1000 + i as u64;
        match params.field_type {
            FieldType::Prime => check_closure(&from_prime_params(params).unwrap(), seed),
            FieldType::Binary => check_closure(&from_binary_params(params).unwrap(), seed),
        }
    }
}

#[test]
fn koblitz_curves_have_small_coefficients() {
    let k163 = calgebra_algorithms::binary_curve("sect163k1").unwrap();
    assert_eq!(k163.cofactor(), &BigUint::from(2u32));
    assert!(k163.curve().a().is_one());
    assert!(k163.curve().b().is_one());

    let k256 = calgebra_algorithms::prime_curve("secp256k1").unwrap();
    assert_eq!(k256.curve().a(), &BigUint::default());
    assert_eq!(k256.curve().b(), &BigUint::from(7u32));
}

#[test]
fn tampered_standard_parameters_are_rejected() {
    let params = by_name("secp256r1").unwrap();
    let good = from_prime_params(params).unwrap();
    let field = good.field().clone();
    let b = good.curve().b() + 1u32;
    let result = EcGroup::new(
        field,
        good.curve().a().clone(),
        b,
        good.generator().x().unwrap().clone(),
        good.generator().y().unwrap().clone(),
        good.order().clone(),
        good.cofactor().clone(),
    );
    assert!(matches!(
        result,
        Err(calgebra_api::Error::InvalidCurveParameters {
            check: calgebra_api::CurveCheck::GeneratorNotOnCurve
        })
    ));

    // binary parameters through the prime constructor
    assert!(from_prime_params(by_name("sect233k1").unwrap()).is_err());
}

#[test]
fn cache_shares_standard_curves() {
    let cache = StructureCache::new();
    let a = cache.standard_curve("sect233r1").unwrap();
    let b = cache.standard_curve("SECT233R1").unwrap();
    match (&a, &b) {
        (AlgebraicStructure::EcBinary(x), AlgebraicStructure::EcBinary(y)) => {
            assert!(std::sync::Arc::ptr_eq(x, y))
        }
        _ => panic!("expected binary curve structures"),
    }
    assert_eq!(cache.len(), 1);
}
