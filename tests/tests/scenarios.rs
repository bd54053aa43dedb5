//! End-to-end walks through the structure interface

use calgebra_algorithms::{
    AlgebraicStructure, BinaryPolynomial, Capability, EcPoint, Element, Error, Order,
    StructureCache,
};
use calgebra_api::CurveCheck;
use calgebra_tests::vectors::{
    n, poly, seeded_rng, small_binary_group, small_prime_group, small_structures, toy_curve,
    TOY_POINT_ORDER,
};
use num_bigint::BigInt;

#[test]
fn toy_curve_over_gf23() {
    let field = AlgebraicStructure::zmod_prime(n(23)).unwrap();
    assert!(field.supports(Capability::Field));

    let curve = toy_curve();
    // 10^2 = 100 = 8 (mod 23) and 3^3 + 3 + 1 = 31 = 8 (mod 23)
    let p = curve.point(n(3), n(10)).unwrap();
    let two_p = curve.double(&p).unwrap();
    assert_eq!(two_p, EcPoint::affine(n(7), n(12)));

    let back = curve.add(&two_p, &curve.negate(&p).unwrap()).unwrap();
    assert_eq!(back, p);
    assert!(curve.add(&back, &curve.negate(&p).unwrap()).unwrap().is_infinity());
    assert!(curve.mul(&p, &n(TOY_POINT_ORDER)).unwrap().is_infinity());
    assert!(!curve.mul(&p, &n(TOY_POINT_ORDER / 2)).unwrap().is_infinity());
}

#[test]
fn gf8_multiplication_by_hand() {
    let field =
        AlgebraicStructure::binary_field(BinaryPolynomial::from_exponents(&[3, 1, 0])).unwrap();
    let x = field.element(poly(0b010)).unwrap();

    // x * x = x^2
    let x2 = x.multiply(&x).unwrap();
    assert_eq!(x2.as_polynomial(), Some(&poly(0b100)));
    // x^2 * x = x^3 = x + 1
    let x3 = x2.multiply(&x).unwrap();
    assert_eq!(x3.as_polynomial(), Some(&poly(0b011)));
    // x^7 = 1 in GF(8)*
    assert!(x.power(&n(7)).unwrap() == field.one().unwrap());

    let x_plus_1 = field.element(poly(0b011)).unwrap();
    // (x + 1)^2 = x^2 + 1
    assert_eq!(
        x_plus_1.multiply(&x_plus_1).unwrap().as_polynomial(),
        Some(&poly(0b101))
    );
    assert_eq!(x_plus_1.divide(&x).unwrap().multiply(&x).unwrap(), x_plus_1);
}

#[test]
fn dynamic_curve_groups() {
    let mut rng = seeded_rng(11);
    for group in small_structures() {
        assert_eq!(group.capabilities(), calgebra_algorithms::Capabilities::CYCLIC_GROUP);
        let g = group.default_generator().unwrap();
        let Order::Finite(order) = group.order() else {
            panic!("curve groups are finite");
        };
        assert!(g.self_apply(&order).unwrap().is_identity().unwrap());

        let r = group.random_element(&mut rng).unwrap();
        let s = group.random_generator(&mut rng).unwrap();
        assert!(s.is_generator().unwrap());
        let diff = r.apply_inverse(&s).unwrap();
        assert_eq!(diff.apply(&s).unwrap(), r);

        let minus_two = r.self_apply_signed(&BigInt::from(-2)).unwrap();
        assert_eq!(minus_two, r.apply(&r).unwrap().invert().unwrap());

        assert!(matches!(
            group.multiply(&r, &s),
            Err(Error::UnsupportedCapability { capability: Capability::Ring, .. })
        ));
    }
}

#[test]
fn points_do_not_move_between_groups() {
    let prime: AlgebraicStructure = small_prime_group().into();
    let other: AlgebraicStructure = calgebra_algorithms::prime_curve("secp160k1").unwrap().into();
    let g = prime.default_generator().unwrap();
    let h = other.default_generator().unwrap();
    assert!(matches!(prime.apply(&g, &h), Err(Error::NotAMember { .. })));

    let off_curve = EcPoint::affine(n(2), n(4583));
    assert!(matches!(prime.element(off_curve), Err(Error::NotAMember { .. })));

    let binary: AlgebraicStructure = small_binary_group().into();
    assert!(matches!(
        binary.element(EcPoint::affine(n(2), n(4582))),
        Err(Error::NotAMember { .. })
    ));
}

#[test]
fn cofactor_sampling_lands_in_subgroup() {
    let group = small_binary_group();
    let mut rng = seeded_rng(3);
    for _ in 0..32 {
        let p = group.random_element(&mut rng).unwrap();
        assert!(group.self_apply(&p, group.order()).unwrap().is_infinity());
    }
    // a point of order 2 lies on the curve but outside the subgroup
    let t = group.lift_x(poly(0)).unwrap();
    assert!(group.contains(&t));
    assert!(!group.is_generator(&t).unwrap());
}

#[test]
fn validation_reports_the_failed_check() {
    let err = calgebra_algorithms::EcGroup::from_integers(
        None,
        n(10007),
        n(1),
        n(28),
        n(2),
        n(4582),
        n(9851),
        n(1_000_000),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidCurveParameters {
            check: CurveCheck::CofactorTooLarge
        }
    );
    assert_eq!(err.to_string(), "Invalid curve parameters: cofactor too large");
}

#[test]
fn product_of_groups() {
    let cache = StructureCache::new();
    let zmod = cache.zmod(n(7)).unwrap();
    let curve: AlgebraicStructure = small_prime_group().into();
    let product = AlgebraicStructure::product(vec![zmod.clone(), curve.clone()]);
    assert_eq!(product.order(), Order::Finite(n(7 * 9851)));

    let e = product
        .element(vec![
            zmod.element(3u64).unwrap(),
            curve.default_generator().unwrap(),
        ])
        .unwrap();
    let seven_e = e.self_apply(&n(7)).unwrap();
    let parts: &[Element] = seven_e.as_tuple().unwrap();
    assert!(parts[0].is_identity().unwrap());
    assert_eq!(parts[1], curve.default_generator().unwrap().self_apply(&n(7)).unwrap());
}
