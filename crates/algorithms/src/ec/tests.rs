use calgebra_api::{CurveCheck, Error};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::field::{BinaryField, BinaryPolynomial, ZModPrime};

fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

fn poly(v: u64) -> BinaryPolynomial {
    BinaryPolynomial::from_limbs(vec![v])
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5ec1)
}

/// y^2 = x^3 + x + 1 over GF(23); 28 points, (3, 10) generates all of them
fn toy_curve() -> EllipticCurve<ZModPrime> {
    EllipticCurve::new(ZModPrime::new(n(23)).unwrap(), n(1), n(1)).unwrap()
}

/// y^2 = x^3 + x + 28 over GF(10007), prime order 9851
fn prime_group() -> EcGroup<ZModPrime> {
    prime_group_with(n(28), n(2), n(4582), n(9851), n(1)).unwrap()
}

fn prime_group_with(
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    order: BigUint,
    cofactor: BigUint,
) -> calgebra_api::Result<EcGroup<ZModPrime>> {
    EcGroup::from_integers(None, n(10007), n(1), b, gx, gy, order, cofactor)
}

/// y^2 + xy = x^3 + x^2 + 9 over GF(2^13), n = 4091, h = 2
fn binary_group() -> EcGroup<BinaryField> {
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

fn check_of(result: calgebra_api::Result<impl core::fmt::Debug>) -> CurveCheck {
    match result {
        Err(Error::InvalidCurveParameters { check }) => check,
        other => panic!("expected a curve check failure, got {:?}", other),
    }
}

#[test]
fn toy_curve_arithmetic() {
    let curve = toy_curve();
    let p = curve.point(n(3), n(10)).unwrap();

    assert_eq!(curve.double(&p).unwrap(), EcPoint::affine(n(7), n(12)));
    assert_eq!(curve.mul(&p, &n(3)).unwrap(), EcPoint::affine(n(19), n(5)));
    assert_eq!(curve.mul(&p, &n(27)).unwrap(), curve.negate(&p).unwrap());
    assert!(curve.mul(&p, &n(28)).unwrap().is_infinity());
    assert!(curve.mul(&p, &n(0)).unwrap().is_infinity());

    let two_p = curve.double(&p).unwrap();
    assert_eq!(curve.add(&p, &two_p).unwrap(), curve.mul(&p, &n(3)).unwrap());
    assert!(curve.add(&p, &curve.negate(&p).unwrap()).unwrap().is_infinity());
    assert_eq!(curve.add(&EcPoint::Infinity, &p).unwrap(), p);
}

#[test]
fn toy_curve_membership() {
    let curve = toy_curve();
    assert!(curve.contains(&EcPoint::Infinity));
    assert!(curve.contains_xy(&n(3), &n(13)));
    assert!(!curve.contains_xy(&n(3), &n(11)));
    assert!(!curve.contains_xy(&n(23), &n(0)));

    assert!(!curve.contains_x(&n(2)));
    assert!(matches!(curve.lift_x(n(2)), Err(Error::NotAMember { .. })));

    assert!(curve.contains_x(&n(0)));
    let lifted = curve.lift_x(n(0)).unwrap();
    assert!(lifted == EcPoint::affine(n(0), n(1)) || lifted == EcPoint::affine(n(0), n(22)));

    assert!(matches!(curve.point(n(3), n(11)), Err(Error::NotAMember { .. })));
}

#[test]
fn raw_curve_rejects_bad_coefficients() {
    let field = ZModPrime::new(n(23)).unwrap();
    // 4a^3 + 27b^2 = 0
    assert_eq!(
        check_of(EllipticCurve::new(field.clone(), n(0), n(0))),
        CurveCheck::Singular
    );
    assert_eq!(
        check_of(EllipticCurve::new(field, n(23), n(1))),
        CurveCheck::CoefficientOutOfField
    );
    assert!(matches!(
        EllipticCurve::new(ZModPrime::new(n(3)).unwrap(), n(1), n(1)),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn prime_group_accepts_valid_parameters() {
    let group = prime_group();
    assert_eq!(group.kind(), "ECZModPrime");
    assert_eq!(group.order(), &n(9851));
    assert!(group.is_generator(group.generator()).unwrap());
    assert!(!group.is_generator(&group.identity()).unwrap());
    assert_eq!(group.to_string(), "ECZModPrime[GF(10007), n=9851]");
}

#[test]
fn prime_group_rejects_tampered_parameters() {
    assert_eq!(
        check_of(prime_group_with(n(29), n(2), n(4582), n(9851), n(1))),
        CurveCheck::GeneratorNotOnCurve
    );
    assert_eq!(
        check_of(prime_group_with(n(28), n(10007), n(4582), n(9851), n(1))),
        CurveCheck::GeneratorOutOfField
    );
    assert_eq!(
        check_of(prime_group_with(n(28), n(2), n(4582), n(9851), n(100))),
        CurveCheck::CofactorTooLarge
    );
    assert_eq!(
        check_of(prime_group_with(n(28), n(2), n(4582), n(0), n(1))),
        CurveCheck::ZeroOrder
    );
    assert_eq!(
        check_of(prime_group_with(n(28), n(2), n(4582), n(9852), n(1))),
        CurveCheck::OrderNotPrime
    );
    // prime, but not the order of G
    assert_eq!(
        check_of(prime_group_with(n(28), n(2), n(4582), n(9857), n(1))),
        CurveCheck::GeneratorOrderMismatch
    );
    assert!(matches!(
        prime_group_with(n(28), n(2), n(4582), n(9851), n(0)),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(
        check_of(EcGroup::from_integers(
            None,
            n(10005),
            n(1),
            n(28),
            n(2),
            n(4582),
            n(9851),
            n(1)
        )),
        CurveCheck::FieldNotPrime
    );
}

#[test]
fn anomalous_curve_rejected() {
    // #E(GF(1009)) = 1009 for y^2 = x^3 + 10x + 25
    let result = EcGroup::from_integers(None, n(1009), n(10), n(25), n(1), n(6), n(1009), n(1));
    assert_eq!(check_of(result), CurveCheck::AnomalousOrder);
}

#[test]
fn supersingular_curve_rejected() {
    // y^2 = x^3 + x over GF(8011) has 8012 = 4 * 2003 points and embedding degree 2
    let result =
        EcGroup::from_integers(None, n(8011), n(1), n(0), n(2164), n(3615), n(2003), n(4));
    assert_eq!(check_of(result), CurveCheck::SmallEmbeddingDegree);
}

#[test]
fn prime_group_sampling_stays_in_subgroup() {
    let group = prime_group();
    let mut rng = rng();
    for _ in 0..16 {
        let p = group.random_element(&mut rng).unwrap();
        assert!(!p.is_infinity());
        assert!(group.contains(&p));
        assert!(group.self_apply(&p, group.order()).unwrap().is_infinity());
    }
    let g = group.random_generator(&mut rng).unwrap();
    assert!(group.is_generator(&g).unwrap());
}

#[test]
fn prime_group_encoding() {
    let group = prime_group();
    let g = group.generator().clone();
    let bytes = group.encode(&g);
    assert_eq!(bytes, vec![0x04, 0x00, 0x02, 0x11, 0xe6]);
    assert_eq!(group.decode(&bytes).unwrap(), g);

    assert_eq!(group.encode(&EcPoint::Infinity), vec![0x00]);
    assert!(group.decode(&[0x00]).unwrap().is_infinity());

    assert!(matches!(group.decode(&bytes[..4]), Err(Error::InvalidArgument { .. })));
    let mut compressed = bytes.clone();
    compressed[0] = 0x02;
    assert!(matches!(group.decode(&compressed), Err(Error::InvalidArgument { .. })));
    let mut off_curve = bytes;
    off_curve[4] ^= 1;
    assert!(matches!(group.decode(&off_curve), Err(Error::NotAMember { .. })));
}

#[test]
fn binary_group_arithmetic() {
    let group = binary_group();
    assert_eq!(group.kind(), "ECBinaryField");
    let g = group.generator().clone();

    let two_g = group.apply(&g, &g).unwrap();
    assert_eq!(two_g, EcPoint::affine(poly(0x083f), poly(0x0bfd)));
    assert_eq!(group.self_apply(&g, &n(2)).unwrap(), two_g);

    let minus_g = group.invert(&g).unwrap();
    assert_eq!(minus_g, EcPoint::affine(poly(0x180d), poly(0x180d ^ 0x06c0)));
    assert!(group.apply(&g, &minus_g).unwrap().is_infinity());
    assert!(group.self_apply(&g, group.order()).unwrap().is_infinity());
}

#[test]
fn binary_point_with_zero_x_has_order_two() {
    let group = binary_group();
    let p = group.lift_x(poly(0)).unwrap();
    assert!(group.contains(&p));
    assert_eq!(group.invert(&p).unwrap(), p);
    assert!(group.apply(&p, &p).unwrap().is_infinity());
}

#[test]
fn off_curve_points_are_rejected() {
    let group = prime_group();
    let g = group.generator().clone();
    let stray = EcPoint::affine(n(2), n(4583));
    assert!(!group.contains(&stray));

    let not_member = |r: calgebra_api::Result<EcPoint<BigUint>>| {
        matches!(r, Err(Error::NotAMember { .. }))
    };
    assert!(not_member(group.apply(&stray, &g)));
    assert!(not_member(group.apply(&g, &stray)));
    assert!(not_member(group.invert(&stray)));
    assert!(not_member(group.self_apply(&stray, &n(12345))));
    assert!(not_member(group.self_apply(&stray, &n(0))));

    // coordinates outside the field
    let wide = EcPoint::affine(n(2), n(4582 + 10007));
    assert!(not_member(group.apply(&g, &wide)));

    let binary = binary_group();
    let bg = binary.generator().clone();
    let stray = EcPoint::affine(poly(0x180d), poly(0x06c1));
    assert!(!binary.contains(&stray));
    assert!(matches!(binary.apply(&bg, &stray), Err(Error::NotAMember { .. })));
    assert!(matches!(binary.invert(&stray), Err(Error::NotAMember { .. })));
    assert!(matches!(binary.self_apply(&stray, &n(3)), Err(Error::NotAMember { .. })));

    let curve = toy_curve();
    let stray = EcPoint::affine(n(3), n(11));
    assert!(matches!(curve.double(&stray), Err(Error::NotAMember { .. })));
    assert!(matches!(curve.negate(&stray), Err(Error::NotAMember { .. })));
}

#[test]
fn binary_group_rejects_tampered_parameters() {
    let build = |modulus: &[usize], b: u64, cofactor: u64| {
        EcGroup::from_polynomials(
            None,
            BinaryPolynomial::from_exponents(modulus),
            poly(1),
            poly(b),
            poly(0x180d),
            poly(0x06c0),
            n(4091),
            n(cofactor),
        )
    };
    assert_eq!(check_of(build(&[13, 4, 3, 1, 0], 10, 2)), CurveCheck::GeneratorNotOnCurve);
    assert_eq!(check_of(build(&[13, 4, 3, 1, 0], 0, 2)), CurveCheck::Singular);
    assert_eq!(check_of(build(&[13, 4, 3, 1, 0], 9, 8)), CurveCheck::CofactorTooLarge);
    // four terms, so x = 1 is a root
    assert_eq!(check_of(build(&[13, 4, 3, 0], 9, 2)), CurveCheck::ReduciblePolynomial);
}

#[test]
fn binary_group_sampling_and_encoding() {
    let group = binary_group();
    let mut rng = rng();
    for _ in 0..16 {
        let p = group.random_element(&mut rng).unwrap();
        assert!(group.contains(&p));
        assert!(group.is_generator(&p).unwrap());
        let bytes = group.encode(&p);
        assert_eq!(bytes.len(), 1 + 2 * 2);
        assert_eq!(group.decode(&bytes).unwrap(), p);
    }
}

#[test]
fn named_group_display() {
    let group = prime_curve("secp192k1").unwrap();
    assert_eq!(group.name(), Some("secp192k1"));
    assert_eq!(group.to_string(), "ECZModPrime[secp192k1]");
    assert_eq!(group.cofactor(), &n(1));
}

#[test]
fn unknown_curve_name() {
    assert!(matches!(standard_curve("secp999r9"), Err(Error::InvalidArgument { .. })));
    assert!(matches!(binary_curve("secp256k1"), Err(Error::InvalidArgument { .. })));
}

#[test]
fn equal_parameters_make_equal_groups() {
    assert_eq!(prime_group(), prime_group());
    assert_eq!(binary_curve("sect163k1").unwrap(), binary_curve("SECT163K1").unwrap());
}
