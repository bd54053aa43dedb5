//! Property-based checks of the group and field axioms

use calgebra_algorithms::{AlgebraicStructure, BinaryField, FiniteField, ZModPrime};
use calgebra_tests::vectors::{n, seeded_rng, small_binary_group, small_prime_group, small_structures};
use num_bigint::BigUint;
use proptest::prelude::*;

fn scalar(bound: u64) -> impl Strategy<Value = u64> {
    0..bound
}

/// Cyclic groups of every representation behind the dynamic interface
fn cyclic_structures() -> Vec<AlgebraicStructure> {
    let mut all = small_structures();
    all.push(AlgebraicStructure::zmod(n(1000)).unwrap());
    all.push(AlgebraicStructure::gstar_mod_safe_prime(n(2147483783)).unwrap());
    all
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn self_apply_matches_repeated_apply(seed in any::<u64>(), k in 0u64..64) {
        let mut rng = seeded_rng(seed);
        for structure in cyclic_structures() {
            let a = structure.random_element(&mut rng).unwrap();
            let mut folded = structure.identity().unwrap();
            for _ in 0..k {
                folded = folded.apply(&a).unwrap();
            }
            prop_assert_eq!(a.self_apply(&n(k)).unwrap(), folded, "{}", structure);
        }
    }

    #[test]
    fn double_inverse_is_identity_map(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        for structure in cyclic_structures() {
            let a = structure.random_element(&mut rng).unwrap();
            let back = a.invert().unwrap().invert().unwrap();
            prop_assert_eq!(&back, &a, "{}", structure);
            prop_assert!(a.apply_inverse(&a).unwrap().is_identity().unwrap());
        }
        let group = small_prime_group();
        let p = group.random_element(&mut rng).unwrap();
        prop_assert_eq!(group.invert(&group.invert(&p).unwrap()).unwrap(), p);
        let group = small_binary_group();
        let p = group.random_element(&mut rng).unwrap();
        prop_assert_eq!(group.invert(&group.invert(&p).unwrap()).unwrap(), p);
    }

    #[test]
    fn prime_group_scalar_homomorphism(a in scalar(9851), b in scalar(9851)) {
        let group = small_prime_group();
        let g = group.generator();
        let lhs = group.apply(&group.self_apply(g, &n(a)).unwrap(), &group.self_apply(g, &n(b)).unwrap()).unwrap();
        let rhs = group.self_apply(g, &n((a + b) % 9851)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prime_group_associative_and_commutative(a in scalar(9851), b in scalar(9851), c in scalar(9851)) {
        let group = small_prime_group();
        let g = group.generator();
        let [p, q, r] = [a, b, c].map(|k| group.self_apply(g, &n(k)).unwrap());

        let left = group.apply(&group.apply(&p, &q).unwrap(), &r).unwrap();
        let right = group.apply(&p, &group.apply(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(group.apply(&p, &q).unwrap(), group.apply(&q, &p).unwrap());
        prop_assert!(group.contains(&left));
    }

    #[test]
    fn prime_group_inverse(a in scalar(9851)) {
        let group = small_prime_group();
        let p = group.self_apply(group.generator(), &n(a)).unwrap();
        prop_assert!(group.apply(&p, &group.invert(&p).unwrap()).unwrap().is_infinity());
        prop_assert_eq!(group.apply(&p, &group.identity()).unwrap(), p);
    }

    #[test]
    fn binary_group_scalar_homomorphism(a in scalar(4091), b in scalar(4091)) {
        let group = small_binary_group();
        let g = group.generator();
        let lhs = group.apply(&group.self_apply(g, &n(a)).unwrap(), &group.self_apply(g, &n(b)).unwrap()).unwrap();
        let rhs = group.self_apply(g, &n((a + b) % 4091)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn binary_group_associative(a in scalar(4091), b in scalar(4091), c in scalar(4091)) {
        let group = small_binary_group();
        let g = group.generator();
        let [p, q, r] = [a, b, c].map(|k| group.self_apply(g, &n(k)).unwrap());

        let left = group.apply(&group.apply(&p, &q).unwrap(), &r).unwrap();
        let right = group.apply(&p, &group.apply(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(&left, &right);
        prop_assert!(group.apply(&left, &group.invert(&left).unwrap()).unwrap().is_infinity());
    }

    #[test]
    fn prime_field_axioms(a in 1u64..10007, b in 0u64..10007, c in 0u64..10007) {
        let field = ZModPrime::new(n(10007)).unwrap();
        let (a, b, c) = (n(a), n(b), n(c));

        let distributed = field.add(&field.mul(&a, &b), &field.mul(&a, &c));
        prop_assert_eq!(field.mul(&a, &field.add(&b, &c)), distributed);
        prop_assert_eq!(field.mul(&a, &field.invert(&a).unwrap()), field.one());
        prop_assert_eq!(field.sub(&field.add(&b, &c), &c), b);

        let square = field.square(&a);
        let root = field.sqrt(&square).unwrap();
        prop_assert_eq!(field.square(&root), square);
    }

    #[test]
    fn binary_field_axioms(a in 1u64..(1 << 13), b in 0u64..(1 << 13), c in 0u64..(1 << 13)) {
        let field = BinaryField::from_exponents(&[13, 4, 3, 1, 0]).unwrap();
        let [a, b, c] = [a, b, c].map(|v| field.from_biguint(&n(v)).unwrap());

        let distributed = field.add(&field.mul(&a, &b), &field.mul(&a, &c));
        prop_assert_eq!(field.mul(&a, &field.add(&b, &c)), distributed);
        prop_assert_eq!(field.mul(&a, &field.invert(&a).unwrap()), field.one());
        prop_assert_eq!(field.square(&field.sqrt(&a).unwrap()), a.clone());

        // z^2 + z = c is solvable exactly when Tr(c) = 0
        match field.solve_quadratic(&b).unwrap() {
            Some(z) => {
                prop_assert!(!field.trace(&b));
                prop_assert_eq!(field.add(&field.square(&z), &z), b);
            }
            None => prop_assert!(field.trace(&b)),
        }
    }

    #[test]
    fn zmod_structure_laws(modulus in 2u64..500, a in any::<u64>(), k in 0u64..1000) {
        let z = AlgebraicStructure::zmod(n(modulus)).unwrap();
        let a = z.element(a % modulus).unwrap();
        let ka = a.self_apply(&BigUint::from(k)).unwrap();
        let expected = (a.as_integer().unwrap() * BigUint::from(k)) % modulus;
        prop_assert_eq!(ka.as_integer().unwrap(), &expected);
        prop_assert!(a.apply(&a.invert().unwrap()).unwrap().is_identity().unwrap());
    }
}
