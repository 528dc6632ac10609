//! Property-based tests for the inverse cache state machine
//!
//! Random operation sequences are replayed against an [`InverseCache`] and a
//! trivial reference model of the cached slot.

use std::cell::Cell;

use ndarray::Array2;
use proptest::prelude::*;

use matcache_core::prelude::*;
use matcache_linalg::identity_residual;

#[derive(Debug, Clone)]
enum Op {
    SetSubject(Array2<f64>),
    SetInverse(Array2<f64>),
    Solve,
}

prop_compose! {
    fn arb_invertible(max_order: usize)(n in 1usize..=max_order)(
        data in prop::collection::vec(-5.0f64..5.0, n * n),
        n in Just(n)
    ) -> Array2<f64> {
        let mut m = Array2::from_shape_vec((n, n), data).unwrap();
        for i in 0..n {
            let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| m[[i, j]].abs()).sum();
            m[[i, i]] = off_diagonal + 1.0;
        }
        m
    }
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_invertible(5).prop_map(Op::SetSubject),
        arb_invertible(5).prop_map(Op::SetInverse),
        Just(Op::Solve),
        Just(Op::Solve),
    ]
}

proptest! {
    /// Replacing the subject always empties the slot, whatever came before
    #[test]
    fn test_set_subject_invalidates(
        initial in arb_invertible(5),
        replacement in arb_invertible(5),
        solve_first in any::<bool>()
    ) {
        let mut cache = InverseCache::new(initial);
        if solve_first {
            solve(&mut cache, &DenseInverter).unwrap();
            prop_assert!(cache.is_cached());
        }

        cache.set_subject(replacement.clone());
        prop_assert!(cache.inverse().is_none());
        prop_assert_eq!(cache.subject(), &replacement);
    }

    /// On a populated cache every solve returns the stored value and never computes
    #[test]
    fn test_idempotent_hits(m in arb_invertible(6), repeats in 1usize..20) {
        let calls = Cell::new(0usize);
        let counting = |a: &Array2<f64>, c: &InvertConfig| {
            calls.set(calls.get() + 1);
            DenseInverter.invert(a, c)
        };

        let mut cache = InverseCache::new(m);
        let stored = solve(&mut cache, &counting).unwrap().clone();

        for _ in 0..repeats {
            prop_assert_eq!(solve(&mut cache, &counting).unwrap(), &stored);
        }
        prop_assert_eq!(calls.get(), 1);
    }

    /// Solved inverses actually invert the subject
    #[test]
    fn test_solve_round_trip(m in arb_invertible(6)) {
        let mut cache = InverseCache::new(m.clone());
        let inverse = solve(&mut cache, &DenseInverter).unwrap();
        prop_assert!(identity_residual(&m, inverse).unwrap() < 1e-9);
    }

    /// The cache agrees with a reference model over arbitrary operation sequences
    #[test]
    fn test_matches_reference_model(
        initial in arb_invertible(5),
        ops in prop::collection::vec(arb_op(), 1..30)
    ) {
        let calls = Cell::new(0usize);
        let counting = |a: &Array2<f64>, c: &InvertConfig| {
            calls.set(calls.get() + 1);
            DenseInverter.invert(a, c)
        };

        let mut cache = InverseCache::new(initial);
        let mut model: Option<Array2<f64>> = None;
        let mut expected_calls = 0usize;

        for op in ops {
            match op {
                Op::SetSubject(m) => {
                    cache.set_subject(m);
                    model = None;
                }
                Op::SetInverse(m) => {
                    cache.set_inverse(m.clone());
                    model = Some(m);
                }
                Op::Solve => {
                    let result = solve(&mut cache, &counting).unwrap().clone();
                    match &model {
                        Some(stored) => prop_assert_eq!(&result, stored),
                        None => {
                            expected_calls += 1;
                            model = Some(result);
                        }
                    }
                }
            }

            prop_assert_eq!(cache.inverse(), model.as_ref());
            prop_assert_eq!(calls.get(), expected_calls);
        }
    }
}
