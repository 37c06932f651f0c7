//! Property-based tests for the composite algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Composite, Value};
    use num_traits::Zero;
    use unital_core::unit;

    const UNIT_NAMES: [&str; 4] = ["", "i", "j", "k"];

    // Strategy for a single term over a small unit pool
    fn term() -> impl Strategy<Value = Value> {
        (0usize..UNIT_NAMES.len(), -100i32..100i32)
            .prop_map(|(u, m)| Value::with_unit(f64::from(m), unit(UNIT_NAMES[u])))
    }

    // Strategy for composites with up to four terms
    fn composite() -> impl Strategy<Value = Composite> {
        proptest::collection::vec(term(), 0..=4).prop_map(Composite::from_values)
    }

    proptest! {
        // Merged-key sum semantics

        #[test]
        fn sum_commutative(a in composite(), b in composite()) {
            prop_assert_eq!(a.sum(&b), b.sum(&a));
        }

        #[test]
        fn sum_associative(a in composite(), b in composite(), c in composite()) {
            prop_assert_eq!(a.sum(&b).sum(&c), a.sum(&b.sum(&c)));
        }

        #[test]
        fn sum_covers_both_key_sets(a in composite(), b in composite()) {
            let s = a.sum(&b);
            for v in a.terms() {
                prop_assert!(s.get(v.unit).is_some());
            }
            for v in b.terms() {
                prop_assert!(s.get(v.unit).is_some());
            }
        }

        #[test]
        fn sum_adds_on_shared_keys(a in composite(), b in composite()) {
            let s = a.sum(&b);
            for v in s.terms() {
                let left = a.get(v.unit).map_or(0.0, |t| t.magnitude);
                let right = b.get(v.unit).map_or(0.0, |t| t.magnitude);
                prop_assert!((v.magnitude - (left + right)).abs() < 1e-9);
            }
        }

        #[test]
        fn sum_zero_identity(a in composite()) {
            prop_assert_eq!(a.sum(&Composite::zero()), a.clone());
            prop_assert_eq!(Composite::zero().sum(&a), a);
        }

        #[test]
        fn subtract_self_is_zero(a in composite()) {
            prop_assert!(a.subtract(&a).is_zero());
        }

        // Cartesian multiply
        //
        // Note: multiply is not commutative in general, since distinct
        // units concatenate their names left-to-right ("ij" vs "ji").

        #[test]
        fn multiply_by_scalar_scales_magnitudes(a in composite(), k in -50i32..50i32) {
            let k = f64::from(k);
            let p = a.multiply(&Composite::num(k));
            for v in a.terms() {
                let scaled = p.get(v.unit).map_or(0.0, |t| t.magnitude);
                prop_assert!((scaled - v.magnitude * k).abs() < 1e-9);
            }
        }
    }
}
