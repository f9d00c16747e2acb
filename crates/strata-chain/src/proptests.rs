//! Property-based tests for the chain algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Chain;
    use strata_field::PrimeField;
    use strata_simplex::Simplex;

    const TEST_PRIMES: &[u32] = &[2, 3, 5, 11];

    fn field() -> impl Strategy<Value = PrimeField> {
        proptest::sample::select(TEST_PRIMES)
            .prop_map(|p| PrimeField::new(p).expect("selected prime"))
    }

    /// A small indexed simplex: an edge or vertex over a tiny label pool.
    /// The filtration index is derived from the labels so that equal
    /// vertex sets always carry equal indices, as interning guarantees
    /// in real streams, with vertices preceding edges.
    fn small_simplex() -> impl Strategy<Value = Simplex> {
        (1u32..10, 1u32..10).prop_map(|(a, b)| {
            let (lo, hi) = (a.min(b), a.max(b));
            let (s, findex) = if a == b {
                (Simplex::from_vertices(&[lo]).expect("single label"), lo)
            } else {
                (
                    Simplex::from_vertices(&[lo, hi]).expect("sorted pair"),
                    10 + lo * 10 + hi,
                )
            };
            s.with_filtration_index(findex).expect("fresh slot")
        })
    }

    fn chain(field: &PrimeField) -> impl Strategy<Value = Chain> {
        let field = field.clone();
        proptest::collection::vec((small_simplex(), 1u32..255), 0..8)
            .prop_map(move |terms| Chain::from_terms(terms, &field))
    }

    fn field_and_chains() -> impl Strategy<Value = (PrimeField, Chain, Chain, Chain)> {
        field().prop_flat_map(|f| {
            let (a, b, c) = (chain(&f), chain(&f), chain(&f));
            (Just(f), a, b, c)
        })
    }

    proptest! {
        // Chain addition is a valid Z/p vector-space operation.

        #[test]
        fn add_commutes((f, a, b, _) in field_and_chains()) {
            prop_assert_eq!(a.add(&b, 1, &f), b.add(&a, 1, &f));
        }

        #[test]
        fn add_order_independent((f, a, b, c) in field_and_chains(), s in 1u32..255) {
            // a + b + s*c == a + s*c + b
            let left = a.add(&b, 1, &f).add(&c, s, &f);
            let right = a.add(&c, s, &f).add(&b, 1, &f);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_inverse((f, a, _, _) in field_and_chains()) {
            let sum = a.add(&a, f.modulus() - 1, &f);
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn zero_is_identity((f, a, _, _) in field_and_chains()) {
            prop_assert_eq!(a.add(&Chain::zero(), 1, &f), a.clone());
            prop_assert_eq!(Chain::zero().add(&a, 1, &f), a);
        }

        #[test]
        fn scalar_distributes((f, a, b, _) in field_and_chains(), s in 1u32..255) {
            // s*(a + b) == s*a + s*b
            let left = Chain::zero().add(&a.add(&b, 1, &f), s, &f);
            let right = Chain::zero().add(&a, s, &f).add(&b, s, &f);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn terms_stay_normalized((f, a, b, _) in field_and_chains(), s in 1u32..255) {
            let sum = a.add(&b, s, &f);
            for (_, c) in sum.terms() {
                prop_assert!(*c >= 1 && *c < f.modulus());
            }
            for w in sum.terms().windows(2) {
                prop_assert!(
                    strata_simplex::filtration_cmp(&w[0].0, &w[1].0) == std::cmp::Ordering::Less
                );
            }
        }

        // Boundary of boundary vanishes for every tested prime.

        #[test]
        fn boundary_squares_to_zero(
            p in proptest::sample::select(TEST_PRIMES),
            labels in proptest::collection::btree_set(1u32..40, 2..=8),
        ) {
            let f = PrimeField::new(p).expect("selected prime");
            let vertices: Vec<u32> = labels.into_iter().collect();
            let s = Simplex::from_vertices(&vertices).expect("sorted distinct labels");

            let d = Chain::boundary(&s, &f);
            let mut dd = Chain::zero();
            for &(face, c) in d.terms() {
                dd = dd.add(&Chain::boundary(&face, &f), c, &f);
            }
            prop_assert!(dd.is_zero());
        }
    }
}
