//! Property-based tests for prime field arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::PrimeField;

    const SMALL_PRIMES: &[u32] = &[2, 3, 5, 7, 11, 13, 251];

    fn field() -> impl Strategy<Value = PrimeField> {
        proptest::sample::select(SMALL_PRIMES)
            .prop_map(|p| PrimeField::new(p).expect("selected prime"))
    }

    proptest! {
        #[test]
        fn add_commutative(f in field(), a in 0u32..255, b in 0u32..255) {
            let (a, b) = (f.reduce(a), f.reduce(b));
            prop_assert_eq!(f.add(a, b), f.add(b, a));
        }

        #[test]
        fn add_associative(f in field(), a in 0u32..255, b in 0u32..255, c in 0u32..255) {
            let (a, b, c) = (f.reduce(a), f.reduce(b), f.reduce(c));
            prop_assert_eq!(f.add(f.add(a, b), c), f.add(a, f.add(b, c)));
        }

        #[test]
        fn mul_distributes_over_add(f in field(), a in 0u32..255, b in 0u32..255, c in 0u32..255) {
            let (a, b, c) = (f.reduce(a), f.reduce(b), f.reduce(c));
            prop_assert_eq!(f.mul(a, f.add(b, c)), f.add(f.mul(a, b), f.mul(a, c)));
        }

        #[test]
        fn nonzero_elements_invert(f in field(), a in 1u32..255) {
            let a = f.reduce(a);
            prop_assume!(a != 0);
            prop_assert_eq!(f.mul(a, f.inv(a)), 1);
        }

        #[test]
        fn sub_then_add_round_trips(f in field(), a in 0u32..255, b in 0u32..255) {
            let (a, b) = (f.reduce(a), f.reduce(b));
            prop_assert_eq!(f.add(f.sub(a, b), b), a);
        }

        #[test]
        fn fermat_little_theorem(f in field(), a in 1u32..255) {
            let a = f.reduce(a);
            prop_assume!(a != 0);
            prop_assert_eq!(f.pow(a, f.modulus() - 1), 1);
        }
    }
}
