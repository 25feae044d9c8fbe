//! Property-based tests for the semiring axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Element, GhostSemiring};

    // Integer-valued floats keep value addition exact.
    fn small_value() -> impl Strategy<Value = f64> {
        (-50i32..50i32).prop_map(f64::from)
    }

    fn element() -> impl Strategy<Value = Element> {
        prop_oneof![
            4 => (small_value(), any::<bool>()).prop_map(|(v, g)| Element::with_ghost(v, g)),
            1 => Just(Element::ZERO),
        ]
    }

    proptest! {
        #[test]
        fn oplus_commutative(a in element(), b in element()) {
            prop_assert!((a + b).same_as(&(b + a)));
        }

        #[test]
        fn oplus_associative(a in element(), b in element(), c in element()) {
            prop_assert!(((a + b) + c).same_as(&(a + (b + c))));
        }

        #[test]
        fn odot_commutative(a in element(), b in element()) {
            prop_assert!((a * b).same_as(&(b * a)));
        }

        #[test]
        fn odot_associative(a in element(), b in element(), c in element()) {
            prop_assert!(((a * b) * c).same_as(&(a * (b * c))));
        }

        #[test]
        fn odot_distributes_over_oplus(a in element(), b in element(), c in element()) {
            prop_assert!((a * (b + c)).same_as(&((a * b) + (a * c))));
        }

        #[test]
        fn tie_rule(v in small_value()) {
            let a = Element::new(v);
            let s = a + a;
            prop_assert!(s.is_ghost());
            prop_assert_eq!(s.value(), v);
        }

        #[test]
        fn identities(a in element()) {
            prop_assert!((a + Element::ZERO).same_as(&a));
            prop_assert!((a * Element::ONE).same_as(&a));
        }

        #[test]
        fn ghosts_form_an_ideal(a in element(), v in small_value()) {
            let g = Element::ghost(v);
            let p = a * g;
            prop_assert!(p.is_ghost() || p.is_zero());
        }

        #[test]
        fn oplus_value_is_max(a in element(), b in element()) {
            prop_assert_eq!((a + b).value(), a.value().max(b.value()));
        }

        #[test]
        fn ghost_copy_surpasses_tangible(v in small_value()) {
            let a = Element::new(v);
            prop_assert!(a.to_ghost().ghost_surpasses(&a));
            prop_assert!(!a.ghost_surpasses(&a.to_ghost()));
        }
    }
}
