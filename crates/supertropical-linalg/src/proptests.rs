//! Property-based tests for matrix operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::matrix::Matrix;
    use crate::parallel::parallel_permanent;
    use crate::permanent::permanent_of;
    use supertropical_rings::Element;

    // Integer-valued floats keep value addition exact.
    fn element() -> impl Strategy<Value = Element> {
        prop_oneof![
            6 => (-9i32..10i32, any::<bool>())
                .prop_map(|(v, g)| Element::with_ghost(f64::from(v), g)),
            1 => Just(Element::ZERO),
        ]
    }

    fn tangible_element() -> impl Strategy<Value = Element> {
        (-9i32..10i32).prop_map(|v| Element::new(f64::from(v)))
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(element(), rows * cols)
            .prop_map(move |data| Matrix::new(rows, cols, data).unwrap())
    }

    fn square() -> impl Strategy<Value = Matrix> {
        (1usize..=4).prop_flat_map(|n| matrix(n, n))
    }

    proptest! {
        #[test]
        fn product_associative(
            (a, b, c) in (1usize..4, 1usize..4, 1usize..4, 1usize..4)
                .prop_flat_map(|(m, n, p, q)| (matrix(m, n), matrix(n, p), matrix(p, q)))
        ) {
            let left = a.mm(&b).unwrap().mm(&c).unwrap();
            let right = a.mm(&b.mm(&c).unwrap()).unwrap();
            prop_assert!(left.same_as(&right));
        }

        #[test]
        fn parallel_product_matches(
            (a, b) in (1usize..5, 1usize..5, 1usize..5)
                .prop_flat_map(|(m, n, p)| (matrix(m, n), matrix(n, p)))
        ) {
            prop_assert!(a.mm(&b).unwrap().same_as(&a.mm_parallel(&b).unwrap()));
        }

        #[test]
        fn permanent_of_1x1_is_entry(e in element()) {
            let a = Matrix::new(1, 1, vec![e]).unwrap();
            prop_assert!(a.permanent().unwrap().same_as(&e));
        }

        #[test]
        fn parallel_permanent_matches(a in square()) {
            let n = a.num_rows();
            let seq = permanent_of(a.as_slice(), n);
            let par = parallel_permanent(a.as_slice(), n);
            prop_assert!(seq.same_as(&par));
        }

        #[test]
        fn minor_drops_row_and_column(a in square(), i in 0usize..4, j in 0usize..4) {
            let n = a.num_rows();
            prop_assume!(i < n && j < n);
            let minor = a.get_minor(i, j).unwrap();
            prop_assert_eq!(minor.shape(), (n - 1, n - 1));
            for r in 0..n - 1 {
                for c in 0..n - 1 {
                    let src_r = if r < i { r } else { r + 1 };
                    let src_c = if c < j { c } else { c + 1 };
                    prop_assert!(minor[(r, c)].same_as(&a[(src_r, src_c)]));
                }
            }
        }

        #[test]
        fn permanent_is_invariant_under_transpose(a in square()) {
            prop_assert!(a.permanent().unwrap().same_as(&a.transpose().permanent().unwrap()));
        }

        #[test]
        fn solution_ghost_surpasses_rhs(
            (a, b) in (1usize..=4).prop_flat_map(|n| (
                prop::collection::vec(tangible_element(), n * n)
                    .prop_map(move |data| Matrix::new(n, n, data).unwrap()),
                prop::collection::vec(tangible_element(), n)
                    .prop_map(|data| Matrix::column(data).unwrap()),
            ))
        ) {
            let per = a.permanent().unwrap();
            prop_assume!(per.is_tangible() && !per.is_zero());
            let x = a.solve(&b).unwrap();
            prop_assert!(a.mm(&x).unwrap().ghost_surpasses(&b));
        }
    }
}
