//! Property-based tests for the combination operator and computation selection.

use proptest::prelude::*;

use duocalc_core::cancel::CancellationToken;
use duocalc_core::combine::binary_operation;
use duocalc_core::registry::create_computations;

fn optional() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![Just(None), Just(Some(0)), any::<i32>().prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Zero on the left wins over anything on the right.
    #[test]
    fn zero_absorbs_from_left(other in optional()) {
        prop_assert_eq!(binary_operation(Some(0), other), Some(0));
    }

    /// Zero on the right wins over anything on the left.
    #[test]
    fn zero_absorbs_from_right(other in optional()) {
        prop_assert_eq!(binary_operation(other, Some(0)), Some(0));
    }

    /// The operation is symmetric.
    #[test]
    fn operation_commutes(a in optional(), b in optional()) {
        prop_assert_eq!(binary_operation(a, b), binary_operation(b, a));
    }

    /// Unknown on one side with a non-zero other side stays unknown.
    #[test]
    fn unknown_propagates(v in any::<i32>().prop_filter("non-zero", |v| *v != 0)) {
        prop_assert_eq!(binary_operation(None, Some(v)), None);
        prop_assert_eq!(binary_operation(Some(v), None), None);
    }

    /// Selectors outside 1..=6 give the identity pair.
    #[test]
    fn unknown_selector_is_identity(
        selector in any::<i32>().prop_filter("not a demo case", |s| !(1..=6).contains(s)),
        x in any::<i32>(),
    ) {
        let pair = create_computations(Some(selector));
        let cancel = CancellationToken::new();
        prop_assert_eq!(pair.compute_f(x, &cancel), Ok(x));
        prop_assert_eq!(pair.compute_g(x, &cancel), Ok(x));
    }
}

#[test]
fn no_selector_is_identity() {
    let pair = create_computations(None);
    let cancel = CancellationToken::new();
    assert_eq!(pair.compute_f(3, &cancel), Ok(3));
    assert_eq!(pair.compute_g(3, &cancel), Ok(3));
}
