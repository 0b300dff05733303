// File: crates/visualize-core/tests/range_labels.rs
// Purpose: Invariants of tick label generation over integer ranges.

use proptest::prelude::*;
use visualize_core::range_labels;

#[test]
fn hundred_in_five_ticks() {
    assert_eq!(range_labels(0.0, 100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

proptest! {
    #[test]
    fn endpoints_and_length_hold(
        first in -1_000i32..1_000,
        span in 1i32..500,
        ticks in 2usize..40
    ) {
        let first = first as f64;
        let last = first + span as f64;
        let labels = range_labels(first, last, ticks);

        let expected = if ticks as f64 >= span as f64 { span as usize + 1 } else { ticks };
        prop_assert_eq!(labels.len(), expected);
        prop_assert_eq!(labels[0], first);
        prop_assert_eq!(*labels.last().unwrap(), last);
    }

    #[test]
    fn labels_never_decrease(
        first in -1_000i32..1_000,
        span in 1i32..500,
        ticks in 2usize..40
    ) {
        let first = first as f64;
        let labels = range_labels(first, first + span as f64, ticks);
        for pair in labels.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?}", labels);
        }
    }
}
