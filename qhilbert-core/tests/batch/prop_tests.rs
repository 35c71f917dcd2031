//! Property-based tests for the batch engine.
//!
//! The batch output must equal the scalar decoder element by element, for any
//! input length, any starting lane width and any order.

use proptest::prelude::*;
use qhilbert_core::{decode, decode_batch_from, LaneWidth, Position, Width};

fn lane_width() -> impl Strategy<Value = LaneWidth> {
    prop::sample::select(LaneWidth::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_batch_equals_scalar(
        order in 0u32..=16,
        raw in prop::collection::vec(any::<u32>(), 0..200),
        start in lane_width(),
    ) {
        let w = Width::from_order(order).unwrap();
        let distances: Vec<u32> = raw.iter().map(|&d| d & w.distance_mask()).collect();
        let mut positions = vec![Position::default(); distances.len()];
        decode_batch_from(w, &distances, &mut positions, start);

        for (i, &d) in distances.iter().enumerate() {
            prop_assert_eq!(positions[i], decode(w, d), "index {}", i);
        }
    }

    #[test]
    fn prop_start_width_does_not_matter(
        order in 1u32..=12,
        raw in prop::collection::vec(any::<u32>(), 0..100),
        a in lane_width(),
        b in lane_width(),
    ) {
        let w = Width::from_order(order).unwrap();
        let distances: Vec<u32> = raw.iter().map(|&d| d & w.distance_mask()).collect();
        let mut pa = vec![Position::default(); distances.len()];
        let mut pb = vec![Position::default(); distances.len()];
        decode_batch_from(w, &distances, &mut pa, a);
        decode_batch_from(w, &distances, &mut pb, b);
        prop_assert_eq!(pa, pb);
    }

    #[test]
    fn prop_sequential_runs_are_connected(order in 1u32..=16, first in any::<u32>(), len in 2usize..64) {
        let w = Width::from_order(order).unwrap();
        let first = (first & w.distance_mask()) as u64;
        let last = (first + len as u64).min(w.area());
        prop_assume!(last - first >= 2);

        let distances: Vec<u32> = (first..last).map(|d| d as u32).collect();
        let mut positions = vec![Position::default(); distances.len()];
        decode_batch_from(w, &distances, &mut positions, LaneWidth::X16);
        for pair in positions.windows(2) {
            prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }
}
