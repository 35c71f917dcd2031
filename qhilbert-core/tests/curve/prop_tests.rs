//! Property-based tests for the scalar decoder.
//!
//! Random orders and distances, checked against the independent oracle and
//! against the structural properties of the curve.

#[path = "../common/mod.rs"]
mod common;

use common::{oracle, width};
use proptest::prelude::*;
use qhilbert_core::{decode, decode_iterative, try_decode};

/// Random `(order, distance)` with the distance inside the curve domain.
fn order_and_distance() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=16).prop_flat_map(|order| {
        let max = if order == 16 {
            u32::MAX
        } else {
            (1u32 << (2 * order)) - 1
        };
        (Just(order), 0..=max)
    })
}

proptest! {
    /// Both library algorithms agree for every order.
    #[test]
    fn prop_algorithms_agree((order, d) in order_and_distance()) {
        let w = width(order);
        prop_assert_eq!(decode(w, d), decode_iterative(w, d));
    }

    /// The fast decoder matches the top-down oracle.
    #[test]
    fn prop_matches_oracle((order, d) in order_and_distance()) {
        prop_assert_eq!(decode(width(order), d), oracle(order, d));
    }

    /// Coordinates stay inside the grid.
    #[test]
    fn prop_in_range((order, d) in order_and_distance()) {
        let w = width(order);
        let p = decode(w, d);
        prop_assert!(p.x < w.get(), "x={} width={}", p.x, w.get());
        prop_assert!(p.y < w.get(), "y={} width={}", p.y, w.get());
    }

    /// Consecutive distances are 4-neighbours.
    #[test]
    fn prop_locality((order, d) in order_and_distance()) {
        prop_assume!(order > 0);
        let w = width(order);
        prop_assume!(w.contains(d.wrapping_add(1)) && d != u32::MAX);
        prop_assert_eq!(decode(w, d).manhattan(decode(w, d + 1)), 1);
    }

    /// Any 32-bit input is accepted and high bits are ignored consistently.
    #[test]
    fn prop_unchecked_ignores_high_bits(order in 0u32..16, d in any::<u32>()) {
        let w = width(order);
        let low = d & w.distance_mask();
        prop_assert_eq!(decode(w, d), decode(w, low));
        prop_assert_eq!(decode_iterative(w, d), decode(w, d));
    }

    /// The checked decoder rejects exactly the out-of-domain distances.
    #[test]
    fn prop_try_decode_domain(order in 0u32..16, d in any::<u32>()) {
        let w = width(order);
        match try_decode(w, d) {
            Ok(p) => {
                prop_assert!(w.contains(d));
                prop_assert_eq!(p, decode(w, d));
            }
            Err(_) => prop_assert!(!w.contains(d)),
        }
    }
}
