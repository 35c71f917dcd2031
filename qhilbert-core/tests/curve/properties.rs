//! Whole-curve properties of the scalar decoder.
//!
//! Each test sweeps complete curves: bijection onto the grid, agreement of both
//! algorithms, unit-step locality, range bounds and self-similarity across orders.

#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::width;
    use qhilbert_core::{decode, decode_iterative, Position, TestCurves};

    /// Orders swept exhaustively by these tests (up to 1024x1024).
    const MAX_SWEEP_ORDER: u32 = 10;

    #[test]
    fn test_bijection_onto_grid() {
        for order in 0..=8 {
            let w = width(order);
            let side = w.get() as usize;
            let mut seen = vec![false; side * side];
            for d in 0..w.area() as u32 {
                let p = decode(w, d);
                let cell = p.y as usize * side + p.x as usize;
                assert!(!seen[cell], "order={order}: cell {p:?} visited twice");
                seen[cell] = true;
            }
            assert!(seen.iter().all(|&v| v), "order={order}: cell never visited");
        }
    }

    #[test]
    fn test_algorithms_agree_exhaustively() {
        for order in 0..=MAX_SWEEP_ORDER {
            let w = width(order);
            for d in 0..w.area() as u32 {
                assert_eq!(
                    decode(w, d),
                    decode_iterative(w, d),
                    "order={order} d={d}"
                );
            }
        }
    }

    #[test]
    fn test_locality_unit_steps() {
        let config = TestCurves::MEDIUM;
        let w = config.width().unwrap();
        let mut prev = decode(w, 0);
        for d in config.distances().skip(1) {
            let p = decode(w, d);
            assert_eq!(prev.manhattan(p), 1, "d={d}: {prev:?} -> {p:?}");
            assert_eq!(prev.chebyshev(p), 1);
            prev = p;
        }
    }

    #[test]
    fn test_coordinates_in_range() {
        for config in TestCurves::defaults() {
            let w = config.width().unwrap();
            for d in config.distances() {
                let p = decode(w, d);
                assert!(p.x < w.get() && p.y < w.get(), "{config:?} d={d}: {p:?}");
            }
        }
    }

    #[test]
    fn test_curve_starts_and_ends_on_bottom_row() {
        for order in 1..=12 {
            let w = width(order);
            assert_eq!(decode(w, 0), Position::ORIGIN);
            let last = (w.area() - 1) as u32;
            assert_eq!(decode(w, last), Position::new(w.get() - 1, 0));
        }
    }

    #[test]
    fn test_self_similarity_quadrants() {
        for k in 0..=6 {
            let small = width(k);
            let big = width(k + 1);
            let w = small.get();
            let q = small.area() as u32;
            for d in 0..q {
                let p = decode(small, d);
                assert_eq!(decode(big, d), p.transposed(), "k={k} d={d}");
                assert_eq!(decode(big, q + d), Position::new(p.x, p.y + w));
                assert_eq!(decode(big, 2 * q + d), Position::new(p.x + w, p.y + w));
                assert_eq!(
                    decode(big, 3 * q + d),
                    Position::new(2 * w - 1 - p.y, w - 1 - p.x)
                );
            }
        }
    }

    #[test]
    fn test_prefix_order_scaling() {
        // The first 4^k distances of every larger curve trace the order-k curve,
        // transposed once per extra order.
        for k in 1..=5 {
            let small = width(k);
            for extra in 1..=3 {
                let big = width(k + extra);
                for d in 0..small.area() as u32 {
                    let p = decode(small, d);
                    let expected = if extra % 2 == 0 { p } else { p.transposed() };
                    assert_eq!(decode(big, d), expected, "k={k} extra={extra} d={d}");
                }
            }
        }
    }
}
