//! Structure-of-arrays batch output.

#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{scrambled_distances, width};
    use qhilbert_core::batch::interleave_pairs;
    use qhilbert_core::{
        decode, decode_batch_from, decode_batch_planar, decode_batch_planar_from, LaneWidth,
        Position,
    };

    #[test]
    fn test_planar_matches_scalar() {
        let w = width(5);
        let distances: Vec<u32> = (0..w.area() as u32).collect();
        let mut xs = vec![0u32; distances.len()];
        let mut ys = vec![0u32; distances.len()];
        decode_batch_planar(w, &distances, &mut xs, &mut ys);
        for (i, &d) in distances.iter().enumerate() {
            assert_eq!(Position::new(xs[i], ys[i]), decode(w, d));
        }
    }

    #[test]
    fn test_planar_equals_interleaved_every_start() {
        let w = width(9);
        for start in LaneWidth::ALL {
            for count in [0usize, 1, 3, 4, 7, 15, 16, 17, 31, 33, 100] {
                let distances = scrambled_distances(9, count);

                let mut xs = vec![0u32; count];
                let mut ys = vec![0u32; count];
                decode_batch_planar_from(w, &distances, &mut xs, &mut ys, start);

                let mut positions = vec![Position::default(); count];
                decode_batch_from(w, &distances, &mut positions, start);

                let mut rebuilt = vec![Position::default(); count];
                interleave_pairs(&xs, &ys, &mut rebuilt);
                assert_eq!(rebuilt, positions, "count={count} start={start}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_planar_length_mismatch_panics() {
        let mut xs = vec![0u32; 4];
        let mut ys = vec![0u32; 3];
        decode_batch_planar(width(2), &[0, 1, 2, 3], &mut xs, &mut ys);
    }
}
