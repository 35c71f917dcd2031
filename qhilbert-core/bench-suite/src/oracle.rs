//! Reference `d2xy`: the textbook rotate/flip loop on signed integers.
//!
//! Kept deliberately independent from `qhilbert-core` so a bug in the library
//! cannot hide itself in the ground truth.

use qhilbert_core::Position;

fn rot(n: i64, x: &mut i64, y: &mut i64, rx: i64, ry: i64) {
    if ry == 0 {
        if rx == 1 {
            *x = n - 1 - *x;
            *y = n - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

/// Converts distance `d` to `(x, y)` on an `n x n` curve.
pub fn d2xy(n: i64, d: i64) -> (i64, i64) {
    let (mut x, mut y) = (0, 0);
    let mut t = d;
    let mut s = 1;
    while s < n {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        rot(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    (x, y)
}

/// Ground truth for every distance.
pub fn ground_truth(side: u32, distances: &[u32]) -> Vec<Position> {
    distances
        .iter()
        .map(|&d| {
            let (x, y) = d2xy(side as i64, d as i64);
            Position::new(x as u32, y as u32)
        })
        .collect()
}
