//! Kani formal verification proofs for the scalar decoder.
//!
//! Run with: `cargo kani --package qhilbert-core`

use super::{decode, decode_iterative};
use crate::width::Width;

/// Largest order checked exhaustively by the symbolic proofs (loop bound for the
/// rotation algorithm).
const MAX_PROOF_ORDER: u32 = 4;

// ============================================================================
// Proof 1: Algorithm equivalence
// ============================================================================
// File: prefix.rs, rotation.rs
// What: decode(w, d) == decode_iterative(w, d) for every order <= 4 and any d

/// Verify the parallel-prefix and quadrant-rotation decoders agree.
#[kani::proof]
#[kani::unwind(6)]
fn verify_algorithms_agree() {
    let order: u32 = kani::any();
    kani::assume(order <= MAX_PROOF_ORDER);
    let distance: u32 = kani::any();

    let Ok(width) = Width::from_order(order) else {
        return;
    };

    kani::assert(
        decode(width, distance) == decode_iterative(width, distance),
        "both decoders must produce the same position",
    );
}

// ============================================================================
// Proof 2: Output range
// ============================================================================
// File: mod.rs:decode
// What: both coordinates are below the width for every order and any d

/// Verify decoded coordinates stay inside the grid.
#[kani::proof]
fn verify_decode_in_range() {
    let order: u32 = kani::any();
    kani::assume(order <= 16);
    let distance: u32 = kani::any();

    let Ok(width) = Width::from_order(order) else {
        return;
    };
    let p = decode(width, distance);

    kani::assert(p.x < width.get(), "x must be below the width");
    kani::assert(p.y < width.get(), "y must be below the width");
}

// ============================================================================
// Proof 3: High bits are ignored
// ============================================================================

/// Verify bits above `2 * order` do not affect the result.
#[kani::proof]
fn verify_high_bits_ignored() {
    let order: u32 = kani::any();
    kani::assume(order < 16);
    let distance: u32 = kani::any();

    let Ok(width) = Width::from_order(order) else {
        return;
    };

    kani::assert(
        decode(width, distance) == decode(width, distance & width.distance_mask()),
        "only the low 2*order bits are significant",
    );
}
