//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs cover the SWAR bit permutations the decoder relies on for
//! de-interleaving coordinates.
//!
//! Run with: `cargo kani --package qhilbert-core`

use super::{shuffle, split_odd_even_swar, unshuffle, xor_scan_pairs};
use super::bits::{EVEN_BITS, ODD_BITS};

// ============================================================================
// Proof 1: shuffle and unshuffle are inverses
// ============================================================================
// File: shuffle.rs
// What: shuffle(unshuffle(x)) == x and unshuffle(shuffle(x)) == x for all x

/// Verify the delta-swap stages undo each other in reverse order.
#[kani::proof]
fn verify_shuffle_unshuffle_inverse() {
    let x: u32 = kani::any();

    kani::assert(shuffle(unshuffle(x)) == x, "shuffle must invert unshuffle");
    kani::assert(unshuffle(shuffle(x)) == x, "unshuffle must invert shuffle");
}

// ============================================================================
// Proof 2: unshuffle preserves population count
// ============================================================================
// File: shuffle.rs
// What: unshuffle is a permutation of bit positions

/// Verify unshuffle only moves bits, never creates or drops them.
#[kani::proof]
fn verify_unshuffle_preserves_popcount() {
    let x: u32 = kani::any();
    kani::assert(
        unshuffle(x).count_ones() == x.count_ones(),
        "unshuffle must be a bit permutation",
    );
}

// ============================================================================
// Proof 3: SWAR split matches a bit-by-bit reference
// ============================================================================
// File: bits.rs:split_odd_even_swar
// What: odd bit 2i+1 lands at i of the first result, even bit 2i at i of the second

/// Verify the SWAR odd/even split against a direct gather loop.
#[kani::proof]
#[kani::unwind(17)]
fn verify_split_odd_even_reference() {
    let x: u32 = kani::any();
    let (odd, even) = split_odd_even_swar(x);

    let mut ref_odd = 0u32;
    let mut ref_even = 0u32;
    for i in 0..16 {
        ref_odd |= ((x >> (2 * i + 1)) & 1) << i;
        ref_even |= ((x >> (2 * i)) & 1) << i;
    }

    kani::assert(odd == ref_odd, "odd bits must be gathered in order");
    kani::assert(even == ref_even, "even bits must be gathered in order");
    kani::assert((x & ODD_BITS).count_ones() == odd.count_ones(), "odd popcount");
    kani::assert((x & EVEN_BITS).count_ones() == even.count_ones(), "even popcount");
}

// ============================================================================
// Proof 4: XOR scan is an inclusive suffix XOR per bit plane
// ============================================================================
// File: scan.rs
// What: bit i of the result is the XOR of bits i, i+2, i+4, ... of the input

/// Verify the pairwise XOR scan against its definition.
#[kani::proof]
#[kani::unwind(33)]
fn verify_xor_scan_pairs_definition() {
    let x: u32 = kani::any();
    let scanned = xor_scan_pairs(x);

    let mut i = 0;
    while i < 32 {
        let mut expected = 0u32;
        let mut j = i;
        while j < 32 {
            expected ^= (x >> j) & 1;
            j += 2;
        }
        kani::assert((scanned >> i) & 1 == expected, "scan bit mismatch");
        i += 1;
    }
}
