// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Low-level bit manipulation shared by the scalar decoder and every lane width.
// The SWAR routines are generic over `Lanes`, so the same code runs on one `u32`
// or on a full SIMD register.

/// Odd/even bit separation: BMI2 PEXT on x86_64, SWAR fallback elsewhere.
pub mod bits;

/// Bit-group XOR prefix scans.
pub mod scan;

/// Outer perfect shuffle / unshuffle of 32-bit words (SWAR delta swaps).
pub mod shuffle;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bits::{split_odd_even, split_odd_even_swar};
pub use scan::xor_scan_pairs;
pub use shuffle::{delta_swap, shuffle, unshuffle};
