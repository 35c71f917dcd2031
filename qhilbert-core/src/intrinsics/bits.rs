// =============================================================================
// Odd/Even Bit Separation
// =============================================================================
//
// Splits an interleaved word into its odd-position and even-position bits.
// Uses BMI2 hardware bit extraction (PEXT) when the build target enables it,
// with the SWAR unshuffle as the portable fallback.

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
use core::arch::x86_64::_pext_u32;

use crate::intrinsics::shuffle::unshuffle;

/// Odd bit positions (`0xAAAAAAAA`).
pub const ODD_BITS: u32 = 0xAAAA_AAAA;

/// Even bit positions (`0x55555555`).
pub const EVEN_BITS: u32 = 0x5555_5555;

/// Returns `(odd bits, even bits)` of `word`, each compacted into the low 16 bits.
///
/// Uses BMI2 PEXT on x86_64 targets built with `bmi2`, SWAR fallback elsewhere.
#[inline(always)]
pub fn split_odd_even(word: u32) -> (u32, u32) {
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    unsafe {
        (_pext_u32(word, ODD_BITS), _pext_u32(word, EVEN_BITS))
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    {
        split_odd_even_swar(word)
    }
}

/// SWAR form of [`split_odd_even`], available on every target.
#[inline(always)]
pub fn split_odd_even_swar(word: u32) -> (u32, u32) {
    let s = unshuffle(word);
    (s >> 16, s & 0xFFFF)
}
