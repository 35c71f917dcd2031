// =============================================================================
// Bit-Group XOR Prefix Scan
// =============================================================================

use crate::lanes::Lanes;

/// Inclusive XOR prefix scan over 2-bit groups, from the most significant group down.
///
/// After the scan, bit `i` holds the XOR of bits `i, i+2, i+4, ...` of the input.
/// There is no `>> 1` step: the even and odd bit planes are two independent
/// 16-element scans that share the same shifts.
#[inline(always)]
pub fn xor_scan_pairs<L: Lanes>(word: L) -> L {
    let word = word.xor(word.shift_right::<2>());
    let word = word.xor(word.shift_right::<4>());
    let word = word.xor(word.shift_right::<8>());
    word.xor(word.shift_right::<16>())
}
