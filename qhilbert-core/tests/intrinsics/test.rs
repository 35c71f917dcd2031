//! Unit tests for qhilbert-core intrinsics module.
//!
//! Tests cover: bits.rs, scan.rs, shuffle.rs
//! Focus: the de-interleave and prefix patterns used by the decoder.

#[cfg(test)]
mod tests {
    use qhilbert_core::intrinsics::bits::{EVEN_BITS, ODD_BITS};
    use qhilbert_core::intrinsics::{
        delta_swap, shuffle, split_odd_even, split_odd_even_swar, unshuffle, xor_scan_pairs,
    };
    use qhilbert_core::lanes::{u32x4, Lanes};

    // =========================================================================
    // shuffle.rs: unshuffle tests
    // =========================================================================

    #[test]
    fn test_unshuffle_separates_planes() {
        assert_eq!(unshuffle(ODD_BITS), 0xFFFF_0000);
        assert_eq!(unshuffle(EVEN_BITS), 0x0000_FFFF);
        assert_eq!(unshuffle(0u32), 0);
        assert_eq!(unshuffle(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_unshuffle_single_bits() {
        for i in 0..16 {
            // Even bit 2i goes to i, odd bit 2i+1 goes to 16+i.
            assert_eq!(unshuffle(1u32 << (2 * i)), 1 << i);
            assert_eq!(unshuffle(1u32 << (2 * i + 1)), 1 << (16 + i));
        }
    }

    #[test]
    fn test_shuffle_inverts_unshuffle() {
        for x in [0u32, 1, 0xDEAD_BEEF, 0x1234_5678, u32::MAX, 0x8000_0001] {
            assert_eq!(shuffle(unshuffle(x)), x);
            assert_eq!(unshuffle(shuffle(x)), x);
        }
    }

    #[test]
    fn test_delta_swap_is_involution() {
        let x = 0xA5C3_0F96u32;
        let once = delta_swap::<u32, 4>(x, 0x00F0_00F0);
        assert_ne!(once, x);
        assert_eq!(delta_swap::<u32, 4>(once, 0x00F0_00F0), x);
    }

    #[test]
    fn test_unshuffle_lanes_match_scalar() {
        let words = [0xDEAD_BEEF, 0x0123_4567, ODD_BITS, 7];
        let out = unshuffle(u32x4::from_array(words)).to_array();
        for (i, &w) in words.iter().enumerate() {
            assert_eq!(out[i], unshuffle(w));
        }
    }

    // =========================================================================
    // bits.rs: split_odd_even tests
    // =========================================================================

    #[test]
    fn test_split_odd_even_basic() {
        assert_eq!(split_odd_even(0b10), (1, 0));
        assert_eq!(split_odd_even(0b01), (0, 1));
        assert_eq!(split_odd_even(0b1101), (0b10, 0b11));
        assert_eq!(split_odd_even(ODD_BITS), (0xFFFF, 0));
        assert_eq!(split_odd_even(EVEN_BITS), (0, 0xFFFF));
    }

    #[test]
    fn test_split_odd_even_matches_swar() {
        // Hardware PEXT (when enabled) must agree with the portable path.
        for x in [0u32, 1, 2, 3, 0xCAFE_BABE, u32::MAX, 0x8000_0000] {
            assert_eq!(split_odd_even(x), split_odd_even_swar(x));
        }
    }

    // =========================================================================
    // scan.rs: xor_scan_pairs tests
    // =========================================================================

    #[test]
    fn test_xor_scan_single_bit_propagates_down() {
        // A bit at position 31 reaches every odd position below it.
        assert_eq!(xor_scan_pairs(1u32 << 31), ODD_BITS);
        // A bit at position 30 reaches every even position below it.
        assert_eq!(xor_scan_pairs(1u32 << 30), EVEN_BITS);
        // Low bits never move up.
        assert_eq!(xor_scan_pairs(1u32), 1);
    }

    #[test]
    fn test_xor_scan_cancels_pairs() {
        // Two set bits in the same plane cancel below the lower one.
        let x = (1u32 << 10) | (1u32 << 4);
        let expected = (1u32 << 10) | (1 << 8) | (1 << 6);
        assert_eq!(xor_scan_pairs(x), expected);
    }
}
