//! Lane abstraction for the batch engine.
//!
//! Every lane width runs the same bit algorithm. [`Lanes`] captures the handful of
//! element-wise operations that algorithm needs (AND, OR, XOR, wrapping add, and
//! constant shifts), so the transform is written once and instantiated per width:
//!
//! | [`LaneWidth`] | Lane type              | Register on x86_64        |
//! |---------------|------------------------|---------------------------|
//! | `X16`         | [`Doubled<u32x8>`]     | one zmm (AVX-512F)        |
//! | `X8`          | `wide::u32x8`          | one ymm (AVX2)            |
//! | `X4`          | `wide::u32x4`          | one xmm (SSE2)            |
//! | `X1`          | `u32`                  | general purpose register  |
//!
//! On targets without a matching vector unit, `wide` falls back to arrays of scalars,
//! so every width is always available and always produces identical results.
//!
//! [`Doubled<u32x8>`]: Doubled

mod doubled;
mod vector;

pub use doubled::{Doubled, U32x16};
pub use wide::{u32x4, u32x8};

/// A vector of `LANES` independent unsigned 32-bit lanes.
///
/// All operations are element-wise. Arithmetic wraps, matching the scalar path.
pub trait Lanes: Copy {
    /// Number of lanes.
    const LANES: usize;

    /// Plain array form, `[u32; LANES]`.
    type Array: Copy + Default + AsRef<[u32]> + AsMut<[u32]>;

    /// Broadcasts `value` to every lane.
    fn splat(value: u32) -> Self;

    /// Builds a vector from its lanes.
    fn from_array(array: Self::Array) -> Self;

    /// Returns the lanes as an array.
    fn to_array(self) -> Self::Array;

    /// Lane-wise `&`.
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise `|`.
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise `^`.
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise wrapping `+`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Lane-wise logical shift right by the constant `S` (`S < 32`).
    fn shift_right<const S: u32>(self) -> Self;

    /// Lane-wise shift left by the constant `S` (`S < 32`).
    fn shift_left<const S: u32>(self) -> Self;

    /// Loads `LANES` consecutive values.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() != LANES`.
    #[inline(always)]
    fn load(src: &[u32]) -> Self {
        let mut array = Self::Array::default();
        array.as_mut().copy_from_slice(src);
        Self::from_array(array)
    }
}

impl Lanes for u32 {
    const LANES: usize = 1;
    type Array = [u32; 1];

    #[inline(always)]
    fn splat(value: u32) -> Self {
        value
    }

    #[inline(always)]
    fn from_array([value]: [u32; 1]) -> Self {
        value
    }

    #[inline(always)]
    fn to_array(self) -> [u32; 1] {
        [self]
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn shift_right<const S: u32>(self) -> Self {
        self >> S
    }

    #[inline(always)]
    fn shift_left<const S: u32>(self) -> Self {
        self << S
    }
}

// =============================================================================
// Lane Width Selection
// =============================================================================

/// Number of distances processed together by one cascade level.
///
/// Ordered by lane count, so `X1 < X4 < X8 < X16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LaneWidth {
    /// Scalar decoder, one distance at a time.
    X1 = 1,
    /// 128-bit vectors.
    X4 = 4,
    /// 256-bit vectors.
    X8 = 8,
    /// 512-bit vectors.
    X16 = 16,
}

impl LaneWidth {
    /// All lane widths, widest first.
    pub const ALL: [LaneWidth; 4] = [Self::X16, Self::X8, Self::X4, Self::X1];

    /// Widest lane width the build target has a vector unit for.
    ///
    /// Fixed at compile time from the enabled target features:
    /// - AVX-512F: `X16`
    /// - AVX2: `X8`
    /// - SSE2, NEON or wasm `simd128`: `X4`
    /// - otherwise: `X1`
    #[must_use]
    pub const fn widest() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx512f"
        )) {
            Self::X16
        } else if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx2"
        )) {
            Self::X8
        } else if cfg!(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ),
            all(
                any(target_arch = "aarch64", target_arch = "arm"),
                target_feature = "neon"
            ),
            all(target_arch = "wasm32", target_feature = "simd128")
        )) {
            Self::X4
        } else {
            Self::X1
        }
    }

    /// Number of lanes.
    #[inline(always)]
    #[must_use]
    pub const fn lanes(self) -> usize {
        self as usize
    }

    /// Next narrower width in the cascade, `None` for `X1`.
    #[must_use]
    pub const fn narrower(self) -> Option<Self> {
        match self {
            Self::X16 => Some(Self::X8),
            Self::X8 => Some(Self::X4),
            Self::X4 => Some(Self::X1),
            Self::X1 => None,
        }
    }

    /// The cascade starting at `self`: `self`, then every narrower width down to `X1`.
    pub fn cascade(self) -> impl Iterator<Item = LaneWidth> {
        core::iter::successors(Some(self), |w| w.narrower())
    }

    /// Parses a lane count (`1`, `4`, `8`, `16`).
    #[must_use]
    pub const fn from_lanes(lanes: usize) -> Option<Self> {
        match lanes {
            1 => Some(Self::X1),
            4 => Some(Self::X4),
            8 => Some(Self::X8),
            16 => Some(Self::X16),
            _ => None,
        }
    }
}

impl Default for LaneWidth {
    fn default() -> Self {
        Self::widest()
    }
}

impl core::fmt::Display for LaneWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "x{}", self.lanes())
    }
}
