//! Lane-count doubling: two vectors driven as one.

use wide::{u32x4, u32x8};

use super::Lanes;

/// Two vectors of the same type processed in lock step (`lo` holds the first half).
///
/// `Doubled<u32x8>` is the 16-lane level of the cascade. With AVX-512 enabled, LLVM
/// fuses each pair of 256-bit operations into one 512-bit instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doubled<L> {
    /// Lanes `0..N`.
    pub lo: L,
    /// Lanes `N..2N`.
    pub hi: L,
}

/// Sixteen lanes.
pub type U32x16 = Doubled<u32x8>;

macro_rules! impl_lanes_for_doubled {
    ($($half:ty => $half_lanes:literal, $lanes:literal),+ $(,)?) => {
        $(
            impl Lanes for Doubled<$half> {
                const LANES: usize = $lanes;
                type Array = [u32; $lanes];

                #[inline(always)]
                fn splat(value: u32) -> Self {
                    let half = <$half as Lanes>::splat(value);
                    Self { lo: half, hi: half }
                }

                #[inline(always)]
                fn from_array(array: [u32; $lanes]) -> Self {
                    let [lo, hi]: [[u32; $half_lanes]; 2] = bytemuck::cast(array);
                    Self {
                        lo: <$half as Lanes>::from_array(lo),
                        hi: <$half as Lanes>::from_array(hi),
                    }
                }

                #[inline(always)]
                fn to_array(self) -> [u32; $lanes] {
                    let halves: [[u32; $half_lanes]; 2] =
                        [Lanes::to_array(self.lo), Lanes::to_array(self.hi)];
                    bytemuck::cast(halves)
                }

                #[inline(always)]
                fn and(self, rhs: Self) -> Self {
                    Self { lo: self.lo.and(rhs.lo), hi: self.hi.and(rhs.hi) }
                }

                #[inline(always)]
                fn or(self, rhs: Self) -> Self {
                    Self { lo: self.lo.or(rhs.lo), hi: self.hi.or(rhs.hi) }
                }

                #[inline(always)]
                fn xor(self, rhs: Self) -> Self {
                    Self { lo: self.lo.xor(rhs.lo), hi: self.hi.xor(rhs.hi) }
                }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    Self {
                        lo: self.lo.wrapping_add(rhs.lo),
                        hi: self.hi.wrapping_add(rhs.hi),
                    }
                }

                #[inline(always)]
                fn shift_right<const S: u32>(self) -> Self {
                    Self { lo: self.lo.shift_right::<S>(), hi: self.hi.shift_right::<S>() }
                }

                #[inline(always)]
                fn shift_left<const S: u32>(self) -> Self {
                    Self { lo: self.lo.shift_left::<S>(), hi: self.hi.shift_left::<S>() }
                }
            }
        )+
    };
}

impl_lanes_for_doubled!(u32x4 => 4, 8, u32x8 => 8, 16);
