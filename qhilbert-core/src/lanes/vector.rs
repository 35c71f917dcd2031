//! [`Lanes`] for the `wide` 128-bit and 256-bit vectors.

use wide::{u32x4, u32x8};

use super::Lanes;

macro_rules! impl_lanes_for_wide {
    ($($vector:ty => $lanes:literal),+ $(,)?) => {
        $(
            impl Lanes for $vector {
                const LANES: usize = $lanes;
                type Array = [u32; $lanes];

                #[inline(always)]
                fn splat(value: u32) -> Self {
                    <$vector>::splat(value)
                }

                #[inline(always)]
                fn from_array(array: [u32; $lanes]) -> Self {
                    <$vector>::new(array)
                }

                #[inline(always)]
                fn to_array(self) -> [u32; $lanes] {
                    <$vector>::to_array(self)
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
                    self + rhs
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
        )+
    };
}

impl_lanes_for_wide!(u32x4 => 4, u32x8 => 8);
