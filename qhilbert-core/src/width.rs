//! Validated power-of-two grid width.
//!
//! A 2D Hilbert curve consumes two distance bits per recursion level, so a 32-bit
//! distance addresses at most 16 levels: widths `1, 2, 4, ..., 65536`.

use crate::error::HilbertError;

/// Maximum curve order representable with 32-bit distances.
pub const MAX_ORDER: u32 = 16;

/// Alternating `01` pattern used to pad unused high distance bits.
const PAD_PATTERN: u32 = 0x5555_5555;

/// Side length of a square Hilbert grid, guaranteed to be a power of two `<= 2^16`.
///
/// Stored as the curve order (`log2(width)`), which is what the bit algorithms need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Width {
    order: u8,
}

impl Width {
    /// Creates a width from the grid side length.
    ///
    /// # Errors
    ///
    /// Returns [`HilbertError::InvalidArgument`] if `width` is zero, not a power of
    /// two, or larger than `2^16`.
    pub const fn new(width: u64) -> Result<Self, HilbertError> {
        if !width.is_power_of_two() || width > (1 << MAX_ORDER) {
            return Err(HilbertError::InvalidArgument { width });
        }
        Ok(Self {
            order: width.trailing_zeros() as u8,
        })
    }

    /// Creates a width from the curve order (`width = 2^order`).
    ///
    /// # Errors
    ///
    /// Returns [`HilbertError::OrderTooLarge`] if `order > 16`.
    pub const fn from_order(order: u32) -> Result<Self, HilbertError> {
        if order > MAX_ORDER {
            return Err(HilbertError::OrderTooLarge { order });
        }
        Ok(Self {
            order: order as u8,
        })
    }

    /// Curve order, `log2(width)`.
    #[inline(always)]
    #[must_use]
    pub const fn order(self) -> u32 {
        self.order as u32
    }

    /// Grid side length.
    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> u32 {
        1 << self.order
    }

    /// Number of cells, `width^2`. Equals `2^32` at order 16, hence `u64`.
    #[inline(always)]
    #[must_use]
    pub const fn area(self) -> u64 {
        1 << (2 * self.order as u32)
    }

    /// Whether `distance` lies in `[0, width^2)`.
    #[inline(always)]
    #[must_use]
    pub const fn contains(self, distance: u32) -> bool {
        (distance as u64) < self.area()
    }

    /// Mask of the `2 * order` significant distance bits.
    #[inline(always)]
    #[must_use]
    pub const fn distance_mask(self) -> u32 {
        if self.order as u32 == MAX_ORDER {
            u32::MAX
        } else {
            (1 << (2 * self.order as u32)) - 1
        }
    }

    /// The `0101...` pattern occupying every bit above the significant ones.
    ///
    /// A padded `01` group decodes as "no swap, no complement", so the padding leaves
    /// the prefix scan over the real groups unchanged.
    #[inline(always)]
    #[must_use]
    pub const fn padding(self) -> u32 {
        PAD_PATTERN & !self.distance_mask()
    }
}

impl TryFrom<u64> for Width {
    type Error = HilbertError;

    fn try_from(width: u64) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl TryFrom<u32> for Width {
    type Error = HilbertError;

    fn try_from(width: u32) -> Result<Self, Self::Error> {
        Self::new(width as u64)
    }
}

impl From<Width> for u64 {
    fn from(width: Width) -> Self {
        width.get() as u64
    }
}

impl core::fmt::Display for Width {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let w = self.get();
        write!(f, "{w}x{w} (order {})", self.order)
    }
}
