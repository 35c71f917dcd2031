//! Error type for the checked entry points.
//!
//! The fast paths ([`decode`](crate::decode), [`decode_batch`](crate::decode_batch))
//! never fail: the grid width is validated once, when a [`Width`](crate::Width) is
//! built, and distances are not range-checked per element. The `try_*` entry points
//! perform the linear domain scan and report violations with this type.

use thiserror::Error;

/// Contract violations reported by the checked API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HilbertError {
    /// Width is zero, not a power of two, or larger than `2^16`.
    #[error("invalid width {width}: must be a power of two in 1..=65536")]
    InvalidArgument {
        /// The rejected width.
        width: u64,
    },

    /// Curve order above 16 cannot be indexed by a 32-bit distance.
    #[error("curve order {order} exceeds the maximum of 16 for 32-bit distances")]
    OrderTooLarge {
        /// The rejected order.
        order: u32,
    },

    /// A distance lies outside `[0, width^2)`.
    #[error("distance {distance} at index {index} is outside the curve domain [0, {area})")]
    OutOfDomain {
        /// Index of the first offending element (0 for single-value calls).
        index: usize,
        /// The offending distance.
        distance: u32,
        /// Number of cells on the curve (`width^2`).
        area: u64,
    },

    /// Output slices do not match the input length.
    #[error("length mismatch: {distances} distances but {positions} output slots")]
    LengthMismatch {
        /// Number of input distances.
        distances: usize,
        /// Number of output slots provided.
        positions: usize,
    },
}
