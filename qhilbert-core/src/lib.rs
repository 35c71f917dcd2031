//! # qhilbert-core: Batched Inverse Hilbert Curve Transform
//!
//! `qhilbert-core` is a `no_std`, allocation-free library that maps distances along a
//! 2D Hilbert space-filling curve to `(x, y)` grid coordinates, as fast as possible,
//! for large arrays of distances.
//!
//! ## Overview
//!
//! For a square grid of side `W = 2^order`, the Hilbert curve visits every cell exactly
//! once, always stepping to a 4-neighbour. This crate computes the inverse mapping
//! (distance -> position) with two interchangeable algorithms:
//!
//! 1. **Quadrant rotation** - the classic serial, branchy `d2xy` loop
//!    ([`decode_iterative`]).
//! 2. **Parallel prefix** - a branchless bit-trick that decodes the whole distance word
//!    at once ([`decode`], the default).
//!
//! ## Architecture
//!
//! The batch engine ([`decode_batch`]) runs the parallel-prefix transform on several
//! independent lanes at once and cascades down through lane widths:
//!
//! ```text
//! distances: |--------- 16 ---------|--------- 16 ---------|--- 8 ---|- 4 -|1|1|
//!             X16 blocks while >= 16 remain                 X8        X4    scalar
//! ```
//!
//! - **Lane abstraction** - one generic implementation over [`Lanes`], instantiated
//!   at `u32`, `u32x4`, `u32x8` and a doubled `u32x8`
//! - **Capability selection** - [`LaneWidth::widest`] is fixed by the build target
//!   (AVX-512F, AVX2, SSE2/NEON/simd128, or scalar)
//! - **BMI2 PEXT** - scalar de-interleave uses hardware bit extraction when enabled
//! - **Interleave primitive** - one transpose routine turns X/Y lanes into `(x, y)` pairs
//!
//! ## Quick Start
//!
//! ```ignore
//! use qhilbert_core::{decode, decode_batch, Position, Width};
//!
//! let width = Width::new(128)?;
//! assert_eq!(decode(width, 0), Position::new(0, 0));
//!
//! let distances: Vec<u32> = (0..width.area() as u32).collect();
//! let mut positions = vec![Position::default(); distances.len()];
//! decode_batch(width, &distances, &mut positions);
//! ```
//!
//! ## Module Organization
//!
//! - [`curve`] - Scalar decoder (parallel prefix and quadrant rotation)
//! - [`batch`] - Lane-width cascade, array-of-structs and structure-of-arrays output
//! - [`lanes`] - The "vector of K u32 lanes" capability and lane-width selection
//! - [`intrinsics`] - Low-level bit manipulation (PEXT, SWAR unshuffle, XOR scans)
//! - [`width`] - Validated power-of-two grid width
//! - [`position`] - The `(x, y)` output type
//! - [`error`] - Error type for the checked entry points
//! - [`testing_curves`] - Standard curve configurations for testing and benchmarks

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Batch engine: lane-width cascade and output sinks.
pub mod batch;

/// Scalar decoder: parallel-prefix and quadrant-rotation algorithms.
pub mod curve;

/// Error type for the checked entry points.
pub mod error;

/// Low-level bit manipulation: PEXT, SWAR unshuffle, XOR prefix scans.
pub mod intrinsics;

/// Lane abstraction and build-target lane-width selection.
pub mod lanes;

/// The `(x, y)` coordinate type.
pub mod position;

/// Pre-configured curve orders for testing and benchmarks.
pub mod testing_curves;

/// Validated power-of-two grid width.
pub mod width;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Scalar decoder
pub use curve::{decode, decode_iterative, try_decode};

// Batch engine
pub use batch::{
    decode_batch, decode_batch_from, decode_batch_planar, decode_batch_planar_from,
    try_decode_batch,
};

// Lanes
pub use lanes::{Doubled, LaneWidth, Lanes};

// Core value types
pub use error::HilbertError;
pub use position::Position;
pub use width::{Width, MAX_ORDER};

// Testing utilities
pub use testing_curves::{CurveConfig, TestCurves};
