//! Core container primitives (Vector, Matrix).
//!
//! Both types own a contiguous buffer of a numeric element type and use
//! 1-based element addressing.

mod matrix;
mod scalar;
mod vector;

pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
