//! Matriz: fixed-shape dense vector and matrix primitives in pure Rust.
//!
//! Matriz provides two owned, contiguous numeric containers — [`primitives::Vector`]
//! and [`primitives::Matrix`] — with runtime-validated construction, 1-based
//! element access, and the usual arithmetic and geometric operations, without
//! pulling in a full numerics stack.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Vector::from_slice(&[1, 3, 5]).unwrap();
//! let b = Vector::from_slice(&[2, 4, 6]).unwrap();
//! assert_eq!(a.dot(&b).unwrap(), 44);
//!
//! let mut m = Matrix::<f32>::zeros(2, 3).unwrap();
//! m.set(1, 2, 1.12345).unwrap();
//! assert_eq!(m.get(1, 2).unwrap(), 1.12345);
//! ```
//!
//! # Indexing
//!
//! Both containers address elements starting at 1: the valid range is
//! `1..=dimension` inclusive and index 0 is always rejected. All validation
//! failures surface as [`error::MatrizError`].
//!
//! # Modules
//!
//! - [`primitives`]: the Vector and Matrix types and the [`primitives::Scalar`]
//!   element trait
//! - [`error`]: the crate-wide error type and `Result` alias

pub mod error;
pub mod prelude;
pub mod primitives;
