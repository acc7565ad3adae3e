//! Numeric element trait for the container types.

use std::fmt;

use num_traits::{Num, ToPrimitive};

/// Element type accepted by [`Vector`](super::Vector) and
/// [`Matrix`](super::Matrix).
///
/// Implemented for the primitive integer and floating-point types only, so
/// instantiating a container with a non-numeric element type is rejected at
/// compile time rather than at construction time. This is a type-system
/// guarantee; there is no runtime numeric check anywhere in the crate.
pub trait Scalar: Num + Copy + fmt::Display + ToPrimitive {
    /// Lossy conversion to `f64`, used for floating-point accumulation
    /// (norms, angles) regardless of the element type.
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Renders one element for tabular matrix output: integers as written,
    /// floats with 6 significant digits.
    fn fmt_cell(&self) -> String;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn fmt_cell(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn fmt_cell(&self) -> String {
                    fmt_sig6(self.as_f64())
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

/// Formats a float with 6 significant digits, trimming trailing zeros.
///
/// Matches iostream-style `setprecision(6)` output for ordinary magnitudes
/// and falls back to scientific notation outside them.
fn fmt_sig6(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v}");
    }
    let mag = v.abs().log10().floor() as i32;
    if !(-5..6).contains(&mag) {
        return format!("{v:.5e}");
    }
    let decimals = (5 - mag).max(0) as usize;
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_cell_int() {
        assert_eq!(42_i32.fmt_cell(), "42");
        assert_eq!((-7_i64).fmt_cell(), "-7");
    }

    #[test]
    fn test_fmt_cell_float_sig6() {
        assert_eq!(1.12345_f32.fmt_cell(), "1.12345");
        assert_eq!(12.2468_f32.fmt_cell(), "12.2468");
        assert_eq!(5.0_f64.fmt_cell(), "5");
        assert_eq!(0.6_f64.fmt_cell(), "0.6");
        assert_eq!(0.0_f32.fmt_cell(), "0");
        assert_eq!((-12.2468_f64).fmt_cell(), "-12.2468");
    }

    #[test]
    fn test_fmt_cell_float_scientific_fallback() {
        assert_eq!(1234567.0_f64.fmt_cell(), "1.23457e6");
    }

    #[test]
    fn test_as_f64() {
        assert!((3_i32.as_f64() - 3.0).abs() < f64::EPSILON);
        assert!((2.5_f32.as_f64() - 2.5).abs() < 1e-9);
    }
}
