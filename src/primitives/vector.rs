//! Vector type for 1D numeric data.

use std::fmt;
use std::ops::{Mul, MulAssign};

use super::Scalar;
use crate::error::{MatrizError, Result};

/// A fixed-dimension vector of numeric values (contiguous storage).
///
/// The dimension is set at construction and never changes. Element access is
/// 1-based: the first element is index 1, the last is index `len()`, and
/// index 0 is always invalid. Cloning performs a deep copy of the buffer.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]).expect("non-empty literal");
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Creates a zero-filled vector of dimension `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is 0.
    pub fn zeros(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrizError::InvalidDimensions {
                what: "vector dimension must be > 0",
            });
        }
        Ok(Self {
            data: vec![T::zero(); n],
        })
    }

    /// Creates a vector from literal values; the dimension is the length of
    /// the input.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrizError::InvalidDimensions {
                what: "vector dimension must be > 0",
            });
        }
        Ok(Self { data })
    }

    /// Creates a vector by copying a slice of literal values.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Returns the dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed vector; the zero-dimension case is
    /// rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the element at 1-based index `idx`.
    ///
    /// # Errors
    ///
    /// Returns an error if `idx` is 0 or greater than the dimension.
    pub fn get(&self, idx: usize) -> Result<T> {
        self.check_index(idx)?;
        Ok(self.data[idx - 1])
    }

    /// Sets the element at 1-based index `idx`.
    ///
    /// # Errors
    ///
    /// Returns an error if `idx` is 0 or greater than the dimension.
    pub fn set(&mut self, idx: usize, value: T) -> Result<()> {
        self.check_index(idx)?;
        self.data[idx - 1] = value;
        Ok(())
    }

    /// Returns the Euclidean norm, accumulated in `f64` regardless of the
    /// element type.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|x| x.as_f64() * x.as_f64())
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with `rhs`, computed in the element type's arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        self.check_len(rhs)?;
        Ok(self
            .data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b))
    }

    /// Angle between `self` and `rhs` in radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or either operand has
    /// Euclidean norm zero.
    pub fn angle(&self, rhs: &Self) -> Result<f64> {
        let dot = self.dot(rhs)?;
        let (ln, lr) = (self.norm(), rhs.norm());
        if ln == 0.0 || lr == 0.0 {
            return Err(MatrizError::ZeroLength { op: "angle" });
        }
        let cos = (dot.as_f64() / (ln * lr)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// Elementwise sum, producing a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_len(rhs)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        })
    }

    /// Elementwise sum in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_len(rhs)?;
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + *b;
        }
        Ok(())
    }

    /// Elementwise difference, producing a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_len(rhs)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
        })
    }

    /// Elementwise difference in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_len(rhs)?;
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - *b;
        }
        Ok(())
    }

    /// Multiplies each element by a scalar, producing a new vector.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|x| *x * scalar).collect(),
        }
    }

    /// Multiplies each element by a scalar in place.
    pub fn scale_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x = *x * scalar;
        }
    }

    /// Cross product with `rhs`, producing a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error unless both operands are exactly 3-dimensional.
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.cross_assign(rhs)?;
        Ok(out)
    }

    /// Cross product in place, replacing the receiver's components.
    ///
    /// Using 1-based component numbering, the result is
    /// `(a2*b3 - a3*b2, a3*b1 - a1*b3, a1*b2 - a2*b1)`.
    ///
    /// # Errors
    ///
    /// Returns an error unless both operands are exactly 3-dimensional.
    pub fn cross_assign(&mut self, rhs: &Self) -> Result<()> {
        if self.data.len() != 3 || rhs.data.len() != 3 {
            return Err(MatrizError::NotThreeDimensional {
                lhs: self.data.len(),
                rhs: rhs.data.len(),
            });
        }
        let (a, b) = (&self.data, &rhs.data);
        let i = a[1] * b[2] - a[2] * b[1];
        let j = a[2] * b[0] - a[0] * b[2];
        let k = a[0] * b[1] - a[1] * b[0];
        self.data[0] = i;
        self.data[1] = j;
        self.data[2] = k;
        Ok(())
    }

    /// Returns a new `f64` vector of the same direction with Euclidean norm 1.
    /// The receiver is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiver has Euclidean norm zero.
    pub fn normalize(&self) -> Result<Vector<f64>> {
        let len = self.norm();
        if len == 0.0 {
            return Err(MatrizError::ZeroLength { op: "normalize" });
        }
        Ok(Vector {
            data: self.data.iter().map(|x| x.as_f64() / len).collect(),
        })
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx == 0 || idx > self.data.len() {
            return Err(MatrizError::IndexOutOfBounds {
                index: idx,
                bound: self.data.len(),
                axis: "element",
            });
        }
        Ok(())
    }

    fn check_len(&self, rhs: &Self) -> Result<()> {
        if self.data.len() != rhs.data.len() {
            return Err(MatrizError::DimensionMismatch {
                expected: self.data.len(),
                actual: rhs.data.len(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self.scale_assign(rhs);
        self
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale_assign(rhs);
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    /// Renders as `( e1,e2,...,en )`: comma-separated, no trailing comma.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        let mut first = true;
        for x in &self.data {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{x}")?;
            first = false;
        }
        f.write_str(" )")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
