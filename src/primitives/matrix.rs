//! Matrix type for 2D numeric data.

use std::fmt;

use super::Scalar;
use crate::error::{MatrizError, Result};

/// A fixed-shape matrix of numeric values (row-major storage).
///
/// `rows` and `cols` are set at construction and never change. Element access
/// is 1-based on both axes: valid indices are `1..=rows` and `1..=cols`, and
/// index 0 is always invalid.
///
/// `Matrix` deliberately implements no `Clone`: each instance exclusively
/// owns its buffer for its whole lifetime and cannot be duplicated.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).expect("rows have equal length");
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(2, 2).expect("in range"), 4);
/// ```
#[derive(Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a zero-filled matrix of the given shape.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is 0.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions {
                what: "rows and cols must be > 0",
            });
        }
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is 0 or the data length doesn't
    /// equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions {
                what: "rows and cols must be > 0",
            });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::InvalidDimensions {
                what: "data length must equal rows * cols",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested row literals. The first row fixes the
    /// column count; every later row must match it exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the outer list or the first row is empty, or if
    /// any row's length differs from the first row's.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrizError::InvalidDimensions {
                what: "rows and cols must be > 0",
            });
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MatrizError::InvalidDimensions {
                what: "rows and cols must be > 0",
            });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatrizError::InvalidDimensions {
                    what: "all rows must have the same number of columns",
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets the element at 1-based (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is 0 or greater than its dimension.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets the element at 1-based (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is 0 or greater than its dimension.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // Flat offset for 1-based (row, col); index 0 is rejected on both axes.
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || row > self.rows {
            return Err(MatrizError::IndexOutOfBounds {
                index: row,
                bound: self.rows,
                axis: "row",
            });
        }
        if col == 0 || col > self.cols {
            return Err(MatrizError::IndexOutOfBounds {
                index: col,
                bound: self.cols,
                axis: "column",
            });
        }
        Ok((row - 1) * self.cols + (col - 1))
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Renders one line per row, each element right-aligned in a field of 8
    /// followed by a space. Integral element types print as plain integers,
    /// float types with 6 significant digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let cell = self.data[i * self.cols + j].fmt_cell();
                write!(f, "{cell:>8} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
