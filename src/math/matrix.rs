use rand::prelude::*;

use crate::error::{shape, Error, Result};

/// A rectangular grid of `f64` values.
///
/// Matrices are value objects: two matrices with equal cells are equal and
/// there is no identity beyond the values. The rectangularity invariant
/// (at least one row, every row the same non-zero length) is checked once
/// at construction; the algebraic operations only compare cached
/// dimensions, never re-scan the cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from row vectors, validating rectangularity.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        if rows == 0 {
            return Err(Error::MalformedMatrix {
                reason: "matrix has no rows".into(),
            });
        }

        let cols = data[0].len();
        if cols == 0 {
            return Err(Error::MalformedMatrix {
                reason: "row 0 is empty".into(),
            });
        }

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::MalformedMatrix {
                    reason: format!("row {} has length {}, expected {}", i, row.len(), cols),
                });
            }
        }

        Ok(Matrix { rows, cols, data })
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Wraps a value sequence as a column vector (n x 1).
    pub fn column(values: Vec<f64>) -> Result<Matrix> {
        Matrix::from_rows(values.into_iter().map(|v| vec![v]).collect())
    }

    /// Uniform random initialization scaled by the fan-in.
    ///
    /// Values are drawn from `[-v, v] / 10` with `v = 1 / cols`, where
    /// `cols` is the number of input connections of the layer.
    pub fn xavier(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let v = 1.0 / cols as f64;
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-v..=v) / 10.0;
            }
        }

        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Borrows the underlying row storage.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// The values of a column vector as a flat Vec.
    ///
    /// Fails with `ShapeMismatch` if the matrix has more than one column.
    pub fn column_values(&self) -> Result<Vec<f64>> {
        if !self.is_column() {
            return Err(Error::ShapeMismatch {
                op: "column_values",
                expected: shape(self.rows, 1),
                found: shape(self.rows, self.cols),
            });
        }
        Ok(self.data.iter().map(|row| row[0]).collect())
    }

    /// Matrix product; requires `self.cols == rhs.rows`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch {
                op: "multiply",
                expected: shape(self.cols, rhs.cols),
                found: shape(rhs.rows, rhs.cols),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Element-wise sum; requires identical dimensions.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(Error::ShapeMismatch {
                op: "add",
                expected: shape(self.rows, self.cols),
                found: shape(rhs.rows, rhs.cols),
            });
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        Ok(res)
    }

    /// Transpose: dimensions swapped, `res[i][j] = self[j][i]`.
    ///
    /// Total function, no shape precondition. This is a transpose, not a
    /// matrix inversion; the training algorithm never inverts anything.
    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Element-wise (Hadamard) product; requires identical dimensions.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(Error::ShapeMismatch {
                op: "hadamard",
                expected: shape(self.rows, self.cols),
                found: shape(rhs.rows, rhs.cols),
            });
        }

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Applies a scalar function to every cell.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|&x| functor(x)).collect())
            .collect();

        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}
