use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense 2-D matrix of `f64`, stored row-major.
///
/// Every operation returns a new `Matrix`; inputs are never mutated.
/// Binary operations check shape compatibility and fail with
/// `Error::DimensionMismatch` instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row-major data. The data length must be
    /// exactly `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        if data.len() != rows * cols {
            return Err(Error::InvalidConfiguration(format!(
                "matrix data length {} does not match shape {}x{}",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds an `n x 1` column vector from a slice.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Fills a matrix with values drawn i.i.d. uniform on `[-bound, bound]`.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, bound: f64, rng: &mut R) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| rng.gen_range(-bound..=bound))
            .collect();
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Contents as a plain vector, row by row.
    pub fn to_column_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Returns a new matrix where element `(i, j)` is `f(i, j, self[(i, j)])`.
    pub fn apply<F>(&self, f: F) -> Matrix
    where
        F: Fn(usize, usize, f64) -> f64,
    {
        let mut res = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i * self.cols + j] = f(i, j, self.get(i, j));
            }
        }
        res
    }

    /// Matrix product. Requires `self.cols == other.rows`; the result has
    /// shape `self.rows x other.cols`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch("dot", other));
        }

        let mut res = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                res.data[i * other.cols + j] = sum;
            }
        }
        Ok(res)
    }

    /// Every element multiplied by the scalar `s`.
    pub fn scale(&self, s: f64) -> Matrix {
        self.apply(|_, _, v| v * s)
    }

    /// Elementwise (Hadamard) product. Shapes must be identical.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with("hadamard", other, |a, b| a * b)
    }

    /// Elementwise sum. Shapes must be identical.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Elementwise difference. Shapes must be identical.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with("sub", other, |a, b| a - b)
    }

    /// Adds the scalar `s` to every element, by broadcasting `s` into a
    /// same-shape matrix and elementwise-adding it.
    pub fn add_scalar(&self, s: f64) -> Matrix {
        let broadcast = Matrix {
            rows: self.rows,
            cols: self.cols,
            data: vec![s; self.rows * self.cols],
        };
        // Shapes agree by construction, so this cannot fail.
        match self.add(&broadcast) {
            Ok(m) => m,
            Err(_) => unreachable!(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j * self.rows + i] = self.get(i, j);
            }
        }
        res
    }

    fn zip_with<F>(&self, op: &'static str, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(op, other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn mismatch(&self, op: &'static str, other: &Matrix) -> Error {
        Error::DimensionMismatch {
            op,
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: other.rows,
            rhs_cols: other.cols,
        }
    }
}
