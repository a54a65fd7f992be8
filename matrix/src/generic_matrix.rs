/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::error::MatrixError;
use crate::traits::Numberish;
use serde::{Deserialize, Serialize};

/// The main Structure in this library.
///
/// It is serialized as a sequence of rows (e.g., `[[1.0,2.0],[3.0,4.0]]`),
/// and deserializing goes through the same validation as `from_rows()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct GenericMatrix<T: Numberish> {
    pub(crate) ncols: usize,
    pub(crate) nrows: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: Vec<T>,
}

impl<T: Numberish> Default for GenericMatrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Numberish> std::fmt::Display for GenericMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            write!(f, "\n\t")?;
            for v in row {
                write!(f, "{}, ", v)?;
            }
        }
        Ok(())
    }
}

impl<T: Numberish> TryFrom<Vec<Vec<T>>> for GenericMatrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: Numberish> From<GenericMatrix<T>> for Vec<Vec<T>> {
    fn from(m: GenericMatrix<T>) -> Self {
        m.data()
    }
}

impl<T: Numberish> GenericMatrix<T> {
    /* CONSTRUCTION */

    /// Creates an empty Matrix (i.e., size 0x0)
    #[must_use]
    pub fn empty() -> Self {
        GenericMatrix {
            nrows: 0,
            ncols: 0,
            data: Vec::with_capacity(0),
        }
    }

    /// Creates an Identity matrix of size NxN
    #[must_use]
    pub fn eye(n: usize) -> Self {
        GenericMatrix {
            nrows: n,
            ncols: n,
            data: (0..(n * n))
                .map(|i| if i % (n + 1) == 0 { T::one() } else { T::zero() })
                .collect(),
        }
    }

    /// Creates a `GenericMatrix` from a sequence of rows.
    ///
    /// An empty sequence produces an empty matrix. Anything else
    /// has to pass `is_valid()`, or `MatrixError::InvalidStructure` is returned.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let mut ret = Self::empty();
        if !rows.is_empty() {
            ret.set_data(rows)?;
        }
        Ok(ret)
    }

    /// Creates a `GenericMatrix` from a vector containing the elements of the
    /// matrix, ordered by row.
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if nrows.checked_mul(ncols) != Some(data.len()) || (nrows == 0) != (ncols == 0) {
            log::debug!(
                "rejected {} elements for a {}x{} matrix",
                data.len(),
                nrows,
                ncols
            );
            return Err(MatrixError::InvalidStructure);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Checks whether `rows` can become the data of a matrix: it needs to have
    /// at least one row, the first row cannot be empty, and all rows
    /// need to be as long as the first one.
    pub fn is_valid(rows: &[Vec<T>]) -> bool {
        match rows.first() {
            Some(first) => !first.is_empty() && rows.iter().all(|r| r.len() == first.len()),
            None => false,
        }
    }

    /// Replaces the whole content of the matrix by `rows`.
    ///
    /// If `rows` is not valid (see `is_valid()`), `self` is left untouched
    /// and `MatrixError::InvalidStructure` is returned.
    pub fn set_data(&mut self, rows: Vec<Vec<T>>) -> Result<&mut Self, MatrixError> {
        if !Self::is_valid(&rows) {
            log::debug!(
                "rejected data with {} rows: it is empty, ragged or has empty rows",
                rows.len()
            );
            return Err(MatrixError::InvalidStructure);
        }
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let data = rows.into_iter().flatten().collect();
        self.replace_data(nrows, ncols, data);
        Ok(self)
    }

    /// All mutations end up here. The data is swapped as a whole.
    fn replace_data(&mut self, nrows: usize, ncols: usize, data: Vec<T>) {
        debug_assert_eq!(nrows * ncols, data.len());
        log::trace!(
            "replacing {}x{} matrix data by {}x{}",
            self.nrows,
            self.ncols,
            nrows,
            ncols
        );
        self.nrows = nrows;
        self.ncols = ncols;
        self.data = data;
    }

    /* ACCESS */

    /// Checks whether a Matrix has Zero columns and Zero rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 && self.ncols == 0
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The number of rows in the matrix
    pub fn row_count(&self) -> usize {
        self.nrows
    }

    /// The number of columns in the matrix (`0` if empty)
    pub fn column_count(&self) -> usize {
        self.ncols
    }

    /// Returns a copy of the data, as a sequence of rows. Modifying the matrix
    /// afterwards does not affect the returned value.
    pub fn data(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Iterates the rows of the matrix, from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |r| &self.data[r * self.ncols..(r + 1) * self.ncols])
    }

    /// Gets the index of an element within the `data` array of the Matrix
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<T, MatrixError> {
        if nrow < self.nrows && ncol < self.ncols {
            Ok(self.data[self.index(nrow, ncol)])
        } else {
            Err(MatrixError::ElementNotFound {
                row: nrow,
                column: ncol,
            })
        }
    }

    /* GENERIC ELEMENTWISE OPERATIONS */

    fn check_same_size(&self, other: &GenericMatrix<T>) -> Result<(), MatrixError> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            log::debug!(
                "size mismatch: {}x{} vs {}x{}",
                self.nrows,
                self.ncols,
                other.nrows,
                other.ncols
            );
            return Err(MatrixError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Combines `self` and `other`, element by element, returning a new matrix
    /// where `ret[row][col] = f(self[row][col], other[row][col])`. Neither
    /// `self` nor `other` are modified.
    ///
    /// `f` is called row by row, left to right.
    pub fn elementwise<F>(
        &self,
        other: &GenericMatrix<T>,
        mut f: F,
    ) -> Result<GenericMatrix<T>, MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        self.check_same_size(other)?;

        Ok(GenericMatrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: std::iter::zip(self.data.iter(), other.data.iter())
                .map(|(x, y)| f(*x, *y))
                .collect(),
        })
    }

    /// Same as `elementwise()`, but the result replaces the data of `self`
    pub fn apply_elementwise<F>(
        &mut self,
        other: &GenericMatrix<T>,
        f: F,
    ) -> Result<&mut Self, MatrixError>
    where
        F: FnMut(T, T) -> T,
    {
        let ret = self.elementwise(other, f)?;
        self.replace_data(ret.nrows, ret.ncols, ret.data);
        Ok(self)
    }

    /// Returns a new matrix where `ret[row][col] = f(self[row][col])`.
    ///
    /// `f` is called row by row, left to right.
    #[must_use]
    pub fn map_elements<F>(&self, f: F) -> GenericMatrix<T>
    where
        F: FnMut(T) -> T,
    {
        GenericMatrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Same as `map_elements()`, but the result replaces the data of `self`
    pub fn apply_map_elements<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        let ret = self.map_elements(f);
        self.replace_data(ret.nrows, ret.ncols, ret.data);
        self
    }

    /* ARITHMETIC OPERATION */

    /// Adds `other` to `self`
    pub fn add(&mut self, other: &GenericMatrix<T>) -> Result<&mut Self, MatrixError> {
        self.apply_elementwise(other, |x, y| x + y)
    }

    /// Returns `self + other`, without modifying `self`
    pub fn compute_add(&self, other: &GenericMatrix<T>) -> Result<GenericMatrix<T>, MatrixError> {
        self.elementwise(other, |x, y| x + y)
    }

    /// Subtracts `other` from `self`
    pub fn subtract(&mut self, other: &GenericMatrix<T>) -> Result<&mut Self, MatrixError> {
        self.apply_elementwise(other, |x, y| x - y)
    }

    /// Returns `self - other`, without modifying `self`
    pub fn compute_subtract(
        &self,
        other: &GenericMatrix<T>,
    ) -> Result<GenericMatrix<T>, MatrixError> {
        self.elementwise(other, |x, y| x - y)
    }

    /// Multiplies every element of `self` by `s`
    pub fn scalar_multiply(&mut self, s: T) -> &mut Self {
        self.apply_map_elements(|x| x * s)
    }

    /// Returns `self * s`, without modifying `self`
    #[must_use]
    pub fn compute_scalar_multiply(&self, s: T) -> GenericMatrix<T> {
        self.map_elements(|x| x * s)
    }

    /// Divides every element of `self` by `s`. Returns an error
    /// if `s` is zero.
    pub fn scalar_divide(&mut self, s: T) -> Result<&mut Self, MatrixError> {
        let ret = self.compute_scalar_divide(s)?;
        self.replace_data(ret.nrows, ret.ncols, ret.data);
        Ok(self)
    }

    /// Returns `self / s`, without modifying `self`. Returns an error
    /// if `s` is zero.
    pub fn compute_scalar_divide(&self, s: T) -> Result<GenericMatrix<T>, MatrixError> {
        if s == T::zero() {
            log::debug!(
                "refused to divide a {}x{} matrix by zero",
                self.nrows,
                self.ncols
            );
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map_elements(|x| x / s))
    }

    /// Multiplies `self` by `other` (i.e., `self = self * other`)
    pub fn multiply(&mut self, other: &GenericMatrix<T>) -> Result<&mut Self, MatrixError> {
        let ret = self.compute_multiply(other)?;
        self.replace_data(ret.nrows, ret.ncols, ret.data);
        Ok(self)
    }

    /// Returns the product `self * other`, without modifying `self`.
    ///
    /// The number of columns in `self` must be equal to the number of rows
    /// in `other`. Each element of the result is accumulated starting from
    /// zero, in column order of `self`.
    pub fn compute_multiply(
        &self,
        other: &GenericMatrix<T>,
    ) -> Result<GenericMatrix<T>, MatrixError> {
        if self.ncols != other.nrows {
            log::debug!(
                "cannot multiply a {}x{} by a {}x{} matrix",
                self.nrows,
                self.ncols,
                other.nrows,
                other.ncols
            );
            return Err(MatrixError::DimensionMismatch {
                left_columns: self.ncols,
                right_rows: other.nrows,
            });
        }

        // Only two empty matrices get here with zero columns
        if self.ncols == 0 {
            return Ok(Self::empty());
        }

        let mut into = GenericMatrix {
            nrows: self.nrows,
            ncols: other.ncols,
            data: vec![T::zero(); self.nrows * other.ncols],
        };

        let self_rows = self.data.chunks_exact(self.ncols);
        self_rows
            .zip(into.data.chunks_exact_mut(other.ncols))
            .for_each(|(row_data, into_data)| {
                for (col, item) in into_data.iter_mut().enumerate() {
                    let coldata = other.data.iter().skip(col).step_by(other.ncols);
                    *item = row_data
                        .iter()
                        .zip(coldata)
                        .map(|(a, b)| *a * *b)
                        .fold(T::zero(), |acc, val| acc + val);
                }
            });

        Ok(into)
    }

    /// Transposes the matrix. Rows become columns and columns become
    /// rows.
    pub fn transpose(&mut self) -> &mut Self {
        let data: Vec<T> = (0..self.ncols)
            .flat_map(|col| (0..self.nrows).map(move |row| (row, col)))
            .map(|(row, col)| self.data[self.index(row, col)])
            .collect();
        self.replace_data(self.ncols, self.nrows, data);
        self
    }
}
