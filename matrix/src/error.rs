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

use thiserror::Error;

/// Everything that can go wrong when building or operating on a `GenericMatrix`.
///
/// None of these leave a matrix half-modified: all checks are done
/// before any data is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The data is not a non-empty, rectangular sequence of non-empty rows
    #[error("the data must be a sequence of sequences of numeric values")]
    InvalidStructure,

    /// Elementwise operation between matrices of different sizes
    #[error("the size of the matrices must match: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    SizeMismatch {
        /// `(nrows, ncols)` of the left-hand matrix
        left: (usize, usize),
        /// `(nrows, ncols)` of the right-hand matrix
        right: (usize, usize),
    },

    /// Matrix product between incompatible matrices
    #[error("row count of right-hand matrix ({right_rows}) must equal column count of left-hand matrix ({left_columns})")]
    DimensionMismatch {
        /// Number of columns of the left-hand matrix
        left_columns: usize,
        /// Number of rows of the right-hand matrix
        right_rows: usize,
    },

    /// Scalar division by zero
    #[error("divisor must not be zero")]
    DivisionByZero,

    /// Element access out of bounds
    #[error("element not found at row {row}, column {column}")]
    ElementNotFound {
        /// The requested row
        row: usize,
        /// The requested column
        column: usize,
    },
}
