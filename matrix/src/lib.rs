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

#![deny(missing_docs)]

//! A small library of dense, rectangular matrices.
//!
//! The main structure is `GenericMatrix<T: Numberish>`, a mutable container
//! whose data can only be replaced as a whole: either by calling `set_data()`
//! or by one of the arithmetic operations. Every operation comes in two
//! flavours:
//!
//! * a `compute_*` (or plain, for the generic elementwise operations) version
//!   that leaves `self` untouched and returns a new matrix, and
//! * an in-place version (`add`, `subtract`, `multiply`, `scalar_multiply`,
//!   `scalar_divide`, `apply_*`) that replaces the data of `self` and returns
//!   it, so that calls can be chained.
//!
//! ```
//! use matrix::Matrix;
//!
//! let mut a = Matrix::from_rows(vec![vec![2., 4.], vec![6., 8.]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![1., 3., 5.], vec![7., 9., 11.]]).unwrap();
//! a.multiply(&b).unwrap();
//! assert_eq!(a.data(), vec![vec![30., 42., 54.], vec![62., 90., 118.]]);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The errors returned by the operations in this crate
pub mod error;
pub use error::MatrixError;

/// The traits that elements of a matrix need to implement
pub mod traits;
pub use traits::{Numberish, OneZero};

/// The main structure of the library, generic over its elements
pub mod generic_matrix;
pub use generic_matrix::GenericMatrix;

/// The `Float` version of a `GenericMatrix`
pub mod matrix;
pub use crate::matrix::Matrix;
