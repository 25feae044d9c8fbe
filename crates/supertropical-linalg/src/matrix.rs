//! Dense supertropical matrices.
//!
//! Entries are stored row-major in a flat buffer. A matrix is never mutated
//! after construction; every algebraic method returns a new one.

use std::fmt;
use std::ops::{Index, Mul};

use rayon::prelude::*;

use supertropical_rings::scalar::collect_elements;
use supertropical_rings::{Element, Error, GhostSemiring, IntoElement, Result};

/// Dense matrix of supertropical elements stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<Element>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix from a row-major buffer of elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data` does not hold exactly
    /// `num_rows * num_cols` entries or that product overflows `usize`.
    pub fn new(num_rows: usize, num_cols: usize, data: Vec<Element>) -> Result<Self> {
        if checked_len(num_rows, num_cols) != Some(data.len()) {
            return Err(Error::DimensionMismatch {
                operation: "construction",
                left: (num_rows, num_cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from nested rows of numbers or elements.
    ///
    /// Plain numbers become tangible elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for ragged rows and
    /// [`Error::UnsupportedOperand`] for values outside `ℝ ∪ {-∞}`.
    pub fn from_rows<T: IntoElement>(rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.is_empty() {
            return Ok(Self::zeros(0, 0));
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let len = checked_len(num_rows, num_cols).ok_or(Error::DimensionMismatch {
            operation: "from_rows",
            left: (num_rows, num_cols),
            right: (usize::MAX, 1),
        })?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            if row.len() != num_cols {
                return Err(Error::DimensionMismatch {
                    operation: "from_rows",
                    left: (1, num_cols),
                    right: (1, row.len()),
                });
            }
            data.extend(collect_elements(row)?);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates an `(n, 1)` column vector from a flat sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] for values outside `ℝ ∪ {-∞}`.
    pub fn column<T, I>(values: I) -> Result<Self>
    where
        T: IntoElement,
        I: IntoIterator<Item = T>,
    {
        let data = collect_elements(values)?;
        Ok(Self {
            num_rows: data.len(),
            num_cols: 1,
            data,
        })
    }

    /// Creates a matrix filled with the additive identity `-∞`.
    ///
    /// # Panics
    ///
    /// Panics if `num_rows * num_cols` overflows `usize`.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        let Some(len) = checked_len(num_rows, num_cols) else {
            panic!("shape ({num_rows}, {num_cols}) overflows usize");
        };
        Self {
            data: vec![Element::ZERO; len],
            num_rows,
            num_cols,
        }
    }

    /// Creates the identity matrix: `0` on the diagonal, `-∞` elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut id = Self::zeros(n, n);
        for i in 0..n {
            id.data[i * n + i] = Element::ONE;
        }
        id
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Returns the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<&Element> {
        if row < self.num_rows && col < self.num_cols {
            Ok(&self.data[row * self.num_cols + col])
        } else {
            Err(self.invalid_index(row, col))
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Element] {
        assert!(row < self.num_rows, "row {row} out of range");
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)]);
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Matrix-vector multiply: y = A ⊙ x.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x.len() != cols`.
    pub fn mv(&self, x: &[Element]) -> Result<Vec<Element>> {
        if x.len() != self.num_cols {
            return Err(Error::DimensionMismatch {
                operation: "mv",
                left: self.shape(),
                right: (x.len(), 1),
            });
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(Element::ZERO, |acc, (a, b)| acc + a * b)
            })
            .collect())
    }

    /// Matrix-matrix multiply: `C[i][j] = ⊕_k A[i][k] ⊙ B[k][j]`.
    ///
    /// Terms are folded in increasing `k` starting from `-∞`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `cols(self) != rows(other)`.
    pub fn mm(&self, other: &Self) -> Result<Self> {
        self.check_product(other)?;

        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                data.push(self.dot(other, i, j));
            }
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }

    /// Matrix-matrix multiply (parallel over rows). Same result as [`Matrix::mm`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `cols(self) != rows(other)`.
    pub fn mm_parallel(&self, other: &Self) -> Result<Self> {
        self.check_product(other)?;

        let data: Vec<Element> = (0..self.num_rows)
            .into_par_iter()
            .flat_map_iter(|i| (0..other.num_cols).map(move |j| self.dot(other, i, j)))
            .collect();

        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }

    /// Multiplies every entry by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] if the scalar is not a valid element.
    pub fn scale<T: IntoElement>(&self, scalar: T) -> Result<Self> {
        Ok(self.scale_element(&scalar.into_element()?))
    }

    /// Multiplies every entry by an element.
    #[must_use]
    pub fn scale_element(&self, scalar: &Element) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Returns the matrix with row `i` and column `j` removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `i >= rows` or `j >= cols`.
    pub fn get_minor(&self, i: usize, j: usize) -> Result<Self> {
        if i >= self.num_rows || j >= self.num_cols {
            return Err(self.invalid_index(i, j));
        }
        let data: Vec<Element> = self
            .data
            .iter()
            .enumerate()
            .filter(|(k, _)| k / self.num_cols != i && k % self.num_cols != j)
            .map(|(_, e)| *e)
            .collect();
        Ok(Self {
            data,
            num_rows: self.num_rows - 1,
            num_cols: self.num_cols - 1,
        })
    }

    /// Entrywise ghost surpassing `self ⊨ other`.
    ///
    /// Returns false when the shapes differ.
    #[must_use]
    pub fn ghost_surpasses(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.ghost_surpasses(b))
    }

    /// Compares shape, values and ghost flags.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.same_as(b))
    }

    /// Returns the order of a square matrix.
    pub(crate) fn require_square(&self, operation: &'static str) -> Result<usize> {
        if self.is_square() {
            Ok(self.num_rows)
        } else {
            Err(Error::DimensionMismatch {
                operation,
                left: self.shape(),
                right: (self.num_rows, self.num_rows),
            })
        }
    }

    fn check_product(&self, other: &Self) -> Result<()> {
        if self.num_cols == other.num_rows {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                operation: "matrix product",
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn dot(&self, other: &Self, i: usize, j: usize) -> Element {
        let mut sum = Element::ZERO;
        for k in 0..self.num_cols {
            sum = sum + self[(i, k)] * other[(k, j)];
        }
        sum
    }

    fn invalid_index(&self, row: usize, col: usize) -> Error {
        Error::InvalidIndex {
            row,
            col,
            shape: self.shape(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of range for shape {:?}",
            self.shape()
        );
        &self.data[row * self.num_cols + col]
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, other: Self) -> Result<Matrix> {
        self.mm(other)
    }
}

impl Mul<Element> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: Element) -> Matrix {
        self.scale_element(&scalar)
    }
}

impl Mul<Element> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: Element) -> Matrix {
        self.scale_element(&scalar)
    }
}

impl Mul<&Matrix> for Element {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale_element(&self)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Matrix {
                type Output = Result<Matrix>;

                fn mul(self, scalar: $t) -> Result<Matrix> {
                    self.scale(scalar)
                }
            }

            impl Mul<$t> for Matrix {
                type Output = Result<Matrix>;

                fn mul(self, scalar: $t) -> Result<Matrix> {
                    self.scale(scalar)
                }
            }

            impl Mul<&Matrix> for $t {
                type Output = Result<Matrix>;

                fn mul(self, matrix: &Matrix) -> Result<Matrix> {
                    matrix.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

fn checked_len(num_rows: usize, num_cols: usize) -> Option<usize> {
    num_rows.checked_mul(num_cols)
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SupertropicalMatrix(")?;
        for i in 0..self.num_rows {
            write!(f, "[")?;
            for (k, e) in self.row(i).iter().enumerate() {
                if k > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{e}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, ")")
    }
}
