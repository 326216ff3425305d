//! Linear system types
//!
//! This module defines the core data type of the crate:
//! - `LinearSystem`: a dense square system Ax = b
//!
//! The coefficient matrix and right-hand side are established once at
//! construction and are read-only for the lifetime of a solve. Solvers
//! receive the system by shared reference and never mutate it, which is
//! what makes it safe to share between worker threads without locking.

use nalgebra::{DMatrix, DVector};

/// Smallest diagonal magnitude a solver will accept.
///
/// The Jacobi update divides by `a[i][i]`; anything below this bound is
/// treated as a division by zero rather than silently producing NaN or Inf.
pub const DIAGONAL_EPSILON: f64 = 1e-12;

// =================================================================================================
// Linear System (Dense, Square)
// =================================================================================================

/// Dense square linear system Ax = b
///
/// # Invariants
///
/// Checked at construction and guaranteed afterwards:
/// - `a` is square, n×n with n ≥ 1
/// - `b` has length n
///
/// Fields are private so that no caller can break those invariants after
/// construction. A solve borrows the system immutably from start to finish.
///
/// # What is NOT checked at construction
///
/// Diagonal dominance and diagonal magnitude are properties of the *values*,
/// not the shape, and an arbitrary caller-supplied matrix is allowed here.
/// Solvers call [`check_diagonal`](LinearSystem::check_diagonal) before
/// iterating; [`is_diagonally_dominant`](LinearSystem::is_diagonally_dominant)
/// is available for callers that want the convergence guarantee up front.
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use jacobi_rs::system::LinearSystem;
///
/// let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0,
///                                         2.0, 5.0]);
/// let b = DVector::from_vec(vec![1.0, 2.0]);
///
/// let system = LinearSystem::new(a, b).unwrap();
/// assert_eq!(system.n(), 2);
/// assert!(system.is_diagonally_dominant());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    /// Coefficient matrix (n×n)
    a: DMatrix<f64>,

    /// Right-hand side (n)
    b: DVector<f64>,
}

impl LinearSystem {
    /// Create a new system, validating its shape
    ///
    /// # Errors
    ///
    /// - matrix is not square
    /// - matrix is empty (n = 0)
    /// - right-hand side length does not match the matrix dimension
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self, String> {
        if a.nrows() != a.ncols() {
            return Err(format!(
                "LinearSystem::new: matrix is not square ({} x {})",
                a.nrows(),
                a.ncols()
            ));
        }
        if a.nrows() == 0 {
            return Err("LinearSystem::new: system dimension must be at least 1".to_string());
        }
        if b.len() != a.nrows() {
            return Err(format!(
                "LinearSystem::new: right-hand side has length {} but matrix is {} x {}",
                b.len(),
                a.nrows(),
                a.ncols()
            ));
        }

        Ok(Self { a, b })
    }

    /// Coefficient matrix
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Right-hand side
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// System dimension n
    pub fn n(&self) -> usize {
        self.a.nrows()
    }

    /// Check strict diagonal dominance: |a_ii| > Σ_{j≠i} |a_ij| for every row
    ///
    /// Strict dominance guarantees convergence of Jacobi iteration on this
    /// system, for any initial guess.
    pub fn is_diagonally_dominant(&self) -> bool {
        let n = self.n();
        for i in 0..n {
            let mut off_diagonal_sum = 0.0;
            for (j, a_ij) in self.a.row(i).iter().enumerate() {
                if j != i {
                    off_diagonal_sum += a_ij.abs();
                }
            }
            if self.a[(i, i)].abs() <= off_diagonal_sum {
                return false;
            }
        }
        true
    }

    /// Reject diagonals a Jacobi sweep cannot divide by
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending row when |a_ii| is below
    /// [`DIAGONAL_EPSILON`]. Generated systems never trip this; it defends
    /// against arbitrary caller-supplied matrices.
    pub fn check_diagonal(&self) -> Result<(), String> {
        for i in 0..self.n() {
            let diagonal = self.a[(i, i)];
            if diagonal.abs() < DIAGONAL_EPSILON {
                return Err(format!(
                    "Diagonal entry at row {} is {} — Jacobi iteration would divide by zero. \
                     Reorder the system or use a method that does not require nonzero pivots.",
                    i, diagonal
                ));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dominant_system() -> LinearSystem {
        let a = DMatrix::from_row_slice(3, 3, &[
            10.0, 1.0, 1.0,
            1.0, 10.0, 1.0,
            1.0, 1.0, 10.0,
        ]);
        let b = DVector::from_vec(vec![12.0, 12.0, 12.0]);
        LinearSystem::new(a, b).unwrap()
    }

    // ====== Construction Tests ======

    #[test]
    fn test_valid_construction() {
        let system = small_dominant_system();
        assert_eq!(system.n(), 3);
        assert_eq!(system.b().len(), 3);
        assert_eq!(system.a()[(0, 0)], 10.0);
    }

    #[test]
    fn test_non_square_rejected() {
        let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let result = LinearSystem::new(a, b);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not square"));
    }

    #[test]
    fn test_empty_system_rejected() {
        let a = DMatrix::<f64>::zeros(0, 0);
        let b = DVector::<f64>::zeros(0);

        let result = LinearSystem::new(a, b);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 1"));
    }

    #[test]
    fn test_rhs_length_mismatch_rejected() {
        let a = DMatrix::from_element(3, 3, 1.0);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let result = LinearSystem::new(a, b);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("length 2"));
    }

    // ====== Diagonal Dominance Tests ======

    #[test]
    fn test_dominant_system_detected() {
        assert!(small_dominant_system().is_diagonally_dominant());
    }

    #[test]
    fn test_non_dominant_system_detected() {
        // Row 0: |1| <= |5| — not dominant
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 5.0, 0.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let system = LinearSystem::new(a, b).unwrap();

        assert!(!system.is_diagonally_dominant());
    }

    #[test]
    fn test_exact_tie_is_not_strict_dominance() {
        // |a_00| == sum of off-diagonals — strict dominance requires >
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 2.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let system = LinearSystem::new(a, b).unwrap();

        assert!(!system.is_diagonally_dominant());
    }

    // ====== Diagonal Magnitude Tests ======

    #[test]
    fn test_healthy_diagonal_accepted() {
        assert!(small_dominant_system().check_diagonal().is_ok());
    }

    #[test]
    fn test_zero_diagonal_rejected() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 0.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let system = LinearSystem::new(a, b).unwrap();

        let result = system.check_diagonal();
        assert!(result.is_err());

        let message = result.unwrap_err();
        assert!(message.contains("row 1"));
        assert!(message.contains("divide by zero"));
    }

    #[test]
    fn test_near_zero_diagonal_rejected() {
        let a = DMatrix::from_row_slice(1, 1, &[1e-300]);
        let b = DVector::from_vec(vec![1.0]);
        let system = LinearSystem::new(a, b).unwrap();

        assert!(system.check_diagonal().is_err());
    }
}
