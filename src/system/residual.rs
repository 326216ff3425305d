//! Residual evaluation
//!
//! The residual ‖Ax − b‖₂ measures how well a candidate solution satisfies
//! the system, independently of how that solution was produced. It is the
//! verification tool of this crate: the solvers converge on the change
//! between successive iterates, and a caller that needs a hard correctness
//! statement computes the residual afterwards.
//!
//! Keeping the two measures separate matters. A solver that has stalled
//! (tiny successive change, large residual) and a solver that has converged
//! (tiny successive change, tiny residual) are indistinguishable to the
//! internal criterion; only the residual tells them apart.

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::LinearSystem;

/// Compute the Euclidean residual norm ‖Ax − b‖₂
///
/// Pure function: no side effects, no mutation of its inputs. The full
/// matrix-vector product is evaluated row by row; each row contributes
/// (Σ_j a_ij·x_j − b_i)² and the result is the square root of the sum.
///
/// Rows are evaluated in parallel when the system is larger than the
/// [`parallel_threshold`](super::parallel_threshold) and the crate is built
/// with the `parallel` feature. Within one row the summation is always
/// sequential and left-to-right, so the sequential and parallel paths
/// produce identical bits.
///
/// # Errors
///
/// Returns an error when `x` does not match the system dimension.
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use jacobi_rs::system::{residual_norm, LinearSystem};
///
/// let a = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]);
/// let b = DVector::from_vec(vec![2.0, 8.0]);
/// let system = LinearSystem::new(a, b).unwrap();
///
/// // Exact solution: residual is zero.
/// let x = DVector::from_vec(vec![1.0, 2.0]);
/// assert_eq!(residual_norm(&system, &x).unwrap(), 0.0);
/// ```
pub fn residual_norm(system: &LinearSystem, x: &DVector<f64>) -> Result<f64, String> {
    let n = system.n();

    if x.len() != n {
        return Err(format!(
            "residual_norm: solution has length {} but system dimension is {}",
            x.len(),
            n
        ));
    }

    let sum_of_squares = if n > super::parallel_threshold() {
        #[cfg(feature = "parallel")]
        {
            (0..n).into_par_iter().map(|i| row_residual_squared(system, x, i)).sum()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..n).map(|i| row_residual_squared(system, x, i)).sum::<f64>()
        }
    } else {
        (0..n).map(|i| row_residual_squared(system, x, i)).sum::<f64>()
    };

    Ok(sum_of_squares.sqrt())
}

/// Squared residual of one row: (Σ_j a_ij·x_j − b_i)²
fn row_residual_squared(system: &LinearSystem, x: &DVector<f64>, i: usize) -> f64 {
    let mut row_sum = 0.0;
    for (j, a_ij) in system.a().row(i).iter().enumerate() {
        row_sum += a_ij * x[j];
    }
    let difference = row_sum - system.b()[i];
    difference * difference
}

// =================================================================================================
// Tests
// =================================================================================================
