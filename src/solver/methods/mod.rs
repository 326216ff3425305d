//! Jacobi iteration variants
//!
//! This module contains the concrete implementations of the
//! [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`JacobiSolver`]**: single-threaded reference implementation
//!   - One sweep = n row updates + one buffer swap
//!   - Use: correctness baseline, small systems, speedup denominator
//!
//! - **[`ParallelJacobiSolver`]**: multi-threaded implementation
//!   - Static row blocks, one per worker, two barriers per iteration
//!   - Use: large systems where the O(n²) sweep dominates
//!
//! Both solvers perform the mathematically identical update and share the
//! per-row kernel below, so they agree not just within tolerance but in
//! iteration count: every row's inner sum runs sequentially left to right
//! in both, and the parallel decomposition never reorders it.
//!
//! # Example
//!
//! ```rust
//! use jacobi_rs::system::SystemGenerator;
//! use jacobi_rs::solver::{JacobiSolver, ParallelJacobiSolver, Problem, Solver, SolverConfiguration};
//!
//! let system = SystemGenerator::new(42).generate(50).unwrap();
//! let problem = Problem::new(system);
//! let config = SolverConfiguration::default();
//!
//! let sequential = JacobiSolver::new().solve(&problem, &config).unwrap();
//! let parallel = ParallelJacobiSolver::new(4).solve(&problem, &config).unwrap();
//!
//! assert_eq!(sequential.iterations, parallel.iterations);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod jacobi;
mod parallel;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use jacobi::JacobiSolver;
pub use parallel::ParallelJacobiSolver;

// =================================================================================================
// Shared row kernel
// =================================================================================================

use nalgebra::{DMatrix, DVector};

/// One Jacobi row update: (b_i − Σ_{j≠i} a_ij·x_j) / a_ii
///
/// `x` is the previous iterate, complete and unmutated — the caller
/// guarantees it. The inner sum runs over columns left to right; both
/// solvers rely on that fixed order for their bit-level agreement, so this
/// kernel is the single place the order is defined.
///
/// The diagonal has been validated before any sweep starts
/// ([`LinearSystem::check_diagonal`](crate::system::LinearSystem::check_diagonal)),
/// so the division here is safe against zero pivots.
pub(crate) fn update_row(a: &DMatrix<f64>, b: &DVector<f64>, x: &[f64], i: usize) -> f64 {
    let mut sigma = 0.0;
    for (j, a_ij) in a.row(i).iter().enumerate() {
        if j != i {
            sigma += a_ij * x[j];
        }
    }
    (b[i] - sigma) / a[(i, i)]
}

// =================================================================================================
// Tests
// =================================================================================================
