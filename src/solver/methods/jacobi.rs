//! Sequential Jacobi solver
//!
//! # Mathematical Background
//!
//! Jacobi iteration solves Ax = b as a fixed point. Splitting A into its
//! diagonal D and remainder R, the scheme is:
//!
//! ```text
//! x⁽ᵏ⁺¹⁾ = D⁻¹ (b − R·x⁽ᵏ⁾)
//! ```
//!
//! or element-wise, for every row i:
//!
//! ```text
//! x_new[i] = (b[i] − Σ_{j≠i} a[i][j]·x[j]) / a[i][i]
//! ```
//!
//! Every x_new[i] is computed from the complete *previous* iterate — never
//! from values updated earlier in the same sweep. That property is what
//! distinguishes Jacobi from Gauss-Seidel, and it is also exactly what
//! makes the method decomposable across threads: row updates within one
//! sweep are independent by definition.
//!
//! # Convergence
//!
//! For strictly diagonally dominant A the iteration converges for any
//! initial guess. The stopping criterion is the maximum per-element change
//! between successive iterates:
//!
//! ```text
//! maxDiff = max_i |x_new[i] − x[i]|  <  tolerance
//! ```
//!
//! Note this is NOT the residual ‖Ax − b‖. Callers that need a hard
//! correctness statement should evaluate
//! [`residual_norm`](crate::system::residual_norm) on the returned
//! solution.
//!
//! # Characteristics
//!
//! - **Cost**: O(n²) multiply-adds per sweep
//! - **Memory**: two n-vectors (iterate + scratch), swapped each sweep
//! - **Convergence order**: linear, rate governed by the dominance margin
//!
//! # When to Use
//!
//! - Reference results and correctness baselines
//! - Systems small enough that thread dispatch costs more than the sweep
//! - The denominator of speedup measurements
//!
//! # When NOT to Use
//!
//! - Large systems on multi-core hardware → use
//!   [`ParallelJacobiSolver`](super::ParallelJacobiSolver)
//! - Matrices without diagonal dominance — the iteration may diverge; this
//!   crate's generator never produces such systems, but arbitrary input can

use crate::solver;
use crate::solver::{Problem, SolveReport, Solver, SolverConfiguration};

use super::update_row;

// =================================================================================================
// Sequential Jacobi Solver
// =================================================================================================

/// Single-threaded Jacobi iteration
///
/// # Algorithm
///
/// 1. Start from the problem's initial guess x⁽⁰⁾
/// 2. For each sweep k = 0, 1, 2, ...:
///    - Compute x_new[i] for every row from x⁽ᵏ⁾ only
///    - Track maxDiff = max_i |x_new[i] − x[i]|
///    - Replace the iterate wholesale (buffer swap — no partial adoption)
///    - Stop when maxDiff < tolerance or the sweep cap is reached
/// 3. Return the final iterate, the sweep count, and the convergence flag
///
/// The scratch buffer is private to the solve call; at no point during a
/// sweep does the update read a value written in the same sweep.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::SystemGenerator;
/// use jacobi_rs::solver::{JacobiSolver, Problem, Solver, SolverConfiguration};
///
/// let system = SystemGenerator::new(42).generate(100).unwrap();
/// let problem = Problem::new(system);
///
/// let report = JacobiSolver::new()
///     .solve(&problem, &SolverConfiguration::default())
///     .unwrap();
///
/// assert!(report.converged);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSolver;

impl JacobiSolver {
    /// Create a new sequential Jacobi solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use jacobi_rs::solver::{JacobiSolver, Solver};
    ///
    /// let solver = JacobiSolver::new();
    /// assert_eq!(solver.name(), "Jacobi");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for JacobiSolver {

    fn solve(&self, problem: &Problem, config: &SolverConfiguration) -> Result<SolveReport, String> {

        // ====== Step 1: Validation ======

        // Validate configuration parameters
        config.validate()?;

        // Validate problem consistency (guess length against dimension)
        problem.validate()?;

        // Reject pivots the update could not divide by
        problem.system.check_diagonal()?;

        let a = problem.system.a();
        let b = problem.system.b();
        let n = problem.n();

        // ====== Step 2: Setup ======

        // The evolving iterate and the per-sweep scratch buffer. Plain
        // Vec<f64> here: the hot loop indexes both heavily and the final
        // iterate is converted back once at the end.
        let mut x: Vec<f64> = problem.initial_guess.iter().copied().collect();
        let mut x_new = vec![0.0; n];

        let mut iterations = 0;
        let mut converged = false;
        let mut last_max_diff = f64::INFINITY;

        // ====== Step 3: Iteration ======

        // For each sweep:
        //   1. Update every row from the previous iterate
        //   2. Swap the buffers (wholesale replacement)
        //   3. Check the iterate for numerical blow-up
        //   4. Decide: converged, or next sweep

        for _sweep in 0..config.max_iterations {
            let mut max_diff = 0.0f64;

            for i in 0..n {
                x_new[i] = update_row(a, b, &x, i);
                max_diff = max_diff.max((x_new[i] - x[i]).abs());
            }

            // Publish the new iterate as a whole. After the swap, x_new
            // holds the previous iterate and is overwritten entirely by the
            // next sweep, so no stale value can leak.
            std::mem::swap(&mut x, &mut x_new);

            iterations += 1;
            last_max_diff = max_diff;

            solver::validate_iterate(&x, iterations)?;

            if max_diff < config.tolerance {
                converged = true;
                break;
            }
        }

        // ====== Step 4: Build Report ======

        if !converged {
            log::warn!(
                "Jacobi did not converge within {} iterations (last max update {:e})",
                config.max_iterations,
                last_max_diff
            );
        }

        let mut report = SolveReport::new(
            nalgebra::DVector::from_vec(x),
            iterations,
            converged,
            last_max_diff,
        );

        report.add_metadata("solver", "Jacobi");
        report.add_metadata("tolerance", &config.tolerance.to_string());
        report.add_metadata("max iterations", &config.max_iterations.to_string());

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "Jacobi"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
