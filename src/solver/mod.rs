//! Iterative solvers
//!
//! This module provides traits and implementations for the numerical side
//! of the crate. A solver applies an iteration scheme to a problem until a
//! stopping policy says otherwise.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Problem** (`Problem`) — WHAT to solve
//!    - Linear system (A, b)
//!    - Initial guess x0
//!
//! 2. **Configuration** (`SolverConfiguration`) — WHEN to stop
//!    - Convergence tolerance
//!    - Iteration cap
//!
//! 3. **Solver** (`Solver` trait) — HOW to iterate
//!    - Applies the update scheme
//!    - Returns the solution estimate and what it cost
//!    - Independent of how the system was built
//!
//! This separation allows:
//! - The same problem solved sequentially and in parallel, for comparison
//! - The same solver across problem sizes, for scaling measurements
//! - Configuration changes without code changes
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │ LinearSystem    │  (A, b — read-only)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐     ┌──────────────────────┐
//! │ Problem         │     │ SolverConfiguration  │
//! │ (system + x0)   │     │ (tolerance + cap)    │
//! └────────┬────────┘     └──────────┬───────────┘
//!          │                         │
//!          └────────┬────────────────┘
//!                   │
//!          ┌────────▼────────┐
//!          │ Solver          │  Jacobi / Parallel Jacobi
//!          └────────┬────────┘
//!                   │
//!          ┌────────▼────────┐
//!          │ SolveReport     │  x, iterations, converged
//!          └─────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait, `SolverConfiguration`, `SolveReport`
//! - **`problem`**: `Problem` — system plus initial guess
//! - **`partition`**: `RowPartition` — the static row decomposition used by
//!   the parallel solver
//! - **`methods`**: the solver implementations
//!
//! # Error Handling
//!
//! All solve methods return `Result<SolveReport, String>`:
//!
//! - invalid configuration or mismatched dimensions fail before the first
//!   sweep;
//! - a zero or near-zero diagonal entry fails before the first sweep with a
//!   division-by-zero message;
//! - an iterate that leaves the finite range aborts the solve;
//! - running out of iterations is NOT an error — the report comes back with
//!   `converged = false` and the caller decides what that means.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod partition;
mod problem;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::{JacobiSolver, ParallelJacobiSolver};
pub use partition::RowPartition;
pub use problem::Problem;
pub use traits::{SolveReport, Solver, SolverConfiguration};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate an iterate for numerical issues
///
/// Checks that the iterate contains no NaN or Inf values, which would
/// indicate numerical instability — most commonly a system whose entries
/// overflow the update, since non-finite values otherwise cannot appear:
/// the diagonal is vetted before the first sweep.
///
/// # Arguments
///
/// * `x` - Iterate to validate
/// * `iteration` - Current sweep number (for error reporting)
///
/// # Returns
///
/// `Ok(())` if the iterate is finite, `Err(msg)` with diagnostic
/// information otherwise
pub(crate) fn validate_iterate(x: &[f64], iteration: usize) -> Result<(), String> {
    for (i, value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(format!(
                "Iterate is not finite ({}) at element {} after iteration {}. This indicates \
                 numerical instability — check the system for loss of diagonal dominance.",
                value, i, iteration
            ));
        }
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
