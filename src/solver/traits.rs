//! Solver traits and types
//!
//! # Design Philosophy
//!
//! The solver API separates three concerns:
//! - `Problem` (what to solve) — defined in the problem module
//! - `SolverConfiguration` (when to stop) — tolerance and iteration cap
//! - `Solver` implementations (how to iterate) — sequential or parallel
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0, will NEVER change
//! - `SolveReport`: STABLE (fields won't be removed; metadata is the
//!   extension point)

use nalgebra::DVector;
use std::collections::HashMap;

use super::problem::Problem;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Stopping policy for an iterative solve
///
/// A solve ends when the maximum per-element change between successive
/// iterates drops below `tolerance`, or after `max_iterations` full sweeps,
/// whichever comes first. Hitting the cap is not an error — the report
/// carries `converged = false` and the caller decides whether to escalate.
///
/// # Examples
///
/// ```rust
/// use jacobi_rs::solver::SolverConfiguration;
///
/// // The defaults: tolerance 1e-6, cap 10 000
/// let config = SolverConfiguration::default();
/// assert!(config.validate().is_ok());
///
/// // A deliberately tight budget
/// let config = SolverConfiguration::new(1e-10, 50);
/// assert_eq!(config.max_iterations, 50);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SolverConfiguration {
    /// Convergence criterion on the maximum per-element update
    pub tolerance: f64,

    /// Safety cap on the number of sweeps
    pub max_iterations: usize,
}

impl SolverConfiguration {
    /// Create a configuration with explicit parameters
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self { tolerance, max_iterations }
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> Result<(), String> {
        if self.tolerance <= 0.0 || !self.tolerance.is_finite() {
            return Err("Tolerance must be positive and finite".to_string());
        }
        if self.max_iterations == 0 {
            return Err("Maximum iterations must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 10_000,
        }
    }
}

// =================================================================================================
// Solve report
// =================================================================================================

/// Outcome of one solve call
///
/// Ownership transfers to the caller; the solver keeps nothing. The solution
/// vector is always present — on non-convergence it is the best iterate
/// reached when the cap was hit, which is still useful for diagnostics and
/// residual checks.
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// Final solution estimate
    pub x: DVector<f64>,

    /// Number of full sweeps performed
    pub iterations: usize,

    /// Whether the convergence criterion was met within the cap
    pub converged: bool,

    /// Maximum per-element update of the last sweep
    pub max_delta: f64,

    /// Free-form diagnostics (solver name, worker count, ...)
    pub metadata: HashMap<String, String>,
}

impl SolveReport {
    /// Create a report
    pub fn new(x: DVector<f64>, iterations: usize, converged: bool, max_delta: f64) -> Self {
        Self {
            x,
            iterations,
            converged,
            max_delta,
            metadata: HashMap::new(),
        }
    }

    /// Attach a diagnostic entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Dimension of the solution vector
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the solution vector is empty
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Interface implemented by every iterative solver in this crate
///
/// # Responsibility
///
/// A solver applies its iteration scheme to the problem until the
/// configuration says stop. It does not own the system, does not mutate the
/// problem, and returns a fresh [`SolveReport`] per call — two calls with
/// the same inputs produce bit-identical reports.
///
/// # Mandatory Point
///
/// Implementations must fail fast on invalid configuration or problem
/// (dimension mismatch, unusable diagonal) before performing any sweep.
pub trait Solver {
    /// Run the iteration to convergence or to the cap
    fn solve(&self, problem: &Problem, config: &SolverConfiguration) -> Result<SolveReport, String>;

    /// Name of the solver (used for display and report metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
