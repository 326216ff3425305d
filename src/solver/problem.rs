//! Problem definition
//!
//! A problem combines a linear system with an initial guess.

use nalgebra::DVector;

use crate::system::LinearSystem;

/// Solve problem
///
/// Defines a specific case to solve:
/// - Linear system (A and b)
/// - Initial guess x0
///
/// # Design
///
/// The same problem can be solved with different solvers. This is the
/// "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use jacobi_rs::system::SystemGenerator;
/// use jacobi_rs::solver::Problem;
///
/// let system = SystemGenerator::new(42).generate(10).unwrap();
///
/// // Default guess: the zero vector
/// let problem = Problem::new(system);
/// assert!(problem.validate().is_ok());
/// assert_eq!(problem.initial_guess.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Problem {
    /// The system to solve
    pub system: LinearSystem,

    /// Starting iterate x0
    pub initial_guess: DVector<f64>,
}

impl Problem {

    /// Create a problem with the conventional zero initial guess
    pub fn new(system: LinearSystem) -> Self {
        let n = system.n();
        Self {
            system,
            initial_guess: DVector::zeros(n),
        }
    }

    /// Create a problem with an explicit initial guess
    pub fn with_initial_guess(system: LinearSystem, initial_guess: DVector<f64>) -> Self {
        Self { system, initial_guess }
    }

    /// Verify problem consistency (guess length against system dimension)
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_guess.len() != self.system.n() {
            return Err(format!(
                "Initial guess has length {} but system dimension is {}",
                self.initial_guess.len(),
                self.system.n()
            ));
        }
        Ok(())
    }

    /// System dimension
    pub fn n(&self) -> usize {
        self.system.n()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
