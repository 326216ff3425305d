//! jacobi-rs: Dense Linear System Solving by Jacobi Iteration
//!
//! A small framework for solving dense systems Ax = b by fixed-point
//! iteration and for measuring how a multi-threaded sweep compares against
//! the single-threaded reference. Built with Rust for performance and
//! safety.
//!
//! # Architecture
//!
//! jacobi-rs is built on two core principles:
//!
//! 1. **Separation of System and Solver**
//!    - The system layer defines what is being solved (matrix, right-hand
//!      side, residual)
//!    - The solver layer provides the iteration (sequential or parallel)
//!
//! 2. **Reproducibility**
//!    - Generated systems are seeded explicitly — no ambient RNG state
//!    - Sequential and parallel solvers share one row kernel and agree
//!      bit for bit, so timing comparisons measure threads, not arithmetic
//!
//! # Quick Start
//!
//! ```rust
//! use jacobi_rs::system::{residual_norm, SystemGenerator};
//! use jacobi_rs::solver::{JacobiSolver, ParallelJacobiSolver, Problem, Solver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Generate a reproducible, strictly diagonally dominant system
//! let system = SystemGenerator::new(42).generate(100)?;
//! let problem = Problem::new(system);
//!
//! // 2. Configure the stopping policy
//! let config = SolverConfiguration::default(); // tolerance 1e-6, cap 10 000
//!
//! // 3. Solve — sequentially, then with four workers
//! let reference = JacobiSolver::new().solve(&problem, &config)?;
//! let threaded = ParallelJacobiSolver::new(4).solve(&problem, &config)?;
//!
//! // 4. Verify
//! assert!(reference.converged);
//! assert_eq!(reference.iterations, threaded.iterations);
//! assert!(residual_norm(&problem.system, &threaded.x)? < 1e-2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`system`]: systems (construction, generation, residual)
//! - [`solver`]: iterative solvers (methods)

// Core modules
pub mod solver;
pub mod system;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use jacobi_rs::prelude::*;
    //! ```
    pub use crate::solver::{JacobiSolver,
                            ParallelJacobiSolver,
                            Problem,
                            SolveReport,
                            Solver,
                            SolverConfiguration};
    pub use crate::system::{residual_norm,
                            LinearSystem,
                            SystemGenerator};
}
