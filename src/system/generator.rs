//! Reproducible generation of diagonally dominant systems
//!
//! # Why Diagonal Dominance?
//!
//! Jacobi iteration converges for any initial guess when the coefficient
//! matrix is strictly diagonally dominant:
//!
//! ```text
//! |a_ii| > Σ_{j≠i} |a_ij|      for every row i
//! ```
//!
//! The generator enforces this by construction: the off-diagonal entries of
//! each row are drawn first, and the diagonal is then set to their absolute
//! sum plus a strictly positive random increment. Every generated system is
//! therefore a valid convergence benchmark — a solve that fails to converge
//! on a generated system indicates a solver bug, not an unlucky matrix.
//!
//! # Reproducibility
//!
//! The pseudo-random stream is owned by the generator and seeded explicitly.
//! There is no process-wide RNG state: two generators built from the same
//! seed produce bit-identical systems, on any platform, in any test order.
//! This is what makes timing comparisons between solvers meaningful — both
//! sides see exactly the same matrix.
//!
//! # Example
//!
//! ```rust
//! use jacobi_rs::system::SystemGenerator;
//!
//! let generator = SystemGenerator::new(42);
//! let system = generator.generate(100).unwrap();
//!
//! assert_eq!(system.n(), 100);
//! assert!(system.is_diagonally_dominant());
//! ```

use nalgebra::{DMatrix, DVector};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::types::LinearSystem;

/// Off-diagonal entries are drawn uniformly from [0, OFF_DIAGONAL_BOUND).
const OFF_DIAGONAL_BOUND: f64 = 1.0;

/// The diagonal increment is drawn uniformly from [DIAGONAL_MARGIN_MIN, DIAGONAL_MARGIN_MAX).
/// The lower bound is strictly positive, which is what makes dominance strict.
const DIAGONAL_MARGIN_MIN: f64 = 1.0;
const DIAGONAL_MARGIN_MAX: f64 = 10.0;

/// Right-hand side entries are drawn uniformly from [0, RHS_BOUND).
const RHS_BOUND: f64 = 10.0;

// =================================================================================================
// System Generator
// =================================================================================================

/// Deterministic generator of strictly diagonally dominant systems
///
/// Holds only the seed; each call to [`generate`](SystemGenerator::generate)
/// builds a fresh PCG stream from it, so repeated calls with the same
/// dimension return identical systems.
#[derive(Debug, Clone, Copy)]
pub struct SystemGenerator {
    seed: u64,
}

impl SystemGenerator {
    /// Create a generator with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed this generator was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate an n×n strictly diagonally dominant system
    ///
    /// Row by row: off-diagonal entries, then the dominant diagonal, then
    /// the right-hand side entry. The draw order is part of the contract —
    /// changing it would silently change every seeded benchmark.
    ///
    /// # Errors
    ///
    /// Returns an error when `n` is zero.
    pub fn generate(&self, n: usize) -> Result<LinearSystem, String> {
        if n == 0 {
            return Err("SystemGenerator::generate: dimension must be at least 1".to_string());
        }

        let mut rng = Pcg64::seed_from_u64(self.seed);

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut b = DVector::<f64>::zeros(n);

        for i in 0..n {
            let mut row_sum = 0.0;

            for j in 0..n {
                if j != i {
                    let value = rng.gen_range(0.0..OFF_DIAGONAL_BOUND);
                    a[(i, j)] = value;
                    row_sum += value.abs();
                }
            }

            // Dominant diagonal: absolute off-diagonal sum plus a strictly
            // positive margin.
            a[(i, i)] = row_sum + rng.gen_range(DIAGONAL_MARGIN_MIN..DIAGONAL_MARGIN_MAX);

            b[i] = rng.gen_range(0.0..RHS_BOUND);
        }

        LinearSystem::new(a, b)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
