//! Linear systems: construction, generation, and verification
//!
//! This module is the "WHAT to solve" half of the crate:
//!
//! - [`LinearSystem`]: a dense square system Ax = b, validated at
//!   construction and read-only afterwards
//! - [`SystemGenerator`]: reproducible generation of strictly diagonally
//!   dominant systems from an explicit seed
//! - [`residual_norm`]: ‖Ax − b‖₂, the solver-independent correctness
//!   measure
//!
//! The solvers in [`crate::solver`] consume these types but never construct
//! or mutate them — the same system value can be handed to the sequential
//! and the multi-threaded solver and both see identical bits.
//!
//! # Residual vs convergence criterion
//!
//! The solvers stop on the maximum per-element change between successive
//! iterates; [`residual_norm`] measures how well a candidate solution
//! actually satisfies the system. The two are deliberately different
//! quantities. Verification code must use the residual, never the solver's
//! internal delta.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod generator;
mod residual;
mod types;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the residual's row loop to Rayon is an execution
// concern, not a linear-algebra concern, so the knob lives at the module
// root rather than inside residual.rs.
//
// The threshold is stored in an AtomicUsize so that benchmarks and tests can
// change it at runtime without a mutex on every residual evaluation.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of rows above which [`residual_norm`] switches to parallel
/// row evaluation.
///
/// Below this point the per-row dot products are too cheap for Rayon's
/// dispatch overhead to pay off.
const DEFAULT_PARALLEL_THRESHOLD: usize = 500;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`residual_norm`] evaluates rows sequentially when the system has fewer
/// rows than this value, and switches to Rayon when it has more — but only
/// when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero threshold would force parallel
/// dispatch even for one-row systems, which is never the intended behaviour.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use generator::SystemGenerator;
pub use residual::residual_norm;
pub use types::{LinearSystem, DIAGONAL_EPSILON};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 500);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(128);
        assert_eq!(parallel_threshold(), 128);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        // Guard dropped — value must be back to what it was before.
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_threshold_is_visible_across_threads() {
        use std::thread;

        let _guard = ThresholdGuard::save(1234);

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(parallel_threshold))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1234);
        }
    }
}
