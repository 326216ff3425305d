//! Multi-threaded Jacobi solver
//!
//! # Decomposition
//!
//! Jacobi row updates within one sweep are independent: every x_new[i]
//! depends only on the complete previous iterate. The solver exploits this
//! with a static decomposition — [`RowPartition`](crate::solver::RowPartition)
//! assigns each worker a fixed contiguous block of rows for the entire
//! solve, so each scratch element has exactly one writer by construction.
//! No fine-grained locking is needed on the numerical data; the entire
//! synchronisation burden is carried by two barriers per iteration.
//!
//! # The Two-Barrier Protocol
//!
//! ```text
//!            worker 0          worker 1          worker 2
//!            ────────          ────────          ────────
//!  sweep     snapshot x        snapshot x        snapshot x
//!            update rows 0..4  update rows 4..8  update rows 8..11
//!            post max₀         post max₁         post max₂
//!               │                 │                 │
//!  BARRIER 1 ═══╪═════════════════╪═════════════════╪═══  all sweeps done
//!               │                 │                 │
//!  reduce    fold(max₀..₂)     fold(max₀..₂)     fold(max₀..₂)
//!  publish   write block 0     write block 1     write block 2
//!               │                 │                 │
//!  BARRIER 2 ═══╪═════════════════╪═════════════════╪═══  publish visible
//!               │                 │                 │
//!            converged? ──────── identical decision ────── next sweep
//! ```
//!
//! Barrier 1 guarantees no partial maximum is folded before every worker
//! has posted it, and no block is overwritten while another worker could
//! still be reading the previous iterate. Barrier 2 guarantees no worker
//! starts sweep k+1 against values sweep k has not finished publishing.
//! These two ordering points are the correctness invariant of this file;
//! every other line is arithmetic.
//!
//! Workers are spawned once per solve and live for all iterations —
//! iteration k+1 reuses the same threads, blocked at the barriers, not new
//! ones.
//!
//! # Equivalence with the sequential solver
//!
//! Each row's inner sum is sequential and left-to-right (the shared kernel
//! guarantees it), so the parallel solver computes bit-identical updates,
//! deltas and iteration counts for any worker count. Threads change where
//! rows are computed, never what is computed.

use std::sync::{Barrier, Mutex, RwLock};
use std::thread;

use crate::solver::{Problem, RowPartition, SolveReport, Solver, SolverConfiguration};

use super::update_row;

/// What every worker knows when the loop ends; worker 0 records it.
struct WorkerOutcome {
    iterations: usize,
    converged: bool,
    last_max_diff: f64,
}

// =================================================================================================
// Parallel Jacobi Solver
// =================================================================================================

/// Multi-threaded Jacobi iteration with static row blocks
///
/// Identical mathematics and return contract as
/// [`JacobiSolver`](super::JacobiSolver), plus a worker count. The worker
/// count changes wall-clock cost only — never the solution, the deltas, or
/// the number of iterations.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::SystemGenerator;
/// use jacobi_rs::solver::{ParallelJacobiSolver, Problem, Solver, SolverConfiguration};
///
/// let system = SystemGenerator::new(42).generate(200).unwrap();
/// let problem = Problem::new(system);
///
/// let report = ParallelJacobiSolver::new(4)
///     .solve(&problem, &SolverConfiguration::default())
///     .unwrap();
///
/// assert!(report.converged);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParallelJacobiSolver {
    workers: usize,
}

impl ParallelJacobiSolver {
    /// Create a solver with an explicit worker count
    ///
    /// The count is validated at solve time: zero workers is an error, and
    /// a count above the machine's available parallelism is allowed but
    /// logged, since the extra workers can only contend.
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Create a solver with one worker per available hardware thread
    pub fn with_available_parallelism() -> Self {
        let workers = thread::available_parallelism().map_or(1, |count| count.get());
        Self { workers }
    }

    /// Worker count this solver was built with
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Solver for ParallelJacobiSolver {

    fn solve(&self, problem: &Problem, config: &SolverConfiguration) -> Result<SolveReport, String> {

        // ====== Step 1: Validation ======

        config.validate()?;
        problem.validate()?;
        problem.system.check_diagonal()?;

        if self.workers == 0 {
            return Err("ParallelJacobiSolver requires at least one worker".to_string());
        }
        if let Ok(available) = thread::available_parallelism() {
            if self.workers > available.get() {
                log::warn!(
                    "{} workers requested but only {} hardware threads available",
                    self.workers,
                    available
                );
            }
        }

        let a = problem.system.a();
        let b = problem.system.b();
        let n = problem.n();
        let tolerance = config.tolerance;
        let max_iterations = config.max_iterations;

        // ====== Step 2: Setup ======

        // Static decomposition, computed once for the whole solve.
        let partition = RowPartition::new(n, self.workers);
        let ranges = partition.ranges();

        // The published iterate, block per worker. Workers take read locks
        // during a sweep and each takes the write lock of its OWN block at
        // publish time — the barriers guarantee the two phases never
        // overlap, so no lock is ever contended.
        let x_blocks: Vec<RwLock<Vec<f64>>> = ranges
            .iter()
            .map(|range| RwLock::new(problem.initial_guess.as_slice()[range.clone()].to_vec()))
            .collect();

        // One partial-maximum slot per worker; each worker writes only its
        // own slot during a sweep, and every worker folds all of them after
        // barrier 1.
        let partial_maxima: Vec<Mutex<f64>> = (0..self.workers).map(|_| Mutex::new(0.0)).collect();

        // First numerical failure wins; observed by all workers at barrier 1.
        let failure: Mutex<Option<String>> = Mutex::new(None);

        let outcome: Mutex<Option<WorkerOutcome>> = Mutex::new(None);

        let barrier = Barrier::new(self.workers);

        // ====== Step 3: Iteration ======

        thread::scope(|scope| {
            for (worker, range) in ranges.iter().enumerate() {
                let range = range.clone();
                let barrier = &barrier;
                let x_blocks = &x_blocks;
                let partial_maxima = &partial_maxima;
                let failure = &failure;
                let outcome = &outcome;

                scope.spawn(move || {
                    // Worker-private buffers, allocated once per solve:
                    // a full snapshot of the published iterate, and the
                    // scratch block this worker owns.
                    let mut x_local = vec![0.0; n];
                    let mut block_new = vec![0.0; range.len()];

                    let mut iterations = 0;
                    let mut converged = false;
                    let mut last_max_diff = f64::INFINITY;

                    for _sweep in 0..max_iterations {

                        // ====== Sweep phase ======

                        // Snapshot the published iterate. Blocks are only
                        // ever written between the barriers, so every read
                        // here sees the complete previous iterate.
                        for (block, r) in ranges.iter().enumerate() {
                            let published = x_blocks[block].read().unwrap();
                            x_local[r.start..r.end].copy_from_slice(&published);
                        }

                        // Private running maximum over this worker's rows.
                        let mut local_max = 0.0f64;
                        for (offset, i) in range.clone().enumerate() {
                            let updated = update_row(a, b, &x_local, i);
                            block_new[offset] = updated;
                            local_max = local_max.max((updated - x_local[i]).abs());
                        }

                        if block_new.iter().any(|value| !value.is_finite()) {
                            let mut slot = failure.lock().unwrap();
                            if slot.is_none() {
                                *slot = Some(format!(
                                    "Iterate is not finite at iteration {}. This indicates numerical \
                                     instability — check the system for loss of diagonal dominance.",
                                    iterations + 1
                                ));
                            }
                        }

                        *partial_maxima[worker].lock().unwrap() = local_max;

                        // ====== Barrier 1: every sweep finished ======
                        barrier.wait();

                        // All workers observe the same failure state here and
                        // abandon the solve together, skipping the publish.
                        if failure.lock().unwrap().is_some() {
                            break;
                        }

                        // ====== Reduce + publish phase ======

                        // Explicit associative max-fold over the partial
                        // maxima. Every worker folds the same complete set,
                        // so every worker reaches the same decision below.
                        let global_max = partial_maxima
                            .iter()
                            .map(|slot| *slot.lock().unwrap())
                            .fold(0.0f64, f64::max);

                        // Publish this worker's block of the new iterate.
                        // Disjoint by construction: worker w writes block w
                        // and nothing else.
                        {
                            let mut published = x_blocks[worker].write().unwrap();
                            published.copy_from_slice(&block_new);
                        }

                        // ====== Barrier 2: publish visible ======
                        barrier.wait();

                        iterations += 1;
                        last_max_diff = global_max;

                        if global_max < tolerance {
                            converged = true;
                            break;
                        }
                    }

                    if worker == 0 {
                        *outcome.lock().unwrap() = Some(WorkerOutcome {
                            iterations,
                            converged,
                            last_max_diff,
                        });
                    }
                });
            }
        });

        // ====== Step 4: Build Report ======

        if let Some(message) = failure.into_inner().unwrap() {
            return Err(message);
        }

        let WorkerOutcome { iterations, converged, last_max_diff } = outcome
            .into_inner()
            .unwrap()
            .ok_or_else(|| "Solve finished without recording an outcome".to_string())?;

        if !converged {
            log::warn!(
                "Parallel Jacobi did not converge within {} iterations (last max update {:e})",
                max_iterations,
                last_max_diff
            );
        }

        // Reassemble the solution from the published blocks, in row order.
        let mut x = Vec::with_capacity(n);
        for block in x_blocks {
            x.extend_from_slice(&block.into_inner().unwrap());
        }

        let mut report = SolveReport::new(
            nalgebra::DVector::from_vec(x),
            iterations,
            converged,
            last_max_diff,
        );

        report.add_metadata("solver", "Parallel Jacobi");
        report.add_metadata("workers", &self.workers.to_string());
        report.add_metadata("tolerance", &tolerance.to_string());
        report.add_metadata("max iterations", &max_iterations.to_string());

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "Parallel Jacobi"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::JacobiSolver;
    use crate::system::{residual_norm, LinearSystem, SystemGenerator};
    use nalgebra::{DMatrix, DVector};

    fn generated_problem(n: usize) -> Problem {
        Problem::new(SystemGenerator::new(42).generate(n).unwrap())
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_solver_creation() {
        let solver = ParallelJacobiSolver::new(4);
        assert_eq!(solver.name(), "Parallel Jacobi");
        assert_eq!(solver.workers(), 4);
    }

    #[test]
    fn test_available_parallelism_constructor() {
        let solver = ParallelJacobiSolver::with_available_parallelism();
        assert!(solver.workers() >= 1);
    }

    // ====== Validation Tests ======

    #[test]
    fn test_zero_workers_rejected() {
        let result = ParallelJacobiSolver::new(0)
            .solve(&generated_problem(10), &SolverConfiguration::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least one worker"));
    }

    #[test]
    fn test_zero_diagonal_rejected_before_spawning() {
        let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 2.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let problem = Problem::new(LinearSystem::new(a, b).unwrap());

        let result = ParallelJacobiSolver::new(2).solve(&problem, &SolverConfiguration::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("divide by zero"));
    }

    // ====== Known Solution Tests ======

    #[test]
    fn test_three_by_three_converges_to_ones() {
        let a = DMatrix::from_row_slice(3, 3, &[
            10.0, 1.0, 1.0,
            1.0, 10.0, 1.0,
            1.0, 1.0, 10.0,
        ]);
        let b = DVector::from_vec(vec![12.0, 12.0, 12.0]);
        let problem = Problem::new(LinearSystem::new(a, b).unwrap());

        let report = ParallelJacobiSolver::new(2)
            .solve(&problem, &SolverConfiguration::default())
            .unwrap();

        assert!(report.converged);
        for i in 0..3 {
            assert!((report.x[i] - 1.0).abs() < 1e-5);
        }
        assert!(residual_norm(&problem.system, &report.x).unwrap() < 1e-4);
    }

    #[test]
    fn test_single_row_single_worker() {
        let a = DMatrix::from_row_slice(1, 1, &[5.0]);
        let b = DVector::from_vec(vec![10.0]);
        let problem = Problem::new(LinearSystem::new(a, b).unwrap());

        let report = ParallelJacobiSolver::new(1)
            .solve(&problem, &SolverConfiguration::default())
            .unwrap();

        assert!(report.converged);
        assert_eq!(report.x[0], 2.0);
    }

    // ====== Equivalence Tests ======

    #[test]
    fn test_matches_sequential_bitwise() {
        // Same kernel, same summation order — the agreement is exact, not
        // merely within tolerance.
        let problem = generated_problem(60);
        let config = SolverConfiguration::default();

        let sequential = JacobiSolver::new().solve(&problem, &config).unwrap();

        for workers in [1, 2, 3, 4, 7] {
            let parallel = ParallelJacobiSolver::new(workers)
                .solve(&problem, &config)
                .unwrap();

            assert_eq!(parallel.iterations, sequential.iterations, "workers = {}", workers);
            assert_eq!(parallel.converged, sequential.converged);
            assert_eq!(parallel.x, sequential.x, "workers = {}", workers);
            assert_eq!(parallel.max_delta, sequential.max_delta);
        }
    }

    #[test]
    fn test_worker_count_not_dividing_rows() {
        // 10 rows over 3 workers: blocks of 4, 3, 3.
        let problem = generated_problem(10);
        let config = SolverConfiguration::default();

        let sequential = JacobiSolver::new().solve(&problem, &config).unwrap();
        let parallel = ParallelJacobiSolver::new(3).solve(&problem, &config).unwrap();

        assert_eq!(parallel.x, sequential.x);
        assert_eq!(parallel.iterations, sequential.iterations);
    }

    #[test]
    fn test_more_workers_than_rows() {
        // Workers with empty blocks still participate in both barriers.
        let problem = generated_problem(3);
        let config = SolverConfiguration::default();

        let sequential = JacobiSolver::new().solve(&problem, &config).unwrap();
        let parallel = ParallelJacobiSolver::new(8).solve(&problem, &config).unwrap();

        assert_eq!(parallel.x, sequential.x);
        assert_eq!(parallel.iterations, sequential.iterations);
    }

    // ====== Iteration Cap Tests ======

    #[test]
    fn test_cap_of_one_reports_non_convergence() {
        let problem = generated_problem(20);
        let config = SolverConfiguration::new(1e-12, 1);

        let report = ParallelJacobiSolver::new(4).solve(&problem, &config).unwrap();

        assert!(!report.converged);
        assert_eq!(report.iterations, 1);

        // The single sweep from x0 = 0 yields x[i] = b[i] / a_ii.
        for i in 0..20 {
            let expected = problem.system.b()[i] / problem.system.a()[(i, i)];
            assert!((report.x[i] - expected).abs() < 1e-15);
        }
    }

    // ====== Determinism Tests ======

    #[test]
    fn test_repeated_solves_are_bit_identical() {
        let problem = generated_problem(40);
        let config = SolverConfiguration::default();
        let solver = ParallelJacobiSolver::new(4);

        let first = solver.solve(&problem, &config).unwrap();
        let second = solver.solve(&problem, &config).unwrap();

        assert_eq!(first.x, second.x);
        assert_eq!(first.iterations, second.iterations);
    }

    // ====== Numerical Defense Tests ======

    #[test]
    fn test_exploding_iterate_detected_by_all_workers() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1e308, 1e308, 1.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let problem = Problem::with_initial_guess(
            LinearSystem::new(a, b).unwrap(),
            DVector::from_element(2, 1.0),
        );

        // Two workers, one row each — the failure is posted by whichever
        // worker sees it and must abort both.
        let result = ParallelJacobiSolver::new(2).solve(&problem, &SolverConfiguration::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not finite"));
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_report_metadata() {
        let report = ParallelJacobiSolver::new(3)
            .solve(&generated_problem(12), &SolverConfiguration::default())
            .unwrap();

        assert_eq!(report.metadata.get("solver"), Some(&"Parallel Jacobi".to_string()));
        assert_eq!(report.metadata.get("workers"), Some(&"3".to_string()));
    }
}
