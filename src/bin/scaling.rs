//! Scaling harness
//!
//! Drives the sequential and parallel solvers over a matrix-size ×
//! worker-count grid and reports elapsed time, speedup and efficiency for
//! each cell. The system for a given size is generated once from a fixed
//! seed, so every solver run in a column sees identical bits.
//!
//! ```bash
//! cargo run --release --bin scaling            # workers 1, 2, 4, 8
//! cargo run --release --bin scaling 6          # workers 1..=6
//! ```
//!
//! Speedup is t_seq / t_par against the sequential solver on the same
//! system; efficiency is speedup / workers × 100%. Both are derived here,
//! outside the solvers — the solvers report only what they computed.

use std::time::{Duration, Instant};

use jacobi_rs::solver::{JacobiSolver, ParallelJacobiSolver, Problem, Solver, SolverConfiguration};
use jacobi_rs::system::{residual_norm, SystemGenerator};

const SIZES: [usize; 4] = [100, 500, 1000, 2000];
const SEED: u64 = 42;

fn main() {
    // Optional argument: maximum worker count (doubling from 1 otherwise).
    let args: Vec<String> = std::env::args().collect();
    let worker_counts: Vec<usize> = if args.len() > 1 {
        let max_workers = args[1].parse::<usize>().unwrap_or_else(|_| {
            eprintln!("error: worker count must be a positive integer");
            std::process::exit(1);
        });
        if max_workers < 1 {
            eprintln!("error: worker count must be at least 1");
            std::process::exit(1);
        }
        (1..=max_workers).collect()
    } else {
        vec![1, 2, 4, 8]
    };

    let available = std::thread::available_parallelism().map_or(1, |count| count.get());
    let config = SolverConfiguration::default();

    println!("=============================================");
    println!("  Jacobi Iterative Method — Scaling Harness");
    println!("=============================================");
    println!("Available hardware threads: {}", available);
    println!("Tolerance: {:e}, iteration cap: {}", config.tolerance, config.max_iterations);

    for &n in &SIZES {
        let system = match SystemGenerator::new(SEED).generate(n) {
            Ok(system) => system,
            Err(message) => {
                eprintln!("generation failed for n = {}: {}", n, message);
                std::process::exit(1);
            }
        };
        let problem = Problem::new(system);

        println!("\n=====================================================");
        println!("Matrix size: {} x {}", n, n);
        println!("=====================================================");

        // Sequential reference — the speedup denominator.
        let (sequential_time, report) = match timed_solve(&JacobiSolver::new(), &problem, &config) {
            Ok(outcome) => outcome,
            Err(message) => {
                eprintln!("sequential solve failed: {}", message);
                std::process::exit(1);
            }
        };

        let residual = residual_norm(&problem.system, &report.x).unwrap_or(f64::NAN);

        println!("\nSequential:");
        println!("  Iterations: {}{}", report.iterations, if report.converged { "" } else { " (cap hit)" });
        println!("  Time:       {:.3} ms", as_millis(sequential_time));
        println!("  Residual:   {:e}", residual);

        println!("\nParallel:");
        println!("-----------------------------------------------------");
        println!("{:>10} {:>14} {:>10} {:>12}", "Workers", "Time (ms)", "Speedup", "Efficiency");
        println!("-----------------------------------------------------");

        for &workers in &worker_counts {
            // More workers than hardware threads only measures contention.
            if workers > available {
                continue;
            }

            let solver = ParallelJacobiSolver::new(workers);
            let (parallel_time, report) = match timed_solve(&solver, &problem, &config) {
                Ok(outcome) => outcome,
                Err(message) => {
                    eprintln!("parallel solve failed ({} workers): {}", workers, message);
                    std::process::exit(1);
                }
            };

            let speedup = as_millis(sequential_time) / as_millis(parallel_time);
            let efficiency = speedup / workers as f64 * 100.0;

            println!(
                "{:>10} {:>14.3} {:>10.2} {:>11.1}%",
                workers,
                as_millis(parallel_time),
                speedup,
                efficiency
            );
        }
    }

    println!("\n=============================================");
}

/// Run one solve and return its wall-clock time together with the report.
fn timed_solve<S: Solver>(
    solver: &S,
    problem: &Problem,
    config: &SolverConfiguration,
) -> Result<(Duration, jacobi_rs::solver::SolveReport), String> {
    let start = Instant::now();
    let report = solver.solve(problem, config)?;
    Ok((start.elapsed(), report))
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
