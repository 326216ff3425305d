//! Helper functions for integration tests

use jacobi_rs::solver::Problem;
use jacobi_rs::system::{LinearSystem, SystemGenerator};
use nalgebra::{DMatrix, DVector};

/// Assert that two vectors agree element-wise within a tolerance
pub fn assert_vectors_close(
    first: &DVector<f64>,
    second: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(first.len(), second.len(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in first.iter().zip(second.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// The concrete 3×3 system with solution [1, 1, 1]
pub fn three_by_three_problem() -> Problem {
    let a = DMatrix::from_row_slice(3, 3, &[
        10.0, 1.0, 1.0,
        1.0, 10.0, 1.0,
        1.0, 1.0, 10.0,
    ]);
    let b = DVector::from_vec(vec![12.0, 12.0, 12.0]);
    Problem::new(LinearSystem::new(a, b).unwrap())
}

/// A seeded generated problem of the given size
pub fn generated_problem(seed: u64, n: usize) -> Problem {
    Problem::new(SystemGenerator::new(seed).generate(n).unwrap())
}
