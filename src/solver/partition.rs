//! Static row decomposition
//!
//! The parallel solver assigns each worker a fixed contiguous block of rows
//! for the entire solve. The assignment is computed once, up front, by
//! [`RowPartition`] — never re-balanced between iterations. A static
//! decomposition keeps two things true:
//!
//! - each scratch element is written by exactly one worker, every
//!   iteration, so disjointness of writes holds by construction;
//! - the work each worker performs is reproducible, which makes timing
//!   comparisons across runs meaningful.
//!
//! Blocks differ in size by at most one row. When there are more workers
//! than rows the trailing blocks are empty; an idle worker still
//! participates in the barrier protocol.

use std::ops::Range;

/// Arena of contiguous row ranges, one per worker
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::RowPartition;
///
/// // 10 rows over 4 workers: 3, 3, 2, 2
/// let partition = RowPartition::new(10, 4);
///
/// let sizes: Vec<usize> = partition.ranges().iter().map(|r| r.len()).collect();
/// assert_eq!(sizes, vec![3, 3, 2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPartition {
    ranges: Vec<Range<usize>>,
}

impl RowPartition {
    /// Split `[0, rows)` into `parts` contiguous blocks
    ///
    /// The first `rows % parts` blocks receive one extra row, so block sizes
    /// differ by at most one.
    ///
    /// # Panics
    ///
    /// Panics when `parts == 0`. A partition into zero blocks is a
    /// programmer error, not a runtime condition.
    pub fn new(rows: usize, parts: usize) -> Self {
        assert!(parts > 0, "partition must have at least one block");

        let base = rows / parts;
        let remainder = rows % parts;

        let mut ranges = Vec::with_capacity(parts);
        let mut start = 0;

        for block in 0..parts {
            let size = if block < remainder { base + 1 } else { base };
            ranges.push(start..start + size);
            start += size;
        }

        Self { ranges }
    }

    /// The row ranges, in block order
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of blocks
    pub fn parts(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of rows covered
    pub fn rows(&self) -> usize {
        self.ranges.last().map_or(0, |r| r.end)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Every row in [0, rows) must appear in exactly one block, in order.
    fn assert_covers_exactly_once(partition: &RowPartition, rows: usize) {
        let mut expected = 0;
        for range in partition.ranges() {
            assert_eq!(range.start, expected, "gap or overlap before row {}", expected);
            expected = range.end;
        }
        assert_eq!(expected, rows, "partition does not end at row count");
    }

    #[test]
    fn test_even_split() {
        let partition = RowPartition::new(12, 4);

        assert_eq!(partition.parts(), 4);
        assert_eq!(partition.rows(), 12);
        for range in partition.ranges() {
            assert_eq!(range.len(), 3);
        }
        assert_covers_exactly_once(&partition, 12);
    }

    #[test]
    fn test_uneven_split() {
        let partition = RowPartition::new(10, 3);

        let sizes: Vec<usize> = partition.ranges().iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
        assert_covers_exactly_once(&partition, 10);
    }

    #[test]
    fn test_single_block() {
        let partition = RowPartition::new(7, 1);

        assert_eq!(partition.ranges(), &[0..7]);
        assert_covers_exactly_once(&partition, 7);
    }

    #[test]
    fn test_more_parts_than_rows() {
        let partition = RowPartition::new(3, 5);

        let sizes: Vec<usize> = partition.ranges().iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 0, 0]);
        assert_covers_exactly_once(&partition, 3);
    }

    #[test]
    fn test_coverage_over_grid() {
        // No gaps, no duplicates, for dividing and non-dividing combinations.
        for rows in [1, 2, 5, 16, 17, 100] {
            for parts in [1, 2, 3, 4, 7, 8, 16, 32] {
                let partition = RowPartition::new(rows, parts);
                assert_eq!(partition.parts(), parts);
                assert_covers_exactly_once(&partition, rows);

                // Sizes differ by at most one
                let sizes: Vec<usize> = partition.ranges().iter().map(|r| r.len()).collect();
                let min = sizes.iter().min().unwrap();
                let max = sizes.iter().max().unwrap();
                assert!(max - min <= 1, "rows {} parts {}: sizes {:?}", rows, parts, sizes);
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least one block")]
    fn test_zero_parts_panics() {
        RowPartition::new(10, 0);
    }
}
