//! Heap-allocated matrix with one block per row
//!
//! Mirrors the classic `int **` layout: a row-index block holding one handle per
//! row, and an independently acquired block of `cols` cells for every row.
//!
//! # Ownership
//!
//! [`allocate_matrix`] either returns a complete [`Matrix`] or returns an error
//! after handing every block it acquired back to the heap (rows first, then the
//! index). [`release_matrix`] consumes the matrix, so a second release does not
//! type-check.

use std::ops::{Index, IndexMut};

use super::heap::{Block, Heap};
use super::Address;
use crate::errors::MemoryError;

/// Row-major grid of `i32` owned as a row index of row blocks
#[derive(Debug)]
pub struct Matrix {
    rows: Block<Block<i32>>,
    cols: usize,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read a cell, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Heap address of the row index
    pub fn index_address(&self) -> Address {
        self.rows.address()
    }

    /// Heap addresses of every row block, top to bottom
    pub fn row_addresses(&self) -> Vec<Address> {
        self.rows.iter().map(|r| r.address()).collect()
    }
}

impl Index<usize> for Matrix {
    type Output = [i32];

    fn index(&self, row: usize) -> &[i32] {
        &self.rows[row]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut [i32] {
        &mut self.rows[row]
    }
}

/// Acquire a `rows` x `cols` matrix from `heap`
///
/// Every cell starts at zero. On failure, nothing acquired here stays live.
pub fn allocate_matrix(
    heap: &mut Heap,
    rows: usize,
    cols: usize,
) -> Result<Matrix, MemoryError> {
    let mut index: Block<Block<i32>> = heap.acquire(rows)?;

    for _ in 0..rows {
        match heap.acquire_zeroed::<i32>(cols) {
            Ok(row) => index.push(row),
            Err(e) => {
                // Release everything; the allocation error is what gets reported
                for row in index.take_all() {
                    let _ = heap.release(row);
                }
                let _ = heap.release(index);
                return Err(e);
            }
        }
    }

    Ok(Matrix { rows: index, cols })
}

/// Hand every row back to `heap`, then the row index
///
/// All rows are released even if one of them is rejected; the first error is
/// reported.
pub fn release_matrix(heap: &mut Heap, matrix: Matrix) -> Result<(), MemoryError> {
    let Matrix { mut rows, .. } = matrix;
    let mut first_error = None;

    for row in rows.take_all() {
        if let Err(e) = heap.release(row) {
            first_error.get_or_insert(e);
        }
    }
    if let Err(e) = heap.release(rows) {
        first_error.get_or_insert(e);
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::heap::HeapEvent;

    impl Matrix {
        fn to_vec(&self) -> Vec<Vec<i32>> {
            self.rows.iter().map(|r| r.to_vec()).collect()
        }
    }

    fn fill(matrix: &mut Matrix) {
        let cols = matrix.cols();
        for i in 0..matrix.rows() {
            for j in 0..cols {
                matrix[i][j] = (i * cols + j + 1) as i32;
            }
        }
    }

    #[test]
    fn test_allocate_fill_read() {
        let mut heap = Heap::default();
        let mut matrix = allocate_matrix(&mut heap, 3, 4).unwrap();
        fill(&mut matrix);

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 4);
        assert_eq!(
            matrix.to_vec(),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]]
        );
        assert_eq!(matrix.get(2, 3), Some(12));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(heap.live_blocks(), 4);

        release_matrix(&mut heap, matrix).unwrap();
        assert_eq!(heap.live_blocks(), 0);
    }

    #[test]
    fn test_index_write() {
        let mut heap = Heap::default();
        let mut matrix = allocate_matrix(&mut heap, 2, 2).unwrap();
        matrix[1][0] = 42;
        assert_eq!(matrix[1][0], 42);
        assert_eq!(matrix[0], [0, 0]);
        release_matrix(&mut heap, matrix).unwrap();
    }

    #[test]
    fn test_release_order_rows_then_index() {
        let mut heap = Heap::default();
        let matrix = allocate_matrix(&mut heap, 2, 3).unwrap();
        let index = matrix.index_address();
        let rows = matrix.row_addresses();

        release_matrix(&mut heap, matrix).unwrap();

        let releases: Vec<Address> = heap
            .events()
            .iter()
            .filter_map(|e| match e {
                HeapEvent::Release { address } => Some(*address),
                _ => None,
            })
            .collect();
        assert_eq!(releases, vec![rows[0], rows[1], index]);
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let mut heap = Heap::default();
        let matrix = allocate_matrix(&mut heap, 3, 4).unwrap();
        let rows = matrix.row_addresses();
        for pair in rows.windows(2) {
            assert!(pair[1] >= pair[0] + 16);
        }
        release_matrix(&mut heap, matrix).unwrap();
    }

    #[test]
    fn test_index_failure_acquires_nothing() {
        let mut heap = Heap::failing_on(1);
        let err = allocate_matrix(&mut heap, 3, 4).unwrap_err();
        assert!(matches!(err, MemoryError::AllocationFailure { .. }));
        assert_eq!(heap.live_blocks(), 0);
        assert_eq!(heap.acquisitions(), 1);
    }

    #[test]
    fn test_row_failure_releases_earlier_rows() {
        // Acquisition #1 is the index, #2 and #3 are rows 0 and 1, #4 fails
        let mut heap = Heap::failing_on(4);
        let err = allocate_matrix(&mut heap, 3, 4).unwrap_err();

        assert!(matches!(err, MemoryError::AllocationFailure { .. }));
        assert_eq!(heap.live_blocks(), 0);
        assert!(heap.leaked().is_empty());
        assert_eq!(heap.total_allocated(), 0);
    }

    #[test]
    fn test_out_of_memory_mid_matrix() {
        // Index (3 handles) fits, but only one 16-byte row does
        let index_size = 3 * std::mem::size_of::<Block<i32>>();
        let mut heap = Heap::new(index_size + 16);
        let err = allocate_matrix(&mut heap, 3, 4).unwrap_err();

        assert!(matches!(err, MemoryError::OutOfMemory { .. }));
        assert!(err.is_allocation_failure());
        assert_eq!(heap.live_blocks(), 0);
    }

    #[test]
    fn test_oversized_row_is_out_of_memory() {
        // The index is live when the row size is checked against the limit
        let mut heap = Heap::default();
        let result = allocate_matrix(&mut heap, 1, usize::MAX / 4);

        let err = result.unwrap_err();
        assert!(matches!(err, MemoryError::OutOfMemory { .. }));
        assert_eq!(heap.live_blocks(), 0);
        assert_eq!(heap.total_allocated(), 0);
    }

    #[test]
    fn test_empty_matrix() {
        let mut heap = Heap::default();
        let matrix = allocate_matrix(&mut heap, 0, 4).unwrap();
        assert_eq!(matrix.rows(), 0);
        assert!(matrix.to_vec().is_empty());
        release_matrix(&mut heap, matrix).unwrap();
        assert_eq!(heap.live_blocks(), 0);
    }
}
