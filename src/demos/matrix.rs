// Row-by-row heap matrix

use crate::constants::{MATRIX_COLS, MATRIX_ROWS};
use crate::errors::MemoryError;
use crate::memory::heap::Heap;
use crate::memory::matrix::{allocate_matrix, release_matrix};
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript, heap: &mut Heap) -> Result<(), MemoryError> {
    let mut matrix = allocate_matrix(heap, MATRIX_ROWS, MATRIX_COLS)?;

    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            matrix[i][j] = (i * MATRIX_COLS + j + 1) as i32;
        }
    }

    out.println("Dynamically allocated matrix:");
    for i in 0..matrix.rows() {
        let line: String = matrix[i].iter().map(|v| format!("{:2} ", v)).collect();
        out.println(line);
    }

    out.println(format!("Row index block at {:#x}", matrix.index_address()));
    for (i, addr) in matrix.row_addresses().iter().enumerate() {
        out.println(format!("Row {} block at {:#x}", i, addr));
    }

    let rows = matrix.rows();
    release_matrix(heap, matrix)?;
    out.println(format!("Released {} rows, then the row index", rows));
    Ok(())
}
