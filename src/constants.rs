// Constants for the pointer tour

/// Starting address for tracked heap blocks
/// Heap addresses start at 0x10000000 to clearly distinguish them from real stack addresses
pub const HEAP_ADDRESS_START: u64 = 0x1000_0000;

/// Default byte limit of the tracked heap (10 MB)
pub const DEFAULT_HEAP_LIMIT: usize = 10 * 1024 * 1024;

/// Dimensions of the matrix built by the allocation demo
pub const MATRIX_ROWS: usize = 3;
pub const MATRIX_COLS: usize = 4;

/// Array walked by the decay demo
pub const DECAY_ARRAY: [i32; 5] = [10, 20, 30, 40, 50];

/// Unsorted input of the callback sort demo
pub const SORT_INPUT: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];
