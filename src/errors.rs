//! Memory error types for the pointer tour
//!
//! This module defines [`MemoryError`], the only failure surface of the program.
//! Everything except heap acquisition is total, so every variant here comes out
//! of [`crate::memory::heap::Heap`] or the matrix built on top of it.
//!
//! Allocation failures are fatal for the demo binary: the caller prints a notice
//! and exits with status 1. The library never terminates the process itself.

use std::fmt;

/// Errors raised by the tracked heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// A block could not be acquired (injected failure or allocator refusal)
    AllocationFailure { requested: usize, reason: String },

    /// Acquiring the block would exceed the heap's byte limit
    OutOfMemory { requested: usize, limit: usize },

    /// A block was released twice
    DoubleFree { address: u64 },

    /// A block was released that this heap never handed out
    InvalidFree { address: u64 },
}

impl MemoryError {
    /// Whether this error comes from acquiring storage (as opposed to releasing it)
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            MemoryError::AllocationFailure { .. } | MemoryError::OutOfMemory { .. }
        )
    }

    /// Address involved in the error, if any
    pub fn address(&self) -> Option<u64> {
        match self {
            MemoryError::DoubleFree { address } => Some(*address),
            MemoryError::InvalidFree { address } => Some(*address),
            MemoryError::AllocationFailure { .. } => None,
            MemoryError::OutOfMemory { .. } => None,
        }
    }
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::AllocationFailure { requested, reason } => {
                write!(
                    f,
                    "Allocation failure: could not acquire {} bytes ({})",
                    requested, reason
                )
            }
            MemoryError::OutOfMemory { requested, limit } => {
                write!(
                    f,
                    "Out of memory: requested {} bytes, limit is {}",
                    requested, limit
                )
            }
            MemoryError::DoubleFree { address } => {
                write!(f, "Double free detected at address 0x{:x}", address)
            }
            MemoryError::InvalidFree { address } => {
                write!(
                    f,
                    "Invalid free: address 0x{:x} was never allocated",
                    address
                )
            }
        }
    }
}

impl std::error::Error for MemoryError {}
