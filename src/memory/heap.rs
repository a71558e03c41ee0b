//! Tracked heap for the pointer tour
//!
//! This module provides heap storage management with:
//! - Owned [`Block`] handles (acquire returns one, release consumes it)
//! - Tombstone tracking for released blocks
//! - A byte limit and an optional injected failure, for exercising error paths
//! - An event log and a leak report
//!
//! # Ownership
//!
//! A `Block` cannot be copied or cloned, and [`Heap::release`] takes it by value.
//! Once released, the handle is gone: reading through it or releasing it again is
//! a compile error rather than a runtime check. The tombstone bookkeeping still
//! reports `DoubleFree`/`InvalidFree` for handles that came from a different heap.
//!
//! Storage behind each block is a real `Vec`, reserved with
//! [`Vec::try_reserve_exact`] so allocator refusal surfaces as
//! [`MemoryError::AllocationFailure`] instead of aborting.

use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;

use super::Address;
use crate::constants::{DEFAULT_HEAP_LIMIT, HEAP_ADDRESS_START};
use crate::errors::MemoryError;

/// State of a heap block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Allocated,
    Tombstone, // Released, kept for the event history
}

/// Bookkeeping for one block handed out by the heap
#[derive(Debug, Clone)]
struct BlockRecord {
    size: usize, // Bytes
    state: BlockState,
}

/// Entry in the heap's event log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapEvent {
    Acquire { address: Address, size: usize },
    Release { address: Address },
    Failed { requested: usize },
}

/// Owned handle to a block of heap storage
///
/// Derefs to a slice of the cells currently in the block.
#[derive(Debug)]
pub struct Block<T> {
    address: Address,
    capacity: usize,
    data: Vec<T>,
}

impl<T> Block<T> {
    /// Virtual address of the block inside its heap
    pub fn address(&self) -> Address {
        self.address
    }

    /// Append a cell; the block never grows past its acquired capacity
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.data.len() < self.capacity, "block overflow");
        self.data.push(value);
    }

    /// Remove every cell, in order, leaving the block empty
    pub(crate) fn take_all(&mut self) -> Vec<T> {
        self.data.drain(..).collect()
    }
}

impl<T> Deref for Block<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Block<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// The heap
#[derive(Debug, Clone)]
pub struct Heap {
    allocations: FxHashMap<Address, BlockRecord>,
    events: Vec<HeapEvent>,
    next_address: Address,
    total_allocated_bytes: usize,
    max_heap_size: usize,
    acquisitions: usize,
    fail_on: Option<usize>,
}

impl Heap {
    /// Create a new heap with a maximum size limit
    pub fn new(max_heap_size: usize) -> Self {
        Heap {
            allocations: FxHashMap::default(),
            events: Vec::new(),
            next_address: HEAP_ADDRESS_START,
            total_allocated_bytes: 0,
            max_heap_size,
            acquisitions: 0,
            fail_on: None,
        }
    }

    /// Create a heap whose `n`-th acquisition (1-based) fails
    pub fn failing_on(n: usize) -> Self {
        Heap {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    /// Acquire an empty block with room for `len` cells of `T`
    pub fn acquire<T>(&mut self, len: usize) -> Result<Block<T>, MemoryError> {
        self.acquisitions += 1;

        let Some(size) = len.checked_mul(std::mem::size_of::<T>()) else {
            self.events.push(HeapEvent::Failed { requested: usize::MAX });
            return Err(MemoryError::AllocationFailure {
                requested: usize::MAX,
                reason: format!("{} cells overflow the address space", len),
            });
        };

        if self.fail_on == Some(self.acquisitions) {
            self.events.push(HeapEvent::Failed { requested: size });
            return Err(MemoryError::AllocationFailure {
                requested: size,
                reason: format!("injected failure on acquisition #{}", self.acquisitions),
            });
        }

        let exceeds_limit = self
            .total_allocated_bytes
            .checked_add(size)
            .map_or(true, |total| total > self.max_heap_size);
        if exceeds_limit {
            self.events.push(HeapEvent::Failed { requested: size });
            return Err(MemoryError::OutOfMemory {
                requested: size,
                limit: self.max_heap_size,
            });
        }

        let mut data = Vec::new();
        if let Err(e) = data.try_reserve_exact(len) {
            self.events.push(HeapEvent::Failed { requested: size });
            return Err(MemoryError::AllocationFailure {
                requested: size,
                reason: e.to_string(),
            });
        }

        let address = self.next_address;
        // Zero-sized blocks still get a distinct address
        self.next_address += size.max(1) as u64;
        self.allocations.insert(
            address,
            BlockRecord {
                size,
                state: BlockState::Allocated,
            },
        );
        self.total_allocated_bytes += size;
        self.events.push(HeapEvent::Acquire { address, size });

        Ok(Block {
            address,
            capacity: len,
            data,
        })
    }

    /// Acquire a block of `len` cells, each set to `T::default()`
    pub fn acquire_zeroed<T: Default + Clone>(
        &mut self,
        len: usize,
    ) -> Result<Block<T>, MemoryError> {
        let mut block = self.acquire(len)?;
        block.data.resize(len, T::default());
        Ok(block)
    }

    /// Release a block (mark as tombstone); the handle is consumed
    pub fn release<T>(&mut self, block: Block<T>) -> Result<(), MemoryError> {
        let addr = block.address;
        match self.allocations.get_mut(&addr) {
            Some(record) if record.state == BlockState::Allocated => {
                record.state = BlockState::Tombstone;
                self.total_allocated_bytes -= record.size;
                self.events.push(HeapEvent::Release { address: addr });
                Ok(())
            }
            Some(_) => Err(MemoryError::DoubleFree { address: addr }),
            None => Err(MemoryError::InvalidFree { address: addr }),
        }
    }

    /// Acquire/release history in the order it happened
    pub fn events(&self) -> &[HeapEvent] {
        &self.events
    }

    /// Number of blocks acquired and not yet released
    pub fn live_blocks(&self) -> usize {
        self.allocations
            .values()
            .filter(|r| r.state == BlockState::Allocated)
            .count()
    }

    /// Addresses of blocks still live, lowest first
    pub fn leaked(&self) -> Vec<Address> {
        let mut live: Vec<Address> = self
            .allocations
            .iter()
            .filter(|(_, r)| r.state == BlockState::Allocated)
            .map(|(&addr, _)| addr)
            .collect();
        live.sort_unstable();
        live
    }

    /// Get total bytes currently held by live blocks
    pub fn total_allocated(&self) -> usize {
        self.total_allocated_bytes
    }

    /// Number of acquisitions attempted so far, failed ones included
    pub fn acquisitions(&self) -> usize {
        self.acquisitions
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new(DEFAULT_HEAP_LIMIT)
    }
}
