//! Memory model for the pointer tour
//!
//! This module provides the core abstractions the demonstrations are built on:
//! - [`heap`]: Tracked heap handing out owned blocks
//! - [`matrix`]: Row-major grid built from one row-index block plus one block per row
//! - [`text`]: Fixed-capacity owned text buffer
//!
//! The free functions below are the aliasing primitives: writing through a
//! reference, swapping through references, and pointer arithmetic over a slice.
//!
//! # Pointer Arithmetic
//!
//! Offsets are scaled by the pointee size, exactly like C:
//! ```text
//! ptr + n  →  ptr + (n * size_of::<T>())
//! ```
//! [`element_at_offset`] only dereferences offsets that stay inside the slice.

pub mod heap;
pub mod matrix;
pub mod text;

use std::cell::Cell;

/// Memory address type (64-bit)
pub type Address = u64;

/// Numeric address of a value's storage
pub fn address_of<T: ?Sized>(value: &T) -> Address {
    value as *const T as *const () as usize as Address
}

/// Store `value` through a mutable alias
pub fn write_through(alias: &mut i32, value: i32) {
    *alias = value;
}

/// Exchange the values behind two references
///
/// The two `&mut` borrows are statically guaranteed not to overlap, so there is
/// no aliasing case to handle here. See [`swap_cells`] for storage that may be
/// shared.
pub fn swap(a: &mut i32, b: &mut i32) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

/// Exchange the values of two cells that may be the same storage
///
/// Passing the same cell twice leaves it unchanged.
pub fn swap_cells(a: &Cell<i32>, b: &Cell<i32>) {
    if std::ptr::eq(a, b) {
        return;
    }
    let temp = a.get();
    a.set(b.get());
    b.set(temp);
}

/// Read the element `offset` positions past `base`, via raw pointer arithmetic
///
/// Returns `None` when the offset falls outside the slice.
pub fn element_at_offset<T: Copy>(base: &[T], offset: usize) -> Option<T> {
    if offset >= base.len() {
        return None;
    }
    let ptr = base.as_ptr();
    // SAFETY: offset < len, so ptr + offset points at an initialized element of `base`
    Some(unsafe { *ptr.add(offset) })
}

/// Read the element at `index` with ordinary bounds-checked indexing
pub fn element_at_index<T: Copy>(base: &[T], index: usize) -> Option<T> {
    base.get(index).copied()
}

/// Address of the element `offset` positions past `base`, without dereferencing
pub fn address_at_offset<T>(base: &[T], offset: usize) -> Address {
    base.as_ptr().wrapping_add(offset) as usize as Address
}

/// Number of bytes a pointer to `T` advances by when incremented
pub fn stride_of<T>() -> usize {
    std::mem::size_of::<T>()
}
