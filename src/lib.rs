//! # Introduction
//!
//! pointer-tour walks through the pointer concepts every C course covers and
//! shows how each one looks when ownership and borrowing are enforced by the
//! compiler. The program prints one short demonstration per concept.
//!
//! ## Demonstrations
//!
//! ```text
//! Basics → Array decay → Text storage → Swap → Heap matrix → Comparator sort → Pitfalls
//! ```
//!
//! 1. [`demos`] — the seven demonstrations, run in order by [`demos::run_all`].
//! 2. [`memory`] — aliasing primitives, the tracked [`memory::heap::Heap`], the
//!    row-by-row [`memory::matrix::Matrix`] and the fixed
//!    [`memory::text::TextBuffer`].
//! 3. [`sorting`] — sorting with a three-way comparator callback.
//! 4. [`terminal`] — the [`terminal::Transcript`] that records output so it can
//!    be asserted on, and renders it to stdout.
//!
//! ## Errors
//!
//! Acquiring heap storage is the only fallible operation. It returns
//! [`errors::MemoryError`]; the binary turns that into exit status 1.

pub mod constants;
pub mod demos;
pub mod errors;
pub mod memory;
pub mod sorting;
pub mod terminal;
pub mod theme;
