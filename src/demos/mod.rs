//! The seven demonstrations, in the order the program runs them
//!
//! Each submodule exposes a `run` function that writes its explanation into a
//! [`Transcript`]. Only the matrix demonstration touches the heap, and it is the
//! only one that can fail.

pub mod arrays;
pub mod basics;
pub mod hazards;
pub mod matrix;
pub mod sort;
pub mod swap;
pub mod text;

use std::io::{self, Write};

use crate::errors::MemoryError;
use crate::memory::heap::Heap;
use crate::terminal::Transcript;
use crate::theme::Theme;

/// Run every demonstration against `heap`
///
/// Stops at the first allocation failure; lines written up to that point stay in
/// the transcript.
pub fn run_all(out: &mut Transcript, heap: &mut Heap) -> Result<(), MemoryError> {
    out.banner("=== POINTERS IN RUST ===");
    out.blank();

    out.heading("1. OPERATORS & AND *");
    basics::run(out);
    out.blank();

    out.heading("2. ARRAYS AND POINTERS");
    arrays::run(out);
    out.blank();

    out.heading("3. OWNED BUFFER VS &'static str");
    text::run(out);
    out.blank();

    out.heading("4. SWAP THROUGH REFERENCES");
    swap::run(out);
    out.blank();

    out.heading("5. DYNAMIC MATRIX ALLOCATION");
    matrix::run(out, heap)?;
    out.blank();

    out.heading("6. FUNCTION POINTERS");
    sort::run(out);
    out.blank();

    out.heading("7. COMMON PITFALLS");
    hazards::run(out, heap);
    out.blank();

    out.banner("=== END OF PROGRAM ===");
    Ok(())
}

/// Render the transcript of a run to `out` and pick the process exit status
///
/// A failed run gets the allocation notice after whatever was printed before
/// the failure, and status 1.
pub fn write_report<W: Write>(
    out: &mut W,
    transcript: &Transcript,
    outcome: &Result<(), MemoryError>,
    theme: &Theme,
    styled: bool,
) -> io::Result<i32> {
    transcript.render(out, theme, styled)?;
    match outcome {
        Ok(()) => Ok(0),
        Err(_) => {
            writeln!(out, "Memory allocation error!")?;
            out.flush()?;
            Ok(1)
        }
    }
}

/// Space-separated rendering of a sequence
pub(crate) fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
