//! Owned, fixed-capacity text buffer
//!
//! The counterpart of a C `char s[] = "Hello";`: the bytes are copied out of the
//! literal into storage the owner may mutate. The buffer itself has a fixed
//! capacity and is never rebound; only its contents change.
//!
//! A `&'static str` is the other half of the comparison: the reference can be
//! pointed at a different literal, but the literal's bytes are read-only.
//!
//! ```compile_fail
//! let s2: &'static str = "World";
//! s2.make_ascii_lowercase();
//! ```

use std::fmt;

/// Fixed-capacity ASCII buffer holding up to `N` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> TextBuffer<N> {
    /// Copy `text` into a new buffer
    ///
    /// Returns `None` if the text is longer than `N` bytes or is not ASCII.
    pub fn from_literal(text: &str) -> Option<Self> {
        if text.len() > N || !text.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; N];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Some(TextBuffer {
            bytes,
            len: text.len(),
        })
    }

    /// Lowercase the unit at `index`; out-of-range indices are ignored
    pub fn lowercase_at(&mut self, index: usize) {
        if index < self.len {
            self.bytes[index].make_ascii_lowercase();
        }
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written, so this cannot fail
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl<const N: usize> fmt::Display for TextBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
