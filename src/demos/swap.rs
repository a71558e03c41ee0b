// Swapping through references

use std::cell::Cell;

use crate::memory::{swap, swap_cells};
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript) {
    let (mut x, mut y) = (10, 20);
    out.println(format!("Before swap: x = {}, y = {}", x, y));
    swap(&mut x, &mut y);
    out.println(format!("After swap: x = {}, y = {}", x, y));

    // Two `&mut` to the same slot don't compile, so aliasing goes through Cell
    let z = Cell::new(5);
    swap_cells(&z, &z);
    out.println(format!("Swapping z with itself leaves z = {}", z.get()));
}
