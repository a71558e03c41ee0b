// Comparator callbacks

use super::join;
use crate::constants::SORT_INPUT;
use crate::sorting::{compare_int, sort_with, Comparator};
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript) {
    let mut arr = SORT_INPUT;
    out.println(format!("Array before sorting: {}", join(&arr)));

    let comparator: Comparator<i32> = compare_int;
    sort_with(&mut arr, comparator);
    out.println(format!("Array after sorting: {}", join(&arr)));
}
