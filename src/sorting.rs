//! Sorting driven by a three-way comparison callback
//!
//! A comparator returns a negative number, zero, or a positive number when its
//! first argument orders before, equal to, or after its second. Any function or
//! closure with that shape can be handed to [`sort_with`].

use std::cmp::Ordering;

/// Plain function pointer form of a three-way comparator
pub type Comparator<T> = fn(&T, &T) -> i32;

/// Ascending comparator for integers
///
/// Never overflows, unlike the `a - b` shortcut.
pub fn compare_int(a: &i32, b: &i32) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Sort `items` in place so that `comparator` reports non-descending order
/// between every adjacent pair. Not stable.
pub fn sort_with<T, F>(items: &mut [T], comparator: F)
where
    F: Fn(&T, &T) -> i32,
{
    items.sort_unstable_by(|a, b| comparator(a, b).cmp(&0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_with_function_pointer() {
        let mut arr = [64, 34, 25, 12, 22, 11, 90];
        let cmp: Comparator<i32> = compare_int;
        sort_with(&mut arr, cmp);
        assert_eq!(arr, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_sort_descending() {
        let mut arr = [3, 1, 2];
        sort_with(&mut arr, |a, b| compare_int(b, a));
        assert_eq!(arr, [3, 2, 1]);
    }

    #[test]
    fn test_sort_with_closure() {
        let mut words = ["pear", "fig", "banana"];
        sort_with(&mut words, |a, b| a.len() as i32 - b.len() as i32);
        assert_eq!(words, ["fig", "pear", "banana"]);
    }

    #[test]
    fn test_empty_and_sorted_are_unchanged() {
        let mut empty: [i32; 0] = [];
        sort_with(&mut empty, compare_int);
        assert!(empty.is_empty());

        let mut sorted = [1, 2, 3, 4];
        sort_with(&mut sorted, compare_int);
        assert_eq!(sorted, [1, 2, 3, 4]);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let mut arr = [i32::MAX, i32::MIN, 0, -1];
        sort_with(&mut arr, compare_int);
        assert_eq!(arr, [i32::MIN, -1, 0, i32::MAX]);
    }
}
