// Array-to-pointer decay and pointer arithmetic

use super::join;
use crate::constants::DECAY_ARRAY;
use crate::memory::{
    address_at_offset, address_of, element_at_index, element_at_offset, stride_of,
};
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript) {
    let arr = DECAY_ARRAY;
    let ptr: &[i32] = &arr; // Decays to a view of the first element onward

    out.println(format!("Original array: {}", join(&arr)));

    out.println("Access via pointer arithmetic:");
    for i in 0..arr.len() {
        let Some(value) = element_at_offset(ptr, i) else {
            continue;
        };
        assert_eq!(Some(value), element_at_index(&arr, i));
        out.println(format!(
            "*(ptr + {}) = {} (address: {:#x})",
            i,
            value,
            address_at_offset(ptr, i)
        ));
    }

    out.println(format!(
        "arr = {:#x} (address of the first element)",
        arr.as_ptr() as usize
    ));
    out.println(format!("&arr = {:#x} (address of the array)", address_of(&arr)));
    out.println(format!(
        "&arr[0] = {:#x} (address of the first element)",
        address_of(&arr[0])
    ));
    out.println(format!(
        "ptr + 1 advances {} bytes, &arr + 1 advances {} bytes",
        stride_of::<i32>(),
        stride_of::<[i32; 5]>()
    ));
}
