// Address-of and dereference

use crate::memory::{address_of, write_through};
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript) {
    let mut var = 42;

    out.println(format!("Value of var: {}", var));
    out.println(format!("Address of var: {:#x}", address_of(&var)));

    let ptr = &mut var; // ptr holds the address of var
    out.println(format!("Value of ptr (stored address): {:#x}", address_of(&*ptr)));
    out.println(format!("Value pointed to by ptr (*ptr): {}", *ptr));

    write_through(ptr, 100);
    out.println(format!("After *ptr = 100, value of var: {}", var));
}
