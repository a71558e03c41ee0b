//! Common pointer pitfalls, described but never executed
//!
//! Three of the four classic hazards cannot be written in safe Rust at all. The
//! examples below are compiled as doc tests and are expected to fail.
//!
//! # Wild pointer
//!
//! A reference with no referent is unrepresentable; reading an unassigned
//! binding is rejected:
//!
//! ```compile_fail
//! let alias: &i32;
//! println!("{}", *alias);
//! ```
//!
//! # Dangling pointer
//!
//! A reference cannot outlive the value it points to:
//!
//! ```compile_fail
//! let alias: &i32;
//! {
//!     let value = 42;
//!     alias = &value;
//! }
//! println!("{}", *alias);
//! ```
//!
//! Releasing a heap block consumes its handle, so there is nothing left to read:
//!
//! ```compile_fail
//! use pointer_tour::memory::heap::Heap;
//!
//! let mut heap = Heap::default();
//! let block = heap.acquire_zeroed::<i32>(1).unwrap();
//! heap.release(block).unwrap();
//! let value = block[0];
//! ```
//!
//! # Double free
//!
//! ```compile_fail
//! use pointer_tour::memory::heap::Heap;
//!
//! let mut heap = Heap::default();
//! let block = heap.acquire_zeroed::<i32>(1).unwrap();
//! heap.release(block).unwrap();
//! heap.release(block).unwrap();
//! ```
//!
//! The same code with a single release compiles and leaves nothing live:
//!
//! ```
//! use pointer_tour::memory::heap::Heap;
//!
//! let mut heap = Heap::default();
//! let block = heap.acquire_zeroed::<i32>(1).unwrap();
//! let value = block[0];
//! heap.release(block).unwrap();
//! assert_eq!(value, 0);
//! assert_eq!(heap.live_blocks(), 0);
//! ```
//!
//! # Memory leak
//!
//! Dropping a handle without releasing it is safe, so the compiler allows it.
//! The heap's leak report is what catches it:
//!
//! ```
//! use pointer_tour::memory::heap::Heap;
//!
//! let mut heap = Heap::default();
//! let block = heap.acquire_zeroed::<i32>(1).unwrap();
//! let address = block.address();
//! drop(block);
//! assert_eq!(heap.leaked(), vec![address]);
//! ```

use crate::memory::heap::Heap;
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript, heap: &Heap) {
    out.println("=== COMMON PITFALLS ===");

    out.hazard("1. Wild pointer:");
    out.println("   let alias: &i32; *alias  -> rejected: used binding isn't initialized");

    out.hazard("2. Dangling pointer:");
    out.println("   heap.release(block); block[0]  -> rejected: borrow of moved value");

    out.hazard("3. Double free:");
    out.println("   heap.release(block); heap.release(block)  -> rejected: use of moved value");

    out.hazard("4. Memory leak:");
    out.println("   a dropped, unreleased block compiles; the heap's leak report flags it");

    out.println("These pitfalls are never executed!");

    let leaked = heap.leaked();
    if leaked.is_empty() {
        out.success("Leak check: no heap blocks still live");
    } else {
        let addrs: Vec<String> = leaked.iter().map(|a| format!("{:#x}", a)).collect();
        out.hazard(format!(
            "Leak check: {} heap block(s) still live at {}",
            leaked.len(),
            addrs.join(", ")
        ));
    }
}
