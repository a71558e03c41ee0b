// Owned mutable buffer vs rebindable reference to a literal

use crate::memory::text::TextBuffer;
use crate::terminal::Transcript;

pub fn run(out: &mut Transcript) {
    // Owned copy of the literal: contents may change
    if let Some(mut s1) = TextBuffer::<5>::from_literal("Hello") {
        s1.lowercase_at(0);
        out.println(format!("s1 (owned buffer): {}", s1));
    }

    let mut s2: &'static str = "World"; // The literal itself is read-only
    out.println(format!("s2 (reference): {}", s2));

    s2 = "Mundo";
    out.println(format!("s2 after rebinding: {}", s2));

    out.println("s1 cannot be rebound to other storage; only its contents change");
}
