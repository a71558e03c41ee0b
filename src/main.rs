// pointer-tour: pointers, aliasing and manual allocation, one demo at a time

use std::io::{self, IsTerminal};

use pointer_tour::demos;
use pointer_tour::memory::heap::Heap;
use pointer_tour::terminal::Transcript;
use pointer_tour::theme::DEFAULT_THEME;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Running pointer demonstrations...");

    let mut heap = Heap::default();
    let mut transcript = Transcript::new();
    let outcome = demos::run_all(&mut transcript, &mut heap);

    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let status = demos::write_report(
        &mut stdout.lock(),
        &transcript,
        &outcome,
        &DEFAULT_THEME,
        styled,
    )?;

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(status);
    }

    eprintln!(
        "Completed: {} heap acquisitions, {} blocks still live.",
        heap.acquisitions(),
        heap.live_blocks()
    );
    Ok(())
}
