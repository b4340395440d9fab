//! sorting — sorts `['a', 'b', 'c']` ascending, swaps strategy, sorts again.
//!
//! Logs go to stderr (`RUST_LOG=debug` to see each step); stdout carries
//! only the demo transcript.

use std::io::{self, Write};

use anyhow::Result;

fn main() -> Result<()> {
    sp_core::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sp_sort::demo::run(&mut out)?;
    out.flush()?;

    Ok(())
}
