//! weapons — a troll fights with an axe, then picks up a bow and arrow.
//!
//! Logs go to stderr (`RUST_LOG=debug` to see each step); stdout carries
//! only the demo transcript.

use std::io::{self, Write};

use anyhow::Result;

fn main() -> Result<()> {
    sp_core::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sp_weapon::demo::run(&mut out)?;
    out.flush()?;

    Ok(())
}
