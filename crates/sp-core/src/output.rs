//! Line-oriented output to a caller-supplied sink.

use std::io::Write;

use crate::SpResult;

/// Write `line` followed by `\n` to `out`.
///
/// Behaviors never touch stdout directly: the binary passes a locked stdout,
/// tests pass a `Vec<u8>`.
#[inline]
pub fn write_line(out: &mut dyn Write, line: &str) -> SpResult<()> {
    writeln!(out, "{line}")?;
    Ok(())
}
