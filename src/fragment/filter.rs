//! Streaming diff-to-fragment filter.

use std::io::{BufRead, Write};

use crate::error::{Diff2FragError, Result};

use super::classify::classify;

/// Counters for one filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the diff.
    pub lines_read: usize,
    /// Fragment lines written.
    pub lines_emitted: usize,
}

/// Read a unified diff from `input` and write the fragment to `output`.
///
/// Lines are processed one at a time in input order. Reading stops at
/// end-of-stream and `output` is flushed before returning.
///
/// # Errors
///
/// * `Diff2FragError::Read` - `input` failed or was not valid UTF-8
/// * `Diff2FragError::Write` - `output` failed
pub fn diff_to_fragment<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<FilterStats> {
    let mut stats = FilterStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        let n = input.read_line(&mut line).map_err(Diff2FragError::Read)?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;

        for frag in classify(&line) {
            tracing::trace!(line = stats.lines_read, ?frag, "emit");
            frag.write_to(&mut output).map_err(Diff2FragError::Write)?;
            stats.lines_emitted += 1;
        }
    }

    output.flush().map_err(Diff2FragError::Write)?;

    tracing::debug!(
        lines_read = stats.lines_read,
        lines_emitted = stats.lines_emitted,
        "reached end of diff"
    );
    Ok(stats)
}

/// Convert an in-memory diff to its fragment.
#[cfg(test)]
pub fn fragment_from_str(diff: &str) -> String {
    let mut out = Vec::new();
    diff_to_fragment(diff.as_bytes(), &mut out).expect("in-memory streams cannot fail");
    String::from_utf8(out).expect("fragment built from &str is UTF-8")
}
