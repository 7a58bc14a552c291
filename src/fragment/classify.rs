//! Per-line classification rules.

use std::io::{self, Write};

/// Prefix of an added `KEY=value` assignment.
const ADDED_ASSIGNMENT: &str = "+CONFIG_";

/// Prefix of an added `# KEY is not set` marker.
const ADDED_UNSET: &str = "+# CONFIG_";

/// A single fragment line produced from one diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLine<'a> {
    /// The added line without its leading `+`, terminator included.
    Assignment(&'a str),
    /// An option explicitly disabled on the "after" side (option name only).
    Disabled(&'a str),
}

impl FragmentLine<'_> {
    /// Render this line to `out`.
    ///
    /// Assignments are written verbatim, so a final line without a
    /// terminator stays without one. Disabled options always end in `\n`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            FragmentLine::Assignment(rest) => out.write_all(rest.as_bytes()),
            FragmentLine::Disabled(name) => writeln!(out, "{name}=n"),
        }
    }
}

/// Classify one diff line.
///
/// Both rules are checked independently and each match yields its own
/// fragment line. The two prefixes never overlap in practice, so at most
/// one item comes back.
pub fn classify(line: &str) -> impl Iterator<Item = FragmentLine<'_>> {
    added_assignment(line)
        .map(FragmentLine::Assignment)
        .into_iter()
        .chain(added_unset(line).map(FragmentLine::Disabled))
}

/// `+CONFIG_FOO=y\n` -> `CONFIG_FOO=y\n`
fn added_assignment(line: &str) -> Option<&str> {
    if line.starts_with(ADDED_ASSIGNMENT) {
        // Strip only the diff marker; the prefix itself is part of the output.
        Some(&line[1..])
    } else {
        None
    }
}

/// `+# CONFIG_FOO is not set` -> `CONFIG_FOO`
///
/// The option name is the second token split on [`is_separator`]; the text
/// after it is not checked.
fn added_unset(line: &str) -> Option<&str> {
    if !line.starts_with(ADDED_UNSET) {
        return None;
    }
    line.split(is_separator)
        .filter(|token| !token.is_empty())
        .nth(1)
        // No-op after splitting; the name is stripped of the same separators.
        .map(|token| token.trim_matches(is_separator))
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`,
/// which line-splitting tools commonly treat as whitespace as well.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
