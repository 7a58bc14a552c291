//! CLI argument parsing for kconfig-diff2frag.
//!
//! The tool takes no arguments of its own; clap still provides `--help`
//! and `--version` and rejects anything else with a usage error.

use clap::Parser;

/// Turn a unified diff of two kconfig files into a kconfig fragment.
///
/// Reads `diff -u config-before config-after` output on stdin and writes
/// the changed options to stdout:
/// - `+CONFIG_FOO=y` becomes `CONFIG_FOO=y`
/// - `+# CONFIG_FOO is not set` becomes `CONFIG_FOO=n`
///
/// All other lines are ignored.
#[derive(Parser, Debug)]
#[command(name = "kconfig-diff2frag")]
#[command(author, version, about, long_about)]
#[command(after_help = "Example:\n    diff -u config-before config-after | kconfig-diff2frag")]
pub struct Cli {}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
