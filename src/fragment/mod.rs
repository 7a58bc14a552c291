//! Kconfig fragment extraction from unified diffs.
//!
//! Input is the output of `diff -u config-before config-after`. Only lines
//! added on the "after" side are of interest:
//! - `+CONFIG_FOO=y` is emitted as `CONFIG_FOO=y`
//! - `+# CONFIG_FOO is not set` is emitted as `CONFIG_FOO=n`
//!
//! Everything else (removed lines, context lines, `---`/`+++`/`@@` headers)
//! is dropped. Each line is handled on its own; there is no hunk tracking.

mod classify;
mod filter;


pub use filter::diff_to_fragment;
