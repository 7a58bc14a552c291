//! Exit code constants for the kconfig-diff2frag CLI.
//!
//! - 0: Success (input reached end-of-stream)
//! - 1: Stream failure (stdin could not be read or stdout could not be written)
//!
//! Usage errors are reported by clap itself and use clap's exit code (2).

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Stream failure: reading stdin or writing stdout failed.
pub const IO_FAILURE: i32 = 1;
