//! kconfig-diff2frag: turn a unified diff of two kconfig files into a
//! kconfig fragment.
//!
//! This is the main entry point. It parses arguments, streams stdin through
//! the fragment filter to stdout, and maps stream failures to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod fragment;
mod logging;

use cli::Cli;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();
    logging::init_logger();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match fragment::diff_to_fragment(stdin, stdout) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
