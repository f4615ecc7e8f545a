//! Console entry point for generating and exporting coffee-shop test data.
//!
//! Parsing and dispatch live in `coffee_data::console` so the behaviour can
//! be tested without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use coffee_data::console::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .try_init()
    {
        if writeln!(io::stderr().lock(), "tracing init failed: {err}").is_err() {
            // Nothing left to report to.
        }
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
