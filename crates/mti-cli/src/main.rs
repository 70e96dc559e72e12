// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use clap::Parser;
use mti_cli::{Cli, emit_structured_error, init_tracing, run};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        emit_structured_error(&err);
        process::exit(1);
    }
}
