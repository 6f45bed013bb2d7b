// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kommons CLI entry point.

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_subscriber(cli.verbose);

    let input = match (&cli.input, cli.command.reads_input()) {
        (Some(text), _) => text.clone(),
        (None, true) => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read standard input")?;
            commands::trim_input(raw)
        }
        (None, false) => String::new(),
    };

    let output = commands::execute(&cli.command, &input)?;
    println!("{}", output);
    Ok(())
}
