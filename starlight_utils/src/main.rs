#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** starlight **
//! Command-line access to the `starlight_utils` helpers.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use starlight_utils::STARLIGHT_VERSION;
use starlight_utils::cli::{Cli, run};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("starlight {STARLIGHT_VERSION} starting");

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run(&cli.command, &mut stdin, &mut stdout).context("while running starlight command")
}
