mod app;
mod cli;
mod config;
mod confirm;
mod consts;
mod error;
mod sheet;
mod tick;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();
    app::run(&cli, &config)
}
