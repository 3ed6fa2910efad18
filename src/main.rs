#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! emojimap — export the emoji shortcode table as JSON or a Lua module.

mod cli;
mod emoji;
mod export;

use clap::Parser;
use tracing::{debug, error};

use cli::args::normalize_args;
use cli::{Cli, init_logging, write_stdout};
use export::{ExportError, OutputFormat};

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging();

    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), ExportError> {
    let format = OutputFormat::from(cli.format().as_str());
    debug!(?format, "resolved output format");

    let mappings = emoji::mappings();
    debug!(entries = mappings.len(), "loaded shortcode table");

    let rendered = export::render(&mappings, &format)?;
    write_stdout(&rendered)
}
