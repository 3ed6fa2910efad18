/// CLI layer: argument parsing and output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{init_logging, write_stdout};
