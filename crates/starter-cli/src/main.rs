//! `starter` - print the webpack configuration derived from package.json.

use clap::Parser;
use miette::Result;
use starter_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    let result = match args.command {
        cli::Command::Derive(derive_args) => commands::derive_execute(derive_args),
        cli::Command::Inspect(inspect_args) => commands::inspect_execute(inspect_args),
    };

    result.map_err(error::cli_error_to_miette)
}
