//! Command-line interface definition using clap derive.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Derive a webpack configuration from the `webpack` field of package.json
#[derive(Parser, Debug)]
#[command(name = "starter", version)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the webpack configuration and write it as JSON
    ///
    /// Writes to stdout unless --out is given.
    Derive(DeriveArgs),

    /// Print the `webpack` field after environment substitution
    Inspect(InspectArgs),
}

/// Options locating the project and its manifest.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Manifest file, relative to the project directory
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to FILE (relative to the project directory)
    /// instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_derive_with_options() {
        let cli = Cli::parse_from([
            "starter", "derive", "-C", "site", "--manifest", "pkg.json", "--out", "webpack.json",
        ]);
        let Command::Derive(args) = cli.command else {
            panic!("expected derive");
        };
        assert_eq!(args.project.cwd, Some(PathBuf::from("site")));
        assert_eq!(args.project.manifest, Some(PathBuf::from("pkg.json")));
        assert_eq!(args.out, Some(PathBuf::from("webpack.json")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["starter", "inspect", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["starter", "-v", "-q", "derive"]).is_err());
    }
}
