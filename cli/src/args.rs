use clap::{error::ErrorKind, CommandFactory, Parser};
use elementary_lib::Config;
use std::path::PathBuf;

/// Generate an elementary cellular automaton as a plain PBM image.
///
/// The image starts from a single living cell and applies the given Wolfram
/// rule for the given number of time steps.
///
/// When the program is run without any arguments, the rule number and the
/// number of time steps are read interactively from standard input instead.
#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Write the image to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        if let Err(e) = args.config.check() {
            Self::command().error(ErrorKind::ValueValidation, e).exit();
        }

        args
    }
}
