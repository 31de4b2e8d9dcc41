mod args;
mod prompt;

use crate::args::Args;
use color_eyre::Result;
use elementary_lib::{write_pbm, Config};
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Read the configuration interactively from stdin.
///
/// Prompts are written to stderr so that stdout stays a clean PBM stream.
fn read_config_interactively() -> Result<Config> {
    let stdin = io::stdin();
    let stderr = io::stderr();

    Ok(prompt::read_config(&mut stdin.lock(), &mut stderr.lock())?)
}

/// Write the image to stdout or to the given file.
fn write_image(config: &Config, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_pbm(&mut writer, config)?;
            writer.flush()
        }
        None => {
            let stdout = io::stdout();
            write_pbm(&mut stdout.lock(), config)
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // With no arguments at all, fall back to interactive prompts.
    let (config, output) = if env::args().nth(1).is_some() {
        let args = Args::parse_and_validate();
        (args.config, args.output)
    } else {
        (read_config_interactively()?, None)
    };

    log::debug!(
        "generating rule {} for {} steps ({}x{} image)",
        config.rule,
        config.steps,
        config.width(),
        config.height()
    );

    write_image(&config, output.as_deref())?;

    Ok(())
}
