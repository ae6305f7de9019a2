use std::path::PathBuf;

use eyre::{Context, Result};
use structopt::StructOpt;

/// Round the coordinates of SVG path data and print them as nested lists
#[derive(StructOpt)]
struct Options {
    /// Read the path data from a file
    #[structopt(short, long, conflicts_with = "PATH_DATA")]
    file: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Path data such as `M1 2C3 4 5 6 7 8Z`
    #[structopt(name = "PATH_DATA")]
    path_data: Option<String>,
}

impl Options {
    /// The path data to convert: from `--file`, the positional argument, or
    /// the built-in default
    fn input(&self) -> Result<String> {
        match (&self.file, &self.path_data) {
            (Some(file), _) => Ok(std::fs::read_to_string(file)
                .wrap_err_with(|| format!("failed to read {}", file.display()))?
                .trim()
                .to_owned()),
            (None, Some(path_data)) => Ok(path_data.clone()),
            (None, None) => Ok(pathround::DEFAULT_PATH.to_owned()),
        }
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Options::from_args();
    let input = opts.input()?;

    pathround::convert_helper::convert(&input, opts.output)?;

    Ok(())
}
