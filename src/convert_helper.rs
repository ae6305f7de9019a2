//! Helper function that runs the whole pipeline on a path string and writes
//! the result to a file or stdout

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use eyre::{Context, Result};

use crate::parser::parse;

/// Convert path data to its rounded text form. If the output path is not
/// specified, the text goes to stdout. Nothing is written if the path data
/// is invalid.
///
/// ```
/// # use pathround::convert_helper::convert;
/// convert("M1 2C3 4 5 6 7 8Z", None).unwrap();
/// ```
pub fn convert(input: &str, out_path: Option<PathBuf>) -> Result<()> {
    let path = parse(input)
        .wrap_err("failed to convert path data")?
        .rounded();

    match out_path {
        Some(out_path) => {
            let mut file = BufWriter::new(
                File::create(&out_path)
                    .wrap_err_with(|| format!("failed to create output file {}", out_path.display()))?,
            );
            path.write_text(&mut file)?;
            writeln!(file)?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            path.write_text(&mut out)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
