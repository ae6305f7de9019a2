#![warn(missing_docs)]
//! Parser and integer normalizer for a small subset of SVG path data
//! (`M`, `C`, `L`, `V`, `H` and `Z`)

pub mod convert_helper;
pub mod error;
pub mod format;
mod log;
pub mod parser;
mod text_format;

pub use error::PathError;
pub use format::{CommandKind, Path, Segment};
pub use parser::{parse, DEFAULT_PATH};
