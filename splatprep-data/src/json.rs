//! JSON file reading and pretty-printed writing.
//!
//! Output uses four-space indentation with no trailing newline. Key order
//! and number text are kept exactly as read. Strings are written as UTF-8,
//! so non-ASCII characters appear as-is rather than as `\uXXXX` escapes.

use crate::error::{PrepError, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Parse a JSON document from a file.
pub fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).map_err(|e| PrepError::json(path, e))?;
    debug!("Parsed JSON from {}", path.display());
    Ok(value)
}

/// Serialize `value` into `writer` with four-space indentation.
pub fn pretty_serialize<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)
}

/// Write `value` to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| PrepError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    pretty_serialize(&mut writer, value).map_err(|e| PrepError::json(path, e))?;
    writer.flush().map_err(|e| PrepError::io(path, e))?;
    debug!("Wrote JSON to {}", path.display());
    Ok(())
}
