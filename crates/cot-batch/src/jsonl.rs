//! Newline-delimited JSON record I/O.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use cot_core::{Record, Result};

/// Load a JSONL file into records, preserving line order.
///
/// Fails on a missing file or on any line that is not a JSON object;
/// errors propagate, nothing is recovered.
pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .map(|line| Ok(serde_json::from_str::<Record>(line.trim())?))
        .collect()
}

/// Write records as JSONL in sequence order, one object per line.
/// Creates the parent directory if it does not exist.
pub fn save_jsonl(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
