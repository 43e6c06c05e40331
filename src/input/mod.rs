use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{CloudError, Result};

/// Reads the source document as a sequence of lines, under any line-ending
/// convention. An empty file is a valid empty sequence; end of input is a
/// signal, not an error.
pub fn load_document(path: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| CloudError::Read {
        path: path.to_string(),
        source,
    })?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| CloudError::Read {
            path: path.to_string(),
            source,
        })?;
        lines.push(line);
    }
    Ok(lines)
}
