use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("matrix file contains no rows")]
    Empty,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_matrix(path: &Path) -> Result<Vec<Vec<u32>>, InputError> {
    let reader = open_maybe_gz(path)?;
    let rows = parse_matrix(reader)?;
    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        "loaded preference matrix"
    );
    Ok(rows)
}

/// Reads one matrix row per line. Cells may be separated by tabs, commas or
/// spaces; `#` starts a comment and blank lines are skipped. Squareness is
/// left to the model.
pub fn parse_matrix<R: BufRead>(mut reader: R) -> Result<Vec<Vec<u32>>, InputError> {
    let mut rows = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = match buf.find('#') {
            Some(idx) => &buf[..idx],
            None => buf.as_str(),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (idx, cell) in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .enumerate()
        {
            let value = cell.parse::<u32>().map_err(|_| InputError::Parse {
                line: line_no,
                column: idx + 1,
                message: format!("expected a non-negative integer, got {cell:?}"),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
