use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod annotation;
pub mod track;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

impl InputError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        InputError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Opens a plain or gzip-compressed text file as a line source.
pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Feeds every non-blank, non-comment line to `f` together with its
/// 1-based line number. Returns the number of lines handed to `f`.
pub fn for_each_data_line<R, F>(mut reader: R, mut f: F) -> Result<u64, InputError>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<(), InputError>,
{
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut consumed = 0u64;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        f(line_no, line)?;
        consumed += 1;
    }
    Ok(consumed)
}

pub(crate) fn parse_field<T: FromStr>(
    field: Option<&str>,
    what: &str,
    line_no: usize,
) -> Result<T, InputError> {
    let raw = field.ok_or_else(|| InputError::parse(line_no, format!("missing {what} column")))?;
    raw.parse::<T>()
        .map_err(|_| InputError::parse(line_no, format!("invalid {what}: {raw:?}")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
