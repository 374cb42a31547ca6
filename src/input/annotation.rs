use crate::input::{InputError, parse_field};
use crate::model::genome::Gene;

/// Parses one `name start end` annotation line.
pub fn parse_gene_line(line: &str, line_no: usize) -> Result<Gene, InputError> {
    let mut cols = line.split_whitespace();
    let name: String = parse_field(cols.next(), "gene name", line_no)?;
    let start: u32 = parse_field(cols.next(), "gene start", line_no)?;
    let end: u32 = parse_field(cols.next(), "gene end", line_no)?;
    if end <= start {
        return Err(InputError::InvalidInput(format!(
            "gene {name} at line {line_no} has end {end} <= start {start}"
        )));
    }
    Ok(Gene { name, start, end })
}
