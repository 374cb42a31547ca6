use crate::input::{InputError, parse_field};
use crate::model::track::PositionRecord;

/// Parses one read-track line: `<ignored> start end reads [gene]`.
pub fn parse_track_line(line: &str, line_no: usize) -> Result<PositionRecord, InputError> {
    let mut cols = line.split_whitespace();
    if cols.next().is_none() {
        return Err(InputError::parse(line_no, "empty track line"));
    }
    let start: u32 = parse_field(cols.next(), "start", line_no)?;
    let end: u32 = parse_field(cols.next(), "end", line_no)?;
    let reads: f64 = parse_field(cols.next(), "reads", line_no)?;
    if !reads.is_finite() || reads < 0.0 {
        return Err(InputError::parse(
            line_no,
            format!("read count must be a non-negative number, got {reads}"),
        ));
    }
    let gene_name = cols.next().map(str::to_string);
    Ok(PositionRecord {
        start,
        end,
        reads,
        gene_name,
    })
}
