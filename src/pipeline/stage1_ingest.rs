use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::input::annotation::parse_gene_line;
use crate::input::track::parse_track_line;
use crate::input::{InputError, for_each_data_line};
use crate::model::genome::{Genome, PositionIndex};
use crate::model::profile::ScoringProfile;
use crate::model::results::Control;
use crate::model::track::{PositionRecord, SequenceMeasurements, TrackStats};
use crate::stats::percentile::value_at_percentile;

pub fn analyze_genome<R: BufRead>(name: &str, reader: R) -> Result<Genome, InputError> {
    let mut builder = Genome::builder(name);
    for_each_data_line(reader, |line_no, line| {
        builder.push(parse_gene_line(line, line_no)?);
        Ok(())
    })?;
    let genome = builder.build();
    if genome.is_empty() {
        return Err(InputError::InsufficientData(format!(
            "annotation for genome {name} contains no genes"
        )));
    }
    info!(
        genome = genome.name(),
        genes = genome.len(),
        positions = genome.indexed_positions(),
        "indexed genome annotation"
    );
    Ok(genome)
}

/// Parses a read track, indexes every covered position to its record and
/// computes the summary statistics. An input without records is
/// [`InputError::InsufficientData`].
pub fn ingest_track<R: BufRead>(
    reader: R,
    profile: &ScoringProfile,
) -> Result<SequenceMeasurements, InputError> {
    let mut raw_data: Vec<PositionRecord> = Vec::new();
    let mut index = PositionIndex::default();
    let mut site_hits = 0u64;
    let mut total_site_reads = 0.0f64;

    let lines_read = for_each_data_line(reader, |line_no, line| {
        let record = parse_track_line(line, line_no)?;
        index.assign(record.start, record.end, raw_data.len());
        if record.reads > 0.0 {
            site_hits += 1;
            total_site_reads += record.reads;
        }
        raw_data.push(record);
        Ok(())
    })?;

    let Some(last) = raw_data.last() else {
        return Err(InputError::InsufficientData(
            "read track contains no records".to_string(),
        ));
    };
    let max_position = last.end;
    let red_threshold = value_at_percentile(profile.outlier_percentile, &raw_data, |r| r.reads)
        .ok_or_else(|| InputError::InsufficientData("no reads to rank".to_string()))?;

    let stats = TrackStats {
        lines_read,
        site_hits,
        total_site_reads,
        max_position,
        red_threshold,
    };
    let track = SequenceMeasurements::new(raw_data, index, stats);
    let shadowed = track.shadowed_records();
    if shadowed > 0 {
        warn!(shadowed, "overlapping track records; later records own the shared positions");
    }
    debug!(?stats, records = track.raw_data().len(), "ingested read track");
    Ok(track)
}

/// Records naming a gene that the genome's position index does not place at
/// the record start.
pub fn count_label_mismatches(track: &SequenceMeasurements, genome: &Genome) -> usize {
    track
        .raw_data()
        .iter()
        .filter(|r| match r.gene_name.as_deref() {
            Some(name) => genome.gene_at(r.start).map(|g| g.name.as_str()) != Some(name),
            None => false,
        })
        .count()
}

pub(crate) fn check_gene_labels(track_name: &str, track: &SequenceMeasurements, genome: &Genome) {
    let mismatches = count_label_mismatches(track, genome);
    if mismatches > 0 {
        warn!(
            track = track_name,
            genome = genome.name(),
            mismatches,
            "records name a gene that does not cover their start position"
        );
    }
}

pub fn analyze_control<R: BufRead>(
    name: &str,
    genome: &Genome,
    reader: R,
    profile: &ScoringProfile,
) -> Result<Control, InputError> {
    let sequence_measurements = ingest_track(reader, profile)?;
    check_gene_labels(name, &sequence_measurements, genome);
    let stats = sequence_measurements.stats();
    info!(
        control = name,
        site_hits = stats.site_hits,
        total_site_reads = stats.total_site_reads,
        "analyzed control track"
    );
    Ok(Control {
        name: name.to_string(),
        genome_name: genome.name().to_string(),
        sequence_measurements,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_ingest.rs"]
mod tests;
