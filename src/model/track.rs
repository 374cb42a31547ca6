use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::genome::PositionIndex;

/// A run of positions `[start, end)` sharing one read count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRecord {
    pub start: u32,
    pub end: u32,
    pub reads: f64,
    pub gene_name: Option<String>,
}

impl PositionRecord {
    pub fn with_reads(&self, reads: f64) -> Self {
        Self {
            start: self.start,
            end: self.end,
            reads,
            gene_name: self.gene_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStats {
    pub lines_read: u64,
    pub site_hits: u64,
    pub total_site_reads: f64,
    pub max_position: u32,
    pub red_threshold: f64,
}

impl TrackStats {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("linesRead", self.lines_read as f64),
            ("siteHits", self.site_hits as f64),
            ("totalSiteReads", self.total_site_reads),
            ("maxPosition", self.max_position as f64),
            ("redThreshold", self.red_threshold),
        ])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceMeasurements {
    raw_data: Vec<PositionRecord>,
    #[serde(skip)]
    index: PositionIndex<usize>,
    stats: TrackStats,
}

impl SequenceMeasurements {
    pub fn new(raw_data: Vec<PositionRecord>, index: PositionIndex<usize>, stats: TrackStats) -> Self {
        Self {
            raw_data,
            index,
            stats,
        }
    }

    pub fn raw_data(&self) -> &[PositionRecord] {
        &self.raw_data
    }

    pub fn stats(&self) -> &TrackStats {
        &self.stats
    }

    pub fn record_index_at(&self, pos: u32) -> Option<usize> {
        self.index.get(pos).copied()
    }

    /// Records whose start position was claimed by a later overlapping
    /// record in the position index.
    pub fn shadowed_records(&self) -> usize {
        self.raw_data
            .iter()
            .enumerate()
            .filter(|(idx, r)| r.start < r.end && self.record_index_at(r.start) != Some(*idx))
            .count()
    }
}
