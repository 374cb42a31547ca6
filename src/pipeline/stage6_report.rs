use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::profile::ScoringProfile;
use crate::model::results::{Control, Experiment};
use crate::pipeline::stage2_normalize::{NormalizedSide, choose_normalizee};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    SIGNIFICANCE_LEVEL, SummaryData, ToolMeta, TrackSummary, format_f64_6, median, p90,
};

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub control: &'a Control,
    pub experiment: &'a Experiment,
    pub n_genes: usize,
    pub profile: &'a ScoringProfile,
    pub seed: Option<u64>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_gene_tsv(input.experiment, &out_dir.join("gene_features.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;
    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    Ok(())
}

fn write_gene_tsv(experiment: &Experiment, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "gene",
        "condition",
        "num_ta_sites",
        "num_experiment_sites",
        "gene_length",
        "num_control_reads",
        "num_experiment_reads",
        "modified_ratio",
        "p_adj",
        "essentiality_index",
        "fitness_rank",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (gene, f) in &experiment.gene_features {
        let row = [
            gene.clone(),
            f.condition.clone(),
            f.num_ta_sites.to_string(),
            f.num_experiment_sites.to_string(),
            f.gene_length.to_string(),
            format_f64_6(f.num_control_reads),
            format_f64_6(f.num_experiment_reads),
            format_f64_6(f.modified_ratio),
            format!("{:.6e}", f.p),
            format_f64_6(f.essentiality_index),
            format_f64_6(f.fitness),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let features = &input.experiment.gene_features;
    let ratios: Vec<f64> = features.values().map(|f| f.modified_ratio).collect();
    let essentiality: Vec<f64> = features.values().map(|f| f.essentiality_index).collect();
    let genes_significant = features
        .values()
        .filter(|f| f.was_tested() && f.p < SIGNIFICANCE_LEVEL)
        .count();
    let genes_untested = features.values().filter(|f| !f.was_tested()).count();
    let genes_without_sites = features.values().filter(|f| f.num_ta_sites == 0).count();

    let control_stats = input.control.sequence_measurements.stats();
    let experiment_stats = input.experiment.sequence_measurements.stats();
    let normalized_side = match choose_normalizee(control_stats, experiment_stats) {
        NormalizedSide::Control => "control",
        NormalizedSide::Experiment => "experiment",
    };

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        genome: input.experiment.genome_name.clone(),
        condition: input.experiment.name.clone(),
        control: TrackSummary {
            name: input.control.name.clone(),
            stats: control_stats.as_map(),
        },
        experiment: TrackSummary {
            name: input.experiment.name.clone(),
            stats: experiment_stats.as_map(),
        },
        normalized_side: normalized_side.to_string(),
        seed: input.seed,
        profile: input.profile.clone(),
        n_genes: input.n_genes,
        genes_significant,
        genes_untested,
        genes_without_sites,
        modified_ratio_median: median(&ratios),
        modified_ratio_p90: p90(&ratios),
        essentiality_index_median: median(&essentiality),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
