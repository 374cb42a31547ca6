use crate::report::{SIGNIFICANCE_LEVEL, SummaryData, TrackSummary, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("TnSeq Fitness Report\n");
    out.push_str("====================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Genome: {} ({} genes)\n", data.genome, data.n_genes));
    out.push_str(&format!("Condition: {}\n", data.condition));
    push_track(&mut out, "Control", &data.control);
    push_track(&mut out, "Experiment", &data.experiment);
    out.push('\n');

    out.push_str("2. Depth normalization\n");
    out.push_str(&format!(
        "Resampled side: {} ({} rounds)\n",
        data.normalized_side, data.profile.resampling_rounds
    ));
    match data.seed {
        Some(seed) => out.push_str(&format!("Seed: {}\n\n", seed)),
        None => out.push_str("Seed: none (results are not reproducible)\n\n"),
    }

    out.push_str("3. Gene fitness\n");
    out.push_str(&format!(
        "Genes with adjusted p < {}: {}\n",
        SIGNIFICANCE_LEVEL, data.genes_significant
    ));
    out.push_str(&format!(
        "Genes not tested (no sites on one side): {}\n",
        data.genes_untested
    ));
    out.push_str(&format!(
        "Genes without insertion sites: {}\n",
        data.genes_without_sites
    ));
    out.push_str(&format!(
        "Modified ratio median: {}\nModified ratio p90: {}\n",
        format_f64_6(data.modified_ratio_median),
        format_f64_6(data.modified_ratio_p90)
    ));
    out.push_str(&format!(
        "Essentiality index median: {}\n",
        format_f64_6(data.essentiality_index_median)
    ));

    out
}

fn push_track(out: &mut String, label: &str, track: &TrackSummary) {
    let stat = |key: &str| track.stats.get(key).copied().unwrap_or(0.0);
    out.push_str(&format!(
        "{}: {} (site hits {}, total site reads {}, red threshold {})\n",
        label,
        track.name,
        stat("siteHits"),
        stat("totalSiteReads"),
        stat("redThreshold")
    ));
}
