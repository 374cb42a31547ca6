use super::*;

const TRACK: &str = "\
NC_1\t0\t1\t5\tgeneA
NC_1\t1\t2\t0\tgeneA
NC_1\t2\t4\t3\tgeneA
";

#[test]
fn test_analyze_genome_indexes_positions() {
    let text = "geneA 0 100\ngeneB 100 200\n\ngeneC 90 110\n";
    let genome = analyze_genome("toy", text.as_bytes()).unwrap();
    assert_eq!(genome.name(), "toy");
    assert_eq!(genome.len(), 3);
    assert_eq!(genome.gene_at(50).unwrap().name, "geneA");
    assert_eq!(genome.gene_at(150).unwrap().name, "geneB");
    assert_eq!(genome.gene_at(95).unwrap().name, "geneC");
}

#[test]
fn test_analyze_genome_parse_error_is_fatal() {
    let text = "geneA 0 100\ngeneB one 200\n";
    let err = analyze_genome("toy", text.as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_empty_annotation_is_insufficient_data() {
    let err = analyze_genome("toy", "# header only\n\n".as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::InsufficientData(_)));
}

#[test]
fn test_track_stats() {
    let profile = ScoringProfile::default_v1();
    let track = ingest_track(TRACK.as_bytes(), &profile).unwrap();
    let stats = track.stats();
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.site_hits, 2);
    assert_eq!(stats.total_site_reads, 8.0);
    assert_eq!(stats.max_position, 4);
    assert_eq!(stats.red_threshold, 5.0);

    let map = stats.as_map();
    assert_eq!(map.len(), 5);
    assert_eq!(map["linesRead"], 3.0);
    assert_eq!(map["siteHits"], 2.0);
    assert_eq!(map["totalSiteReads"], 8.0);
    assert_eq!(map["maxPosition"], 4.0);
    assert_eq!(map["redThreshold"], 5.0);
}

#[test]
fn test_track_position_index() {
    let profile = ScoringProfile::default_v1();
    let text = "c 0 10 1\nc 10 20 2\nc 5 12 9\n";
    let track = ingest_track(text.as_bytes(), &profile).unwrap();
    assert_eq!(track.record_index_at(0), Some(0));
    assert_eq!(track.record_index_at(4), Some(0));
    assert_eq!(track.record_index_at(5), Some(2));
    assert_eq!(track.record_index_at(11), Some(2));
    assert_eq!(track.record_index_at(12), Some(1));
    assert_eq!(track.raw_data()[track.record_index_at(19).unwrap()].reads, 2.0);
    assert_eq!(track.record_index_at(20), None);
    assert_eq!(track.raw_data().len(), 3);
}

#[test]
fn test_ingestion_is_idempotent() {
    let profile = ScoringProfile::default_v1();
    let a = ingest_track(TRACK.as_bytes(), &profile).unwrap();
    let b = ingest_track(TRACK.as_bytes(), &profile).unwrap();
    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.stats().as_map(), b.stats().as_map());
    assert_eq!(a.raw_data(), b.raw_data());
}

#[test]
fn test_empty_track_is_insufficient_data() {
    let profile = ScoringProfile::default_v1();
    for text in ["", "\n\n", "# only a header\n"] {
        let err = ingest_track(text.as_bytes(), &profile).unwrap_err();
        assert!(matches!(err, InputError::InsufficientData(_)), "{text:?}");
    }
}

#[test]
fn test_track_parse_error_is_fatal() {
    let profile = ScoringProfile::default_v1();
    let text = "c 0 1 4\nc 1 2\n";
    let err = ingest_track(text.as_bytes(), &profile).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_analyze_control_names() {
    let profile = ScoringProfile::default_v1();
    let genome = analyze_genome("toy", "geneA 0 100\n".as_bytes()).unwrap();
    let control = analyze_control("ctrl", &genome, TRACK.as_bytes(), &profile).unwrap();
    assert_eq!(control.name, "ctrl");
    assert_eq!(control.genome_name, "toy");
    assert_eq!(control.sequence_measurements.stats().site_hits, 2);
}

#[test]
fn test_shadowed_records() {
    let profile = ScoringProfile::default_v1();
    let disjoint = ingest_track(TRACK.as_bytes(), &profile).unwrap();
    assert_eq!(disjoint.shadowed_records(), 0);

    // the last record takes over the starts of the second and third
    let text = "c 0 10 1\nc 5 6 2\nc 10 20 3\nc 4 12 9\n";
    let track = ingest_track(text.as_bytes(), &profile).unwrap();
    assert_eq!(track.shadowed_records(), 2);
}

#[test]
fn test_label_mismatches_use_position_index() {
    let profile = ScoringProfile::default_v1();
    let genome = analyze_genome("toy", "A 0 100\nB 100 200\n".as_bytes()).unwrap();
    let text = "\
c 10 11 3 A
c 150 151 3 B
c 160 161 3 A
c 250 251 3 B
c 20 21 3
";
    let track = ingest_track(text.as_bytes(), &profile).unwrap();
    assert_eq!(count_label_mismatches(&track, &genome), 2);
}
