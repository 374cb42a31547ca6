use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::features::GeneFeatureMeasurements;
use crate::model::track::SequenceMeasurements;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "control", rename_all = "camelCase")]
pub struct Control {
    pub name: String,
    pub genome_name: String,
    pub sequence_measurements: SequenceMeasurements,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "experiment", rename_all = "camelCase")]
pub struct Experiment {
    pub name: String,
    pub genome_name: String,
    pub control_name: String,
    pub sequence_measurements: SequenceMeasurements,
    pub gene_features: BTreeMap<String, GeneFeatureMeasurements>,
}
