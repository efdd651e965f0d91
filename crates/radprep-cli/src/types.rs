use std::collections::BTreeMap;
use std::path::PathBuf;

use radprep_model::ColumnProfile;

#[derive(Debug)]
pub struct PrepareResult {
    pub output_dir: PathBuf,
    pub clinical: TableSummary,
    pub features: TableSummary,
    pub outcome_records: Option<usize>,
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Before/after record counts for one table in a prepare run.
#[derive(Debug)]
pub struct TableSummary {
    pub identifier: String,
    pub records_in: usize,
    pub records_out: usize,
    pub columns_out: usize,
}

#[derive(Debug)]
pub struct SplitResult {
    pub output_dir: PathBuf,
    pub groups: Vec<GroupSummary>,
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct GroupSummary {
    pub key: String,
    pub clinical_records: usize,
    pub feature_records: usize,
}

#[derive(Debug)]
pub struct InspectResult {
    pub path: PathBuf,
    pub records: usize,
    pub identifier: Option<String>,
    pub candidates: Vec<String>,
    pub profiles: BTreeMap<String, ColumnProfile>,
}
