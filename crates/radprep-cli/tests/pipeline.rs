//! Integration tests for the CLI pipeline helpers.

use std::fs;
use std::path::Path;

use polars::prelude::{Column, DataFrame};
use tempfile::NamedTempFile;

use radprep_cli::pipeline::{load_cohort, load_run_config, sanitize_group_key, write_cohort_csv};
use radprep_core::CohortFrame;

fn temp_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp file");
    fs::write(file.path(), contents).expect("write temp file");
    file
}

#[test]
fn group_keys_become_file_name_stems() {
    assert_eq!(sanitize_group_key("training"), "training");
    assert_eq!(sanitize_group_key("RADCURE-challenge"), "radcure_challenge");
    assert_eq!(sanitize_group_key(" Stage IV "), "stage_iv");
    assert_eq!(sanitize_group_key("a  b"), "a_b");
    assert_eq!(sanitize_group_key("1"), "1");
    assert_eq!(sanitize_group_key("---"), "group");
    assert_eq!(sanitize_group_key(""), "group");
}

#[test]
fn cohorts_load_with_a_discovered_identifier() {
    let file = temp_file("patient_id,Age\nP-01,61\nP-02,48\n");

    let cohort = load_cohort(file.path(), None, None).expect("load cohort");

    assert_eq!(cohort.id_column(), "patient_id");
    assert_eq!(cohort.record_count(), 2);
    assert_eq!(
        cohort.row_labels().expect("labels"),
        vec!["P-01".to_string(), "P-02".to_string()]
    );
}

#[test]
fn an_explicit_identifier_overrides_discovery() {
    let file = temp_file("Subject,patient_id\nA,P-01\nB,P-02\n");

    let cohort = load_cohort(file.path(), Some("Subject"), None).expect("load cohort");

    assert_eq!(cohort.id_column(), "Subject");
    assert_eq!(
        cohort.row_labels().expect("labels"),
        vec!["A".to_string(), "B".to_string()]
    );
}

#[test]
fn an_unknown_explicit_identifier_is_rejected() {
    let file = temp_file("patient_id,Age\nP-01,61\n");

    let result = load_cohort(file.path(), Some("Missing"), None);

    assert!(result.is_err());
}

#[test]
fn missing_tables_are_reported() {
    let result = load_cohort(Path::new("no/such/table.csv"), None, None);

    assert!(result.is_err());
}

#[test]
fn written_cohorts_load_back_unchanged() {
    let data = DataFrame::new(vec![
        Column::new("patient_id".into(), ["P-01", "P-02", "P-03"]),
        Column::new("Age".into(), [61i64, 48, 75]),
    ])
    .expect("frame");
    let cohort = CohortFrame::new(data, "patient_id").expect("cohort");
    let target = NamedTempFile::new().expect("create temp file");

    write_cohort_csv(&cohort, target.path()).expect("write csv");
    let reloaded = load_cohort(target.path(), Some("patient_id"), None).expect("reload");

    assert_eq!(reloaded.record_count(), 3);
    assert_eq!(reloaded.column_count(), 2);
    assert_eq!(
        reloaded.row_labels().expect("labels"),
        cohort.row_labels().expect("labels")
    );
}

#[test]
fn run_configs_parse_from_json() {
    let file = temp_file(
        r#"{
            "clinical_id": "patient_id",
            "filter": {
                "include": [{"column": "Ds Site", "values": ["Larynx", "Oropharynx"]}],
                "exclude": [{"column": "RADCURE-challenge", "values": [0]}]
            },
            "split": {
                "columns": [{"column": "RADCURE-challenge", "values": ["training", "test"]}]
            }
        }"#,
    );

    let config = load_run_config(file.path()).expect("parse config");

    assert_eq!(config.clinical_id.as_deref(), Some("patient_id"));
    let filter = config.filter.expect("filter section");
    assert_eq!(filter.include.len(), 1);
    assert_eq!(filter.exclude.len(), 1);
    let split = config.split.expect("split section");
    assert_eq!(split.group_count(), 2);
    assert!(config.outcome.is_none());
}

#[test]
fn a_missing_config_file_is_reported() {
    let result = load_run_config(Path::new("no/such/config.json"));

    assert!(result.is_err());
}
