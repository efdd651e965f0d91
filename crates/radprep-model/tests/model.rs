//! Serde behavior of the run configuration.

use radprep_model::{ColumnValues, FilterValue, RunConfig};

#[test]
fn full_config_parses() {
    let json = r#"{
        "clinical_id": "patient_id",
        "filter": {
            "include": [
                {"column": "Ds Site", "values": ["Larynx", "Oropharynx"]}
            ],
            "exclude": [
                {"column": "RADCURE-challenge", "values": [0]},
                {"column": "Ds Site", "values": ["Sarcoma", "Unknown"]}
            ]
        },
        "split": {
            "columns": [
                {"column": "RADCURE-challenge", "values": ["training", "test"]}
            ]
        },
        "outcome": {
            "status_column": "Status",
            "status_values": ["Alive", "Dead"],
            "followup_column": "Length FU"
        }
    }"#;

    let config: RunConfig = serde_json::from_str(json).expect("parse config");

    assert_eq!(config.clinical_id.as_deref(), Some("patient_id"));
    assert!(config.feature_id.is_none());

    let filter = config.filter.expect("filter section");
    assert_eq!(
        filter.include,
        vec![ColumnValues::new(
            "Ds Site",
            vec![
                FilterValue::Text("Larynx".to_string()),
                FilterValue::Text("Oropharynx".to_string()),
            ],
        )]
    );
    assert_eq!(filter.exclude.len(), 2);
    assert_eq!(filter.exclude[0].values, vec![FilterValue::Number(0.0)]);

    let split = config.split.expect("split section");
    assert_eq!(split.group_count(), 2);

    let outcome = config.outcome.expect("outcome section");
    assert_eq!(outcome.status_column, "Status");
    assert_eq!(
        outcome.status_values,
        Some(vec!["Alive".to_string(), "Dead".to_string()])
    );
    assert_eq!(outcome.followup_column, "Length FU");
}

#[test]
fn empty_config_defaults_to_none() {
    let config: RunConfig = serde_json::from_str("{}").expect("parse empty config");
    assert_eq!(config, RunConfig::default());
    assert!(config.filter.is_none());
    assert!(config.split.is_none());
    assert!(config.outcome.is_none());
}

#[test]
fn outcome_value_order_is_optional() {
    let json = r#"{
        "outcome": {"status_column": "Status", "followup_column": "Length FU"}
    }"#;
    let config: RunConfig = serde_json::from_str(json).expect("parse config");
    let outcome = config.outcome.expect("outcome section");
    assert!(outcome.status_values.is_none());
}

#[test]
fn config_round_trips() {
    let json = r#"{
        "feature_id": "ID",
        "filter": {"include": [{"column": "cohort", "values": ["train"]}]}
    }"#;
    let config: RunConfig = serde_json::from_str(json).expect("parse config");
    let serialized = serde_json::to_string(&config).expect("serialize config");
    let round: RunConfig = serde_json::from_str(&serialized).expect("reparse config");
    assert_eq!(round, config);
}
