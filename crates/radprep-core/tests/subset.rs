//! Tests for the row subsetter.

use polars::prelude::{Column, DataFrame};
use radprep_core::{PrepError, SubsetCriteria, column_keys, subset_rows};

fn site_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("PatientID".into(), ["P-01", "P-02", "P-03", "P-04", "P-05"]),
        Column::new(
            "Ds Site".into(),
            ["Larynx", "Oropharynx", "Larynx", "Sarcoma", "Unknown"],
        ),
    ])
    .expect("df")
}

#[test]
fn include_keeps_matching_rows_in_order() {
    let df = site_frame();
    let subset = subset_rows(
        &df,
        "Ds Site",
        &SubsetCriteria::include(["Larynx", "Oropharynx"]),
    )
    .expect("subset");

    assert_eq!(
        column_keys(&subset, "PatientID").expect("ids"),
        vec!["P-01", "P-02", "P-03"]
    );
}

#[test]
fn exclude_removes_matching_rows() {
    let df = site_frame();
    let subset = subset_rows(
        &df,
        "Ds Site",
        &SubsetCriteria::exclude(["Sarcoma", "Unknown"]),
    )
    .expect("subset");

    assert_eq!(
        column_keys(&subset, "PatientID").expect("ids"),
        vec!["P-01", "P-02", "P-03"]
    );
}

#[test]
fn include_then_exclude_applies_both() {
    let df = site_frame();
    let criteria = SubsetCriteria::include(["Larynx", "Sarcoma"]).with_exclude(["Sarcoma"]);
    let subset = subset_rows(&df, "Ds Site", &criteria).expect("subset");

    assert_eq!(
        column_keys(&subset, "PatientID").expect("ids"),
        vec!["P-01", "P-03"]
    );
}

#[test]
fn numeric_criteria_match_integer_cells() {
    let df = DataFrame::new(vec![
        Column::new("PatientID".into(), ["P-01", "P-02", "P-03"]),
        Column::new("RADCURE-challenge".into(), [0i64, 1, 0]),
    ])
    .expect("df");

    // criteria written as a float still hit the integer column
    let subset = subset_rows(
        &df,
        "RADCURE-challenge",
        &SubsetCriteria::exclude(["0.0"]),
    )
    .expect("subset");

    assert_eq!(column_keys(&subset, "PatientID").expect("ids"), vec!["P-02"]);
}

#[test]
fn padded_cells_match_trimmed_criteria() {
    let df = DataFrame::new(vec![
        Column::new("PatientID".into(), ["P-01", "P-02"]),
        Column::new("Ds Site".into(), [" Larynx ", "Oropharynx"]),
    ])
    .expect("df");

    let subset = subset_rows(&df, "Ds Site", &SubsetCriteria::include(["Larynx"])).expect("subset");

    assert_eq!(column_keys(&subset, "PatientID").expect("ids"), vec!["P-01"]);
}

#[test]
fn no_matches_yield_an_empty_frame() {
    let df = site_frame();
    let subset = subset_rows(
        &df,
        "Ds Site",
        &SubsetCriteria::include(["Nasopharynx"]),
    )
    .expect("subset");

    assert_eq!(subset.height(), 0);
    assert_eq!(subset.width(), df.width());
}

#[test]
fn missing_criteria_are_rejected() {
    let df = site_frame();
    let err = subset_rows(
        &df,
        "Ds Site",
        &SubsetCriteria::from_filter_values(None, None),
    )
    .unwrap_err();

    assert!(matches!(err, PrepError::MissingCriteria));
}

#[test]
fn unknown_columns_are_rejected() {
    let df = site_frame();
    let err = subset_rows(&df, "Stage", &SubsetCriteria::include(["I"])).unwrap_err();

    assert!(matches!(err, PrepError::ColumnNotFound(column) if column == "Stage"));
}
