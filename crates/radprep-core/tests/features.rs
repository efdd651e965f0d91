//! Tests for feature-block boundary discovery.

use polars::prelude::{Column, DataFrame};
use radprep_core::{PrepError, extract_feature_block, feature_block_start};

#[test]
fn features_start_after_the_last_diagnostics_column() {
    let df = DataFrame::new(vec![
        Column::new("patient_ID".into(), ["P-01"]),
        Column::new("diagnostics_Versions_PyRadiomics".into(), ["v3.0.1"]),
        Column::new("diagnostics_Image-original_Hash".into(), ["3a71b2"]),
        Column::new("original_shape_VoxelVolume".into(), [8.1f64]),
        Column::new("original_firstorder_Mean".into(), [44.2f64]),
    ])
    .expect("df");

    let block = extract_feature_block(&df).expect("block");
    let names: Vec<&str> = block
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();

    assert_eq!(
        names,
        ["original_shape_VoxelVolume", "original_firstorder_Mean"]
    );
}

#[test]
fn features_start_at_the_first_original_column_without_diagnostics() {
    let names = [
        "patient_ID",
        "original_shape_Sphericity",
        "original_glcm_Contrast",
    ];
    assert_eq!(feature_block_start(&names).expect("start"), 1);
}

#[test]
fn block_is_positional_after_the_boundary() {
    let df = DataFrame::new(vec![
        Column::new("meta".into(), ["a"]),
        Column::new("original_shape_Sphericity".into(), [0.8f64]),
        Column::new("wavelet_LLH_firstorder_Mean".into(), [12.0f64]),
    ])
    .expect("df");

    let block = extract_feature_block(&df).expect("block");
    let names: Vec<&str> = block
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();

    assert_eq!(
        names,
        ["original_shape_Sphericity", "wavelet_LLH_firstorder_Mean"]
    );
}

#[test]
fn embedded_prefix_does_not_open_the_block() {
    // contains "original_" but starts with "diagnostics_"
    let names = ["diagnostics_Image-original_Hash"];
    assert_eq!(feature_block_start(&names).expect("start"), 1);
}

#[test]
fn a_trailing_diagnostics_column_yields_an_empty_block() {
    let df = DataFrame::new(vec![Column::new(
        "diagnostics_Mask-original_Size".into(),
        ["(64, 64, 32)"],
    )])
    .expect("df");

    let block = extract_feature_block(&df).expect("block");
    assert_eq!(block.width(), 0);
}

#[test]
fn tables_without_either_prefix_are_rejected() {
    let df = DataFrame::new(vec![
        Column::new("patient_ID".into(), ["P-01"]),
        Column::new("intensity_mean".into(), [3.3f64]),
    ])
    .expect("df");

    let err = extract_feature_block(&df).unwrap_err();
    assert!(matches!(err, PrepError::FeatureBoundaryNotFound));
}
