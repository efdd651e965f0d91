use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use radprep_core::{
    CohortFrame, PrepError, encode_outcomes, filter_and_align, identifier_candidates,
    resolve_identifier, split_by_groups,
};
use radprep_ingest::{LoadOptions, load_table, profile_columns};
use radprep_model::RunConfig;

use crate::cli::{InspectArgs, PrepareArgs, SplitArgs};
use crate::pipeline::{load_cohort, load_run_config, sanitize_group_key, write_cohort_csv};
use crate::types::{GroupSummary, InspectResult, PrepareResult, SplitResult, TableSummary};

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareResult> {
    let span = info_span!("prepare");
    let _guard = span.enter();
    let start = Instant::now();

    let config = resolved_config(args.config.as_deref())?;
    let clinical_id = args
        .clinical_id
        .as_deref()
        .or(config.clinical_id.as_deref());
    let feature_id = args.feature_id.as_deref().or(config.feature_id.as_deref());

    let clinical = load_cohort(&args.clinical, clinical_id, args.clinical_header_row)?;
    let features = load_cohort(&args.features, feature_id, args.feature_header_row)?;
    let clinical_in = clinical.record_count();
    let features_in = features.record_count();

    let filter = config.filter.clone().unwrap_or_default();
    let (clinical, features) = filter_and_align(&clinical, &features, &filter)?;
    let features = if args.features_only {
        features.feature_block()?
    } else {
        features
    };

    let outcomes = match &config.outcome {
        Some(spec) => Some(encode_outcomes(&clinical, spec)?),
        None => None,
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.clinical));
    let mut written = Vec::new();
    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        let path = output_dir.join("clinical_filtered.csv");
        write_cohort_csv(&clinical, &path)?;
        written.push(path);
        let path = output_dir.join("features_filtered.csv");
        write_cohort_csv(&features, &path)?;
        written.push(path);
        if let Some(outcomes) = &outcomes {
            let path = output_dir.join("outcomes.csv");
            write_cohort_csv(outcomes, &path)?;
            written.push(path);
        }
    }
    info!(
        records = clinical.record_count(),
        outputs = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "prepare complete"
    );

    Ok(PrepareResult {
        output_dir,
        clinical: TableSummary {
            identifier: clinical.id_column().to_string(),
            records_in: clinical_in,
            records_out: clinical.record_count(),
            columns_out: clinical.column_count(),
        },
        features: TableSummary {
            identifier: features.id_column().to_string(),
            records_in: features_in,
            records_out: features.record_count(),
            columns_out: features.column_count(),
        },
        outcome_records: outcomes.as_ref().map(CohortFrame::record_count),
        written,
        dry_run: args.dry_run,
    })
}

pub fn run_split(args: &SplitArgs) -> Result<SplitResult> {
    let span = info_span!("split");
    let _guard = span.enter();
    let start = Instant::now();

    let config = load_run_config(&args.config)?;
    let Some(split) = config.split.clone() else {
        bail!("config {} has no split section", args.config.display());
    };
    if split.is_empty() {
        bail!("config {} defines no split groups", args.config.display());
    }

    let clinical_id = args
        .clinical_id
        .as_deref()
        .or(config.clinical_id.as_deref());
    let feature_id = args.feature_id.as_deref().or(config.feature_id.as_deref());
    let clinical = load_cohort(&args.clinical, clinical_id, args.clinical_header_row)?;
    let features = load_cohort(&args.features, feature_id, args.feature_header_row)?;

    // Groups are cut from the aligned pair; a filter section applies first.
    let filter = config.filter.clone().unwrap_or_default();
    let (clinical, features) = filter_and_align(&clinical, &features, &filter)?;
    let (clinical_groups, feature_groups) = split_by_groups(&clinical, &features, &split)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.clinical));
    let mut written = Vec::new();
    let mut groups = Vec::new();
    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
    }
    for (key, group_clinical) in &clinical_groups {
        let group_features = feature_groups
            .get(key)
            .with_context(|| format!("missing feature group {key}"))?;
        if !args.dry_run {
            let stem = sanitize_group_key(key);
            let path = output_dir.join(format!("clinical_{stem}.csv"));
            write_cohort_csv(group_clinical, &path)?;
            written.push(path);
            let path = output_dir.join(format!("features_{stem}.csv"));
            write_cohort_csv(group_features, &path)?;
            written.push(path);
        }
        groups.push(GroupSummary {
            key: key.clone(),
            clinical_records: group_clinical.record_count(),
            feature_records: group_features.record_count(),
        });
    }
    info!(
        groups = groups.len(),
        outputs = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "split complete"
    );

    Ok(SplitResult {
        output_dir,
        groups,
        written,
        dry_run: args.dry_run,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let mut options = LoadOptions::default();
    if let Some(row) = args.header_row {
        options = options.with_header_row(row);
    }
    let data = load_table(&args.table, &options)
        .with_context(|| format!("load {}", args.table.display()))?;

    let candidates = identifier_candidates(&data);
    let identifier = match args.id.as_deref() {
        Some(name) => {
            if data.column(name).is_err() {
                bail!("column {name} not found in {}", args.table.display());
            }
            Some(name.to_string())
        }
        None => match resolve_identifier(&data) {
            Ok(name) => Some(name),
            Err(PrepError::IdentifierNotFound) => {
                warn!(path = %args.table.display(), "no identifier-like column found");
                None
            }
            Err(error) => return Err(error.into()),
        },
    };

    let profiles = profile_columns(&data)?;
    Ok(InspectResult {
        path: args.table.clone(),
        records: data.height(),
        identifier,
        candidates,
        profiles,
    })
}

fn resolved_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => load_run_config(path),
        None => Ok(RunConfig::default()),
    }
}

fn default_output_dir(clinical: &Path) -> PathBuf {
    clinical
        .parent()
        .map_or_else(|| PathBuf::from("output"), |dir| dir.join("output"))
}
