//! Cohort alignment: intersecting, filtering and splitting paired tables.
//!
//! Clinical variables and computed features arrive as two independently
//! produced tables. The entry points here bring them into the same index
//! space: [`filter_and_align`] restricts both to the shared patient
//! population after applying the configured criteria, and
//! [`split_by_groups`] partitions both into named subgroups driven by
//! clinical column values.

use std::collections::BTreeMap;

use radprep_model::{FilterSpec, SplitSpec};
use tracing::{debug, info};

use crate::error::Result;
use crate::frame::CohortFrame;
use crate::subset::{SubsetCriteria, filter_value_key};

/// Restricts both tables to the same patient population.
///
/// Steps, in order: keep only clinical records whose label appears in the
/// feature table, fold the include criteria, fold the exclude criteria,
/// then restrict the feature table to the surviving labels. Criteria are
/// applied one `(column, values)` pair at a time, each narrowing the
/// previous result. An empty [`FilterSpec`] reduces this to the
/// intersection alone.
///
/// Both returned frames carry the same label set; each keeps its own
/// input's row order.
pub fn filter_and_align(
    clinical: &CohortFrame,
    features: &CohortFrame,
    filter: &FilterSpec,
) -> Result<(CohortFrame, CohortFrame)> {
    let with_features = features.label_set()?;
    let mut filtered = clinical.restrict_to_labels(&with_features)?;
    debug!(
        total = clinical.record_count(),
        with_features = filtered.record_count(),
        "Clinical records restricted to those with features"
    );

    for criterion in &filter.include {
        let criteria = SubsetCriteria::from_filter_values(Some(&criterion.values), None);
        filtered = filtered.subset(&criterion.column, &criteria)?;
        debug!(
            column = %criterion.column,
            remaining = filtered.record_count(),
            "Include criterion applied"
        );
    }

    for criterion in &filter.exclude {
        let criteria = SubsetCriteria::from_filter_values(None, Some(&criterion.values));
        filtered = filtered.subset(&criterion.column, &criteria)?;
        debug!(
            column = %criterion.column,
            remaining = filtered.record_count(),
            "Exclude criterion applied"
        );
    }

    let aligned_features = features.restrict_to_labels(&filtered.label_set()?)?;
    info!(
        records = filtered.record_count(),
        "Clinical and feature tables aligned"
    );
    Ok((filtered, aligned_features))
}

/// Splits both tables into named subgroups by clinical column values.
///
/// For every `(column, values)` pair in the split specification and every
/// value in its list, the clinical frame is include-subset on that value
/// and the feature frame is subset to the resulting labels. Both maps are
/// keyed by the value's canonical key; a value reused across columns
/// overwrites the earlier group. Groups may overlap.
pub fn split_by_groups(
    clinical: &CohortFrame,
    features: &CohortFrame,
    split: &SplitSpec,
) -> Result<(BTreeMap<String, CohortFrame>, BTreeMap<String, CohortFrame>)> {
    let mut clinical_groups = BTreeMap::new();
    let mut feature_groups = BTreeMap::new();

    for group in &split.columns {
        debug!(column = %group.column, values = group.values.len(), "Splitting on column");
        for value in &group.values {
            let key = filter_value_key(value);
            let group_clinical =
                clinical.subset(&group.column, &SubsetCriteria::include([key.as_str()]))?;
            let group_features = features.restrict_to_labels(&group_clinical.label_set()?)?;
            info!(
                group = %key,
                records = group_clinical.record_count(),
                "Split group ready"
            );
            clinical_groups.insert(key.clone(), group_clinical);
            feature_groups.insert(key, group_features);
        }
    }

    Ok((clinical_groups, feature_groups))
}
