use serde::{Deserialize, Serialize};

use crate::criteria::{FilterSpec, SplitSpec};
use crate::outcome::OutcomeSpec;

/// Run configuration, normally parsed from a JSON file passed to the CLI.
///
/// Every section is optional: a missing filter means "align only", a missing
/// identifier means "use the discovery heuristic". CLI flags override the
/// identifier fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Explicit patient-identifier column in the clinical table.
    #[serde(default)]
    pub clinical_id: Option<String>,
    /// Explicit patient-identifier column in the feature table.
    #[serde(default)]
    pub feature_id: Option<String>,
    /// Inclusion/exclusion criteria applied to the clinical table.
    #[serde(default)]
    pub filter: Option<FilterSpec>,
    /// Grouped-split specification (e.g. train/test by a cohort column).
    #[serde(default)]
    pub split: Option<SplitSpec>,
    /// Outcome-label encoding specification.
    #[serde(default)]
    pub outcome: Option<OutcomeSpec>,
}
