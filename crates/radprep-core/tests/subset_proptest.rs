//! Property-based tests for the row subsetter.

use polars::prelude::{Column, DataFrame};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;
use radprep_core::{SubsetCriteria, column_keys, subset_rows};

const SITES: [&str; 6] = ["larynx", "oropharynx", "nasopharynx", "sarcoma", "orbit", "other"];

fn arb_site_column() -> impl Strategy<Value = Vec<String>> {
    prop_vec(prop::sample::select(&SITES[..]).prop_map(str::to_string), 0..40)
}

/// Value sets drawn from the first half of the pool.
fn arb_wanted() -> impl Strategy<Value = Vec<String>> {
    prop_vec(prop::sample::select(&SITES[..3]).prop_map(str::to_string), 1..4)
}

/// Value sets drawn from the second half, disjoint from `arb_wanted`.
fn arb_banned() -> impl Strategy<Value = Vec<String>> {
    prop_vec(prop::sample::select(&SITES[3..]).prop_map(str::to_string), 1..4)
}

fn site_frame(values: &[String]) -> DataFrame {
    let ids: Vec<i64> = (0..values.len() as i64).collect();
    DataFrame::new(vec![
        Column::new("patient_id".into(), ids),
        Column::new("site".into(), values.to_vec()),
    ])
    .expect("df")
}

proptest! {
    #[test]
    fn including_every_present_value_is_identity(values in arb_site_column()) {
        let df = site_frame(&values);
        let present = column_keys(&df, "site").expect("keys");

        let kept = subset_rows(&df, "site", &SubsetCriteria::include(present.iter()))
            .expect("subset");

        prop_assert!(kept.equals(&df));
    }

    #[test]
    fn subsetting_is_idempotent(values in arb_site_column(), wanted in arb_wanted()) {
        let df = site_frame(&values);
        let criteria = SubsetCriteria::include(wanted.iter());

        let once = subset_rows(&df, "site", &criteria).expect("first pass");
        let twice = subset_rows(&once, "site", &criteria).expect("second pass");

        prop_assert!(once.equals(&twice));
    }

    #[test]
    fn disjoint_include_and_exclude_commute(
        values in arb_site_column(),
        wanted in arb_wanted(),
        banned in arb_banned(),
    ) {
        let df = site_frame(&values);
        let include = SubsetCriteria::include(wanted.iter());
        let exclude = SubsetCriteria::exclude(banned.iter());

        let include_first = subset_rows(
            &subset_rows(&df, "site", &include).expect("include"),
            "site",
            &exclude,
        )
        .expect("exclude");
        let exclude_first = subset_rows(
            &subset_rows(&df, "site", &exclude).expect("exclude"),
            "site",
            &include,
        )
        .expect("include");

        prop_assert!(include_first.equals(&exclude_first));
    }

    #[test]
    fn combined_criteria_match_sequential_application(
        values in arb_site_column(),
        wanted in arb_wanted(),
        banned in arb_banned(),
    ) {
        let df = site_frame(&values);

        let combined = subset_rows(
            &df,
            "site",
            &SubsetCriteria::include(wanted.iter()).with_exclude(banned.iter()),
        )
        .expect("combined");
        let sequential = subset_rows(
            &subset_rows(&df, "site", &SubsetCriteria::include(wanted.iter())).expect("include"),
            "site",
            &SubsetCriteria::exclude(banned.iter()),
        )
        .expect("exclude");

        prop_assert!(combined.equals(&sequential));
    }

    #[test]
    fn retained_rows_satisfy_the_criteria(values in arb_site_column(), wanted in arb_wanted()) {
        let df = site_frame(&values);
        let kept = subset_rows(&df, "site", &SubsetCriteria::include(wanted.iter()))
            .expect("subset");

        prop_assert!(kept.height() <= df.height());
        for key in column_keys(&kept, "site").expect("keys") {
            prop_assert!(wanted.contains(&key));
        }
    }

    #[test]
    fn exclusion_never_keeps_a_banned_row(values in arb_site_column(), banned in arb_banned()) {
        let df = site_frame(&values);
        let kept = subset_rows(&df, "site", &SubsetCriteria::exclude(banned.iter()))
            .expect("subset");

        for key in column_keys(&kept, "site").expect("keys") {
            prop_assert!(!banned.contains(&key));
        }
    }
}
