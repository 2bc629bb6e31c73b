//! Property tests for the split planner.

use std::collections::HashSet;

use proptest::prelude::*;

use yoloprep::plan::{plan_category, SplitFractions};

fn arb_file_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}\\.jpg", 0..max)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn partition_is_exact_for_all_sizes_and_seeds(
        files in arb_file_names(64),
        seed in any::<u64>(),
    ) {
        let plan = plan_category(files.clone(), SplitFractions::default(), seed);

        prop_assert_eq!(plan.total(), files.len());

        let mut seen = HashSet::new();
        for file in plan.train.iter().chain(&plan.val).chain(&plan.test) {
            prop_assert!(seen.insert(file.clone()), "duplicate file {}", file);
        }
        let expected: HashSet<String> = files.into_iter().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn subset_sizes_follow_floor_fractions(
        files in arb_file_names(64),
        seed in any::<u64>(),
    ) {
        let n = files.len();
        let plan = plan_category(files, SplitFractions::default(), seed);

        prop_assert_eq!(plan.train.len(), (0.7 * n as f64).floor() as usize);
        prop_assert_eq!(plan.val.len(), (0.2 * n as f64).floor() as usize);
        prop_assert_eq!(plan.test.len(), n - plan.train.len() - plan.val.len());
    }

    #[test]
    fn planning_is_deterministic_per_seed(
        files in arb_file_names(64),
        seed in any::<u64>(),
    ) {
        let a = plan_category(files.clone(), SplitFractions::default(), seed);
        let b = plan_category(files, SplitFractions::default(), seed);
        prop_assert_eq!(a, b);
    }
}
