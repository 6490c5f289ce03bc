//! Property tests for retention planning.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rollout::domain::services::plan_removals;

fn installed_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(0u32..200, 1..20).prop_map(|versions| {
        versions
            .into_iter()
            .map(|v| format!("myapp-{:04}.war", v))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The current artifact is never planned for removal.
    #[test]
    fn property_current_is_never_removed(
        installed in installed_names(),
        pick in any::<prop::sample::Index>(),
        retain in 0usize..10,
    ) {
        let current = pick.get(&installed).clone();
        let removed = plan_removals(&installed, &current, retain);
        prop_assert!(!removed.contains(&current));
    }

    /// PROPERTY: Exactly `max(retain, 1) - 1` non-current artifacts survive
    /// when there are enough of them, and nothing is removed otherwise.
    #[test]
    fn property_survivor_count(
        installed in installed_names(),
        pick in any::<prop::sample::Index>(),
        retain in 1usize..10,
    ) {
        let current = pick.get(&installed).clone();
        let others = installed.len() - 1;
        let removed = plan_removals(&installed, &current, retain);

        prop_assert_eq!(removed.len(), others.saturating_sub(retain - 1));
    }

    /// PROPERTY: Every survivor other than current is newer than every removed file.
    #[test]
    fn property_removes_oldest_first(
        installed in installed_names(),
        pick in any::<prop::sample::Index>(),
        retain in 1usize..10,
    ) {
        let current = pick.get(&installed).clone();
        let removed: BTreeSet<String> =
            plan_removals(&installed, &current, retain).into_iter().collect();
        let kept: Vec<&String> = installed
            .iter()
            .filter(|n| **n != current && !removed.contains(*n))
            .collect();

        if let (Some(newest_removed), Some(oldest_kept)) = (removed.iter().next_back(), kept.iter().min()) {
            prop_assert!(newest_removed < *oldest_kept);
        }
    }

    /// PROPERTY: Removals only ever name installed files.
    #[test]
    fn property_removals_are_installed(
        installed in installed_names(),
        current in "myapp-[0-9]{4}\\.war",
        retain in 0usize..10,
    ) {
        for name in plan_removals(&installed, &current, retain) {
            prop_assert!(installed.contains(&name));
        }
    }
}
