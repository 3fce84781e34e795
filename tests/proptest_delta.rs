//! Property-based tests for the delta engine.

use launchpad_comparer::diff::DeltaEngine;
use launchpad_comparer::model::{ArtifactIdentity, ArtifactRecord, ManifestSnapshot};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_identity() -> impl Strategy<Value = ArtifactIdentity> {
    (
        prop::sample::select(vec!["org.apache.sling", "org.apache.felix", "com.example"]),
        "[a-e]{1,2}",
        prop::option::of(prop::sample::select(vec!["tests", "sources"])),
    )
        .prop_map(|(group, name, classifier)| ArtifactIdentity::new(group, name, classifier, None))
}

fn arb_snapshot() -> impl Strategy<Value = ManifestSnapshot> {
    prop::collection::vec((arb_identity(), "1\\.[0-3]"), 0..25).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(identity, version)| ArtifactRecord::new(identity, version))
            .collect()
    })
}

fn identities(snapshot: &ManifestSnapshot) -> BTreeSet<ArtifactIdentity> {
    snapshot.identities().cloned().collect()
}

proptest! {
    #[test]
    fn delta_partitions_affected_identities(from in arb_snapshot(), to in arb_snapshot()) {
        let delta = DeltaEngine::new().diff(&from, &to);

        let from_ids = identities(&from);
        let to_ids = identities(&to);
        let expected: BTreeSet<_> = from_ids
            .symmetric_difference(&to_ids)
            .cloned()
            .chain(from_ids.intersection(&to_ids).filter(|id| {
                from.get(id).map(|r| &r.version) != to.get(id).map(|r| &r.version)
            }).cloned())
            .collect();

        let added: BTreeSet<_> = delta.added.iter().map(|r| r.identity.clone()).collect();
        let removed: BTreeSet<_> = delta.removed.iter().map(|r| r.identity.clone()).collect();
        let changed: BTreeSet<_> = delta.changed.keys().cloned().collect();

        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&changed));
        prop_assert!(removed.is_disjoint(&changed));

        let all: BTreeSet<_> = added.union(&removed).cloned().chain(changed).collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn delta_records_carry_manifest_versions(from in arb_snapshot(), to in arb_snapshot()) {
        let delta = DeltaEngine::new().diff(&from, &to);

        for record in &delta.added {
            prop_assert_eq!(to.get(&record.identity), Some(record));
        }
        for record in &delta.removed {
            prop_assert_eq!(from.get(&record.identity), Some(record));
        }
        for (identity, change) in &delta.changed {
            prop_assert_ne!(&change.from, &change.to);
            prop_assert_eq!(from.get(identity).map(|r| &r.version), Some(&change.from));
            prop_assert_eq!(to.get(identity).map(|r| &r.version), Some(&change.to));
        }
    }

    #[test]
    fn diff_against_self_is_empty(snapshot in arb_snapshot()) {
        let delta = DeltaEngine::new().diff(&snapshot, &snapshot);
        prop_assert!(!delta.has_changes());
    }

    #[test]
    fn reversed_diff_swaps_sections(from in arb_snapshot(), to in arb_snapshot()) {
        let forward = DeltaEngine::new().diff(&from, &to);
        let backward = DeltaEngine::new().diff(&to, &from);

        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
        prop_assert_eq!(forward.changed.len(), backward.changed.len());
    }
}
