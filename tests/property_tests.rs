//! Property-based tests for the selection store
//!
//! Uses proptest to verify:
//! - the selection invariant survives arbitrary operation sequences
//! - subset switching is an involution
//! - open followed by discard is the identity, whatever was staged

use proptest::prelude::*;

use matchtui::{MatchRow, MatchSet, OptionSet, SelectionStore};

const TARGETS: [&str; 3] = ["Target A", "Target B", "Target C"];

fn abc() -> OptionSet {
    OptionSet::new(TARGETS).unwrap()
}

/// Store with one set whose rows carry the given selections (indices into
/// `TARGETS`, `None` for unselected)
fn build_store(selections: &[Option<usize>]) -> SelectionStore {
    let rows = selections
        .iter()
        .enumerate()
        .map(|(i, sel)| {
            MatchRow::new(
                format!("Source {}", i + 1),
                abc(),
                sel.map(|ix| TARGETS[ix].to_string()),
            )
        })
        .collect();
    SelectionStore::new(vec![MatchSet::new("Set", rows).unwrap()]).unwrap()
}

fn committed(store: &SelectionStore) -> Vec<Option<String>> {
    store
        .list_selections("Set")
        .unwrap()
        .into_iter()
        .map(|r| r.selected)
        .collect()
}

fn invariant_holds(store: &SelectionStore) -> bool {
    store.sets().iter().all(|set| {
        set.rows()
            .iter()
            .all(|row| row.selected().map_or(true, |v| row.options().contains(v)))
    })
}

/// Strategy: row selections plus a subset of those rows
fn rows_and_subset() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<usize>)> {
    (2usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::of(0usize..TARGETS.len()), n),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(selections, mask)| {
                let subset = mask
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &keep)| keep.then_some(i))
                    .collect();
                (selections, subset)
            })
    })
}

/// One abstract store operation, possibly invalid for the current state
#[derive(Debug, Clone)]
enum Op {
    Open,
    Stage(usize, usize),
    Commit,
    Discard,
    Switch(Vec<usize>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Open),
        (0usize..10, 0usize..TARGETS.len()).prop_map(|(r, t)| Op::Stage(r, t)),
        Just(Op::Commit),
        Just(Op::Discard),
        prop::collection::vec(0usize..10, 0..5).prop_map(Op::Switch),
    ]
}

proptest! {
    /// Applying the same subset twice restores every selection
    #[test]
    fn subset_switch_is_an_involution((selections, subset) in rows_and_subset()) {
        let mut store = build_store(&selections);
        let before = committed(&store);

        store.switch_subset("Set", &subset).unwrap();
        store.switch_subset("Set", &subset).unwrap();

        prop_assert_eq!(committed(&store), before);
    }

    /// A single subset switch permutes the selections; nothing is lost or
    /// invented
    #[test]
    fn subset_switch_preserves_the_multiset((selections, subset) in rows_and_subset()) {
        let mut store = build_store(&selections);
        let mut before = committed(&store);

        store.switch_subset("Set", &subset).unwrap();

        let mut after = committed(&store);
        before.sort();
        after.sort();
        prop_assert_eq!(after, before);
    }

    /// Open followed by discard is the identity, regardless of what was
    /// staged in between
    #[test]
    fn open_stage_discard_is_identity(
        selections in prop::collection::vec(prop::option::of(0usize..TARGETS.len()), 1..9),
        edits in prop::collection::vec((0usize..9, 0usize..TARGETS.len()), 0..6),
    ) {
        let mut store = build_store(&selections);
        let before = committed(&store);

        store.open_editor("Set").unwrap();
        for (row, target) in edits {
            // Out-of-range rows are rejected; either way no committed state
            // may change before the discard.
            let _ = store.stage_edit(row, TARGETS[target]);
        }
        store.discard().unwrap();

        prop_assert_eq!(committed(&store), before);
    }

    /// The selection invariant holds after any operation sequence, valid
    /// or not
    #[test]
    fn invariant_survives_arbitrary_operation_sequences(
        selections in prop::collection::vec(prop::option::of(0usize..TARGETS.len()), 1..9),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut store = build_store(&selections);
        prop_assert!(invariant_holds(&store));

        for op in ops {
            // Errors are expected along the way; the property is that the
            // store never ends up holding an out-of-set selection.
            let _ = match op {
                Op::Open => store.open_editor("Set").map(|_| ()),
                Op::Stage(row, target) => store.stage_edit(row, TARGETS[target]),
                Op::Commit => store.commit().map(|_| ()),
                Op::Discard => store.discard(),
                Op::Switch(indices) => store.switch_subset("Set", &indices),
            };
            prop_assert!(invariant_holds(&store));
        }
    }
}
