//! Tests for the selection store's commit/discard reconciliation
//!
//! Covers the editor lifecycle end to end over library exports: opening,
//! staging, committing, discarding, the summary projection, and the
//! subset switch.

use matchtui::{MatchRow, MatchSet, MatchTuiError, OptionSet, SelectionStore, NOT_SELECTED};

fn abc() -> OptionSet {
    OptionSet::new(["Target A", "Target B", "Target C"]).unwrap()
}

/// "Match Set 1" with three unselected rows over Target A/B/C
fn store() -> SelectionStore {
    let rows = (1..=3)
        .map(|i| MatchRow::new(format!("Source {}", i), abc(), None))
        .collect();
    SelectionStore::new(vec![MatchSet::new("Match Set 1", rows).unwrap()]).unwrap()
}

fn store_with_selections(selections: &[Option<&str>]) -> SelectionStore {
    let rows = selections
        .iter()
        .enumerate()
        .map(|(i, sel)| {
            MatchRow::new(
                format!("Source {}", i + 1),
                abc(),
                sel.map(|s| s.to_string()),
            )
        })
        .collect();
    SelectionStore::new(vec![MatchSet::new("Match Set 1", rows).unwrap()]).unwrap()
}

fn selections(store: &SelectionStore) -> Vec<Option<String>> {
    store
        .list_selections("Match Set 1")
        .unwrap()
        .into_iter()
        .map(|r| r.selected)
        .collect()
}

// =============================================================================
// Editor lifecycle
// =============================================================================

#[test]
fn open_then_discard_leaves_every_row_unchanged() {
    let mut store = store_with_selections(&[Some("Target B"), None, Some("Target C")]);
    let before = selections(&store);

    store.open_editor("Match Set 1").unwrap();
    store.discard().unwrap();

    assert_eq!(selections(&store), before);
    assert!(store.active_set().is_none());
}

#[test]
fn discard_drops_staged_edits() {
    let mut store = store();
    store.open_editor("Match Set 1").unwrap();
    store.stage_edit(0, "Target C").unwrap();
    store.stage_edit(2, "Target A").unwrap();
    store.discard().unwrap();

    assert_eq!(selections(&store), vec![None, None, None]);
}

#[test]
fn commit_updates_exactly_the_staged_rows() {
    let mut store = store_with_selections(&[Some("Target A"), None, Some("Target C")]);

    store.open_editor("Match Set 1").unwrap();
    store.stage_edit(0, "Target B").unwrap();
    let updated = store.commit().unwrap();

    // Row 0 changed, rows 1 and 2 untouched
    assert_eq!(
        selections(&store),
        vec![
            Some("Target B".to_string()),
            None,
            Some("Target C".to_string())
        ]
    );
    assert_eq!(updated.name(), "Match Set 1");
    assert_eq!(updated.rows()[0].selected(), Some("Target B"));
    assert!(store.active_set().is_none());
}

#[test]
fn commit_closes_the_editor_and_pending_edits_do_not_survive() {
    let mut store = store();
    store.open_editor("Match Set 1").unwrap();
    store.stage_edit(1, "Target B").unwrap();
    store.commit().unwrap();

    // A fresh editor session starts from the committed state, not from any
    // leftover scratch values.
    store.open_editor("Match Set 1").unwrap();
    assert_eq!(candidate(&store, 0), "Target A");
    store.discard().unwrap();
}

/// Candidate currently shown for a row of the open editor
fn candidate(store: &SelectionStore, row: usize) -> String {
    store.editor_view().unwrap().rows[row].candidate.clone()
}

// =============================================================================
// Validation and error reporting
// =============================================================================

#[test]
fn stage_rejects_candidate_outside_options_and_keeps_pending() {
    let mut store = store();
    store.open_editor("Match Set 1").unwrap();
    store.stage_edit(0, "Target B").unwrap();

    let err = store.stage_edit(0, "Target Z").unwrap_err();
    assert!(matches!(err, MatchTuiError::InvalidSelection(_)));

    // The rejected value did not replace the previously staged one
    assert_eq!(candidate(&store, 0), "Target B");
}

#[test]
fn open_unknown_set_reports_not_found_without_state_change() {
    let mut store = store();
    let err = store.open_editor("Match Set 9").unwrap_err();
    assert!(matches!(err, MatchTuiError::NotFound(_)));
    assert!(!store.editor_open());
}

#[test]
fn edit_operations_while_closed_report_precondition_failed() {
    let mut store = store();
    assert!(matches!(
        store.stage_edit(0, "Target A"),
        Err(MatchTuiError::PreconditionFailed(_))
    ));
    assert!(matches!(
        store.commit(),
        Err(MatchTuiError::PreconditionFailed(_))
    ));
    assert!(matches!(
        store.discard(),
        Err(MatchTuiError::PreconditionFailed(_))
    ));
}

#[test]
fn open_while_open_reports_precondition_failed() {
    let mut store = store();
    store.open_editor("Match Set 1").unwrap();
    assert!(matches!(
        store.open_editor("Match Set 1"),
        Err(MatchTuiError::PreconditionFailed(_))
    ));
    // The original session is still usable
    store.stage_edit(0, "Target A").unwrap();
    store.commit().unwrap();
}

// =============================================================================
// Summary projection
// =============================================================================

#[test]
fn list_selections_is_idempotent() {
    let store = store_with_selections(&[Some("Target B"), None, Some("Target A")]);
    let first = store.list_selections("Match Set 1").unwrap();
    let second = store.list_selections("Match Set 1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn list_selections_reports_fallback_label_for_unselected_rows() {
    let store = store_with_selections(&[Some("Target B"), None]);
    let rows = store.list_selections("Match Set 1").unwrap();
    assert_eq!(rows[0].selected_label(), "Target B");
    assert_eq!(rows[1].selected_label(), NOT_SELECTED);
}

// =============================================================================
// Subset switch
// =============================================================================

#[test]
fn switch_subset_reverses_selected_across_the_subset() {
    let mut store =
        store_with_selections(&[Some("Target A"), Some("Target B"), Some("Target C")]);
    store.switch_subset("Match Set 1", &[0, 2]).unwrap();
    assert_eq!(
        selections(&store),
        vec![
            Some("Target C".to_string()),
            Some("Target B".to_string()),
            Some("Target A".to_string())
        ]
    );
}

#[test]
fn switch_subset_twice_restores_the_original_assignment() {
    let mut store = store_with_selections(&[Some("Target A"), None, Some("Target C")]);
    let before = selections(&store);
    store.switch_subset("Match Set 1", &[0, 1, 2]).unwrap();
    store.switch_subset("Match Set 1", &[0, 1, 2]).unwrap();
    assert_eq!(selections(&store), before);
}

#[test]
fn switch_subset_empty_is_a_no_op() {
    let mut store = store_with_selections(&[Some("Target A"), Some("Target B"), None]);
    let before = selections(&store);
    store.switch_subset("Match Set 1", &[]).unwrap();
    assert_eq!(selections(&store), before);
}

#[test]
fn switch_subset_rejects_out_of_range_index_without_applying() {
    let mut store =
        store_with_selections(&[Some("Target A"), Some("Target B"), Some("Target C")]);
    let before = selections(&store);
    let err = store.switch_subset("Match Set 1", &[0, 7]).unwrap_err();
    assert!(matches!(err, MatchTuiError::NotFound(_)));
    assert_eq!(selections(&store), before);
}

#[test]
fn switch_subset_rejects_value_not_fitting_destination_options() {
    // Two rows with disjoint option lists: swapping would move a value
    // into a row that cannot hold it.
    let rows = vec![
        MatchRow::new(
            "Source 1",
            OptionSet::new(["Target A", "Target B"]).unwrap(),
            Some("Target A".to_string()),
        ),
        MatchRow::new(
            "Source 2",
            OptionSet::new(["Target X", "Target Y"]).unwrap(),
            Some("Target X".to_string()),
        ),
    ];
    let mut store =
        SelectionStore::new(vec![MatchSet::new("Mixed", rows).unwrap()]).unwrap();

    let err = store.switch_subset("Mixed", &[0, 1]).unwrap_err();
    assert!(matches!(err, MatchTuiError::InvalidSelection(_)));
    // Nothing applied
    let rows = store.list_selections("Mixed").unwrap();
    assert_eq!(rows[0].selected.as_deref(), Some("Target A"));
    assert_eq!(rows[1].selected.as_deref(), Some("Target X"));
}

#[test]
fn switch_subset_duplicate_indices_are_collapsed() {
    let mut store =
        store_with_selections(&[Some("Target A"), Some("Target B"), Some("Target C")]);
    store.switch_subset("Match Set 1", &[2, 0, 0, 2]).unwrap();
    assert_eq!(
        selections(&store),
        vec![
            Some("Target C".to_string()),
            Some("Target B".to_string()),
            Some("Target A".to_string())
        ]
    );
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn scenario_stage_and_commit_first_row() {
    let mut store = store();

    store.open_editor("Match Set 1").unwrap();
    store.stage_edit(0, "Target B").unwrap();
    store.commit().unwrap();

    let set = store.set("Match Set 1").unwrap();
    assert_eq!(set.rows()[0].source(), "Source 1");
    assert_eq!(set.rows()[0].selected(), Some("Target B"));

    let rows = store.list_selections("Match Set 1").unwrap();
    assert_eq!(rows[0].source, "Source 1");
    assert_eq!(rows[0].selected_label(), "Target B");
}

#[test]
fn scenario_rejected_stage_then_commit_leaves_row_unselected() {
    let mut store = store();

    store.open_editor("Match Set 1").unwrap();
    assert!(matches!(
        store.stage_edit(0, "Target Z"),
        Err(MatchTuiError::InvalidSelection(_))
    ));
    store.commit().unwrap();

    let set = store.set("Match Set 1").unwrap();
    assert_eq!(set.rows()[0].selected(), None);
    assert_eq!(set.rows()[0].selected_label(), NOT_SELECTED);
}

// =============================================================================
// Invariant
// =============================================================================

#[test]
fn selection_invariant_holds_after_every_operation() {
    let check = |store: &SelectionStore| {
        for set in store.sets() {
            for row in set.rows() {
                if let Some(v) = row.selected() {
                    assert!(row.options().contains(v), "invariant broken for {:?}", v);
                }
            }
        }
    };

    let mut store = store_with_selections(&[Some("Target B"), None, Some("Target A")]);
    check(&store);

    store.open_editor("Match Set 1").unwrap();
    check(&store);
    store.stage_edit(1, "Target C").unwrap();
    check(&store);
    store.commit().unwrap();
    check(&store);
    store.switch_subset("Match Set 1", &[0, 1]).unwrap();
    check(&store);
    store.open_editor("Match Set 1").unwrap();
    store.discard().unwrap();
    check(&store);
}
