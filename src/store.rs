//! Selection store
//!
//! This module is the authoritative source of truth for match sets and for
//! the editor session over them. It enforces valid editor transitions and
//! guards the data-model invariant: a row's selection is always drawn from
//! that row's option set.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: the `SelectionStore` owns all match sets
//! - **Validated Transitions**: editor operations are only legal in the
//!   matching editor state
//! - **No Global State**: the store is owned by the host application and
//!   passed to each operation
//! - **Fail Fast**: invalid input returns an error immediately, with no
//!   partial state change
//!
//! # Editor Flow
//!
//! ```text
//! Closed
//!     |  open_editor(set)
//!     v
//! Open
//!     |  commit() or discard()
//!     v
//! Closed
//! ```

use crate::error::{MatchTuiError, Result};
use tracing::debug;

/// Label reported for rows with no committed selection
pub const NOT_SELECTED: &str = "Not Selected";

/// An ordered, duplicate-free set of candidate target values.
///
/// Construction rejects empty lists, blank entries, and duplicates, so a
/// row's option set is always non-empty and membership tests are
/// unambiguous. Order is preserved for display; the first entry doubles as
/// the default editor candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    /// Build an option set, validating the candidate list
    pub fn new<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(MatchTuiError::config("option set must not be empty"));
        }
        for (i, value) in values.iter().enumerate() {
            if value.trim().is_empty() {
                return Err(MatchTuiError::config("option values must not be blank"));
            }
            if values[..i].contains(value) {
                return Err(MatchTuiError::config(format!(
                    "duplicate option value '{}'",
                    value
                )));
            }
        }
        Ok(Self(values))
    }

    /// Membership test
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// The default option (construction guarantees at least one entry)
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Position of a value within the set, if present
    pub fn position(&self, value: &str) -> Option<usize> {
        self.0.iter().position(|v| v == value)
    }

    /// Option at the given position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collection types
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// One source item with its candidate targets and current selection.
///
/// Invariant: `selected` is either `None` or a member of `options`. The
/// constructor normalizes any out-of-set value to `None` rather than
/// retaining an invalid selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    source: String,
    options: OptionSet,
    selected: Option<String>,
}

impl MatchRow {
    /// Create a row, treating a selection outside `options` as unselected
    pub fn new(source: impl Into<String>, options: OptionSet, selected: Option<String>) -> Self {
        let source = source.into();
        let selected = selected.filter(|v| options.contains(v));
        Self {
            source,
            options,
            selected,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The committed selection, or the display fallback
    pub fn selected_label(&self) -> &str {
        self.selected.as_deref().unwrap_or(NOT_SELECTED)
    }
}

/// Named group of rows sharing one editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    name: String,
    rows: Vec<MatchRow>,
}

impl MatchSet {
    /// Create a match set, rejecting blank names and duplicate sources
    pub fn new(name: impl Into<String>, rows: Vec<MatchRow>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchTuiError::config("match set name must not be blank"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.source.trim().is_empty() {
                return Err(MatchTuiError::config(format!(
                    "match set '{}': row sources must not be blank",
                    name
                )));
            }
            if rows[..i].iter().any(|r| r.source == row.source) {
                return Err(MatchTuiError::config(format!(
                    "match set '{}': duplicate source '{}'",
                    name, row.source
                )));
            }
        }
        Ok(Self { name, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of the per-set summary view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub source: String,
    pub selected: Option<String>,
}

impl SelectionRow {
    /// The selection, or `"Not Selected"` when none is committed
    pub fn selected_label(&self) -> &str {
        self.selected.as_deref().unwrap_or(NOT_SELECTED)
    }
}

/// One row of the editor view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRowView {
    pub source: String,
    pub options: Vec<String>,
    /// The candidate shown in the editor: the pending value if one exists,
    /// otherwise the row's first option
    pub candidate: String,
    /// Whether the pending value differs from the committed selection
    pub staged: bool,
}

/// Projection of the open editor: every row's source, options, and current
/// candidate selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub set_name: String,
    pub rows: Vec<EditorRowView>,
}

/// The transient edit session over exactly one match set.
///
/// `pending` holds one entry per row: `Some` once the row has a concrete
/// candidate (seeded from a valid committed selection, or staged by the
/// user), `None` for rows still unselected. Commit applies the entries
/// verbatim, so rows never staged keep their committed state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EditorState {
    Closed,
    Open {
        set_name: String,
        pending: Vec<Option<String>>,
    },
}

/// Owns all match sets and mediates edits with commit/discard semantics.
///
/// One store per user session; all operations are synchronous and either
/// fully apply or leave the store untouched.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    sets: Vec<MatchSet>,
    editor: EditorState,
}

impl SelectionStore {
    /// Create a store over the given match sets, rejecting duplicate names
    pub fn new(sets: Vec<MatchSet>) -> Result<Self> {
        for (i, set) in sets.iter().enumerate() {
            if sets[..i].iter().any(|s| s.name == set.name) {
                return Err(MatchTuiError::config(format!(
                    "duplicate match set name '{}'",
                    set.name
                )));
            }
        }
        Ok(Self {
            sets,
            editor: EditorState::Closed,
        })
    }

    pub fn sets(&self) -> &[MatchSet] {
        &self.sets
    }

    /// Look up a match set by name
    pub fn set(&self, name: &str) -> Option<&MatchSet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Names of all match sets, in display order
    pub fn set_names(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }

    /// The match set currently open for editing, if any
    pub fn active_set(&self) -> Option<&str> {
        match &self.editor {
            EditorState::Closed => None,
            EditorState::Open { set_name, .. } => Some(set_name),
        }
    }

    /// Whether an editor session is open
    pub fn editor_open(&self) -> bool {
        matches!(self.editor, EditorState::Open { .. })
    }

    fn set_index(&self, name: &str) -> Result<usize> {
        self.sets
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| MatchTuiError::not_found(format!("match set '{}'", name)))
    }

    /// Open the editor on a match set.
    ///
    /// Seeds the pending edits from the current selections; a selection no
    /// longer present in its row's options seeds as unselected. Fails with
    /// `PreconditionFailed` if an editor is already open and `NotFound` for
    /// an unknown set name, without touching any state.
    pub fn open_editor(&mut self, name: &str) -> Result<()> {
        if self.editor_open() {
            return Err(MatchTuiError::precondition(
                "an editor is already open; save or cancel it first",
            ));
        }
        let idx = self.set_index(name)?;
        let pending = self.sets[idx]
            .rows
            .iter()
            .map(|row| row.selected.clone().filter(|v| row.options.contains(v)))
            .collect();
        debug!(set = name, "editor opened");
        self.editor = EditorState::Open {
            set_name: name.to_string(),
            pending,
        };
        Ok(())
    }

    /// Stage a candidate selection for one row of the open editor.
    ///
    /// The candidate must be a member of that row's options; this check is
    /// the sole integrity guard for the selection invariant and failure
    /// leaves the pending value unchanged.
    pub fn stage_edit(&mut self, row: usize, candidate: &str) -> Result<()> {
        let set_name = match &self.editor {
            EditorState::Closed => {
                return Err(MatchTuiError::precondition(
                    "cannot stage an edit while no editor is open",
                ))
            }
            EditorState::Open { set_name, .. } => set_name.clone(),
        };
        // The pending list mirrors the set's row count and the set cannot
        // change while its editor is open, so the range check goes through
        // the rows directly.
        let idx = self.set_index(&set_name)?;
        if row >= self.sets[idx].rows.len() {
            return Err(MatchTuiError::not_found(format!(
                "row {} in match set '{}'",
                row, set_name
            )));
        }
        let match_row = &self.sets[idx].rows[row];
        if !match_row.options.contains(candidate) {
            return Err(MatchTuiError::invalid_selection(format!(
                "'{}' is not an option for '{}'",
                candidate, match_row.source
            )));
        }
        debug!(set = %set_name, row, candidate, "edit staged");
        if let EditorState::Open { pending, .. } = &mut self.editor {
            pending[row] = Some(candidate.to_string());
        }
        Ok(())
    }

    /// Commit the open editor's pending edits.
    ///
    /// Applies every pending entry to its row in one pass; entries that
    /// were never staged carry the row's prior valid selection (or none),
    /// so untouched rows are observably unchanged. Closes the editor and
    /// returns the updated match set.
    pub fn commit(&mut self) -> Result<MatchSet> {
        let (set_name, pending) = match std::mem::replace(&mut self.editor, EditorState::Closed) {
            EditorState::Closed => {
                return Err(MatchTuiError::precondition(
                    "cannot commit while no editor is open",
                ))
            }
            EditorState::Open { set_name, pending } => (set_name, pending),
        };
        let idx = self.set_index(&set_name)?;
        let set = &mut self.sets[idx];
        // Every pending entry was validated at open or stage time, so the
        // whole update applies without a fallible step in between.
        for (row, entry) in set.rows.iter_mut().zip(pending) {
            row.selected = entry;
        }
        debug!(set = %set_name, "editor committed");
        Ok(set.clone())
    }

    /// Discard the open editor's pending edits without touching any row
    pub fn discard(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.editor, EditorState::Closed) {
            EditorState::Closed => Err(MatchTuiError::precondition(
                "cannot discard while no editor is open",
            )),
            EditorState::Open { set_name, .. } => {
                debug!(set = %set_name, "editor discarded");
                Ok(())
            }
        }
    }

    /// Summary projection for one match set: every row's source and its
    /// committed selection (or the `"Not Selected"` fallback). Pure; no
    /// side effects.
    pub fn list_selections(&self, name: &str) -> Result<Vec<SelectionRow>> {
        let idx = self.set_index(name)?;
        Ok(self.sets[idx]
            .rows
            .iter()
            .map(|row| SelectionRow {
                source: row.source.clone(),
                selected: row.selected.clone(),
            })
            .collect())
    }

    /// Editor projection: every row's source, options, and current
    /// candidate. Requires an open editor.
    pub fn editor_view(&self) -> Result<EditorView> {
        let (set_name, pending) = match &self.editor {
            EditorState::Closed => {
                return Err(MatchTuiError::precondition(
                    "no editor is open",
                ))
            }
            EditorState::Open { set_name, pending } => (set_name, pending),
        };
        let idx = self.set_index(set_name)?;
        let rows = self.sets[idx]
            .rows
            .iter()
            .zip(pending)
            .map(|(row, entry)| EditorRowView {
                source: row.source.clone(),
                options: row.options.as_slice().to_vec(),
                candidate: entry
                    .clone()
                    .unwrap_or_else(|| row.options.first().to_string()),
                staged: entry.as_deref() != row.selected(),
            })
            .collect();
        Ok(EditorView {
            set_name: set_name.clone(),
            rows,
        })
    }

    /// Reverse the committed selections across a subset of row indices.
    ///
    /// Indices are deduplicated and sorted; given the sorted subset
    /// `[i1..ik]`, the new selection at `i_j` is the old selection at
    /// `i_{k-j+1}`, so applying the same subset twice is the identity.
    /// An empty subset is a no-op. Fails without applying anything when an
    /// index is out of range, when the subset's set is mid-edit, or when a
    /// reversed value is not an option of its destination row.
    pub fn switch_subset(&mut self, name: &str, indices: &[usize]) -> Result<()> {
        let idx = self.set_index(name)?;
        if indices.is_empty() {
            return Ok(());
        }
        if self.active_set() == Some(name) {
            return Err(MatchTuiError::precondition(format!(
                "match set '{}' is open for editing",
                name
            )));
        }

        let mut subset: Vec<usize> = indices.to_vec();
        subset.sort_unstable();
        subset.dedup();

        let set = &mut self.sets[idx];
        if let Some(&bad) = subset.iter().find(|&&i| i >= set.rows.len()) {
            return Err(MatchTuiError::not_found(format!(
                "row {} in match set '{}'",
                bad, name
            )));
        }

        // Validate the whole swap before touching anything: a reversed
        // value must fit its destination row's options.
        let old: Vec<Option<String>> = subset
            .iter()
            .map(|&i| set.rows[i].selected.clone())
            .collect();
        for (j, &dest) in subset.iter().enumerate() {
            let incoming = &old[subset.len() - 1 - j];
            if let Some(value) = incoming {
                if !set.rows[dest].options.contains(value) {
                    return Err(MatchTuiError::invalid_selection(format!(
                        "'{}' is not an option for '{}'",
                        value, set.rows[dest].source
                    )));
                }
            }
        }
        for (j, &dest) in subset.iter().enumerate() {
            set.rows[dest].selected = old[subset.len() - 1 - j].clone();
        }
        debug!(set = name, rows = subset.len(), "subset switched");
        Ok(())
    }
}
