//! Session event dispatch
//!
//! The externally observable contract of the selection store: discrete
//! named input events, applied through a single entry point. The rendering
//! layer (TUI or headless) translates user interaction into these events
//! and asks the store for its current projections; it never mutates rows
//! directly.

use crate::error::Result;
use crate::store::{MatchSet, SelectionStore};
use tracing::debug;

/// A discrete user interaction against the selection store
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SessionEvent {
    /// Open the editor on the named match set
    SelectMatchSet(String),
    /// Stage a candidate target for one row of the open editor
    ChooseOption { row: usize, value: String },
    /// Commit the open editor's staged selections
    ConfirmSave,
    /// Discard the open editor's staged selections
    ConfirmCancel,
    /// Reverse the committed selections across a subset of row indices
    SwitchSubset { set: String, indices: Vec<usize> },
}

/// The state change an event produced, for callers that acknowledge
/// success separately from applying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Editor opened on the named set
    EditorOpened(String),
    /// A candidate was staged
    OptionStaged,
    /// Commit applied; carries the updated match set
    Saved(MatchSet),
    /// Pending edits dropped
    Cancelled,
    /// Subset reversal applied (or empty-subset no-op)
    SubsetSwitched,
}

impl SelectionStore {
    /// Apply one session event.
    ///
    /// Errors are the store's own kinds, unchanged: the caller reports them
    /// and may retry with valid input. No event is fatal.
    pub fn apply_event(&mut self, event: SessionEvent) -> Result<EventOutcome> {
        debug!(event = %event, "applying session event");
        match event {
            SessionEvent::SelectMatchSet(name) => {
                self.open_editor(&name)?;
                Ok(EventOutcome::EditorOpened(name))
            }
            SessionEvent::ChooseOption { row, value } => {
                self.stage_edit(row, &value)?;
                Ok(EventOutcome::OptionStaged)
            }
            SessionEvent::ConfirmSave => Ok(EventOutcome::Saved(self.commit()?)),
            SessionEvent::ConfirmCancel => {
                self.discard()?;
                Ok(EventOutcome::Cancelled)
            }
            SessionEvent::SwitchSubset { set, indices } => {
                self.switch_subset(&set, &indices)?;
                Ok(EventOutcome::SubsetSwitched)
            }
        }
    }
}
