//! Match-set file handling for saving and loading set definitions.
//!
//! Files are plain JSON and are only a way to seed a session; edits made
//! in the TUI live in memory for the session and are never written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::store::{MatchRow, MatchSet, OptionSet, SelectionStore};

/// One row of a match set as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRowConfig {
    pub source: String,
    pub options: Vec<String>,
    /// Committed selection; an empty string means unselected
    #[serde(default)]
    pub selected: String,
}

/// One named match set as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetConfig {
    pub name: String,
    pub rows: Vec<MatchRowConfig>,
}

/// A match-set file: the full collection of sets for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetFile {
    pub sets: Vec<MatchSetConfig>,
}

impl MatchSetFile {
    /// The built-in sample data: two sets of ten sources each, nothing
    /// selected yet
    pub fn sample() -> Self {
        let set = |name: &str, range: std::ops::RangeInclusive<u32>, options: [&str; 3]| {
            MatchSetConfig {
                name: name.to_string(),
                rows: range
                    .map(|i| MatchRowConfig {
                        source: format!("Source {}", i),
                        options: options.iter().map(|s| s.to_string()).collect(),
                        selected: String::new(),
                    })
                    .collect(),
            }
        };
        Self {
            sets: vec![
                set("Match Set 1", 1..=10, ["Target A", "Target B", "Target C"]),
                set("Match Set 2", 11..=20, ["Target D", "Target E", "Target F"]),
            ],
        }
    }

    /// Save the match sets to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("failed to serialize match sets to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("failed to write match sets to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load match sets from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read match sets from {:?}", path.as_ref()))?;

        let file: Self =
            serde_json::from_str(&content).context("failed to parse match-set JSON")?;

        Ok(file)
    }

    /// Validate the structural rules of the file.
    ///
    /// A `selected` value outside its row's options is deliberately not an
    /// error here: the store treats it as unselected when the session
    /// starts.
    pub fn validate(&self) -> Result<()> {
        if self.sets.is_empty() {
            anyhow::bail!("file contains no match sets");
        }
        for (i, set) in self.sets.iter().enumerate() {
            let name = set.name.trim();
            if name.is_empty() {
                anyhow::bail!("match set {} has a blank name", i + 1);
            }
            if self.sets[..i].iter().any(|s| s.name == set.name) {
                anyhow::bail!("duplicate match set name '{}'", set.name);
            }
            if set.rows.is_empty() {
                anyhow::bail!("match set '{}' has no rows", set.name);
            }
            for (j, row) in set.rows.iter().enumerate() {
                if row.source.trim().is_empty() {
                    anyhow::bail!("match set '{}': row {} has a blank source", set.name, j + 1);
                }
                if set.rows[..j].iter().any(|r| r.source == row.source) {
                    anyhow::bail!(
                        "match set '{}': duplicate source '{}'",
                        set.name,
                        row.source
                    );
                }
                if row.options.is_empty() {
                    anyhow::bail!(
                        "match set '{}', source '{}': option list is empty",
                        set.name,
                        row.source
                    );
                }
                for (k, option) in row.options.iter().enumerate() {
                    if option.trim().is_empty() {
                        anyhow::bail!(
                            "match set '{}', source '{}': blank option value",
                            set.name,
                            row.source
                        );
                    }
                    if row.options[..k].contains(option) {
                        anyhow::bail!(
                            "match set '{}', source '{}': duplicate option '{}'",
                            set.name,
                            row.source,
                            option
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Build a selection store from this file.
    ///
    /// Runs `validate` first; out-of-set `selected` values become
    /// unselected rows.
    pub fn into_store(self) -> Result<SelectionStore> {
        self.validate()?;
        let mut sets = Vec::with_capacity(self.sets.len());
        for set in self.sets {
            let mut rows = Vec::with_capacity(set.rows.len());
            for row in set.rows {
                let options = OptionSet::new(row.options)
                    .with_context(|| format!("source '{}'", row.source))?;
                let selected = if row.selected.is_empty() {
                    None
                } else {
                    Some(row.selected)
                };
                rows.push(MatchRow::new(row.source, options, selected));
            }
            sets.push(
                MatchSet::new(&set.name, rows)
                    .with_context(|| format!("match set '{}'", set.name))?,
            );
        }
        SelectionStore::new(sets).context("failed to build selection store")
    }
}
