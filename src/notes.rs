//! Footnote index built from `notes.csv`
//!
//! Row 0 is a header and is discarded. Column 0 is the note id, column 1 the
//! note text. Ids are kept exactly as written; ordering is numeric only when
//! listing them.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::csv::{tokenize, Table};

/// Mapping from note id to note text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesMap {
    notes: HashMap<String, String>,
}

impl NotesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a tokenized notes table
    ///
    /// Later rows win on duplicate ids. A row with only an id maps to an
    /// empty note.
    pub fn from_table(table: &Table) -> Self {
        let mut notes = HashMap::new();
        for row in table.body() {
            let Some(id) = row.first() else {
                continue;
            };
            let text = row.get(1).cloned().unwrap_or_default();
            if notes.insert(id.clone(), text).is_some() {
                tracing::debug!(id = %id, "duplicate note id, keeping the later entry");
            }
        }
        Self { notes }
    }

    /// Tokenize `notes.csv` content and build the index
    pub fn parse(text: &str) -> Self {
        Self::from_table(&tokenize(text))
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.notes.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.notes.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.notes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note ids in ascending numeric order ("2" before "10")
    ///
    /// Ids that are not numbers come after all numeric ids, in string order.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.notes.keys().map(String::as_str).collect();
        ids.sort_by(|a, b| compare_ids(a, b));
        ids
    }
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>().ok(), b.parse::<u64>().ok()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
