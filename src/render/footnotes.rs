//! Footnote markers and the footnote list

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::notes::NotesMap;

/// Note id that the `**` shorthand always refers to
pub const SHORTHAND_NOTE_ID: &str = "3";

const SHORTHAND: &str = "**";

/// `[d]` with a single ASCII digit
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9])\]").expect("footnote reference pattern is valid"));

/// Inline superscript bound to a single-digit note id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnoteMarker {
    pub id: String,
    /// Note text when the id resolves; unresolved markers are plain digits
    pub tooltip: Option<String>,
}

impl FootnoteMarker {
    /// Whether the marker points at an existing note (and is clickable)
    pub fn is_resolved(&self) -> bool {
        self.tooltip.is_some()
    }
}

/// A run of cell content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Marker(FootnoteMarker),
}

/// Rewrite footnote references in cell text
///
/// `**` is expanded to `[3]` first, so the shorthand always goes through
/// note 3. Each `[d]` then becomes a marker; the rest stays text.
pub fn rewrite_footnotes(text: &str, notes: &NotesMap) -> Vec<Inline> {
    let expanded = text.replace(SHORTHAND, &format!("[{}]", SHORTHAND_NOTE_ID));

    let mut out = Vec::new();
    let mut last = 0;
    for caps in REFERENCE.captures_iter(&expanded) {
        let (Some(whole), Some(digit)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Inline::Text(expanded[last..whole.start()].to_string()));
        }
        let id = digit.as_str();
        out.push(Inline::Marker(FootnoteMarker {
            id: id.to_string(),
            tooltip: notes.get(id).map(str::to_string),
        }));
        last = whole.end();
    }
    if last < expanded.len() {
        out.push(Inline::Text(expanded[last..].to_string()));
    }
    out
}

/// Element id of the list entry for a note
pub fn note_element_id(id: &str) -> String {
    format!("note-{}", id)
}

/// One entry of the rendered footnote list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnoteEntry {
    pub id: String,
    pub element_id: String,
    pub text: String,
}

/// Footnote list in ascending numeric id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FootnoteList {
    pub entries: Vec<FootnoteEntry>,
}

impl FootnoteList {
    /// Look up an entry by its element id (`note-3`)
    pub fn find(&self, element_id: &str) -> Option<&FootnoteEntry> {
        self.entries.iter().find(|e| e.element_id == element_id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render the footnote list from the notes index
pub fn render_footnote_list(notes: &NotesMap) -> FootnoteList {
    let entries = notes
        .sorted_ids()
        .into_iter()
        .map(|id| FootnoteEntry {
            id: id.to_string(),
            element_id: note_element_id(id),
            text: notes.get(id).unwrap_or_default().to_string(),
        })
        .collect();
    FootnoteList { entries }
}
