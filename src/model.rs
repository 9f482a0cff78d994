//! Page model - the complete interactive state of a rendered page
//!
//! Follows the Elm Architecture: state lives here, `update` mutates it in
//! response to `Msg`, and side effects come back as `Cmd`.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use crate::csv::{CellPosition, Table};
use crate::notes::NotesMap;
use crate::render::{render_footnote_list, render_table, FootnoteList, RenderedTable};
use crate::theme::{ThemeController, ThemeStore};

/// How long a footnote list entry stays marked active after a click
pub const NOTE_ACTIVE_DURATION: Duration = Duration::from_secs(2);

/// The complete page model
#[derive(Debug)]
pub struct PageModel<S: ThemeStore> {
    pub table: RenderedTable,
    pub footnotes: FootnoteList,
    /// Cells currently carrying the column highlight
    pub highlighted: BTreeSet<CellPosition>,
    /// Active footnote entries by element id, with the generation of the
    /// click that activated them
    pub active_notes: HashMap<String, u64>,
    pub theme: ThemeController<S>,
    next_generation: u64,
}

impl<S: ThemeStore> PageModel<S> {
    /// Render both tables and take ownership of the theme controller
    pub fn new(data: &Table, notes: &NotesMap, theme: ThemeController<S>) -> Self {
        Self::from_rendered(render_table(data, notes), render_footnote_list(notes), theme)
    }

    pub fn from_rendered(
        table: RenderedTable,
        footnotes: FootnoteList,
        theme: ThemeController<S>,
    ) -> Self {
        Self {
            table,
            footnotes,
            highlighted: BTreeSet::new(),
            active_notes: HashMap::new(),
            theme,
            next_generation: 0,
        }
    }

    pub fn is_highlighted(&self, cell: CellPosition) -> bool {
        self.highlighted.contains(&cell)
    }

    /// Whether the footnote entry with this element id is marked active
    pub fn is_note_active(&self, element_id: &str) -> bool {
        self.active_notes.contains_key(element_id)
    }

    /// Allocate a generation for a new activation
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}
