//! Comparison table rendering
//!
//! ```text
//! Table + NotesMap ──render_table──────────▶ RenderedTable (+ bindings)
//!         NotesMap ──render_footnote_list──▶ FootnoteList
//!                                  both ──render_page──▶ HTML
//! ```

mod footnotes;
pub mod html;
mod palette;
mod table;

pub use footnotes::{
    note_element_id, render_footnote_list, rewrite_footnotes, FootnoteEntry, FootnoteList,
    FootnoteMarker, Inline, SHORTHAND_NOTE_ID,
};
pub use html::{render_page, PageContent};
pub use palette::Palette;
pub use table::{
    render_table, BodyCell, HoverBinding, MarkerBinding, MarkerId, RenderedTable, StyledCell,
};
