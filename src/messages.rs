//! Message types for the Elm-style architecture
//!
//! All page state changes flow through these message types.

use crate::csv::CellPosition;
use crate::render::MarkerId;

/// Column hover messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverMsg {
    /// Pointer entered a header or body cell
    Enter(CellPosition),
    /// Pointer left a cell
    Leave(CellPosition),
}

/// Footnote interaction messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FootnoteMsg {
    /// A footnote marker was clicked
    Click(MarkerId),
    /// Delayed clear of an entry's active mark
    ClearActive { element_id: String, generation: u64 },
}

/// Theme messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMsg {
    /// The toggle control was clicked
    Toggle,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Hover(HoverMsg),
    Footnote(FootnoteMsg),
    Theme(ThemeMsg),
}
