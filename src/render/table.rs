//! Table rendering
//!
//! Produces the header/body structure for the comparison table along with
//! the bindings a presentation layer needs to wire hover and click handling.
//! Nothing here touches a DOM; see `render::html` for the page output and
//! `update` for the interaction state machine.

use serde::Serialize;

use super::footnotes::{rewrite_footnotes, Inline};
use crate::csv::{CellPosition, Table};
use crate::notes::NotesMap;

const STYLE_SEPARATOR: char = '|';

/// Cell text split into display text and a class name (`text|class`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub text: String,
    pub class: String,
}

impl StyledCell {
    /// Split a raw cell on the style separator
    ///
    /// Without a separator the class is empty. With several, the class is
    /// the segment between the first and second separator.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(STYLE_SEPARATOR);
        let text = parts.next().unwrap_or_default().to_string();
        let class = parts.next().unwrap_or_default().to_string();
        Self { text, class }
    }
}

/// A rendered body cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyCell {
    pub class: String,
    pub content: Vec<Inline>,
}

impl BodyCell {
    /// Footnote markers in this cell, in order
    pub fn markers(&self) -> impl Iterator<Item = &super::FootnoteMarker> {
        self.content.iter().filter_map(|inline| match inline {
            Inline::Marker(m) => Some(m),
            Inline::Text(_) => None,
        })
    }
}

/// Identifies a footnote marker: its cell plus its index among the cell's
/// markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MarkerId {
    pub cell: CellPosition,
    pub index: usize,
}

/// Cell → column group for hover highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoverBinding {
    pub cell: CellPosition,
    pub column: usize,
}

/// Clickable marker → note id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerBinding {
    pub marker: MarkerId,
    pub note_id: String,
}

/// Header and body of the comparison table plus interaction bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub header: Vec<String>,
    pub body: Vec<Vec<BodyCell>>,
    pub hover_bindings: Vec<HoverBinding>,
    pub marker_bindings: Vec<MarkerBinding>,
}

impl RenderedTable {
    /// Number of rows including the header row
    pub fn row_count(&self) -> usize {
        1 + self.body.len()
    }

    /// Number of cells in a row (row 0 is the header)
    pub fn row_len(&self, row: usize) -> usize {
        match row {
            0 => self.header.len(),
            n => self.body.get(n - 1).map_or(0, Vec::len),
        }
    }

    pub fn contains(&self, cell: CellPosition) -> bool {
        cell.col < self.row_len(cell.row)
    }

    /// Every cell at `col`, skipping rows too short to have one
    pub fn column_cells(&self, col: usize) -> Vec<CellPosition> {
        (0..self.row_count())
            .map(|row| CellPosition::new(row, col))
            .filter(|cell| self.contains(*cell))
            .collect()
    }

    /// Note id a clickable marker points at
    pub fn marker_note(&self, marker: MarkerId) -> Option<&str> {
        self.marker_bindings
            .iter()
            .find(|b| b.marker == marker)
            .map(|b| b.note_id.as_str())
    }

    /// Column group a cell highlights
    pub fn hover_column(&self, cell: CellPosition) -> Option<usize> {
        self.hover_bindings
            .iter()
            .find(|b| b.cell == cell)
            .map(|b| b.column)
    }
}

/// Render the data table against the notes index
///
/// Header cells are used verbatim. Body cells are style-split and their text
/// goes through footnote rewriting. Column counts are never validated.
pub fn render_table(table: &Table, notes: &NotesMap) -> RenderedTable {
    let header = table.header().cloned().unwrap_or_default();

    let body: Vec<Vec<BodyCell>> = table
        .body()
        .iter()
        .map(|row| {
            row.iter()
                .map(|raw| {
                    let styled = StyledCell::parse(raw);
                    BodyCell {
                        class: styled.class,
                        content: rewrite_footnotes(&styled.text, notes),
                    }
                })
                .collect()
        })
        .collect();

    let mut hover_bindings = Vec::new();
    for col in 0..header.len() {
        hover_bindings.push(HoverBinding {
            cell: CellPosition::new(0, col),
            column: col,
        });
    }

    let mut marker_bindings = Vec::new();
    for (i, row) in body.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let position = CellPosition::new(i + 1, col);
            hover_bindings.push(HoverBinding {
                cell: position,
                column: col,
            });
            for (index, marker) in cell.markers().enumerate() {
                if marker.is_resolved() {
                    marker_bindings.push(MarkerBinding {
                        marker: MarkerId {
                            cell: position,
                            index,
                        },
                        note_id: marker.id.clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        rows = body.len(),
        columns = header.len(),
        markers = marker_bindings.len(),
        "rendered table"
    );

    RenderedTable {
        header,
        body,
        hover_bindings,
        marker_bindings,
    }
}
