//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use compare_table::csv::{tokenize, CellPosition};
use compare_table::model::PageModel;
use compare_table::notes::NotesMap;
use compare_table::render::MarkerId;
use compare_table::runtime::Runtime;
use compare_table::theme::{MemoryThemeStore, ThemeController};

/// Table source used across tests
pub const DATA_CSV: &str = "\
Feature,Basic,Pro
Storage,5 GB[1],1 TB|good
Support,Email|warn,24/7**|good
Price,Free,\"$9, monthly\"[2]
";

/// Notes source used across tests (ids deliberately out of order)
pub const NOTES_CSV: &str = "\
id,note
2,Billed annually
10,Unused note
1,Per user
3,Business days only
";

/// Notes index from `NOTES_CSV`
pub fn sample_notes() -> NotesMap {
    NotesMap::parse(NOTES_CSV)
}

/// Page model over the sample sources with an in-memory theme store
pub fn sample_model(system_prefers_dark: bool) -> PageModel<MemoryThemeStore> {
    let theme = ThemeController::init(MemoryThemeStore::default(), system_prefers_dark);
    PageModel::new(&tokenize(DATA_CSV), &sample_notes(), theme)
}

pub fn sample_runtime() -> Runtime<MemoryThemeStore> {
    Runtime::new(sample_model(false))
}

pub fn cell(row: usize, col: usize) -> CellPosition {
    CellPosition::new(row, col)
}

pub fn marker(row: usize, col: usize, index: usize) -> MarkerId {
    MarkerId {
        cell: CellPosition::new(row, col),
        index,
    }
}
