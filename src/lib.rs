//! compare-table - CSV comparison tables with footnotes
//!
//! This crate tokenizes a table source and a notes source, renders the table
//! with styled cells and footnote markers, and writes a themed HTML page.
//! Page interaction (column hover, footnote clicks, theme toggle) is modeled
//! with the Elm Architecture so it can be driven without a browser.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod loader;
pub mod messages;
pub mod model;
pub mod notes;
pub mod pipeline;
pub mod render;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use crate::csv::{tokenize, Table};
pub use messages::Msg;
pub use model::PageModel;
pub use notes::NotesMap;
pub use render::{render_footnote_list, render_table, RenderedTable};
pub use theme::{ThemeController, ThemeMode};
