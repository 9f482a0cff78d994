//! Sources → HTML page
//!
//! Glues the loader, tokenizer, notes index and renderer together.

use std::path::Path;

use anyhow::{Context, Result};

use crate::csv::{parse_strict, tokenize, ParseError, Table};
use crate::loader::{load_sources, SourcePaths, Sources};
use crate::notes::NotesMap;
use crate::render::{render_footnote_list, render_page, render_table, PageContent};
use crate::theme::ThemeMode;

pub const DEFAULT_TITLE: &str = "Comparison";

/// How CSV text is turned into a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Never fails; stray quotes and ragged rows degrade gracefully
    #[default]
    Lenient,
    /// RFC 4180 via the csv crate
    Strict,
}

impl ParseMode {
    pub fn parse(self, text: &str) -> Result<Table, ParseError> {
        match self {
            ParseMode::Lenient => Ok(tokenize(text)),
            ParseMode::Strict => parse_strict(text),
        }
    }
}

/// Page-level rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub parse_mode: ParseMode,
    /// Theme baked into the page
    pub theme: ThemeMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            parse_mode: ParseMode::default(),
            theme: ThemeMode::default(),
        }
    }
}

/// Render already loaded sources into an HTML document
pub fn render_sources(sources: &Sources, options: &RenderOptions) -> Result<String> {
    let data = options
        .parse_mode
        .parse(&sources.data)
        .context("Failed to parse data source")?;
    let notes_table = options
        .parse_mode
        .parse(&sources.notes)
        .context("Failed to parse notes source")?;
    let notes = NotesMap::from_table(&notes_table);

    let table = render_table(&data, &notes);
    let footnotes = render_footnote_list(&notes);

    Ok(render_page(&PageContent {
        title: &options.title,
        table: &table,
        footnotes: &footnotes,
        theme: options.theme,
    }))
}

/// Load both sources, render, and write the page to `output`
pub fn render_to_file(paths: &SourcePaths, output: &Path, options: &RenderOptions) -> Result<()> {
    let sources = load_sources(paths)?;
    let html = render_sources(&sources, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(output = %output.display(), "wrote page");
    Ok(())
}
