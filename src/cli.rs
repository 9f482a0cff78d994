//! Command-line argument parsing
//!
//! Supports:
//! - Rendering `data.csv` + `notes.csv` into an HTML page
//! - Showing the resolved theme
//! - Toggling the persisted theme

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::FileThemeStore;
use crate::loader::SourcePaths;
use crate::pipeline::{ParseMode, RenderOptions, DEFAULT_TITLE};
use crate::theme::{MemoryThemeStore, ThemeMode, ThemeStore};

/// Default output file name, placed next to the sources
pub const DEFAULT_OUTPUT: &str = "index.html";

/// Render a CSV comparison table with footnotes
#[derive(Parser, Debug)]
#[command(name = "compare-table", version, about = "Render a CSV comparison table with footnotes")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page from data.csv and notes.csv
    Render(RenderArgs),
    /// Print the resolved theme
    Theme(ThemeArgs),
    /// Switch between light and dark, persisting the choice
    ToggleTheme(ThemeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// System color scheme (used when no theme has been saved)
    #[arg(long, value_name = "light|dark")]
    pub system_theme: Option<ThemeMode>,

    /// Config file holding the saved theme
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ThemeArgs {
    pub fn system_prefers_dark(&self) -> bool {
        self.system_theme == Some(ThemeMode::Dark)
    }

    /// Store for the saved theme: `--config`, else the default config file,
    /// else an in-memory store when no config directory exists
    pub fn store(&self) -> Box<dyn ThemeStore> {
        match self.config.clone().map(FileThemeStore::new) {
            Some(store) => Box::new(store),
            None => match FileThemeStore::default_location() {
                Some(store) => Box::new(store),
                None => {
                    tracing::warn!("No config directory available, theme will not persist");
                    Box::new(MemoryThemeStore::default())
                }
            },
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Directory holding data.csv and notes.csv
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Table source (defaults to DIR/data.csv)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Notes source (defaults to DIR/notes.csv)
    #[arg(long, value_name = "PATH")]
    pub notes: Option<PathBuf>,

    /// Output file (defaults to DIR/index.html)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Parse sources as strict RFC 4180 CSV
    #[arg(long)]
    pub strict: bool,

    /// Open the rendered page in the default browser
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

/// Configuration derived from `render` arguments
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub sources: SourcePaths,
    pub output: PathBuf,
    pub title: String,
    pub parse_mode: ParseMode,
    pub open: bool,
}

impl RenderConfig {
    /// Page options with the given resolved theme
    pub fn options(&self, theme: ThemeMode) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            parse_mode: self.parse_mode,
            theme,
        }
    }
}

impl RenderArgs {
    /// Convert parsed arguments into a render configuration
    pub fn into_config(self) -> RenderConfig {
        let dir = self.dir.unwrap_or_else(|| PathBuf::from("."));
        let defaults = SourcePaths::in_dir(&dir);

        RenderConfig {
            sources: SourcePaths {
                data: self.data.unwrap_or(defaults.data),
                notes: self.notes.unwrap_or(defaults.notes),
            },
            output: self.out.unwrap_or_else(|| dir.join(DEFAULT_OUTPUT)),
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            parse_mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            open: self.open,
        }
    }
}
