//! Loading the two CSV sources
//!
//! Both files are read concurrently and joined; rendering only starts once
//! both are available. If either read fails the whole load fails.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// Default file name of the table source
pub const DATA_FILE: &str = "data.csv";
/// Default file name of the notes source
pub const NOTES_FILE: &str = "notes.csv";

/// Locations of the table and notes sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub data: PathBuf,
    pub notes: PathBuf,
}

impl SourcePaths {
    /// `data.csv` and `notes.csv` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data: dir.join(DATA_FILE),
            notes: dir.join(NOTES_FILE),
        }
    }
}

/// Raw text of both sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub data: String,
    pub notes: String,
}

/// Read both sources concurrently
pub fn load_sources(paths: &SourcePaths) -> Result<Sources> {
    let (data, notes) = std::thread::scope(|scope| {
        let data = scope.spawn(|| read_source(&paths.data));
        let notes = scope.spawn(|| read_source(&paths.notes));
        (data.join(), notes.join())
    });

    let data = data.map_err(|_| anyhow!("Reader thread for {} panicked", paths.data.display()))??;
    let notes =
        notes.map_err(|_| anyhow!("Reader thread for {} panicked", paths.notes.display()))??;

    tracing::info!(
        data = %paths.data.display(),
        notes = %paths.notes.display(),
        "loaded sources"
    );
    Ok(Sources { data, notes })
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
