//! Core table generation module

pub mod types;
pub mod format;
pub mod aggregate;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::info;

pub use types::config::EmitConfig;
pub use types::error::{Result, UcdError};
pub use types::models::*;

/// Drives a full generator run: parse, aggregate, render.
///
/// Output is rendered into memory first. A run that fails anywhere produces
/// no output at all.
#[derive(Debug, Clone, Default)]
pub struct TableGenerator {
    config: EmitConfig,
}

impl TableGenerator {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Reads the database at `path` and renders the complete C source.
    ///
    /// # Arguments
    /// * `path` - `UnicodeData.txt` file
    /// * `version` - Unicode version label, only used in a comment
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - Any line is malformed (wrong field count, bad hex)
    pub fn generate_from_path(&self, path: impl AsRef<Path>, version: &str) -> Result<String> {
        let path = path.as_ref();
        info!("Opening Unicode database: {}", path.display());
        let file = File::open(path)?;
        self.generate(BufReader::new(file), version)
    }

    /// Same as [`generate_from_path`](Self::generate_from_path) over any buffered reader.
    pub fn generate<R: BufRead>(&self, reader: R, version: &str) -> Result<String> {
        let records = format::record::parse_records(reader)?;
        let tables = aggregate::aggregate(&records);
        info!(
            "Rendering {} categories from {} records (Unicode {})",
            tables.categories.len(),
            records.len(),
            version
        );
        self.render(&tables, version)
    }

    /// Renders already aggregated tables.
    pub fn render(&self, tables: &Tables, version: &str) -> Result<String> {
        let mut out = String::new();
        format::header::write(&mut out, version, &self.config)?;
        format::tables::write_categories(&mut out, &tables.categories, &self.config)?;
        format::tables::write_case_mappings(&mut out, &tables.case_mappings, &self.config)?;
        Ok(out)
    }
}
