//! Shortcut catalog ingestion.
//!
//! Builds the in-memory record set the engine consumes, from a JSON export
//! of the backing store. Rows that fail to deserialize are logged and
//! skipped rather than failing the whole load, and duplicate
//! `(application, keys)` rows collapse to the first occurrence.

use crate::error::CatalogError;
use crate::shortcut::Shortcut;
use std::collections::HashSet;
use std::path::Path;

/// The loaded shortcut record set.
#[derive(Debug, Default, Clone)]
pub struct ShortcutCatalog {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-deserialized records.
    ///
    /// Duplicate `(application, keys)` pairs are logged and skipped; the
    /// first occurrence wins.
    pub fn from_records(records: Vec<Shortcut>) -> Self {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut shortcuts = Vec::with_capacity(records.len());

        for record in records {
            let key = (record.application.clone(), record.keys.clone());
            if !seen.insert(key) {
                log::warn!(
                    "Duplicate shortcut '{}' for application '{}' (id {}), skipping",
                    record.keys,
                    record.application,
                    record.id
                );
                continue;
            }
            shortcuts.push(record);
        }

        log::info!("Shortcut catalog initialized with {} records", shortcuts.len());
        Self { shortcuts }
    }

    /// Parse a catalog from a JSON array of records.
    ///
    /// Individual rows that fail validation (unknown difficulty, missing
    /// required fields) are logged and skipped.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<Shortcut>(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("Invalid shortcut record at index {index}: {e}, skipping");
                }
            }
        }

        if records.is_empty() {
            return Err(CatalogError::Validation(
                "catalog contains no valid shortcut records".to_string(),
            ));
        }

        Ok(Self::from_records(records))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} shortcuts from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All records.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Records belonging to one application.
    pub fn for_application<'a>(&'a self, app: &'a str) -> impl Iterator<Item = &'a Shortcut> {
        self.shortcuts.iter().filter(move |s| s.application == app)
    }

    /// Distinct application identifiers present in the catalog.
    pub fn applications(&self) -> Vec<&str> {
        let mut apps: Vec<&str> = self
            .shortcuts
            .iter()
            .map(|s| s.application.as_str())
            .collect();
        apps.sort_unstable();
        apps.dedup();
        apps
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
