//! Typed error variants for the keydrill-config crate.
//!
//! Produced by `ShortcutCatalog::from_json_str` and `ShortcutCatalog::load`.
//! The file-loading convenience API returns `anyhow::Result`; `CatalogError`
//! values coerce automatically via the `From` impl that `anyhow` provides
//! for any `std::error::Error`, so callers who want structured handling can
//! `downcast_ref::<CatalogError>()`.

use thiserror::Error;

/// Errors that can occur when loading a shortcut catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An I/O error occurred reading the catalog file.
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog contained invalid JSON that could not be parsed.
    #[error("JSON parse error in catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record failed semantic validation.
    ///
    /// The inner string describes which record is invalid and why.
    #[error("Catalog validation error: {0}")]
    Validation(String),
}
