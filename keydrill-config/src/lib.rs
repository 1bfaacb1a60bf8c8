//! Shortcut catalog data model for keydrill.
//!
//! This crate provides the data types consumed by the matching engine:
//!
//! - Shortcut records with OS-specific key strings and protection levels
//! - Difficulty and press-type classifications
//! - OS and keyboard-layout identifiers
//! - The application registry (which apps are selectable per layout)
//! - Catalog ingestion from JSON exports of the backing store
//!
//! The crate contains no matching logic; it only models and loads data.
//! Legacy field spellings (e.g. the `"fullscreen-preventable"` protection
//! alias) are normalized here, at the serde boundary, so downstream code
//! only ever sees canonical values.

pub mod apps;
pub mod catalog;
pub mod error;
pub mod platform;
pub mod shortcut;

// Re-export main types for convenience
pub use apps::{AppInfo, AppPlatform};
pub use catalog::ShortcutCatalog;
pub use error::CatalogError;
pub use platform::{Layout, Os};
pub use shortcut::{Difficulty, DifficultyFilter, PressType, ProtectionLevel, QuizMode, Shortcut};
