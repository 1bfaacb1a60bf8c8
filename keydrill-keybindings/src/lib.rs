//! Key-combination normalization and matching engine for keydrill.
//!
//! This crate turns raw physical key state into canonical combo strings and
//! matches them against a shortcut catalog, accounting for:
//!
//! - OS differences (Win/Cmd → Meta, per-OS key strings)
//! - Keyboard layout differences (JIS vs US Shift-symbol tables)
//! - Sequential (chorded) shortcuts with a recording timeout
//! - Protection levels (what the OS/browser will let a page capture)
//! - Alternative shortcuts (distinct combos for the same action)
//!
//! All functions are pure or operate on caller-owned state; lookups degrade
//! to `None`/`false`/empty rather than erroring.

pub mod alternatives;
pub mod matcher;
pub mod parser;
pub mod platform;
pub mod protection;
pub mod sequence;

pub use alternatives::{alternative_shortcuts, are_equivalent};
pub use matcher::{
    AvailableShortcut, available_shortcuts, browser_conflicts, final_token_variants,
    shortcut_description, single_key_shortcuts,
};
pub use parser::{combo_tokens, is_modifier_token, normalize_pressed, normalize_shortcut};
pub use platform::{code_display_name, key_position, modifier_label, parse_key_code};
pub use protection::{effective_protection, is_shortcut_safe};
pub use sequence::{
    SEQUENCE_TIMEOUT, SequenceRecorder, classify_press_type, is_sequential, press_type_heuristic,
    sequential_keys,
};
