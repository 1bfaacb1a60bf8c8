//! Keydrill: a keyboard-shortcut lookup and quiz engine.
//!
//! The workspace splits into three layers:
//! - [`keydrill_config`]: catalog loading, shortcut records, OS and layout
//!   types.
//! - [`keydrill_keybindings`]: key-code mapping, combo normalization,
//!   sequential recording, protection and alternative resolution, and the
//!   match/candidate engine.
//! - this crate: pressed-key state tracking and quiz orchestration on top.
//!
//! Everything is synchronous and single-threaded; callers inject the OS,
//! layout, and clock instead of the engine probing its environment.

pub mod pressed;
pub mod quiz;

pub use pressed::PressedKeys;
pub use quiz::{Answer, QuizEngine, QuizQuestion, check_answer, format_question};

pub use keydrill_config::{
    AppInfo, AppPlatform, CatalogError, Difficulty, DifficultyFilter, Layout, Os, PressType,
    ProtectionLevel, QuizMode, Shortcut, ShortcutCatalog,
};
pub use keydrill_keybindings::{
    AvailableShortcut, SEQUENCE_TIMEOUT, SequenceRecorder, alternative_shortcuts,
    are_equivalent, available_shortcuts, browser_conflicts, classify_press_type, code_display_name,
    effective_protection, is_sequential, is_shortcut_safe, key_position,
    normalize_pressed, normalize_shortcut, parse_key_code, sequential_keys,
    shortcut_description, single_key_shortcuts,
};
