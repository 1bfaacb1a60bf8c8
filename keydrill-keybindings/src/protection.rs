//! Protection-level resolution.
//!
//! Determines whether a shortcut can be safely intercepted for quizzing,
//! given the OS, quiz mode, and fullscreen state. Legacy alias spellings are
//! already normalized at the serde boundary (keydrill-config), so only
//! canonical [`ProtectionLevel`] values appear here.

use crate::parser::normalize_shortcut;
use keydrill_config::{Os, ProtectionLevel, QuizMode, Shortcut};

/// Shortcuts the named application captures itself even though the stored
/// protection level says otherwise. Display-time override only; the record
/// is never mutated.
const SAFE_IN_APP: &[(&str, &str)] = &[
    ("excel", "Ctrl + S"),
    ("excel", "Ctrl + F"),
    ("excel", "Ctrl + P"),
];

/// Whether a shortcut can be captured for quizzing.
///
/// Rule order:
/// 1. `always-protected` is never safe, in any mode.
/// 2. Hardcore mode accepts everything else.
/// 3. `preventable_fullscreen` is unsafe outside fullscreen.
/// 4. Everything else is safe.
pub fn is_shortcut_safe(
    shortcut: &Shortcut,
    mode: QuizMode,
    is_fullscreen: bool,
    os: Os,
) -> bool {
    match shortcut.protection_for_os(os) {
        ProtectionLevel::AlwaysProtected => false,
        _ if mode == QuizMode::Hardcore => true,
        ProtectionLevel::PreventableFullscreen => is_fullscreen,
        ProtectionLevel::None => true,
    }
}

/// Protection level as displayed inside a specific application's context.
///
/// The allowlist forces `none` for combinations the application itself
/// captures (e.g. the spreadsheet app handles Ctrl+S in-page), regardless of
/// the stored value. `viewing_app` is the application whose page the user is
/// looking at; the override only applies when it matches the record's own
/// application.
pub fn effective_protection(
    shortcut: &Shortcut,
    viewing_app: Option<&str>,
    os: Os,
) -> ProtectionLevel {
    if let Some(app) = viewing_app {
        if app == shortcut.application {
            let combo = normalize_shortcut(shortcut.keys_for_os(os));
            let overridden = SAFE_IN_APP
                .iter()
                .any(|(safe_app, keys)| *safe_app == app && normalize_shortcut(keys) == combo);
            if overridden {
                return ProtectionLevel::None;
            }
        }
    }
    shortcut.protection_for_os(os)
}
