//! Shortcut string normalization.
//!
//! Canonicalizes combo strings like "ctrl+shift+a" or "⌘ + S" into the fixed
//! form the matcher compares: modifier aliases resolved (Win/Cmd → Meta),
//! legacy key aliases resolved (PgUp → PageUp), single letters uppercased,
//! modifiers sorted Ctrl < Alt < Meta < Shift, tokens joined with `" + "`.
//!
//! Normalization is total and idempotent: empty input yields an empty
//! string, and re-normalizing a normalized string is a no-op.

use crate::platform;
use keydrill_config::Layout;
use winit::keyboard::KeyCode;

/// Canonical modifier names in their fixed sort order.
pub const MODIFIER_ORDER: &[&str] = &["Ctrl", "Alt", "Meta", "Shift"];

/// Sort rank of a canonical or alias modifier token, `None` for non-modifiers.
pub fn modifier_rank(token: &str) -> Option<usize> {
    let canonical = normalize_token(token);
    MODIFIER_ORDER.iter().position(|m| *m == canonical)
}

/// Whether a token names a modifier key (any accepted alias).
pub fn is_modifier_token(token: &str) -> bool {
    modifier_rank(token).is_some()
}

/// Canonicalize one token: resolve modifier aliases, named-key aliases and
/// casing (Esc → Escape, Return → Enter, pgup → PageUp), then uppercase
/// single letters. Other multi-character and symbol tokens pass through.
pub fn normalize_token(token: &str) -> String {
    let t = token.trim();
    match t.to_lowercase().as_str() {
        "ctrl" | "control" | "⌃" => return "Ctrl".to_string(),
        "alt" | "option" | "⌥" => return "Alt".to_string(),
        "shift" | "⇧" => return "Shift".to_string(),
        "meta" | "win" | "cmd" | "command" | "super" | "⌘" => return "Meta".to_string(),
        "pgup" | "pageup" => return "PageUp".to_string(),
        "pgdn" | "pagedown" => return "PageDown".to_string(),
        "esc" | "escape" => return "Escape".to_string(),
        "del" | "delete" => return "Delete".to_string(),
        "ins" | "insert" => return "Insert".to_string(),
        "return" | "enter" => return "Enter".to_string(),
        "spacebar" | "space" => return "Space".to_string(),
        "tab" => return "Tab".to_string(),
        "backspace" => return "Backspace".to_string(),
        "home" => return "Home".to_string(),
        "end" => return "End".to_string(),
        _ => {}
    }

    let mut chars = t.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase().to_string(),
        _ => t.to_string(),
    }
}

/// Canonicalize a combo string.
///
/// Splits on `+`, normalizes each token, sorts modifiers into the fixed
/// order while keeping non-modifier tokens in their original relative
/// order, and rejoins with `" + "`.
pub fn normalize_shortcut(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }

    let mut modifiers: Vec<(usize, String)> = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for raw in s.split('+') {
        let token = normalize_token(raw);
        if token.is_empty() {
            continue;
        }
        if let Some(rank) = MODIFIER_ORDER.iter().position(|m| *m == token) {
            if !modifiers.iter().any(|(r, _)| *r == rank) {
                modifiers.push((rank, token));
            }
        } else {
            keys.push(token);
        }
    }

    modifiers.sort_by_key(|(rank, _)| *rank);

    let mut tokens: Vec<String> = modifiers.into_iter().map(|(_, t)| t).collect();
    tokens.extend(keys);
    tokens.join(" + ")
}

/// Normalized tokens of a simultaneous combo string.
pub fn combo_tokens(s: &str) -> Vec<String> {
    let normalized = normalize_shortcut(s);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(" + ").map(str::to_string).collect()
}

/// Canonicalize a set of currently-held physical key codes.
///
/// Modifier codes map to their fixed labels, other codes resolve through
/// the layout's display tables using the held-Shift state, duplicates
/// collapse, and the result is passed through [`normalize_shortcut`] for
/// final ordering.
pub fn normalize_pressed(codes: &[KeyCode], layout: Layout) -> String {
    let shift_held = codes
        .iter()
        .any(|c| matches!(c, KeyCode::ShiftLeft | KeyCode::ShiftRight));

    let mut tokens: Vec<String> = Vec::new();
    for code in codes {
        let name = platform::code_display_name(*code, "", layout, shift_held);
        if !name.is_empty() && !tokens.contains(&name) {
            tokens.push(name);
        }
    }

    normalize_shortcut(&tokens.join(" + "))
}
