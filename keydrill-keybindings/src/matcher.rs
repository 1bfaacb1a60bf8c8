//! Combo matching against the shortcut catalog.
//!
//! Exact matching compares normalized combo strings, with retries that
//! substitute Shift-symbol alternates and key aliases for the final token.
//! Candidate matching surfaces the shortcuts still reachable from a partial
//! press (modifiers only, or a strict subset of a longer chord).

use crate::parser::{combo_tokens, is_modifier_token, normalize_shortcut};
use crate::platform::{code_display_name, key_position, modifier_label, shifted_symbol_for_char, unshifted_char_for_symbol};
use crate::sequence::{is_sequential, sequential_keys};
use keydrill_config::{Layout, Os, ProtectionLevel, Shortcut};
use winit::keyboard::KeyCode;

/// One entry of a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableShortcut {
    /// Canonical key string (chord steps joined with ", " for sequential
    /// records).
    pub keys: String,
    pub description: String,
}

/// Description of the shortcut exactly matching a pressed combo, if any.
///
/// The combo is normalized and compared against each record's OS-resolved
/// key string. On a miss, the final token is retried with its Shift-symbol
/// alternates under the given layout. Named-key spellings (Esc vs Escape)
/// need no retry: the normalizer collapses them on both sides.
/// Records whose normalized keys collide collapse to the first occurrence.
pub fn shortcut_description(
    combo_text: &str,
    records: &[Shortcut],
    app: &str,
    layout: Layout,
) -> Option<String> {
    let pressed = normalize_shortcut(combo_text);
    if pressed.is_empty() {
        return None;
    }

    let os = layout.os();
    let app_records: Vec<&Shortcut> = records.iter().filter(|s| s.application == app).collect();

    let lookup = |combo: &str| {
        app_records
            .iter()
            .find(|s| normalize_shortcut(s.keys_for_os(os)) == combo)
            .map(|s| s.description.clone())
    };

    if let Some(description) = lookup(&pressed) {
        return Some(description);
    }
    for variant in final_token_variants(&pressed, layout) {
        if let Some(description) = lookup(&variant) {
            return Some(description);
        }
    }
    None
}

/// Alternate spellings of a normalized combo obtained by substituting the
/// final token with its Shift-symbol equivalents (only when Shift is part
/// of the combo). Used by answer checking as well, so that
/// "Ctrl + Shift + 2" and "Ctrl + Shift + @" compare equal exactly when the
/// layout's symbol table says they share a key.
pub fn final_token_variants(combo: &str, layout: Layout) -> Vec<String> {
    let mut tokens: Vec<String> = combo.split(" + ").map(str::to_string).collect();
    let Some(last) = tokens.last().cloned() else {
        return Vec::new();
    };

    let mut variants = Vec::new();
    let mut push_variant = |replacement: String, tokens: &mut Vec<String>| {
        *tokens.last_mut().unwrap() = replacement;
        let variant = tokens.join(" + ");
        if variant != combo && !variants.contains(&variant) {
            variants.push(variant);
        }
    };

    let has_shift = tokens.iter().any(|t| t == "Shift");
    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if has_shift {
            if let Some(shifted) = shifted_symbol_for_char(c, layout) {
                push_variant(shifted.to_string(), &mut tokens);
            }
            if let Some(base) = unshifted_char_for_symbol(c, layout) {
                push_variant(base.to_string(), &mut tokens);
            }
        }
    }

    variants
}

/// Shortcuts of `app` consistent with the currently pressed keys.
///
/// A record qualifies when:
/// (a) the pressed tokens equal its full token set, or
/// (b) the pressed modifiers equal its modifier set exactly, every pressed
///     token appears in its token set, and it still has more tokens to
///     press, or
/// (c) only modifiers are held and each appears in its modifier set.
///
/// Results deduplicate by canonical key string and sort by modifier count,
/// physical position of the final key, then the key string itself.
pub fn available_shortcuts(
    pressed: &[KeyCode],
    layout: Layout,
    records: &[Shortcut],
    app: &str,
) -> Vec<AvailableShortcut> {
    let filtered: Vec<&Shortcut> = records.iter().filter(|s| s.application == app).collect();
    collect_candidates(pressed, layout, &filtered)
}

/// Browser shortcuts that would conflict with the pressed keys.
///
/// Restricted to `browser_app`'s records at `preventable_fullscreen`
/// protection. Meta combinations are excluded (those are OS-level, not
/// browser-level, conflicts), and nothing is reported while the active
/// application IS the browser (its own shortcuts are the quiz subject, not
/// a conflict).
pub fn browser_conflicts(
    pressed: &[KeyCode],
    layout: Layout,
    records: &[Shortcut],
    active_app: &str,
    browser_app: &str,
) -> Vec<AvailableShortcut> {
    if active_app == browser_app {
        return Vec::new();
    }

    let os = layout.os();
    let filtered: Vec<&Shortcut> = records
        .iter()
        .filter(|s| s.application == browser_app)
        .filter(|s| s.protection_for_os(os) == ProtectionLevel::PreventableFullscreen)
        .filter(|s| !combo_tokens(s.keys_for_os(os)).iter().any(|t| t == "Meta"))
        .collect();
    collect_candidates(pressed, layout, &filtered)
}

/// Truly single-key bindings of an application (simultaneous records whose
/// OS key string carries no `" + "` separator), ordered by physical key
/// position.
pub fn single_key_shortcuts(records: &[Shortcut], app: &str, os: Os) -> Vec<AvailableShortcut> {
    let mut singles: Vec<AvailableShortcut> = records
        .iter()
        .filter(|s| s.application == app)
        .filter(|s| !is_sequential(s, os))
        .filter(|s| !s.keys_for_os(os).contains(" + "))
        .map(|s| AvailableShortcut {
            keys: normalize_shortcut(s.keys_for_os(os)),
            description: s.description.clone(),
        })
        .collect();

    singles.sort_by(|a, b| {
        key_position(&a.keys)
            .cmp(&key_position(&b.keys))
            .then_with(|| a.keys.cmp(&b.keys))
    });
    singles.dedup_by(|a, b| a.keys == b.keys);
    singles
}

fn collect_candidates(
    pressed: &[KeyCode],
    layout: Layout,
    records: &[&Shortcut],
) -> Vec<AvailableShortcut> {
    let os = layout.os();
    let (pressed_mods, pressed_keys) = pressed_tokens(pressed, layout);
    if pressed_mods.is_empty() && pressed_keys.is_empty() {
        return Vec::new();
    }

    let mut seen: Vec<String> = Vec::new();
    let mut candidates: Vec<(usize, u32, AvailableShortcut)> = Vec::new();

    for record in records {
        let tokens = record_tokens(record, os);
        if tokens.is_empty() {
            continue;
        }
        if !is_candidate(&tokens, &pressed_mods, &pressed_keys) {
            continue;
        }

        let display = record_display_keys(record, os);
        if seen.contains(&display) {
            log::debug!(
                "Duplicate candidate '{}' for application '{}' (id {}), collapsing",
                display,
                record.application,
                record.id
            );
            continue;
        }
        seen.push(display.clone());

        let modifier_count = tokens.iter().filter(|t| is_modifier_token(t)).count();
        let final_key = tokens
            .iter()
            .rev()
            .find(|t| !is_modifier_token(t))
            .cloned()
            .unwrap_or_else(|| tokens.last().cloned().unwrap_or_default());

        candidates.push((
            modifier_count,
            key_position(&final_key),
            AvailableShortcut {
                keys: display,
                description: record.description.clone(),
            },
        ));
    }

    candidates.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.keys.cmp(&b.2.keys))
    });
    candidates.into_iter().map(|(_, _, c)| c).collect()
}

/// Display tokens of the currently held keys, split into modifiers and
/// non-modifier keys (both deduplicated, in press order).
fn pressed_tokens(pressed: &[KeyCode], layout: Layout) -> (Vec<String>, Vec<String>) {
    let shift_held = pressed
        .iter()
        .any(|c| matches!(c, KeyCode::ShiftLeft | KeyCode::ShiftRight));

    let mut mods: Vec<String> = Vec::new();
    let mut keys: Vec<String> = Vec::new();
    for code in pressed {
        if let Some(label) = modifier_label(*code) {
            if !mods.iter().any(|m| m == label) {
                mods.push(label.to_string());
            }
        } else {
            let name = code_display_name(*code, "", layout, shift_held);
            if !name.is_empty() && !keys.contains(&name) {
                keys.push(name);
            }
        }
    }
    (mods, keys)
}

/// Token set of a record: the sequential tokenizer for sequential records,
/// plus-splitting for simultaneous ones. Each token is normalized.
fn record_tokens(record: &Shortcut, os: Os) -> Vec<String> {
    let keys = record.keys_for_os(os);
    if is_sequential(record, os) {
        sequential_keys(keys)
            .iter()
            .map(|step| normalize_shortcut(step))
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        combo_tokens(keys)
    }
}

fn record_display_keys(record: &Shortcut, os: Os) -> String {
    let keys = record.keys_for_os(os);
    if is_sequential(record, os) {
        sequential_keys(keys)
            .iter()
            .map(|step| normalize_shortcut(step))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        normalize_shortcut(keys)
    }
}

fn same_set(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

fn is_candidate(tokens: &[String], pressed_mods: &[String], pressed_keys: &[String]) -> bool {
    let rec_mods: Vec<String> = tokens
        .iter()
        .filter(|t| is_modifier_token(t))
        .cloned()
        .collect();
    let pressed_count = pressed_mods.len() + pressed_keys.len();

    // (a) complete press
    let pressed_all: Vec<String> = pressed_mods.iter().chain(pressed_keys).cloned().collect();
    if same_set(&pressed_all, tokens) {
        return true;
    }

    // (b) strict subset with identical modifier set
    if !pressed_keys.is_empty()
        && same_set(pressed_mods, &rec_mods)
        && pressed_all.iter().all(|t| tokens.contains(t))
        && tokens.len() > pressed_count
    {
        return true;
    }

    // (c) modifiers-only broadest match
    pressed_keys.is_empty()
        && !pressed_mods.is_empty()
        && pressed_mods.iter().all(|m| rec_mods.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keydrill_config::{Difficulty, PressType};
    use pretty_assertions::assert_eq;

    fn record(id: u64, app: &str, keys: &str, description: &str) -> Shortcut {
        Shortcut {
            id,
            application: app.to_string(),
            keys: keys.to_string(),
            windows_keys: None,
            macos_keys: None,
            description: description.to_string(),
            description_en: None,
            category: None,
            category_en: None,
            difficulty: Difficulty::Standard,
            press_type: Some(PressType::Simultaneous),
            windows_protection_level: ProtectionLevel::None,
            macos_protection_level: ProtectionLevel::None,
            alternative_group_id: None,
        }
    }

    fn chrome_records() -> Vec<Shortcut> {
        vec![
            record(1, "chrome", "Ctrl + A", "select all"),
            record(2, "chrome", "Ctrl + S", "save"),
            record(3, "chrome", "Ctrl + Shift + T", "reopen closed tab"),
            record(4, "chrome", "F5", "reload"),
        ]
    }

    #[test]
    fn exact_match_by_normalized_combo() {
        let records = chrome_records();
        assert_eq!(
            shortcut_description("ctrl+a", &records, "chrome", Layout::WindowsUs),
            Some("select all".to_string())
        );
        assert_eq!(
            shortcut_description("Shift + Ctrl + T", &records, "chrome", Layout::WindowsUs),
            Some("reopen closed tab".to_string())
        );
        assert_eq!(
            shortcut_description("Ctrl + Q", &records, "chrome", Layout::WindowsUs),
            None
        );
    }

    #[test]
    fn exact_match_scoped_to_application() {
        let records = chrome_records();
        assert_eq!(
            shortcut_description("Ctrl + A", &records, "excel", Layout::WindowsUs),
            None
        );
    }

    #[test]
    fn exact_match_respects_os_override() {
        let mut records = chrome_records();
        records[1].macos_keys = Some("Cmd + S".to_string());
        assert_eq!(
            shortcut_description("Meta + S", &records, "chrome", Layout::MacUs),
            Some("save".to_string())
        );
        assert_eq!(
            shortcut_description("Meta + S", &records, "chrome", Layout::WindowsUs),
            None
        );
    }

    #[test]
    fn shift_symbol_retry_is_layout_specific() {
        let records = vec![record(1, "chrome", "Ctrl + Shift + @", "mention")];
        // US: Shift+2 produces '@', so the digit spelling matches.
        assert_eq!(
            shortcut_description("Ctrl + Shift + 2", &records, "chrome", Layout::WindowsUs),
            Some("mention".to_string())
        );
        // JIS: Shift+2 produces '"', not '@'.
        assert_eq!(
            shortcut_description("Ctrl + Shift + 2", &records, "chrome", Layout::WindowsJis),
            None
        );
    }

    #[test]
    fn named_key_alias_spellings_match() {
        let records = vec![record(1, "chrome", "Ctrl + Esc", "open menu")];
        assert_eq!(
            shortcut_description("Ctrl + Escape", &records, "chrome", Layout::WindowsUs),
            Some("open menu".to_string())
        );
        assert_eq!(
            shortcut_description("Ctrl + Return", &[record(2, "chrome", "Ctrl + Enter", "send")], "chrome", Layout::WindowsUs),
            Some("send".to_string())
        );
    }

    #[test]
    fn alias_spelled_record_surfaces_in_candidates() {
        // A record stored as "Esc" must appear under its canonical spelling
        // and sort by Escape's physical position, ahead of home-row keys.
        let records = vec![
            record(1, "chrome", "Ctrl + Esc", "open menu"),
            record(2, "chrome", "Ctrl + A", "select all"),
        ];
        let candidates = available_shortcuts(
            &[KeyCode::ControlLeft],
            Layout::WindowsUs,
            &records,
            "chrome",
        );
        let keys: Vec<&str> = candidates.iter().map(|c| c.keys.as_str()).collect();
        assert_eq!(keys, vec!["Ctrl + Escape", "Ctrl + A"]);
    }

    #[test]
    fn duplicate_normalized_records_collapse_to_first() {
        let records = vec![
            record(1, "chrome", "Ctrl + A", "first"),
            record(2, "chrome", "ctrl+a", "second"),
        ];
        assert_eq!(
            shortcut_description("Ctrl + A", &records, "chrome", Layout::WindowsUs),
            Some("first".to_string())
        );
    }

    #[test]
    fn modifiers_only_surfaces_candidates() {
        let records = chrome_records();
        let candidates = available_shortcuts(
            &[KeyCode::ControlLeft],
            Layout::WindowsUs,
            &records,
            "chrome",
        );
        let keys: Vec<&str> = candidates.iter().map(|c| c.keys.as_str()).collect();
        assert_eq!(keys, vec!["Ctrl + A", "Ctrl + S", "Ctrl + Shift + T"]);
    }

    #[test]
    fn subset_press_requires_exact_modifier_set() {
        let records = chrome_records();
        // Ctrl+T pressed: only the Ctrl+Shift+T record could continue, but
        // its modifier set {Ctrl, Shift} differs from {Ctrl}.
        let candidates = available_shortcuts(
            &[KeyCode::ControlLeft, KeyCode::KeyT],
            Layout::WindowsUs,
            &records,
            "chrome",
        );
        assert!(candidates.is_empty());

        let candidates = available_shortcuts(
            &[KeyCode::ControlLeft, KeyCode::ShiftLeft, KeyCode::KeyT],
            Layout::WindowsUs,
            &records,
            "chrome",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].keys, "Ctrl + Shift + T");
    }

    #[test]
    fn complete_press_is_a_candidate() {
        let records = chrome_records();
        let candidates = available_shortcuts(
            &[KeyCode::ControlLeft, KeyCode::KeyA],
            Layout::WindowsUs,
            &records,
            "chrome",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].description, "select all");
    }

    #[test]
    fn candidates_sorted_by_modifier_count_then_position() {
        let records = vec![
            record(1, "app", "Ctrl + Shift + A", "three mods-ish"),
            record(2, "app", "Ctrl + Z", "bottom row"),
            record(3, "app", "Ctrl + Q", "top row"),
            record(4, "app", "Ctrl + 1", "number row"),
        ];
        let candidates =
            available_shortcuts(&[KeyCode::ControlLeft], Layout::WindowsUs, &records, "app");
        let keys: Vec<&str> = candidates.iter().map(|c| c.keys.as_str()).collect();
        assert_eq!(
            keys,
            vec!["Ctrl + 1", "Ctrl + Q", "Ctrl + Z", "Ctrl + Shift + A"]
        );
    }

    #[test]
    fn empty_press_yields_no_candidates() {
        let records = chrome_records();
        assert!(available_shortcuts(&[], Layout::WindowsUs, &records, "chrome").is_empty());
    }

    #[test]
    fn browser_conflicts_filters_protection_and_meta() {
        let mut close_tab = record(1, "chrome", "Ctrl + W", "close tab");
        close_tab.windows_protection_level = ProtectionLevel::PreventableFullscreen;
        let mut lock = record(2, "chrome", "Meta + L", "lock");
        lock.windows_protection_level = ProtectionLevel::PreventableFullscreen;
        let plain = record(3, "chrome", "Ctrl + A", "select all");
        let records = vec![close_tab, lock, plain];

        let conflicts = browser_conflicts(
            &[KeyCode::ControlLeft],
            Layout::WindowsUs,
            &records,
            "excel",
            "chrome",
        );
        let keys: Vec<&str> = conflicts.iter().map(|c| c.keys.as_str()).collect();
        // Meta combo excluded (OS-level), unprotected combo excluded.
        assert_eq!(keys, vec!["Ctrl + W"]);
    }

    #[test]
    fn browser_conflicts_suppressed_inside_browser() {
        let mut close_tab = record(1, "chrome", "Ctrl + W", "close tab");
        close_tab.windows_protection_level = ProtectionLevel::PreventableFullscreen;
        let records = vec![close_tab];
        let conflicts = browser_conflicts(
            &[KeyCode::ControlLeft],
            Layout::WindowsUs,
            &records,
            "chrome",
            "chrome",
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn single_key_listing() {
        let mut records = vec![
            record(1, "gmail", "c", "compose"),
            record(2, "gmail", "/", "search"),
            record(3, "gmail", "Ctrl + Enter", "send"),
        ];
        // Sequential record with a single-token key string stays excluded.
        records.push({
            let mut r = record(4, "gmail", "g + i", "go to inbox");
            r.press_type = Some(PressType::Sequential);
            r
        });

        let singles = single_key_shortcuts(&records, "gmail", Os::Windows);
        let keys: Vec<&str> = singles.iter().map(|s| s.keys.as_str()).collect();
        // 'c' is bottom row, '/' is bottom row further right.
        assert_eq!(keys, vec!["C", "/"]);
    }

    #[test]
    fn sequential_record_candidate_tokens() {
        let mut ribbon = record(1, "excel", "Alt + H + O + I", "autofit column width");
        ribbon.press_type = Some(PressType::Sequential);
        let records = vec![ribbon];

        // Holding Alt alone surfaces the ribbon sequence.
        let candidates =
            available_shortcuts(&[KeyCode::AltLeft], Layout::WindowsUs, &records, "excel");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].keys, "Alt, H, O, I");
    }
}
