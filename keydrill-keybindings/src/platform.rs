//! Physical key tables and layout-specific symbol resolution.
//!
//! Contains:
//! - Key code string → [`KeyCode`] alias table (W3C UI Events code names)
//! - Modifier code collapse (left/right variants → one label)
//! - Display-name resolution per layout and Shift state
//! - Shift-symbol tables for US and JIS layouts (forward and reverse)
//! - Physical keyboard-row ordering used by the candidate sort
//!
//! The US and JIS tables are deliberately independent: US Shift+2 is `@`
//! while JIS Shift+2 is `"`, and an equivalence check run against the wrong
//! layout's table must fail.

use keydrill_config::Layout;
use winit::keyboard::KeyCode;

/// Parse a W3C UI Events code string into a [`KeyCode`].
///
/// Supports the code names delivered by browser `KeyboardEvent.code`
/// ("KeyA", "Digit1", "ControlLeft", ...). Matching is case-insensitive.
/// Returns `None` for unrecognised strings.
pub fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s.trim().to_lowercase().as_str() {
        // Letter keys
        "keya" => Some(KeyCode::KeyA),
        "keyb" => Some(KeyCode::KeyB),
        "keyc" => Some(KeyCode::KeyC),
        "keyd" => Some(KeyCode::KeyD),
        "keye" => Some(KeyCode::KeyE),
        "keyf" => Some(KeyCode::KeyF),
        "keyg" => Some(KeyCode::KeyG),
        "keyh" => Some(KeyCode::KeyH),
        "keyi" => Some(KeyCode::KeyI),
        "keyj" => Some(KeyCode::KeyJ),
        "keyk" => Some(KeyCode::KeyK),
        "keyl" => Some(KeyCode::KeyL),
        "keym" => Some(KeyCode::KeyM),
        "keyn" => Some(KeyCode::KeyN),
        "keyo" => Some(KeyCode::KeyO),
        "keyp" => Some(KeyCode::KeyP),
        "keyq" => Some(KeyCode::KeyQ),
        "keyr" => Some(KeyCode::KeyR),
        "keys" => Some(KeyCode::KeyS),
        "keyt" => Some(KeyCode::KeyT),
        "keyu" => Some(KeyCode::KeyU),
        "keyv" => Some(KeyCode::KeyV),
        "keyw" => Some(KeyCode::KeyW),
        "keyx" => Some(KeyCode::KeyX),
        "keyy" => Some(KeyCode::KeyY),
        "keyz" => Some(KeyCode::KeyZ),

        // Number row
        "digit0" => Some(KeyCode::Digit0),
        "digit1" => Some(KeyCode::Digit1),
        "digit2" => Some(KeyCode::Digit2),
        "digit3" => Some(KeyCode::Digit3),
        "digit4" => Some(KeyCode::Digit4),
        "digit5" => Some(KeyCode::Digit5),
        "digit6" => Some(KeyCode::Digit6),
        "digit7" => Some(KeyCode::Digit7),
        "digit8" => Some(KeyCode::Digit8),
        "digit9" => Some(KeyCode::Digit9),

        // Modifier keys
        "controlleft" => Some(KeyCode::ControlLeft),
        "controlright" => Some(KeyCode::ControlRight),
        "shiftleft" => Some(KeyCode::ShiftLeft),
        "shiftright" => Some(KeyCode::ShiftRight),
        "altleft" => Some(KeyCode::AltLeft),
        "altright" => Some(KeyCode::AltRight),
        "metaleft" | "superleft" | "osleft" => Some(KeyCode::SuperLeft),
        "metaright" | "superright" | "osright" => Some(KeyCode::SuperRight),

        // Punctuation/symbols by position
        "minus" => Some(KeyCode::Minus),
        "equal" => Some(KeyCode::Equal),
        "bracketleft" => Some(KeyCode::BracketLeft),
        "bracketright" => Some(KeyCode::BracketRight),
        "backslash" => Some(KeyCode::Backslash),
        "semicolon" => Some(KeyCode::Semicolon),
        "quote" => Some(KeyCode::Quote),
        "backquote" => Some(KeyCode::Backquote),
        "comma" => Some(KeyCode::Comma),
        "period" => Some(KeyCode::Period),
        "slash" => Some(KeyCode::Slash),
        "intlyen" => Some(KeyCode::IntlYen),
        "intlro" => Some(KeyCode::IntlRo),

        // Function keys
        "f1" => Some(KeyCode::F1),
        "f2" => Some(KeyCode::F2),
        "f3" => Some(KeyCode::F3),
        "f4" => Some(KeyCode::F4),
        "f5" => Some(KeyCode::F5),
        "f6" => Some(KeyCode::F6),
        "f7" => Some(KeyCode::F7),
        "f8" => Some(KeyCode::F8),
        "f9" => Some(KeyCode::F9),
        "f10" => Some(KeyCode::F10),
        "f11" => Some(KeyCode::F11),
        "f12" => Some(KeyCode::F12),

        // Navigation keys
        "arrowup" => Some(KeyCode::ArrowUp),
        "arrowdown" => Some(KeyCode::ArrowDown),
        "arrowleft" => Some(KeyCode::ArrowLeft),
        "arrowright" => Some(KeyCode::ArrowRight),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "insert" => Some(KeyCode::Insert),
        "delete" => Some(KeyCode::Delete),

        // Special keys
        "enter" => Some(KeyCode::Enter),
        "escape" => Some(KeyCode::Escape),
        "space" => Some(KeyCode::Space),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),

        _ => None,
    }
}

/// Whether a key code is a modifier key (either side).
pub fn is_modifier_code(code: KeyCode) -> bool {
    modifier_label(code).is_some()
}

/// Fixed label for a modifier code, collapsing the left/right distinction.
pub fn modifier_label(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::ControlLeft | KeyCode::ControlRight => Some("Ctrl"),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some("Shift"),
        KeyCode::AltLeft | KeyCode::AltRight => Some("Alt"),
        KeyCode::SuperLeft | KeyCode::SuperRight => Some("Meta"),
        _ => None,
    }
}

/// One physical key in the symbol tables: code, unshifted glyph, shifted
/// glyph (`None` where the position produces nothing under Shift, e.g.
/// JIS Digit0).
type SymbolRow = (KeyCode, char, Option<char>);

/// US (ANSI) layout symbol table.
const US_SYMBOLS: &[SymbolRow] = &[
    (KeyCode::Digit1, '1', Some('!')),
    (KeyCode::Digit2, '2', Some('@')),
    (KeyCode::Digit3, '3', Some('#')),
    (KeyCode::Digit4, '4', Some('$')),
    (KeyCode::Digit5, '5', Some('%')),
    (KeyCode::Digit6, '6', Some('^')),
    (KeyCode::Digit7, '7', Some('&')),
    (KeyCode::Digit8, '8', Some('*')),
    (KeyCode::Digit9, '9', Some('(')),
    (KeyCode::Digit0, '0', Some(')')),
    (KeyCode::Minus, '-', Some('_')),
    (KeyCode::Equal, '=', Some('+')),
    (KeyCode::BracketLeft, '[', Some('{')),
    (KeyCode::BracketRight, ']', Some('}')),
    (KeyCode::Backslash, '\\', Some('|')),
    (KeyCode::Semicolon, ';', Some(':')),
    (KeyCode::Quote, '\'', Some('"')),
    (KeyCode::Backquote, '`', Some('~')),
    (KeyCode::Comma, ',', Some('<')),
    (KeyCode::Period, '.', Some('>')),
    (KeyCode::Slash, '/', Some('?')),
];

/// JIS layout symbol table. Positions and glyphs differ from US on the
/// number row and the entire right-hand punctuation block.
const JIS_SYMBOLS: &[SymbolRow] = &[
    (KeyCode::Digit1, '1', Some('!')),
    (KeyCode::Digit2, '2', Some('"')),
    (KeyCode::Digit3, '3', Some('#')),
    (KeyCode::Digit4, '4', Some('$')),
    (KeyCode::Digit5, '5', Some('%')),
    (KeyCode::Digit6, '6', Some('&')),
    (KeyCode::Digit7, '7', Some('\'')),
    (KeyCode::Digit8, '8', Some('(')),
    (KeyCode::Digit9, '9', Some(')')),
    (KeyCode::Digit0, '0', None),
    (KeyCode::Minus, '-', Some('=')),
    (KeyCode::Equal, '^', Some('~')),
    (KeyCode::IntlYen, '¥', Some('|')),
    (KeyCode::BracketLeft, '@', Some('`')),
    (KeyCode::BracketRight, '[', Some('{')),
    (KeyCode::Semicolon, ';', Some('+')),
    (KeyCode::Quote, ':', Some('*')),
    (KeyCode::Backslash, ']', Some('}')),
    (KeyCode::Comma, ',', Some('<')),
    (KeyCode::Period, '.', Some('>')),
    (KeyCode::Slash, '/', Some('?')),
    (KeyCode::IntlRo, '\\', Some('_')),
];

fn symbol_table(layout: Layout) -> &'static [SymbolRow] {
    if layout.is_jis() { JIS_SYMBOLS } else { US_SYMBOLS }
}

/// Unshifted glyph produced by a key position under the given layout.
pub fn base_char_for_code(code: KeyCode, layout: Layout) -> Option<char> {
    symbol_table(layout)
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, base, _)| *base)
}

/// Shifted glyph produced by a key position under the given layout.
pub fn shifted_symbol_for_code(code: KeyCode, layout: Layout) -> Option<char> {
    symbol_table(layout)
        .iter()
        .find(|(c, _, _)| *c == code)
        .and_then(|(_, _, shifted)| *shifted)
}

/// Shifted glyph for an unshifted glyph (e.g. `'2'` → `'@'` on US,
/// `'2'` → `'"'` on JIS).
pub fn shifted_symbol_for_char(base: char, layout: Layout) -> Option<char> {
    symbol_table(layout)
        .iter()
        .find(|(_, b, _)| *b == base)
        .and_then(|(_, _, shifted)| *shifted)
}

/// Reverse lookup: the unshifted glyph whose Shift form is `symbol`
/// (e.g. `'!'` → `'1'` on both layouts, `'@'` → `'2'` on US only).
pub fn unshifted_char_for_symbol(symbol: char, layout: Layout) -> Option<char> {
    symbol_table(layout)
        .iter()
        .find(|(_, _, shifted)| *shifted == Some(symbol))
        .map(|(_, base, _)| *base)
}

/// Letter produced by a letter key position (layout-independent in the
/// catalog's canonical form).
fn letter_for_code(code: KeyCode) -> Option<char> {
    let ch = match code {
        KeyCode::KeyA => 'A',
        KeyCode::KeyB => 'B',
        KeyCode::KeyC => 'C',
        KeyCode::KeyD => 'D',
        KeyCode::KeyE => 'E',
        KeyCode::KeyF => 'F',
        KeyCode::KeyG => 'G',
        KeyCode::KeyH => 'H',
        KeyCode::KeyI => 'I',
        KeyCode::KeyJ => 'J',
        KeyCode::KeyK => 'K',
        KeyCode::KeyL => 'L',
        KeyCode::KeyM => 'M',
        KeyCode::KeyN => 'N',
        KeyCode::KeyO => 'O',
        KeyCode::KeyP => 'P',
        KeyCode::KeyQ => 'Q',
        KeyCode::KeyR => 'R',
        KeyCode::KeyS => 'S',
        KeyCode::KeyT => 'T',
        KeyCode::KeyU => 'U',
        KeyCode::KeyV => 'V',
        KeyCode::KeyW => 'W',
        KeyCode::KeyX => 'X',
        KeyCode::KeyY => 'Y',
        KeyCode::KeyZ => 'Z',
        _ => return None,
    };
    Some(ch)
}

/// Fixed display name for named (non-printing) keys.
fn named_key_display(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::ArrowUp => "↑",
        KeyCode::ArrowDown => "↓",
        KeyCode::ArrowLeft => "←",
        KeyCode::ArrowRight => "→",
        KeyCode::Enter => "Enter",
        KeyCode::Escape => "Escape",
        KeyCode::Space => "Space",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        KeyCode::F5 => "F5",
        KeyCode::F6 => "F6",
        KeyCode::F7 => "F7",
        KeyCode::F8 => "F8",
        KeyCode::F9 => "F9",
        KeyCode::F10 => "F10",
        KeyCode::F11 => "F11",
        KeyCode::F12 => "F12",
        _ => return None,
    };
    Some(name)
}

/// Canonical display name for a physical key under a layout and Shift state.
///
/// `key` is the logical key value reported alongside the code (browser
/// `KeyboardEvent.key`); it is only consulted as a fallback for codes the
/// tables do not know.
pub fn code_display_name(code: KeyCode, key: &str, layout: Layout, shift_pressed: bool) -> String {
    if let Some(label) = modifier_label(code) {
        return label.to_string();
    }
    if let Some(letter) = letter_for_code(code) {
        return letter.to_string();
    }
    if let Some(base) = base_char_for_code(code, layout) {
        if shift_pressed {
            if let Some(shifted) = shifted_symbol_for_code(code, layout) {
                return shifted.to_string();
            }
        }
        return base.to_string();
    }
    if let Some(name) = named_key_display(code) {
        return name.to_string();
    }

    // Unknown code: fall back to the logical key value.
    let key = key.trim();
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase().to_string(),
        _ => key.to_string(),
    }
}

/// Physical keyboard rows in left-to-right order, used to sort candidate
/// lists by the position of the final key. Shifted glyphs sit in the column
/// right after their base key, so both sort to the same neighborhood;
/// glyphs appearing on both layouts are listed once at their US position.
const KEY_ROWS: &[&[&str]] = &[
    // Function row
    &[
        "escape", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
    ],
    // Number row
    &[
        "`", "~", "1", "!", "2", "@", "\"", "3", "#", "4", "$", "5", "%", "6", "^", "&", "7", "'",
        "8", "*", "9", "(", "0", ")", "-", "_", "=", "+", "¥", "|", "backspace",
    ],
    // Top row
    &[
        "tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "{", "]", "}", "\\",
    ],
    // Home row
    &[
        "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", ":", "enter",
    ],
    // Bottom row
    &[
        "z", "x", "c", "v", "b", "n", "m", ",", "<", ".", ">", "/", "?",
    ],
    // Navigation cluster
    &[
        "insert", "delete", "home", "end", "pageup", "pagedown", "↑", "↓", "←", "→",
    ],
    // Space row
    &["space"],
];

/// Deterministic ordering value for a display token by physical keyboard
/// position. Unknown tokens sort last.
pub fn key_position(token: &str) -> u32 {
    let token = token.trim().to_lowercase();
    for (row, keys) in KEY_ROWS.iter().enumerate() {
        if let Some(col) = keys.iter().position(|k| *k == token) {
            return (row as u32) * 100 + col as u32;
        }
    }
    u32::MAX
}
