//! Sequential (chorded) shortcut handling.
//!
//! Distinguishes shortcuts whose keys are pressed one after another from
//! simultaneous chords, tokenizes them, and records an in-progress user
//! sequence with a timeout.

use crate::parser::is_modifier_token;
use keydrill_config::{Os, PressType, Shortcut};
use std::time::{Duration, Instant};

/// Inactivity window after which an in-progress sequence resets.
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_millis(3000);

/// Resolve the press type of a record.
///
/// The record's `press_type` field is authoritative when present; records
/// without it fall back to the string heuristics.
pub fn classify_press_type(shortcut: &Shortcut, os: Os) -> PressType {
    shortcut.press_type.unwrap_or_else(|| {
        press_type_heuristic(shortcut.keys_for_os(os), Some(&shortcut.application))
    })
}

/// Whether a record is a sequential shortcut under the given OS.
pub fn is_sequential(shortcut: &Shortcut, os: Os) -> bool {
    classify_press_type(shortcut, os) == PressType::Sequential
}

/// String-shape classification for legacy records lacking a `press_type`.
///
/// Recognized sequential shapes:
/// - comma-separated chord sequences ("Ctrl + K, Ctrl + S")
/// - "then"-separated sequences ("G then I")
/// - modifier-prefixed plus sequences of 3+ tokens ("Alt + H + O + I")
/// - plus-joined runs of single letters ("g + i")
/// - for Gmail only, two space-separated letters ("g i")
pub fn press_type_heuristic(keys: &str, application: Option<&str>) -> PressType {
    let keys = keys.trim();
    if keys.contains(',') || keys.contains(" then ") {
        return PressType::Sequential;
    }

    let tokens: Vec<&str> = keys.split('+').map(str::trim).filter(|t| !t.is_empty()).collect();
    if tokens.len() >= 3 && is_modifier_token(tokens[0]) {
        return PressType::Sequential;
    }
    if tokens.len() >= 2 && tokens.iter().all(|t| is_single_letter(t)) {
        return PressType::Sequential;
    }

    if application == Some("gmail") {
        let words: Vec<&str> = keys.split_whitespace().collect();
        if !keys.contains('+') && words.len() == 2 && words.iter().all(|w| is_single_letter(w)) {
            return PressType::Sequential;
        }
    }

    PressType::Simultaneous
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_alphabetic()
    )
}

/// Tokenize a sequential shortcut string into its ordered steps.
///
/// Split priority: comma, then the literal `" then "`, then whitespace when
/// the string carries no `+`, then `+` as the default. Comma and "then"
/// must win over plus-splitting so that chord sequences like
/// "Ctrl + K, Ctrl + S" keep each chord intact.
pub fn sequential_keys(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = if s.contains(',') {
        s.split(',').collect()
    } else if s.contains(" then ") {
        s.split(" then ").collect()
    } else if !s.contains('+') {
        s.split_whitespace().collect()
    } else {
        s.split('+').collect()
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Records the keys a user has pressed so far toward a sequential shortcut.
///
/// Timeouts are evaluated lazily on [`add_key`](Self::add_key) rather than
/// by a background timer; callers pass the current instant explicitly,
/// which also keeps tests free of real clocks.
#[derive(Debug, Clone, Default)]
pub struct SequenceRecorder {
    keys: Vec<String>,
    last_key_at: Option<Instant>,
}

impl SequenceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a released key. If more than [`SEQUENCE_TIMEOUT`] elapsed
    /// since the previous key, the stale sequence is dropped first.
    pub fn add_key(&mut self, key: &str, now: Instant) {
        if let Some(last) = self.last_key_at {
            if now.duration_since(last) > SEQUENCE_TIMEOUT {
                self.keys.clear();
            }
        }
        self.keys.push(key.trim().to_string());
        self.last_key_at = Some(now);
    }

    /// Exact match: same length and per-element equality, ignoring case and
    /// surrounding whitespace.
    pub fn matches(&self, expected: &[String]) -> bool {
        self.keys.len() == expected.len() && self.is_prefix_of(expected)
    }

    /// Whether the recorded keys are a (possibly complete) prefix of the
    /// expected sequence.
    pub fn is_partial_match(&self, expected: &[String]) -> bool {
        self.keys.len() <= expected.len() && self.is_prefix_of(expected)
    }

    fn is_prefix_of(&self, expected: &[String]) -> bool {
        self.keys
            .iter()
            .zip(expected)
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want.trim()))
    }

    pub fn reset(&mut self) {
        self.keys.clear();
        self.last_key_at = None;
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
