//! Currently-held physical key state.
//!
//! The sole mutable state the engine consumes per tick. Created empty on
//! focus; keys are added on keydown and removed on keyup; the whole set is
//! cleared on window blur, tab hidden, or an inactivity timeout (the caller
//! owns those event hookups and calls [`PressedKeys::clear`]).

use keydrill_keybindings::platform::{is_modifier_code, parse_key_code};
use winit::keyboard::KeyCode;

/// An insertion-ordered set of held physical key codes.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    codes: Vec<KeyCode>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keydown. Repeat events for a held key are ignored.
    pub fn press(&mut self, code: KeyCode) {
        if !self.codes.contains(&code) {
            self.codes.push(code);
        }
    }

    /// Record a keyup.
    pub fn release(&mut self, code: KeyCode) {
        self.codes.retain(|c| *c != code);
    }

    /// Record a keydown from a browser event code string ("ControlLeft",
    /// "KeyA", ...). Returns false for unrecognised codes, which are
    /// ignored rather than tracked.
    pub fn press_str(&mut self, code: &str) -> bool {
        match parse_key_code(code) {
            Some(code) => {
                self.press(code);
                true
            }
            None => {
                log::debug!("Ignoring unrecognised key code '{code}'");
                false
            }
        }
    }

    /// Record a keyup from a browser event code string.
    pub fn release_str(&mut self, code: &str) -> bool {
        match parse_key_code(code) {
            Some(code) => {
                self.release(code);
                true
            }
            None => false,
        }
    }

    /// Drop everything. Called on blur, tab hidden, or inactivity.
    pub fn clear(&mut self) {
        self.codes.clear();
    }

    pub fn codes(&self) -> &[KeyCode] {
        &self.codes
    }

    pub fn contains(&self, code: KeyCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether only modifier keys are held (and at least one).
    pub fn modifiers_only(&self) -> bool {
        !self.codes.is_empty() && self.codes.iter().all(|c| is_modifier_code(*c))
    }
}
