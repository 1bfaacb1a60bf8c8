//! Quiz orchestration.
//!
//! Builds the question pool (filtered by application availability,
//! difficulty, and protection safety), picks questions, and scores answers
//! for both simultaneous and sequential shortcuts. The engine owns no DOM
//! or UI concerns; callers feed it pressed-key state and released keys.

use keydrill_config::{
    AppInfo, DifficultyFilter, Layout, QuizMode, Shortcut, ShortcutCatalog,
};
use keydrill_keybindings::{
    SequenceRecorder, are_equivalent, final_token_variants, is_sequential, is_shortcut_safe,
    normalize_pressed, normalize_shortcut, sequential_keys,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use winit::keyboard::KeyCode;

/// Outcome of feeding one more key to an in-progress answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Incorrect,
    /// Consistent so far; more keys expected.
    Pending,
}

/// One posed question.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub shortcut: Shortcut,
    /// Question text rendered from the caller's template.
    pub text: String,
    /// Expected key sequence for sequential shortcuts, `None` for chords.
    pub expected_sequence: Option<Vec<String>>,
}

/// Render a question template, substituting `{app}` and `{description}`.
pub fn format_question(template: &str, app_name: &str, description: &str) -> String {
    template
        .replace("{app}", app_name)
        .replace("{description}", description)
}

/// Whether a given answer combo matches the expected one.
///
/// Both sides are normalized; a miss is retried through the layout's
/// Shift-symbol variants of the final token, then through alternative-group
/// equivalence over `records`. An answer checked against the wrong layout's
/// symbol table fails.
pub fn check_answer(expected: &str, given: &str, records: &[Shortcut], layout: Layout) -> bool {
    let expected = normalize_shortcut(expected);
    let given = normalize_shortcut(given);
    if expected.is_empty() || given.is_empty() {
        return false;
    }
    if expected == given {
        return true;
    }
    if final_token_variants(&given, layout).contains(&expected) {
        return true;
    }
    if final_token_variants(&expected, layout).contains(&given) {
        return true;
    }
    are_equivalent(&expected, &given, records, layout.os())
}

/// Drives a quiz session over one catalog.
pub struct QuizEngine {
    catalog: ShortcutCatalog,
    apps: Vec<AppInfo>,
    layout: Layout,
    mode: QuizMode,
    difficulty: DifficultyFilter,
    fullscreen: bool,
    template: String,
    rng: StdRng,
    current: Option<QuizQuestion>,
    recorder: SequenceRecorder,
}

impl QuizEngine {
    /// Create an engine with an entropy-seeded question order.
    pub fn new(
        catalog: ShortcutCatalog,
        apps: Vec<AppInfo>,
        layout: Layout,
        mode: QuizMode,
        difficulty: DifficultyFilter,
        template: &str,
    ) -> Self {
        Self::with_rng(catalog, apps, layout, mode, difficulty, template, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed (deterministic question order).
    pub fn with_seed(
        catalog: ShortcutCatalog,
        apps: Vec<AppInfo>,
        layout: Layout,
        mode: QuizMode,
        difficulty: DifficultyFilter,
        template: &str,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            catalog,
            apps,
            layout,
            mode,
            difficulty,
            template,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        catalog: ShortcutCatalog,
        apps: Vec<AppInfo>,
        layout: Layout,
        mode: QuizMode,
        difficulty: DifficultyFilter,
        template: &str,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            apps,
            layout,
            mode,
            difficulty,
            fullscreen: false,
            template: template.to_string(),
            rng,
            current: None,
            recorder: SequenceRecorder::new(),
        }
    }

    fn app_allowed(&self, id: &str) -> bool {
        if self.apps.is_empty() {
            return true;
        }
        self.apps
            .iter()
            .any(|a| a.id == id && a.supports_layout(self.layout))
    }

    fn app_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.apps
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.as_str())
            .unwrap_or(id)
    }

    /// Shortcuts currently eligible as questions: application available
    /// under the layout, difficulty filter matched, and capturable per the
    /// protection gate.
    pub fn question_pool(&self) -> Vec<&Shortcut> {
        let os = self.layout.os();
        self.catalog
            .shortcuts()
            .iter()
            .filter(|s| self.app_allowed(&s.application))
            .filter(|s| self.difficulty.matches(s.difficulty))
            .filter(|s| is_shortcut_safe(s, self.mode, self.fullscreen, os))
            .collect()
    }

    /// Pose a new question, or `None` when the pool is empty.
    pub fn next_question(&mut self) -> Option<&QuizQuestion> {
        let os = self.layout.os();
        let pool: Vec<Shortcut> = self.question_pool().into_iter().cloned().collect();
        if pool.is_empty() {
            log::warn!("Question pool is empty (layout {}, mode {:?})", self.layout, self.mode);
            self.current = None;
            return None;
        }
        let shortcut = pool[self.rng.gen_range(0..pool.len())].clone();
        let expected_sequence =
            is_sequential(&shortcut, os).then(|| sequential_keys(shortcut.keys_for_os(os)));
        let text = format_question(
            &self.template,
            self.app_name(&shortcut.application),
            &shortcut.description,
        );
        let question = QuizQuestion {
            shortcut,
            text,
            expected_sequence,
        };

        self.recorder.reset();
        self.current = Some(question);
        self.current.as_ref()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    /// Check a chord answer from the currently held key codes.
    pub fn check_pressed(&self, pressed: &[KeyCode]) -> bool {
        let Some(question) = &self.current else {
            return false;
        };
        let expected = question.shortcut.keys_for_os(self.layout.os());
        let given = normalize_pressed(pressed, self.layout);
        check_answer(expected, &given, self.catalog.shortcuts(), self.layout)
    }

    /// Feed one released key toward a sequential answer.
    ///
    /// Fails fast: as soon as the recorded keys stop being a prefix of the
    /// expected sequence the answer is incorrect, without waiting for the
    /// recorder timeout.
    pub fn answer_sequential(&mut self, key: &str, now: Instant) -> Answer {
        let Some(question) = &self.current else {
            return Answer::Incorrect;
        };
        let Some(expected) = question.expected_sequence.clone() else {
            // Chord questions are answered via check_pressed.
            return Answer::Incorrect;
        };

        self.recorder.add_key(key, now);
        if self.recorder.matches(&expected) {
            self.recorder.reset();
            Answer::Correct
        } else if !self.recorder.is_partial_match(&expected) {
            self.recorder.reset();
            Answer::Incorrect
        } else {
            Answer::Pending
        }
    }

    /// Update fullscreen state. If the active question just became unsafe
    /// (leaving fullscreen with a fullscreen-preventable shortcut posed),
    /// it is force-advanced; returns true when that happened.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        self.fullscreen = fullscreen;
        let became_unsafe = self.current.as_ref().is_some_and(|q| {
            !is_shortcut_safe(&q.shortcut, self.mode, self.fullscreen, self.layout.os())
        });
        if became_unsafe {
            log::info!("Active question became unsafe after fullscreen change; advancing");
            self.next_question();
        }
        became_unsafe
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}
