// Integration tests for the quiz engine over the public crate surface.

use keydrill::{
    Answer, AppInfo, AppPlatform, DifficultyFilter, Layout, PressedKeys, QuizEngine, QuizMode,
    ShortcutCatalog, check_answer,
};
use pretty_assertions::assert_eq;
use std::time::Instant;

const CATALOG: &str = r#"[
    {
        "id": 1,
        "application": "chrome",
        "keys": "Ctrl + C",
        "macos_keys": "Cmd + C",
        "description": "Copy",
        "difficulty": "basic",
        "press_type": "simultaneous"
    },
    {
        "id": 2,
        "application": "chrome",
        "keys": "Ctrl + W",
        "description": "Close tab",
        "difficulty": "basic",
        "press_type": "simultaneous",
        "windows_protection_level": "fullscreen-preventable"
    },
    {
        "id": 3,
        "application": "excel",
        "keys": "Alt + H + O + I",
        "description": "Autofit column width",
        "difficulty": "hard",
        "press_type": "sequential"
    },
    {
        "id": 4,
        "application": "windows",
        "keys": "Win + L",
        "description": "Lock the computer",
        "difficulty": "standard",
        "press_type": "simultaneous",
        "windows_protection_level": "always-protected"
    }
]"#;

fn catalog() -> ShortcutCatalog {
    ShortcutCatalog::from_json_str(CATALOG).expect("catalog parses")
}

fn apps() -> Vec<AppInfo> {
    vec![
        AppInfo {
            id: "chrome".to_string(),
            name: "Chrome".to_string(),
            platform: AppPlatform::Cross,
        },
        AppInfo {
            id: "excel".to_string(),
            name: "Excel".to_string(),
            platform: AppPlatform::Cross,
        },
        AppInfo {
            id: "windows".to_string(),
            name: "Windows".to_string(),
            platform: AppPlatform::Windows,
        },
    ]
}

fn engine(layout: Layout, mode: QuizMode, seed: u64) -> QuizEngine {
    QuizEngine::with_seed(
        catalog(),
        apps(),
        layout,
        mode,
        DifficultyFilter::All,
        "Press the {app} shortcut for: {description}",
        seed,
    )
}

#[test]
fn seeded_engines_pose_identical_question_streams() {
    let mut a = engine(Layout::WindowsUs, QuizMode::Normal, 9);
    let mut b = engine(Layout::WindowsUs, QuizMode::Normal, 9);
    for _ in 0..20 {
        let qa = a.next_question().expect("pool not empty").shortcut.id;
        let qb = b.next_question().expect("pool not empty").shortcut.id;
        assert_eq!(qa, qb);
    }
}

#[test]
fn protected_shortcuts_never_posed_outside_fullscreen() {
    let mut engine = engine(Layout::WindowsUs, QuizMode::Normal, 3);
    for _ in 0..50 {
        let q = engine.next_question().expect("pool not empty");
        assert_ne!(q.shortcut.keys, "Win + L");
        assert_ne!(q.shortcut.keys, "Ctrl + W");
    }
    engine.set_fullscreen(true);
    let mut saw_preventable = false;
    for _ in 0..200 {
        let q = engine.next_question().expect("pool not empty");
        // Always-protected stays out even in fullscreen.
        assert_ne!(q.shortcut.keys, "Win + L");
        saw_preventable |= q.shortcut.keys == "Ctrl + W";
    }
    assert!(saw_preventable);
}

#[test]
fn chord_answer_from_held_keys() {
    let mut engine = engine(Layout::WindowsJis, QuizMode::Normal, 11);
    loop {
        let q = engine.next_question().expect("pool not empty");
        if q.shortcut.keys == "Ctrl + C" {
            break;
        }
    }

    let mut held = PressedKeys::new();
    held.press_str("ControlLeft");
    held.press_str("KeyC");
    assert!(engine.check_pressed(held.codes()));

    held.release_str("KeyC");
    held.press_str("KeyV");
    assert!(!engine.check_pressed(held.codes()));
}

#[test]
fn mac_layout_uses_macos_key_strings() {
    let mut engine = engine(Layout::MacUs, QuizMode::Normal, 5);
    loop {
        let q = engine.next_question().expect("pool not empty");
        if q.shortcut.description == "Copy" {
            break;
        }
    }
    let mut held = PressedKeys::new();
    held.press_str("MetaLeft");
    held.press_str("KeyC");
    assert!(engine.check_pressed(held.codes()));
}

#[test]
fn sequential_question_accepts_stepwise_answer() {
    let mut engine = engine(Layout::WindowsUs, QuizMode::Normal, 17);
    loop {
        let q = engine.next_question().expect("pool not empty");
        if q.expected_sequence.is_some() {
            break;
        }
    }
    let t0 = Instant::now();
    assert_eq!(engine.answer_sequential("Alt", t0), Answer::Pending);
    assert_eq!(engine.answer_sequential("H", t0), Answer::Pending);
    assert_eq!(engine.answer_sequential("O", t0), Answer::Pending);
    assert_eq!(engine.answer_sequential("I", t0), Answer::Correct);
}

#[test]
fn question_text_substitutes_app_and_description() {
    let mut engine = engine(Layout::WindowsUs, QuizMode::Normal, 1);
    loop {
        let q = engine.next_question().expect("pool not empty");
        if q.shortcut.keys == "Ctrl + C" {
            assert_eq!(q.text, "Press the Chrome shortcut for: Copy");
            break;
        }
    }
}

#[test]
fn answer_checking_respects_layout_symbol_tables() {
    let records = catalog();
    assert!(check_answer(
        "Ctrl + Shift + @",
        "Ctrl + Shift + 2",
        records.shortcuts(),
        Layout::WindowsUs
    ));
    assert!(!check_answer(
        "Ctrl + Shift + @",
        "Ctrl + Shift + 2",
        records.shortcuts(),
        Layout::WindowsJis
    ));
}

#[test]
fn hardcore_mode_poses_preventable_records_anywhere() {
    let mut engine = engine(Layout::WindowsUs, QuizMode::Hardcore, 2);
    let mut saw_preventable = false;
    for _ in 0..100 {
        let q = engine.next_question().expect("pool not empty");
        assert_ne!(q.shortcut.keys, "Win + L");
        saw_preventable |= q.shortcut.keys == "Ctrl + W";
    }
    assert!(saw_preventable);
}
