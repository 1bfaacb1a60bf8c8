//! Shortcut record types.
//!
//! A [`Shortcut`] is one row of the catalog: a key combination, its
//! localized description, and the classifications the engine needs
//! (difficulty, press type, per-OS protection levels, alternative grouping).

use crate::platform::Os;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stored difficulty classification of a shortcut.
///
/// The quiz UI additionally exposes an "allrange" filter value; that is a
/// filter sentinel only ([`DifficultyFilter::All`]) and is never stored on a
/// record. Records carrying `"allrange"` are rejected at catalog ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Standard,
    Hard,
    MadMax,
}

/// Difficulty selection for quiz question pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyFilter {
    /// Match any difficulty ("allrange").
    All,
    /// Match only the given difficulty.
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Parse a filter identifier, accepting `"allrange"` as the any-value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "allrange" => Some(DifficultyFilter::All),
            "basic" => Some(DifficultyFilter::Only(Difficulty::Basic)),
            "standard" => Some(DifficultyFilter::Only(Difficulty::Standard)),
            "hard" => Some(DifficultyFilter::Only(Difficulty::Hard)),
            "madmax" => Some(DifficultyFilter::Only(Difficulty::MadMax)),
            _ => None,
        }
    }

    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => d == difficulty,
        }
    }
}

/// Whether the keys of a shortcut are held together or pressed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressType {
    Simultaneous,
    Sequential,
}

/// Quiz mode. Hardcore ignores fullscreen-preventable restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Normal,
    Hardcore,
}

/// How resistant a shortcut is to interception by a web page.
///
/// Deserialization accepts the legacy `"fullscreen-preventable"` spelling and
/// fails open: any unrecognized value becomes [`ProtectionLevel::None`]
/// (capturable), favoring availability over over-restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProtectionLevel {
    /// The browser delivers the combination normally.
    #[default]
    None,
    /// The OS/browser reserves the combination unless the page is fullscreen.
    PreventableFullscreen,
    /// The combination can never be captured by a page.
    AlwaysProtected,
}

impl ProtectionLevel {
    /// Normalize a raw stored value, resolving legacy aliases.
    pub fn from_raw(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "always-protected" | "always_protected" => ProtectionLevel::AlwaysProtected,
            "preventable_fullscreen" | "fullscreen-preventable" => {
                ProtectionLevel::PreventableFullscreen
            }
            _ => ProtectionLevel::None,
        }
    }

    /// Canonical stored spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionLevel::None => "none",
            ProtectionLevel::PreventableFullscreen => "preventable_fullscreen",
            ProtectionLevel::AlwaysProtected => "always-protected",
        }
    }
}

impl fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ProtectionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProtectionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Accept null/missing as None so partially-populated exports load.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(ProtectionLevel::None, |s| ProtectionLevel::from_raw(&s)))
    }
}

/// One shortcut record from the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: u64,
    /// Identifier of the application this shortcut belongs to (e.g. "chrome").
    pub application: String,
    /// OS-agnostic fallback key string (e.g. "Ctrl + Shift + A").
    pub keys: String,
    /// Optional OS-specific overrides; `keys` is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_keys: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macos_keys: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_en: Option<String>,
    pub difficulty: Difficulty,
    /// Authoritative when present; absent records fall back to the string
    /// heuristics in the engine's sequence classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_type: Option<PressType>,
    #[serde(default)]
    pub windows_protection_level: ProtectionLevel,
    #[serde(default)]
    pub macos_protection_level: ProtectionLevel,
    /// Records sharing a non-null group id are mutually equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_group_id: Option<u64>,
}

impl Shortcut {
    /// Resolve the key string for an OS, falling back to the generic `keys`.
    pub fn keys_for_os(&self, os: Os) -> &str {
        let specific = match os {
            Os::MacOs => self.macos_keys.as_deref(),
            Os::Windows => self.windows_keys.as_deref(),
            // Linux/unknown follow the Windows-style bindings when present.
            Os::Linux | Os::Unknown => self.windows_keys.as_deref(),
        };
        specific.unwrap_or(&self.keys)
    }

    /// Resolve the protection level for an OS.
    pub fn protection_for_os(&self, os: Os) -> ProtectionLevel {
        if os.is_mac() {
            self.macos_protection_level
        } else {
            self.windows_protection_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keys: &str) -> Shortcut {
        Shortcut {
            id: 1,
            application: "chrome".to_string(),
            keys: keys.to_string(),
            windows_keys: None,
            macos_keys: None,
            description: "テスト".to_string(),
            description_en: Some("test".to_string()),
            category: None,
            category_en: None,
            difficulty: Difficulty::Basic,
            press_type: None,
            windows_protection_level: ProtectionLevel::None,
            macos_protection_level: ProtectionLevel::None,
            alternative_group_id: None,
        }
    }

    #[test]
    fn keys_for_os_falls_back_to_generic() {
        let s = record("Ctrl + T");
        assert_eq!(s.keys_for_os(Os::Windows), "Ctrl + T");
        assert_eq!(s.keys_for_os(Os::MacOs), "Ctrl + T");
    }

    #[test]
    fn keys_for_os_prefers_override() {
        let mut s = record("Ctrl + T");
        s.macos_keys = Some("Cmd + T".to_string());
        assert_eq!(s.keys_for_os(Os::MacOs), "Cmd + T");
        assert_eq!(s.keys_for_os(Os::Windows), "Ctrl + T");
        assert_eq!(s.keys_for_os(Os::Linux), "Ctrl + T");
    }

    #[test]
    fn protection_legacy_alias_normalized() {
        assert_eq!(
            ProtectionLevel::from_raw("fullscreen-preventable"),
            ProtectionLevel::PreventableFullscreen
        );
        assert_eq!(
            ProtectionLevel::from_raw("preventable_fullscreen"),
            ProtectionLevel::PreventableFullscreen
        );
        assert_eq!(
            ProtectionLevel::from_raw("always-protected"),
            ProtectionLevel::AlwaysProtected
        );
    }

    #[test]
    fn protection_unknown_value_fails_open() {
        assert_eq!(ProtectionLevel::from_raw("mystery"), ProtectionLevel::None);
        assert_eq!(ProtectionLevel::from_raw(""), ProtectionLevel::None);
    }

    #[test]
    fn protection_deserializes_alias_and_null() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            level: ProtectionLevel,
        }
        let row: Row = serde_json::from_str(r#"{"level": "fullscreen-preventable"}"#).unwrap();
        assert_eq!(row.level, ProtectionLevel::PreventableFullscreen);
        let row: Row = serde_json::from_str(r#"{"level": null}"#).unwrap();
        assert_eq!(row.level, ProtectionLevel::None);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.level, ProtectionLevel::None);
    }

    #[test]
    fn difficulty_filter_allrange_is_sentinel() {
        let filter = DifficultyFilter::parse("allrange").unwrap();
        assert_eq!(filter, DifficultyFilter::All);
        assert!(filter.matches(Difficulty::Basic));
        assert!(filter.matches(Difficulty::MadMax));

        let only = DifficultyFilter::parse("hard").unwrap();
        assert!(only.matches(Difficulty::Hard));
        assert!(!only.matches(Difficulty::Basic));

        // "allrange" is not a stored difficulty.
        assert!(serde_json::from_str::<Difficulty>(r#""allrange""#).is_err());
    }
}
