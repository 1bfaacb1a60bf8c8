//! Operating system and keyboard layout identifiers.
//!
//! The engine never consults a hidden global for OS detection: `Os::current`
//! is a pure function of the compile target, `Os::from_user_agent` classifies
//! browser-originated platform strings, and every engine entry point receives
//! the layout (which implies the OS family) explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
    Unknown,
}

impl Os {
    /// OS of the compile target. Constant for the life of the process.
    pub const fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Os::MacOs
        }
        #[cfg(target_os = "windows")]
        {
            Os::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Os::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Os::Unknown
        }
    }

    /// Classify a browser user-agent / platform string.
    ///
    /// Checks are ordered so that the more specific markers win: iPhone and
    /// iPad UAs contain "like Mac OS X" but are not desktop macOS, and
    /// Android UAs contain "Linux".
    pub fn from_user_agent(ua: &str) -> Self {
        let ua = ua.to_lowercase();
        if ua.contains("windows") {
            Os::Windows
        } else if ua.contains("android") {
            Os::Unknown
        } else if ua.contains("iphone") || ua.contains("ipad") {
            Os::Unknown
        } else if ua.contains("mac os") || ua.contains("macintosh") {
            Os::MacOs
        } else if ua.contains("linux") || ua.contains("x11") {
            Os::Linux
        } else {
            Os::Unknown
        }
    }

    pub fn is_mac(self) -> bool {
        self == Os::MacOs
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Os::Windows => "windows",
            Os::MacOs => "macos",
            Os::Linux => "linux",
            Os::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Keyboard layout identifier selected by the user.
///
/// Independent of [`Os`] detection: a user may run a JIS keyboard on a
/// machine whose UA reports something else, so consumers pass the layout
/// explicitly rather than deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    WindowsUs,
    WindowsJis,
    MacUs,
    MacJis,
}

impl Layout {
    /// Parse a layout identifier like `"windows-jis"` or `"mac-us"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows-us" => Some(Layout::WindowsUs),
            "windows-jis" => Some(Layout::WindowsJis),
            "mac-us" => Some(Layout::MacUs),
            "mac-jis" => Some(Layout::MacJis),
            _ => None,
        }
    }

    /// The OS family this layout belongs to.
    pub fn os(self) -> Os {
        match self {
            Layout::WindowsUs | Layout::WindowsJis => Os::Windows,
            Layout::MacUs | Layout::MacJis => Os::MacOs,
        }
    }

    /// Whether this is a JIS (Japanese) physical layout.
    pub fn is_jis(self) -> bool {
        matches!(self, Layout::WindowsJis | Layout::MacJis)
    }

    /// Canonical string identifier.
    pub fn id(self) -> &'static str {
        match self {
            Layout::WindowsUs => "windows-us",
            Layout::WindowsJis => "windows-jis",
            Layout::MacUs => "mac-us",
            Layout::MacJis => "mac-jis",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
