//! Application registry types.
//!
//! The registry supplies the selectable application identifiers and their OS
//! compatibility tag. The engine only uses it to filter which applications'
//! shortcuts are eligible for a given keyboard layout.

use crate::platform::Layout;
use serde::{Deserialize, Serialize};

/// OS compatibility of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPlatform {
    /// Windows-only (e.g. Explorer).
    Windows,
    /// macOS-only (e.g. Finder).
    Mac,
    /// Available everywhere.
    Cross,
}

/// One selectable application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Stable identifier matching `Shortcut::application` (e.g. "chrome").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default = "AppInfo::default_platform")]
    pub platform: AppPlatform,
}

impl AppInfo {
    fn default_platform() -> AppPlatform {
        AppPlatform::Cross
    }

    /// Whether this application is selectable under the given layout.
    ///
    /// Mac layouts exclude windows-only apps and vice versa.
    pub fn supports_layout(&self, layout: Layout) -> bool {
        match self.platform {
            AppPlatform::Cross => true,
            AppPlatform::Windows => !layout.os().is_mac(),
            AppPlatform::Mac => layout.os().is_mac(),
        }
    }
}
