//! Resolver configuration.

use doclink_common::limits::DEFAULT_SOURCE_EXTENSION;
use serde::Deserialize;

/// Options for a [`crate::DocLinker`] run.
///
/// Deserializable from the host's JSON configuration; missing keys take their
/// defaults.
///
/// ```json
/// { "defaultExtension": ".js", "stripTypedefImports": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkerOptions {
    /// Appended to module specifiers without an extension.
    pub default_extension: String,
    /// Remove `@typedef {import(...)}` blocks from the source before the host
    /// parses it.
    pub strip_typedef_imports: bool,
}

impl Default for LinkerOptions {
    fn default() -> Self {
        Self {
            default_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            strip_typedef_imports: true,
        }
    }
}

impl LinkerOptions {
    /// Parse options from a JSON document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
