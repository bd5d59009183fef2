//! On-disk layout of a profile directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// File holding every stored key of a profile.
pub const PROGRESS_FILE: &str = "progress.json";

/// Scratch file a write goes to before it replaces [`PROGRESS_FILE`].
pub const PROGRESS_TEMP_FILE: &str = "progress.json.tmp";

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

/// Contents of [`PROGRESS_FILE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDocument {
    pub version: u32,
    /// Stored values by key, sorted so rewrites are stable.
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl Default for ProgressDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}
