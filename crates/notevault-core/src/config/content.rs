//! Folder and note settings.

use serde::{Deserialize, Serialize};

/// Column width of `folders.name`.
pub const FOLDER_NAME_COLUMN_LIMIT: usize = 100;

/// Column width of `notes.title`.
pub const NOTE_TITLE_COLUMN_LIMIT: usize = 200;

/// Folder tree behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Re-derive every descendant's path when a folder is renamed.
    ///
    /// Off by default: a rename only recomputes the renamed folder's own
    /// path and descendants keep their previous path strings.
    #[serde(default)]
    pub cascade_rename_paths: bool,
    /// Maximum folder name length in characters, after trimming.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            cascade_rename_paths: false,
            max_name_length: default_max_name_length(),
        }
    }
}

/// Note field limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Maximum title length in characters, after trimming.
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            max_title_length: default_max_title_length(),
        }
    }
}

fn default_max_name_length() -> usize {
    FOLDER_NAME_COLUMN_LIMIT
}

fn default_max_title_length() -> usize {
    NOTE_TITLE_COLUMN_LIMIT
}
