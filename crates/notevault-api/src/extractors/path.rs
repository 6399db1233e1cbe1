//! Typed path parameter helpers.

use std::str::FromStr;

use notevault_core::error::AppError;
use notevault_core::types::{FolderId, FolderScope, NoteId};

fn parse<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid {what} id '{raw}'")))
}

/// Parses a folder ID from a path segment.
pub fn parse_folder_id(raw: &str) -> Result<FolderId, AppError> {
    parse(raw, "folder")
}

/// Parses a note ID from a path segment.
pub fn parse_note_id(raw: &str) -> Result<NoteId, AppError> {
    parse(raw, "note")
}

/// Parses an optional folder reference from a body or query field.
///
/// Absent, empty, and `root` all select the root container.
pub fn parse_scope(raw: Option<&str>) -> Result<FolderScope, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(FolderScope::Root),
        Some(value) => value.parse(),
    }
}
