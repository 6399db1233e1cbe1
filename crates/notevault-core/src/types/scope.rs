//! The folder scope addressed by listing endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::id::FolderId;

/// Literal token that addresses the implicit top-level container.
pub const ROOT_TOKEN: &str = "root";

/// Either the root container (`parent`/`folder` is null) or a concrete folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "id")]
pub enum FolderScope {
    /// The top-level container.
    Root,
    /// A specific folder.
    Folder(FolderId),
}

impl FolderScope {
    /// The parent/folder column value this scope selects.
    pub fn as_parent(&self) -> Option<FolderId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(*id),
        }
    }
}

impl From<Option<FolderId>> for FolderScope {
    fn from(value: Option<FolderId>) -> Self {
        value.map_or(Self::Root, Self::Folder)
    }
}

impl fmt::Display for FolderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_TOKEN),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for FolderScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ROOT_TOKEN {
            return Ok(Self::Root);
        }
        s.parse::<FolderId>()
            .map(Self::Folder)
            .map_err(|_| AppError::validation(format!("Invalid folder id '{s}'")))
    }
}
