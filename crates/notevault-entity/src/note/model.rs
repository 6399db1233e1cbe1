//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notevault_core::types::{AccountId, FolderId, NoteId};

use super::image::NoteImage;

/// A note, placed at the root container or inside one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note identifier.
    pub id: NoteId,
    /// The owning account.
    pub owner_id: AccountId,
    /// Containing folder (null for root).
    pub folder_id: Option<FolderId>,
    /// Title, trimmed.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Ordered, trimmed tags.
    pub tags: Vec<String>,
    /// Pinned notes list first.
    pub is_pinned: bool,
    /// Embedded images.
    #[sqlx(json)]
    pub images: Vec<NoteImage>,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// The owning account.
    pub owner_id: AccountId,
    /// Containing folder, already verified to exist under `owner_id`.
    pub folder_id: Option<FolderId>,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Tags.
    pub tags: Vec<String>,
    /// Pinned flag.
    pub is_pinned: bool,
    /// Embedded images.
    pub images: Vec<NoteImage>,
}

impl CreateNote {
    /// Materialize the row this request describes.
    pub fn into_note(self) -> Note {
        let now = Utc::now();
        Note {
            id: NoteId::new(),
            owner_id: self.owner_id,
            folder_id: self.folder_id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            is_pinned: self.is_pinned,
            images: self.images,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial note update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNote {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
    /// New pinned flag.
    pub is_pinned: Option<bool>,
    /// Replacement image list.
    pub images: Option<Vec<NoteImage>>,
}

impl UpdateNote {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.is_pinned.is_none()
            && self.images.is_none()
    }

    /// Apply the present fields to `note` and bump `updated_at`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
        if let Some(pinned) = self.is_pinned {
            note.is_pinned = pinned;
        }
        if let Some(images) = &self.images {
            note.images = images.clone();
        }
        note.updated_at = Utc::now();
    }
}
