//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use notevault_core::error::AppError;
use notevault_entity::note::{NoteImage, UpdateNote};
use notevault_service::NewNote;

/// Run the derived checks, turning failures into a validation error.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Body of `POST /auth/create`. A missing code asks the server to generate one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccessCodeRequest {
    /// Requested six-digit code.
    #[serde(default)]
    pub access_code: Option<String>,
}

/// Body carrying an existing access code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccessCodeRequest {
    /// The access code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Access code is required"))]
    pub access_code: String,
}

/// Body of `POST /folders`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder ID; absent, empty or `root` for the top level.
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Body of `PUT /folders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameFolderRequest {
    /// New folder name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
}

/// Query of `GET /folders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersQuery {
    /// Parent folder ID; absent for the top level.
    pub parent_id: Option<String>,
}

/// Body of `POST /notes`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub title: String,
    /// Body.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub content: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pinned flag.
    #[serde(default)]
    pub is_pinned: bool,
    /// Containing folder; absent, empty or `root` for the top level.
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Embedded images.
    #[serde(default)]
    pub images: Vec<NoteImage>,
}

impl CreateNoteRequest {
    /// Split off the note fields, leaving the folder reference.
    pub fn into_parts(self) -> (Option<String>, NewNote) {
        (
            self.folder_id,
            NewNote {
                title: self.title,
                content: self.content,
                tags: self.tags,
                is_pinned: self.is_pinned,
                images: self.images,
            },
        )
    }
}

/// Body of `PUT /notes/{id}`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
    /// New pinned flag.
    pub is_pinned: Option<bool>,
    /// Replacement images.
    pub images: Option<Vec<NoteImage>>,
}

impl From<UpdateNoteRequest> for UpdateNote {
    fn from(req: UpdateNoteRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            tags: req.tags,
            is_pinned: req.is_pinned,
            images: req.images,
        }
    }
}
