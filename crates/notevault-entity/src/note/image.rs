//! Images pasted into a note, stored inline as base64.

use serde::{Deserialize, Serialize};

/// One embedded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteImage {
    /// Client-chosen identifier referenced from the note content.
    pub id: String,
    /// Base64-encoded image bytes.
    pub data: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Original file name.
    #[serde(default)]
    pub name: String,
}
