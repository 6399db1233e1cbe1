//! Field checks shared by note creation and update.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_entity::note::NoteImage;

/// Trim a title and check it is present and within `max` characters.
pub fn title(raw: &str, max: usize) -> AppResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::validation("Note title is required"));
    }
    if title.chars().count() > max {
        return Err(AppError::validation(format!(
            "Note title cannot exceed {max} characters"
        )));
    }
    Ok(title.to_string())
}

/// Content is stored verbatim but may not be empty.
pub fn content(raw: &str) -> AppResult<()> {
    if raw.is_empty() {
        return Err(AppError::validation("Note content is required"));
    }
    Ok(())
}

/// Trim every tag and drop the empty ones, keeping order.
pub fn tags(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Base64 payload of an image, with an optional `data:<mime>;base64,` prefix
/// removed. The prefix MIME type must agree with `mime_type`.
fn payload(image: &NoteImage) -> AppResult<&str> {
    let Some(rest) = image.data.strip_prefix("data:") else {
        return Ok(&image.data);
    };
    let mime = rest
        .split_once(',')
        .and_then(|(header, data)| header.strip_suffix(";base64").map(|m| (m, data)));
    match mime {
        Some((mime, data)) if mime.eq_ignore_ascii_case(&image.mime_type) => Ok(data),
        Some((mime, _)) => Err(AppError::validation(format!(
            "Image '{}' data URL type '{mime}' does not match '{}'",
            image.id, image.mime_type
        ))),
        None => Err(AppError::validation(format!(
            "Image '{}' data URL is not base64 encoded",
            image.id
        ))),
    }
}

/// Images must carry standard base64 data and an `image/*` MIME type.
pub fn images(images: &[NoteImage]) -> AppResult<()> {
    for image in images {
        if !image.mime_type.starts_with("image/") {
            return Err(AppError::validation(format!(
                "Image '{}' has unsupported type '{}'",
                image.id, image.mime_type
            )));
        }
        if STANDARD.decode(payload(image)?.as_bytes()).is_err() {
            return Err(AppError::validation(format!(
                "Image '{}' is not valid base64 data",
                image.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(data: &str, mime: &str) -> NoteImage {
        NoteImage {
            id: "img-1".to_string(),
            data: data.to_string(),
            mime_type: mime.to_string(),
            name: "shot.png".to_string(),
        }
    }

    #[test]
    fn test_title_trimmed_and_bounded() {
        assert_eq!(title("  Plan ", 200).unwrap(), "Plan");
        assert!(title("  ", 200).is_err());
        assert!(title(&"t".repeat(201), 200).is_err());
    }

    #[test]
    fn test_tags_drop_blanks() {
        let cleaned = tags(vec![" a ".into(), "".into(), "  ".into(), "b".into()]);
        assert_eq!(cleaned, vec!["a", "b"]);
    }

    #[test]
    fn test_images() {
        assert!(images(&[image("aGVsbG8=", "image/png")]).is_ok());
        assert!(images(&[image("not base64!", "image/png")]).is_err());
        assert!(images(&[image("aGVsbG8=", "text/plain")]).is_err());
    }

    #[test]
    fn test_images_as_data_urls() {
        assert!(images(&[image("data:image/png;base64,aGVsbG8=", "image/png")]).is_ok());
        assert!(images(&[image("data:image/jpeg;base64,aGVsbG8=", "image/png")]).is_err());
        assert!(images(&[image("data:image/png,aGVsbG8=", "image/png")]).is_err());
        assert!(images(&[image("data:image/png;base64,%%%", "image/png")]).is_err());
    }
}
