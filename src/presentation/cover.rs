use crate::shared::error::AppError;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

/// Reads an image from disk and encodes it as a `data:` URL.
///
/// The result is only ever stored locally; the API has no cover field.
pub fn encode_cover_file(path: &Path) -> Result<String, AppError> {
    let mime = mime_for_path(path).ok_or_else(|| {
        AppError::InvalidInput(format!("Unsupported cover image type: {}", path.display()))
    })?;
    let bytes = std::fs::read(path)
        .map_err(|err| AppError::InvalidInput(format!("Cannot read {}: {err}", path.display())))?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn encodes_png_as_data_url() {
        let mut file = Builder::new().suffix(".PNG").tempfile().unwrap();
        file.write_all(b"png").unwrap();

        let url = encode_cover_file(file.path()).unwrap();
        assert_eq!(url, "data:image/png;base64,cG5n");
    }

    #[test]
    fn rejects_unknown_extensions() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let err = encode_cover_file(file.path()).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }
}
