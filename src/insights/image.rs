use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{InsightsError, InsightsResult};

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A base64-encoded image ready to be sent inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

fn check_size(source: &str, len: usize) -> InsightsResult<()> {
    if len == 0 {
        return Err(InsightsError::Image(format!("{source}: image is empty")));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(InsightsError::Image(format!("{source}: image is larger than 5 MB")));
    }
    Ok(())
}

/// Parses `data:<mime>;base64,<payload>`
pub fn from_data_url(url: &str) -> InsightsResult<InlineImage> {
    let invalid = || InsightsError::Image("malformed data URL".to_string());

    let rest = url.strip_prefix("data:").ok_or_else(invalid)?;
    let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
    let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;
    if !mime_type.starts_with("image/") {
        return Err(InsightsError::Image(format!("unsupported media type {mime_type}")));
    }

    // base64 expands 3 bytes to 4 characters
    if payload.trim().len() / 4 * 3 > MAX_IMAGE_BYTES + 3 {
        return Err(InsightsError::Image("data URL: image is larger than 5 MB".to_string()));
    }
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| InsightsError::Image(format!("invalid base64: {e}")))?;
    check_size("data URL", bytes.len())?;

    Ok(InlineImage {
        mime_type: mime_type.to_string(),
        data: payload.trim().to_string(),
    })
}

pub async fn from_path(path: &Path) -> InsightsResult<InlineImage> {
    let display = path.display().to_string();
    let mime_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| InsightsError::Image(format!("{display}: expected a jpg, png, webp or heic file")))?;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| InsightsError::Image(format!("{display}: {e}")))?;
    if !metadata.is_file() {
        return Err(InsightsError::Image(format!("{display}: not a file")));
    }
    check_size(&display, usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| InsightsError::Image(format!("{display}: {e}")))?;
    check_size(&display, bytes.len())?;

    Ok(InlineImage {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(bytes),
    })
}

/// Accepts either a local file path or a data URL
pub async fn load(source: &str) -> InsightsResult<InlineImage> {
    let source = source.trim();
    if source.starts_with("data:") {
        from_data_url(source)
    } else {
        from_path(Path::new(source)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let image = from_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "aGVsbG8=");

        assert!(from_data_url("data:image/jpeg,aGVsbG8=").is_err());
        assert!(from_data_url("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(from_data_url("data:image/png;base64,!!!").is_err());
        assert!(from_data_url("data:image/png;base64,").is_err());
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunch.PNG");
        std::fs::write(&path, b"hello").unwrap();

        let image = load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_extension_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, b"hello").unwrap();
        assert!(load(text.to_str().unwrap()).await.is_err());

        let missing = dir.path().join("missing.jpg");
        assert!(load(missing.to_str().unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_large_file_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(64 * 1024 * 1024).unwrap();

        let err = load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("larger than 5 MB"));
    }

    #[tokio::test]
    async fn test_load_rejects_empty_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.jpg");
        std::fs::write(&empty, b"").unwrap();
        let err = load(empty.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("image is empty"));

        let folder = dir.path().join("album.jpg");
        std::fs::create_dir(&folder).unwrap();
        let err = load(folder.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_data_url_rejects_oversized_payload() {
        let payload = "A".repeat(MAX_IMAGE_BYTES / 3 * 4 + 400);
        let err = from_data_url(&format!("data:image/png;base64,{payload}")).unwrap_err();
        assert!(err.to_string().contains("larger than 5 MB"));
    }
}
