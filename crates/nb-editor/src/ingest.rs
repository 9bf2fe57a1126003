//! Drag-and-drop file ingestion.

use nb_core::image::ImageSource;
use std::path::Path;

/// A file handed over by the shell's drop handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving the MIME type from its extension.
    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(mime_for_extension)
            .unwrap_or("application/octet-stream");
        log::debug!("read dropped file {name} ({mime_type}, {} bytes)", bytes.len());
        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Embedded image payload for an image node.
    pub fn to_image_source(&self) -> ImageSource {
        ImageSource::from_bytes(self.mime_type.clone(), &self.bytes)
    }
}

/// MIME type for a file extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_lookup() {
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("webp"), "image/webp");
        assert_eq!(mime_for_extension("exe"), "application/octet-stream");
    }

    #[test]
    fn only_images_qualify() {
        assert!(DroppedFile::new("a.png", "image/png", vec![1]).is_image());
        assert!(!DroppedFile::new("a.txt", "text/plain", vec![1]).is_image());
    }

    #[test]
    fn encodes_as_embedded_source() {
        let file = DroppedFile::new("dot.gif", "image/gif", b"GIF8".to_vec());
        assert_eq!(file.to_image_source().to_uri(), "data:image/gif;base64,R0lGOA==");
    }

    #[tokio::test]
    async fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.JPEG");
        tokio::fs::write(&path, [0xFF, 0xD8, 0xFF]).await.unwrap();

        let file = DroppedFile::read(&path).await.unwrap();
        assert_eq!(file.name, "photo.JPEG");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.bytes, vec![0xFF, 0xD8, 0xFF]);
    }
}
