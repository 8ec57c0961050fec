use std::path::PathBuf;

use debrief_media_mime::{candidate_extensions, mime_for_extension};

/// Root directory the responder serves from, plus the identifier tried when
/// the requested one has no backing file.
#[derive(Debug, Clone)]
pub struct MediaDir {
    root: PathBuf,
    fallback_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub path: PathBuf,
    pub extension: &'static str,
    pub mime: &'static str,
    pub size: u64,
}

impl MediaDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback_id: None,
        }
    }

    pub fn with_fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback_id = Some(id.into());
        self
    }

    /// Probes `<root>/<id>.<ext>` over the candidate extension order (video
    /// before audio), then the fallback identifier, and fails closed.
    pub async fn resolve(&self, id: &str) -> Option<ResolvedMedia> {
        if let Some(found) = self.resolve_exact(id).await {
            return Some(found);
        }

        let fallback = self.fallback_id.as_deref()?;
        if fallback == id {
            return None;
        }

        tracing::debug!(id = %id, fallback = %fallback, "media_id_falling_back");
        self.resolve_exact(fallback).await
    }

    async fn resolve_exact(&self, id: &str) -> Option<ResolvedMedia> {
        for extension in candidate_extensions() {
            let path = self.root.join(format!("{id}.{extension}"));
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {
                    return Some(ResolvedMedia {
                        path,
                        extension,
                        mime: mime_for_extension(extension),
                        size: meta.len(),
                    });
                }
                _ => continue,
            }
        }
        None
    }
}

/// Identifiers are plain names, never paths; anything that could traverse
/// out of the media root is rejected before touching the filesystem.
pub(crate) fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && id != "." && id != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_like_ids_are_rejected() {
        assert!(is_safe_id("ee7f8d5a"));
        assert!(is_safe_id("clip-01"));
        assert!(!is_safe_id(""));
        assert!(!is_safe_id(".."));
        assert!(!is_safe_id("a/b"));
        assert!(!is_safe_id("a\\b"));
    }

    #[tokio::test]
    async fn video_extension_wins_over_audio() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mp3"), b"audio").unwrap();
        std::fs::write(dir.path().join("clip.mp4"), b"video").unwrap();

        let media = MediaDir::new(dir.path());
        let resolved = media.resolve("clip").await.unwrap();

        assert_eq!(resolved.extension, "mp4");
        assert_eq!(resolved.mime, "video/mp4");
        assert_eq!(resolved.size, 5);
    }

    #[tokio::test]
    async fn missing_id_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.mp4"), b"fallback").unwrap();

        let media = MediaDir::new(dir.path()).with_fallback("default");

        assert!(media.resolve("nope").await.is_some());
        assert!(MediaDir::new(dir.path()).resolve("nope").await.is_none());
    }

    #[tokio::test]
    async fn missing_fallback_fails_closed() {
        let dir = tempfile::tempdir().unwrap();
        let media = MediaDir::new(dir.path()).with_fallback("also-missing");
        assert!(media.resolve("nope").await.is_none());
    }
}
