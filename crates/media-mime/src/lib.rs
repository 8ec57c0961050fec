//! Extension <-> content-type mapping for the media files the engine serves.
//!
//! The candidate order matters: identifier resolution probes video types
//! before audio types, first hit wins.

pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "webm", "mkv", "avi"];
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "m4a", "ogg"];

/// All candidate extensions in resolution order.
pub fn candidate_extensions() -> impl Iterator<Item = &'static str> {
    VIDEO_EXTENSIONS.into_iter().chain(AUDIO_EXTENSIONS)
}

pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

pub fn is_video_extension(extension: &str) -> bool {
    let extension = extension.to_ascii_lowercase();
    VIDEO_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map() {
        assert_eq!(mime_for_extension("mp4"), "video/mp4");
        assert_eq!(mime_for_extension("mov"), "video/quicktime");
        assert_eq!(mime_for_extension("webm"), "video/webm");
        assert_eq!(mime_for_extension("mkv"), "video/x-matroska");
        assert_eq!(mime_for_extension("avi"), "video/x-msvideo");
        assert_eq!(mime_for_extension("mp3"), "audio/mpeg");
        assert_eq!(mime_for_extension("wav"), "audio/wav");
        assert_eq!(mime_for_extension("m4a"), "audio/mp4");
        assert_eq!(mime_for_extension("ogg"), "audio/ogg");
    }

    #[test]
    fn unknown_extensions_fall_back_to_binary() {
        assert_eq!(mime_for_extension("flac"), "application/octet-stream");
        assert_eq!(mime_for_extension(""), "application/octet-stream");
    }

    #[test]
    fn mapping_ignores_case() {
        assert_eq!(mime_for_extension("MP4"), "video/mp4");
        assert!(is_video_extension("WebM"));
    }

    #[test]
    fn video_candidates_come_first() {
        let order: Vec<_> = candidate_extensions().collect();
        assert_eq!(order[0], "mp4");
        assert_eq!(order.len(), 9);
        let first_audio = order.iter().position(|e| *e == "mp3").unwrap();
        assert!(VIDEO_EXTENSIONS.iter().all(|v| {
            order.iter().position(|e| e == v).unwrap() < first_audio
        }));
    }
}
