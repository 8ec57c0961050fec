/// Token class from the transcription source. `Spacing` tokens carry the
/// literal inter-word whitespace so the original text can be reconstructed
/// exactly; they have no semantic content of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    Word,
    Spacing,
}

/// Atomic unit produced by the transcription source. Immutable once loaded;
/// `start <= end`, and consecutive words are non-decreasing in `start`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranscriptWord {
    pub text: String,
    /// Seconds from the start of the media.
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type")]
    pub kind: WordKind,
    pub speaker_id: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranscriptData {
    pub language_code: String,
    pub language_probability: f64,
    pub text: String,
    pub words: Vec<TranscriptWord>,
}

/// A maximal run of consecutive words sharing one `speaker_id`, with interior
/// spacing words folded in. Produced by [`crate::segment::group_words`].
///
/// `id` is positional (`segment_<index>`) and only valid for the lifetime of
/// one segmentation pass; re-segmenting reassigns ids.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranscriptSegment {
    pub id: String,
    pub speaker_id: String,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub words: Vec<TranscriptWord>,
}

impl TranscriptSegment {
    /// Replace the display text after a user edit. Timing fields and the
    /// underlying word list stay untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Speaker {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Hex color, stable across sessions for the same display name.
    pub color: String,
}

impl Speaker {
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_role(&mut self, role: Option<String>) {
        self.role = role;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_edit_leaves_timing_untouched() {
        let mut segment = TranscriptSegment {
            id: "segment_0".into(),
            speaker_id: "s1".into(),
            start: 1.5,
            end: 3.0,
            text: "original".into(),
            words: vec![],
        };

        segment.set_text("corrected");

        assert_eq!(segment.text, "corrected");
        assert_eq!((segment.start, segment.end), (1.5, 3.0));
    }

    #[test]
    fn speaker_edits_mutate_in_place() {
        let mut speaker = Speaker {
            id: "speaker_0".into(),
            name: "Speaker 1".into(),
            role: None,
            color: "#3b82f6".into(),
        };

        speaker.rename("Anna");
        speaker.set_role(Some("Moderator".into()));

        assert_eq!(speaker.name, "Anna");
        assert_eq!(speaker.role.as_deref(), Some("Moderator"));
        assert_eq!(speaker.color, "#3b82f6");
    }
}
