//! Source adapters: the raw transcription-service response and the saved
//! camelCase JSON form both normalize into [`TranscriptData`] here, so the
//! rest of the engine only ever sees one word shape.

use crate::segment;
use crate::speakers;
use crate::types::{Speaker, TranscriptData, TranscriptSegment, TranscriptWord, WordKind};

/// Speaker assigned to words the source left unattributed.
pub const DEFAULT_SPEAKER_ID: &str = "speaker_0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RawWordKind {
    Word,
    Spacing,
    /// Non-speech annotation (laughter, noise). Normalized to a plain word.
    AudioEvent,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RawWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type")]
    pub kind: RawWordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprob: Option<f64>,
}

/// Transcription response as the speech-to-text collaborator emits it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RawTranscription {
    pub language_code: String,
    pub language_probability: f64,
    pub text: String,
    pub words: Vec<RawWord>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SavedWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type")]
    pub kind: RawWordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprob: Option<f64>,
}

/// On-disk transcription JSON (camelCase field names).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SavedTranscription {
    pub language_code: String,
    pub language_probability: f64,
    pub text: String,
    pub words: Vec<SavedWord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription_id: Option<String>,
}

impl From<RawTranscription> for TranscriptData {
    fn from(raw: RawTranscription) -> Self {
        let words = raw
            .words
            .into_iter()
            .map(|word| TranscriptWord {
                text: word.text,
                start: word.start,
                end: word.end,
                kind: match word.kind {
                    RawWordKind::Spacing => WordKind::Spacing,
                    RawWordKind::Word | RawWordKind::AudioEvent => WordKind::Word,
                },
                speaker_id: word
                    .speaker_id
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| DEFAULT_SPEAKER_ID.to_string()),
            })
            .collect();

        Self {
            language_code: raw.language_code,
            language_probability: raw.language_probability,
            text: raw.text,
            words,
        }
    }
}

impl From<SavedTranscription> for RawTranscription {
    fn from(saved: SavedTranscription) -> Self {
        Self {
            language_code: saved.language_code,
            language_probability: saved.language_probability,
            text: saved.text,
            words: saved
                .words
                .into_iter()
                .map(|word| RawWord {
                    text: word.text,
                    start: word.start,
                    end: word.end,
                    kind: word.kind,
                    speaker_id: word.speaker_id,
                    logprob: word.logprob,
                })
                .collect(),
        }
    }
}

/// Everything a viewer session needs, derived in one pass from either source
/// form. Words, segments and speakers are recomputed from scratch on every
/// load; only user edits mutate them afterwards.
#[derive(Debug, Clone)]
pub struct LoadedTranscript {
    pub data: TranscriptData,
    pub segments: Vec<TranscriptSegment>,
    pub speakers: Vec<Speaker>,
    pub title: String,
    pub language: String,
}

impl LoadedTranscript {
    pub fn from_raw(id: &str, raw: RawTranscription) -> Self {
        let data = TranscriptData::from(raw);
        let segments = segment::group_words(&data.words);
        let speakers = speakers::extract_speakers(&data);
        let language = data.language_code.clone();

        Self {
            data,
            segments,
            speakers,
            title: title_for(id),
            language,
        }
    }

    pub fn from_saved(id: &str, saved: SavedTranscription) -> Self {
        Self::from_raw(id, saved.into())
    }
}

fn title_for(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("Transcript {prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_events_normalize_to_words() {
        let raw = RawTranscription {
            language_code: "en".into(),
            language_probability: 0.98,
            text: "(laughs) hi".into(),
            words: vec![
                RawWord {
                    text: "(laughs)".into(),
                    start: 0.0,
                    end: 0.4,
                    kind: RawWordKind::AudioEvent,
                    speaker_id: Some("speaker_1".into()),
                    logprob: None,
                },
                RawWord {
                    text: "hi".into(),
                    start: 0.5,
                    end: 0.8,
                    kind: RawWordKind::Word,
                    speaker_id: None,
                    logprob: None,
                },
            ],
        };

        let data = TranscriptData::from(raw);

        assert_eq!(data.words[0].kind, WordKind::Word);
        assert_eq!(data.words[1].speaker_id, DEFAULT_SPEAKER_ID);
    }

    #[test]
    fn saved_form_round_trips_camel_case() {
        let json = r#"{
            "languageCode": "en",
            "languageProbability": 0.99,
            "text": "Hello there",
            "words": [
                {"text": "Hello", "start": 0.0, "end": 0.5, "type": "word", "speakerId": "speaker_0"},
                {"text": " ", "start": 0.5, "end": 0.5, "type": "spacing", "speakerId": "speaker_0"},
                {"text": "there", "start": 0.6, "end": 0.9, "type": "word", "speakerId": "speaker_0"}
            ],
            "transcriptionId": "abc123"
        }"#;

        let saved: SavedTranscription = serde_json::from_str(json).unwrap();
        assert_eq!(saved.transcription_id.as_deref(), Some("abc123"));

        let loaded = LoadedTranscript::from_saved("ee7f8d5afabc0e52", saved);

        assert_eq!(loaded.title, "Transcript ee7f8d5a...");
        assert_eq!(loaded.language, "en");
        assert_eq!(loaded.segments.len(), 1);
        assert_eq!(loaded.speakers.len(), 1);
        assert_eq!(loaded.segments[0].text, "Hello there");
    }

    #[test]
    fn short_ids_title_without_truncation_panic() {
        assert_eq!(title_for("ab"), "Transcript ab...");
    }
}
