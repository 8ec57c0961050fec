//! Keyed filesystem store for transcriptions and their extracted facts.
//!
//! One directory, two families of files: `<id>.json` holds the saved
//! transcription, `<id>-facts.json` the accepted fact batch. Writes are
//! atomic (temp file + rename) so a crashed save never leaves a truncated
//! JSON behind.

mod error;
mod fs;

pub use error::Error;

use std::path::PathBuf;

use debrief_facts::Fact;
use debrief_transcript::SavedTranscription;

#[derive(Debug, Clone)]
pub struct TranscriptStore {
    data_dir: PathBuf,
}

impl TranscriptStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub async fn load_transcript(&self, id: &str) -> Result<SavedTranscription, Error> {
        let path = self.transcript_path(id)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Err(Error::NotFound),
            Err(error) => Err(error.into()),
        }
    }

    /// Facts that were never saved are an empty batch, not an error.
    pub async fn load_facts(&self, id: &str) -> Result<Vec<Fact>, Error> {
        let path = self.facts_path(id)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn save_facts(&self, id: &str, facts: &[Fact]) -> Result<(), Error> {
        let path = self.facts_path(id)?;
        let content = serde_json::to_string_pretty(facts)?;
        fs::atomic_write(&path, &content).await?;

        tracing::info!(id = %id, count = facts.len(), "facts_saved");
        Ok(())
    }

    fn transcript_path(&self, id: &str) -> Result<PathBuf, Error> {
        Ok(self.data_dir.join(format!("{}.json", safe_id(id)?)))
    }

    fn facts_path(&self, id: &str) -> Result<PathBuf, Error> {
        Ok(self.data_dir.join(format!("{}-facts.json", safe_id(id)?)))
    }
}

/// Ids become file names; reject anything that is not a single plain path
/// component.
fn safe_id(id: &str) -> Result<&str, Error> {
    if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
        return Err(Error::InvalidId);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use debrief_facts::{Sentiment, Theme};

    fn fact(id: &str) -> Fact {
        Fact {
            fact_id: id.to_string(),
            verbatim_quote: "I liked it".to_string(),
            timestamp: "00:00:30".to_string(),
            speaker_label: "Speaker 1".to_string(),
            sentiment: Sentiment::Positive,
            theme: Theme::Satisfaction,
            summary_of_observation: "Positive reaction.".to_string(),
        }
    }

    #[tokio::test]
    async fn facts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(dir.path());

        store
            .save_facts("abc123", &[fact("FACT_01"), fact("FACT_02")])
            .await
            .unwrap();

        let loaded = store.load_facts("abc123").await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].fact_id, "FACT_01");
    }

    #[tokio::test]
    async fn unsaved_facts_are_an_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(dir.path());

        assert!(store.load_facts("never-saved").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_transcript_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(dir.path());

        assert!(matches!(
            store.load_transcript("missing").await,
            Err(Error::NotFound)
        ));
    }

    #[tokio::test]
    async fn transcript_loads_saved_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("abc.json"),
            r#"{
                "languageCode": "en",
                "languageProbability": 0.97,
                "text": "Hello",
                "words": [
                    {"text": "Hello", "start": 0.0, "end": 0.5, "type": "word", "speakerId": "speaker_0"}
                ]
            }"#,
        )
        .unwrap();

        let store = TranscriptStore::new(dir.path());
        let saved = store.load_transcript("abc").await.unwrap();

        assert_eq!(saved.language_code, "en");
        assert_eq!(saved.words.len(), 1);
    }

    #[tokio::test]
    async fn corrupt_json_is_malformed_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let store = TranscriptStore::new(dir.path());
        assert!(matches!(
            store.load_transcript("bad").await,
            Err(Error::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn path_like_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(dir.path());

        assert!(matches!(
            store.load_transcript("../escape").await,
            Err(Error::InvalidId)
        ));
        assert!(matches!(
            store.save_facts("", &[]).await,
            Err(Error::InvalidId)
        ));
    }
}
