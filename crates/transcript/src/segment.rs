//! Groups flat word-level tokens into speaker-turn segments.
//!
//! A segment is a maximal run of consecutive words from one speaker. Spacing
//! tokens never open or close a run: a leading spacing token has nothing to
//! attach to and is dropped, an interior one is folded into the open run with
//! its literal text preserved so rendering keeps the original gaps. Only a
//! non-spacing word with a different `speaker_id` closes the current run.

use crate::types::{TranscriptSegment, TranscriptWord, WordKind};

pub fn group_words(words: &[TranscriptWord]) -> Vec<TranscriptSegment> {
    let mut segments: Vec<TranscriptSegment> = Vec::new();
    let mut current: Option<TranscriptSegment> = None;

    for word in words {
        if word.kind == WordKind::Spacing {
            if let Some(run) = current.as_mut() {
                run.text
                    .push_str(if word.text.is_empty() { " " } else { &word.text });
                run.words.push(word.clone());
            }
            continue;
        }

        match current.as_mut() {
            Some(run) if run.speaker_id == word.speaker_id => {
                run.end = word.end;
                if !run.text.is_empty() {
                    run.text.push(' ');
                }
                run.text.push_str(&word.text);
                run.words.push(word.clone());
            }
            _ => {
                if let Some(done) = current.take() {
                    segments.push(done);
                }
                current = Some(open_segment(segments.len(), word));
            }
        }
    }

    if let Some(done) = current {
        segments.push(done);
    }

    segments
}

/// Largest segment `end`, or 0.0 for an empty transcript. Used as the
/// timeline duration when the media element has not reported one yet.
pub fn duration(segments: &[TranscriptSegment]) -> f64 {
    segments.iter().map(|s| s.end).fold(0.0, f64::max)
}

fn open_segment(index: usize, word: &TranscriptWord) -> TranscriptSegment {
    TranscriptSegment {
        id: format!("segment_{index}"),
        speaker_id: word.speaker_id.clone(),
        start: word.start,
        end: word.end,
        text: word.text.clone(),
        words: vec![word.clone()],
    }
}
