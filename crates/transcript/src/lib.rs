pub mod input;
pub mod segment;
pub mod speakers;
pub mod time;
pub mod types;

pub use input::{LoadedTranscript, RawTranscription, SavedTranscription};
pub use segment::group_words;
pub use speakers::extract_speakers;
pub use types::{Speaker, TranscriptData, TranscriptSegment, TranscriptWord, WordKind};
