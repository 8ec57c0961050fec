//! Prompt contract for the extraction collaborator.

use debrief_transcript::{TranscriptData, group_words, time};
use indoc::formatdoc;

/// Theme vocabulary offered to the collaborator, one per fact. Must stay in
/// lockstep with [`debrief_facts::Theme`]; the test below enforces it.
pub const THEMES: [&str; 21] = [
    "User Behavior",
    "Needs",
    "Painpoint",
    "Visual Design",
    "Expectation",
    "Routine",
    "Security",
    "Motivation",
    "Frustration",
    "Accessibility",
    "Mental Models",
    "Workaround",
    "Language and Terminology",
    "Technical Limitation",
    "Suggestions",
    "Retention Drivers",
    "Decision Making Process",
    "Satisfaction",
    "Preference",
    "Comparative Feedback",
    "Usability",
];

pub fn build_system_prompt(data_type: &str, product: &str, feature: &str) -> String {
    formatdoc! {r#"
        # ROLE

        You are a Senior UX Research Operations Bot. Your sole purpose is to "shred" interview transcripts into "Atomic Nuggets" (Facts).

        # CONTEXT

        - Data Type: {data_type}
        - Product: {product}
        - Feature: {feature}

        # TASK

        Analyze the provided JSON transcript. Extract every significant observation, friction point, or insight.

        # EXTRACTION RULES (STRICT ACCURACY)

        1. NO PARAPHRASING: The `verbatim_quote` must be a direct word-for-word string from the transcript.
        2. TIMESTAMPS: Use the exact start time provided in the transcript JSON, formatted as HH:MM:SS.
        3. SINGLE THEME: Choose exactly ONE theme per fact from the provided list.
        4. ATOMICITY: Each fact must represent only ONE idea. If a user mentions two pain points, create two separate facts.

        # THEME LIST (STRICT ENUM)

        {themes}

        # OUTPUT FORMAT

        Return ONLY a valid JSON object matching the provided schema. Do not include any narrative text or explanations."#,
        themes = THEMES.join(", "),
    }
}

#[derive(serde::Serialize)]
struct PromptSegment<'a> {
    start_time: String,
    end_time: String,
    speaker_id: &'a str,
    text: &'a str,
}

#[derive(serde::Serialize)]
struct PromptTranscript<'a> {
    text: &'a str,
    language_code: &'a str,
    segments: Vec<PromptSegment<'a>>,
}

/// Renders the transcript as speaker turns with `HH:MM:SS` bounds — the
/// shape the timestamp extraction rule above refers to.
pub fn format_transcript(data: &TranscriptData) -> Result<String, serde_json::Error> {
    let segments = group_words(&data.words);

    let prompt = PromptTranscript {
        text: &data.text,
        language_code: &data.language_code,
        segments: segments
            .iter()
            .map(|segment| PromptSegment {
                start_time: time::format_hhmmss(segment.start),
                end_time: time::format_hhmmss(segment.end),
                speaker_id: &segment.speaker_id,
                text: &segment.text,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use debrief_transcript::{TranscriptWord, WordKind};
    use std::str::FromStr;

    #[test]
    fn theme_list_matches_the_enum() {
        for theme in THEMES {
            assert!(
                debrief_facts::Theme::from_str(theme).is_ok(),
                "prompt theme {theme:?} has no enum counterpart"
            );
        }
    }

    #[test]
    fn system_prompt_carries_context_and_themes() {
        let prompt = build_system_prompt("Usability Test", "Dashboard", "Attrition view");

        assert!(prompt.contains("Data Type: Usability Test"));
        assert!(prompt.contains("Product: Dashboard"));
        assert!(prompt.contains("Feature: Attrition view"));
        assert!(prompt.contains("User Behavior, Needs, Painpoint"));
    }

    #[test]
    fn transcript_renders_as_timed_speaker_turns() {
        let data = TranscriptData {
            language_code: "en".into(),
            language_probability: 0.99,
            text: "Hello there".into(),
            words: vec![
                TranscriptWord {
                    text: "Hello".into(),
                    start: 0.0,
                    end: 1.0,
                    kind: WordKind::Word,
                    speaker_id: "speaker_0".into(),
                },
                TranscriptWord {
                    text: "there".into(),
                    start: 61.0,
                    end: 62.0,
                    kind: WordKind::Word,
                    speaker_id: "speaker_1".into(),
                },
            ],
        };

        let rendered = format_transcript(&data).unwrap();

        assert!(rendered.contains("\"start_time\": \"00:00:00\""));
        assert!(rendered.contains("\"start_time\": \"00:01:01\""));
        assert!(rendered.contains("\"speaker_id\": \"speaker_1\""));
    }
}
