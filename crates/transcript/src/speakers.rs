//! Speaker derivation and deterministic display colors.

use std::collections::BTreeSet;

use crate::types::{Speaker, TranscriptData};

/// Fixed palette sized for the transcription source's 32-speaker limit.
const SPEAKER_PALETTE: [&str; 32] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
    "#f97316", "#6366f1", "#14b8a6", "#a855f7", "#22c55e", "#eab308", "#f43f5e", "#0ea5e9",
    "#64748b", "#78716c", "#d97706", "#059669", "#dc2626", "#7c3aed", "#db2777", "#0891b2",
    "#65a30d", "#ea580c", "#4f46e5", "#0d9488", "#9333ea", "#be185d", "#0369a1", "#1e40af",
];

/// Deterministic palette color for an identifying string. Polynomial rolling
/// hash over UTF-16 code units with wrapping 32-bit arithmetic, so the same
/// key always renders the same color across sessions without a lookup table.
pub fn color_for(key: &str) -> &'static str {
    let mut hash: i32 = 0;
    for unit in key.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    SPEAKER_PALETTE[hash.unsigned_abs() as usize % SPEAKER_PALETTE.len()]
}

/// Derives the speaker list from the distinct `speaker_id` values in a
/// transcript. Ids are sorted for a stable ordering; display names are
/// `Speaker 1..N` and colors hash off the display name.
pub fn extract_speakers(data: &TranscriptData) -> Vec<Speaker> {
    let ids: BTreeSet<&str> = data
        .words
        .iter()
        .map(|w| w.speaker_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();

    ids.into_iter()
        .enumerate()
        .map(|(index, id)| {
            let name = format!("Speaker {}", index + 1);
            let color = color_for(&name).to_string();
            Speaker {
                id: id.to_string(),
                name,
                role: None,
                color,
            }
        })
        .collect()
}
