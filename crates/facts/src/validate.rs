//! Verbatim-quote verification.
//!
//! The extraction collaborator is told not to paraphrase, but it does anyway.
//! Matching is tiered and case-insensitive: exact substring, then substring
//! with whitespace runs collapsed on both sides, then — for very short quotes
//! only — a lenient check that every meaningful token appears somewhere in
//! the transcript. A quote failing all tiers marks the fact unverifiable.

use crate::types::Fact;

#[derive(Debug, Clone, Copy)]
pub struct QuoteValidator {
    /// Quotes shorter than this (after trimming) get the lenient tier.
    pub short_quote_len: usize,
    /// Tokens must be longer than this to count in the lenient tier.
    pub min_token_len: usize,
}

impl Default for QuoteValidator {
    fn default() -> Self {
        Self {
            short_quote_len: 10,
            min_token_len: 2,
        }
    }
}

impl QuoteValidator {
    pub fn is_verbatim(&self, quote: &str, transcript: &str) -> bool {
        let quote = quote.trim().to_lowercase();
        let transcript = transcript.to_lowercase();

        if transcript.contains(&quote) {
            return true;
        }

        let collapsed_quote = collapse_whitespace(&quote);
        if collapse_whitespace(&transcript).contains(&collapsed_quote) {
            return true;
        }

        if quote.chars().count() < self.short_quote_len {
            return quote
                .split_whitespace()
                .filter(|token| token.chars().count() > self.min_token_len)
                .all(|token| transcript.contains(token));
        }

        false
    }
}

/// Drops facts whose quotes cannot be verified against the transcript text.
/// Rejection is a filtering decision, not an error: the fact is skipped with
/// a diagnostic and the rest of the batch is kept. Surviving facts without a
/// collaborator-assigned id get one here.
pub fn filter_verified(facts: Vec<Fact>, transcript_text: &str) -> Vec<Fact> {
    let validator = QuoteValidator::default();
    let mut accepted = Vec::with_capacity(facts.len());

    for mut fact in facts {
        if validator.is_verbatim(&fact.verbatim_quote, transcript_text) {
            fact.ensure_id(accepted.len());
            accepted.push(fact);
        } else {
            tracing::warn!(
                quote = %quote_preview(&fact.verbatim_quote),
                "fact_quote_not_in_transcript"
            );
        }
    }

    accepted
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn quote_preview(quote: &str) -> &str {
    match quote.char_indices().nth(50) {
        Some((index, _)) => &quote[..index],
        None => quote,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentiment, Theme};

    fn fact(quote: &str) -> Fact {
        Fact {
            fact_id: String::new(),
            verbatim_quote: quote.to_string(),
            timestamp: "00:00:10".to_string(),
            speaker_label: "Speaker 1".to_string(),
            sentiment: Sentiment::Neutral,
            theme: Theme::Usability,
            summary_of_observation: String::new(),
        }
    }

    #[test]
    fn exact_substring_matches_case_insensitively() {
        let validator = QuoteValidator::default();
        assert!(validator.is_verbatim("Hello World", "well, hello world again"));
    }

    #[test]
    fn collapsed_whitespace_matches() {
        let validator = QuoteValidator::default();
        assert!(validator.is_verbatim("hello world", "...HELLO   WORLD..."));
        assert!(validator.is_verbatim("hello  world", "say hello world now"));
    }

    #[test]
    fn short_quotes_match_on_tokens() {
        let validator = QuoteValidator::default();
        // "ok" is the only token and is too short to count, so the lenient
        // tier vacuously accepts; this mirrors the original behavior.
        assert!(validator.is_verbatim("ok", "the ok button"));
        assert!(validator.is_verbatim("the map", "I opened the map view"));
        assert!(!validator.is_verbatim("the zzz", "I opened the map view"));
    }

    #[test]
    fn long_unmatched_quotes_are_rejected() {
        let validator = QuoteValidator::default();
        assert!(!validator.is_verbatim("never said", "completely unrelated text"));
    }

    #[test]
    fn filter_drops_unverifiable_and_assigns_ids() {
        let facts = vec![
            fact("I really liked the dashboard"),
            fact("this was never said anywhere"),
            fact("confusing navigation"),
        ];
        let transcript = "I really liked the dashboard but found the confusing navigation hard";

        let accepted = filter_verified(facts, transcript);

        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].fact_id, "FACT_01");
        assert_eq!(accepted[1].fact_id, "FACT_02");
    }

    #[test]
    fn filter_accepts_empty_batch() {
        assert!(filter_verified(vec![], "anything").is_empty());
    }

    #[test]
    fn multibyte_quotes_do_not_panic_the_preview() {
        let quote = "é".repeat(80);
        assert_eq!(quote_preview(&quote).chars().count(), 50);
    }
}
