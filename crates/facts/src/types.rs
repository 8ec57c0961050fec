use debrief_transcript::time;

/// Window in seconds around a fact's timestamp inside which the fact counts
/// as "under the playhead". Facts carry a single timestamp rather than a
/// range, so activity is proximity, not containment.
pub const ACTIVE_WINDOW_SECS: f64 = 5.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// The fixed research-theme vocabulary the extraction collaborator is
/// instructed to choose from, one per fact. Wire form is the display string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Theme {
    #[serde(rename = "User Behavior")]
    #[strum(serialize = "User Behavior")]
    UserBehavior,
    Needs,
    Painpoint,
    #[serde(rename = "Visual Design")]
    #[strum(serialize = "Visual Design")]
    VisualDesign,
    Expectation,
    Routine,
    Security,
    Motivation,
    Frustration,
    Accessibility,
    #[serde(rename = "Mental Models")]
    #[strum(serialize = "Mental Models")]
    MentalModels,
    Workaround,
    #[serde(rename = "Language and Terminology")]
    #[strum(serialize = "Language and Terminology")]
    LanguageAndTerminology,
    #[serde(rename = "Technical Limitation")]
    #[strum(serialize = "Technical Limitation")]
    TechnicalLimitation,
    Suggestions,
    #[serde(rename = "Retention Drivers")]
    #[strum(serialize = "Retention Drivers")]
    RetentionDrivers,
    #[serde(rename = "Decision Making Process")]
    #[strum(serialize = "Decision Making Process")]
    DecisionMakingProcess,
    Satisfaction,
    Preference,
    #[serde(rename = "Comparative Feedback")]
    #[strum(serialize = "Comparative Feedback")]
    ComparativeFeedback,
    Usability,
}

/// One atomic observation extracted from a transcript by the collaborator.
/// The engine only validates the quote and places the timestamp; everything
/// else passes through untouched.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Fact {
    #[serde(default)]
    pub fact_id: String,
    pub verbatim_quote: String,
    /// `HH:MM:SS`, zero-padded.
    pub timestamp: String,
    pub speaker_label: String,
    pub sentiment: Sentiment,
    pub theme: Theme,
    pub summary_of_observation: String,
}

impl Fact {
    /// Timestamp as a numeric offset for timeline placement. Malformed
    /// timestamps place the fact at 0 rather than failing.
    pub fn seconds(&self) -> f64 {
        time::parse_timestamp(&self.timestamp)
    }

    /// Assigns `FACT_NN` when the collaborator omitted the id.
    pub fn ensure_id(&mut self, index: usize) {
        if self.fact_id.is_empty() {
            self.fact_id = format!("FACT_{:02}", index + 1);
        }
    }
}
