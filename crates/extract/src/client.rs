use debrief_facts::{Fact, filter_verified};
use debrief_http::HttpClient;
use debrief_transcript::TranscriptData;

use crate::error::Error;
use crate::prompt::{build_system_prompt, format_transcript};

/// Research context the collaborator needs to shred a transcript. All three
/// fields are required; the API layer rejects requests missing any of them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExtractionRequest {
    pub data_type: String,
    pub product: String,
    pub feature: String,
}

#[derive(serde::Serialize)]
struct CollaboratorRequest<'a> {
    system: &'a str,
    input: &'a str,
}

#[derive(serde::Deserialize)]
struct CollaboratorResponse {
    #[serde(default)]
    facts: Vec<Fact>,
}

pub struct ExtractionClient<C> {
    http: C,
}

impl<C: HttpClient> ExtractionClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// One extraction round trip: prompt out, candidate facts back, then the
    /// verbatim-quote filter. Rejected quotes are dropped silently (with a
    /// diagnostic) — only transport and parse problems are errors.
    pub async fn extract(
        &self,
        data: &TranscriptData,
        request: &ExtractionRequest,
    ) -> Result<Vec<Fact>, Error> {
        let system = build_system_prompt(&request.data_type, &request.product, &request.feature);
        let transcript = format_transcript(data)?;
        let input = format!("Here is the transcript to analyze:\n\n{transcript}");

        let body = serde_json::to_vec(&CollaboratorRequest {
            system: &system,
            input: &input,
        })?;

        let bytes = self
            .http
            .post("/extract", body, "application/json")
            .await
            .map_err(|error| Error::Upstream(error.to_string()))?;

        let response: CollaboratorResponse = serde_json::from_slice(&bytes)?;

        tracing::info!(candidates = response.facts.len(), "extraction_response");
        Ok(filter_verified(response.facts, &data.text))
    }
}
