use axum::{Json, extract::Path, extract::State};
use debrief_extract::ExtractionRequest;
use debrief_facts::Fact;
use debrief_transcript::TranscriptData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct FactsResponse {
    pub facts: Vec<Fact>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveFactsRequest {
    pub facts: Vec<Fact>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveFactsResponse {
    pub success: bool,
    pub count: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateFactsRequest {
    pub transcript_data: Option<TranscriptData>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub feature: Option<String>,
}

#[utoipa::path(
    get,
    path = "/facts/{id}",
    params(("id" = String, Path, description = "Transcript identifier")),
    responses(
        (status = 200, description = "Stored facts, empty if never saved", body = FactsResponse),
    ),
    tag = "facts",
)]
pub async fn load(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FactsResponse>> {
    let facts = state.store.load_facts(&id).await?;
    Ok(Json(FactsResponse { facts }))
}

#[utoipa::path(
    post,
    path = "/facts/{id}",
    params(("id" = String, Path, description = "Transcript identifier")),
    request_body = SaveFactsRequest,
    responses(
        (status = 200, description = "Facts persisted", body = SaveFactsResponse),
        (status = 400, description = "Body is not a fact array"),
    ),
    tag = "facts",
)]
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SaveFactsRequest>,
) -> Result<Json<SaveFactsResponse>> {
    state.store.save_facts(&id, &payload.facts).await?;

    Ok(Json(SaveFactsResponse {
        success: true,
        count: payload.facts.len(),
    }))
}

#[utoipa::path(
    post,
    path = "/facts/generate",
    request_body = GenerateFactsRequest,
    responses(
        (status = 200, description = "Validated facts extracted from the transcript", body = FactsResponse),
        (status = 400, description = "Missing transcript or research context"),
        (status = 502, description = "Extraction collaborator failed"),
    ),
    tag = "facts",
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateFactsRequest>,
) -> Result<Json<FactsResponse>> {
    let Some(transcript_data) = payload.transcript_data else {
        return Err(ApiError::BadRequest("Transcript data is required".to_string()));
    };

    let (Some(data_type), Some(product), Some(feature)) =
        (payload.data_type, payload.product, payload.feature)
    else {
        return Err(ApiError::BadRequest(
            "Data Type, Product, and Feature are required".to_string(),
        ));
    };

    let request = ExtractionRequest {
        data_type,
        product,
        feature,
    };

    let facts = state
        .extractor()?
        .extract(&transcript_data, &request)
        .await
        .map_err(|error| match error {
            debrief_extract::Error::Upstream(message) => ApiError::Upstream(message),
            debrief_extract::Error::Malformed(_) => {
                ApiError::Upstream("Failed to parse extraction response. Please try again.".to_string())
            }
        })?;

    tracing::info!(accepted = facts.len(), "facts_generated");
    Ok(Json(FactsResponse { facts }))
}
