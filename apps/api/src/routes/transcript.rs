use axum::{Json, extract::Path, extract::State};
use debrief_transcript::SavedTranscription;

use crate::error::Result;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/transcript/{id}",
    params(("id" = String, Path, description = "Transcript identifier")),
    responses(
        (status = 200, description = "Saved transcription", body = SavedTranscription),
        (status = 404, description = "No transcription stored under this id"),
    ),
    tag = "transcript",
)]
pub async fn load(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedTranscription>> {
    let saved = state.store.load_transcript(&id).await?;
    Ok(Json(saved))
}
