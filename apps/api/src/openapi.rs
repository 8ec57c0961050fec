use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "debrief-api",
        description = "Media and transcript review engine: synchronized transcript loading, fact extraction and validation, and byte-range media serving.",
    ),
    paths(
        routes::transcript::load,
        routes::facts::load,
        routes::facts::save,
        routes::facts::generate,
    ),
    components(schemas(
        debrief_transcript::SavedTranscription,
        debrief_facts::Fact,
        debrief_facts::Sentiment,
        debrief_facts::Theme,
    )),
    tags(
        (name = "transcript", description = "Saved transcription access"),
        (name = "facts", description = "Fact storage and extraction"),
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
