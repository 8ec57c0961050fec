use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::MediaError;
use crate::range::{ByteRange, parse_range};
use crate::resolve::{MediaDir, ResolvedMedia, is_safe_id};

/// Media files are content-addressed by id, safe to cache forever.
const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

pub fn router(media: MediaDir) -> Router {
    Router::new()
        .route("/{id}", get(serve))
        .with_state(media)
}

async fn serve(
    State(media): State<MediaDir>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, MediaError> {
    if !is_safe_id(&id) {
        return Err(MediaError::InvalidId);
    }

    let resolved = media.resolve(&id).await.ok_or(MediaError::NotFound)?;

    // A malformed or unsatisfiable range degrades to the full resource
    // instead of failing the request.
    let range = headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| parse_range(value, resolved.size));

    match range {
        Some(range) => {
            tracing::debug!(
                id = %id,
                start = range.start,
                end = range.end,
                size = resolved.size,
                "media_partial_request"
            );
            partial_response(&resolved, range).await
        }
        None => full_response(&resolved).await,
    }
}

async fn partial_response(
    media: &ResolvedMedia,
    range: ByteRange,
) -> Result<Response, MediaError> {
    let mut file = tokio::fs::File::open(&media.path).await?;
    file.seek(std::io::SeekFrom::Start(range.start)).await?;
    let stream = ReaderStream::new(file.take(range.len()));

    let headers = [
        (header::CONTENT_RANGE, range.content_range(media.size)),
        (header::ACCEPT_RANGES, "bytes".to_string()),
        (header::CONTENT_LENGTH, range.len().to_string()),
        (header::CONTENT_TYPE, media.mime.to_string()),
        (header::CACHE_CONTROL, CACHE_FOREVER.to_string()),
    ];

    Ok((StatusCode::PARTIAL_CONTENT, headers, Body::from_stream(stream)).into_response())
}

async fn full_response(media: &ResolvedMedia) -> Result<Response, MediaError> {
    let file = tokio::fs::File::open(&media.path).await?;
    let stream = ReaderStream::new(file);

    let headers = [
        (header::CONTENT_LENGTH, media.size.to_string()),
        (header::CONTENT_TYPE, media.mime.to_string()),
        (header::ACCEPT_RANGES, "bytes".to_string()),
        (header::CACHE_CONTROL, CACHE_FOREVER.to_string()),
    ];

    Ok((StatusCode::OK, headers, Body::from_stream(stream)).into_response())
}
