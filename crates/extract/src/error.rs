#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The collaborator errored or was unreachable. Reported to the caller
    /// with its message; never retried automatically.
    #[error("extraction service failed: {0}")]
    Upstream(String),

    #[error("extraction response could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
}
