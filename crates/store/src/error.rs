#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no stored data for this id")]
    NotFound,
    #[error("id is not a valid store key")]
    InvalidId,
    #[error("stored JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
