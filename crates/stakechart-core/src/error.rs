pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("allocation JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid chart config: {message}")]
    InvalidConfig { message: String },
}
