use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Unknown user role `{0}`")]
    UnknownRole(String),

    #[error("Unknown activity game type `{0}`")]
    UnknownGameType(String),

    #[error("Received invalid json data")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = TransformError> = std::result::Result<T, E>;
