use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown joint: {0:?}")]
    UnknownJoint(String),

    #[error("pose field `{field}` is not finite")]
    NonFinite { field: &'static str },
}

pub type Result<T> = std::result::Result<T, RigError>;
