use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatzError {
    /// An action names a reducer kind nobody registered. Replaying past it
    /// would misrepresent history, so the whole query fails.
    #[error("Unknown reducer kind '{kind}' in action at {time}")]
    UnknownReducerKind { time: String, kind: String },

    #[error("Unknown reducer kind '{kind}' (registered: {registered})")]
    UnregisteredKind { kind: String, registered: String },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid payload entry '{0}' (expected name=number)")]
    InvalidPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StatzError>;
