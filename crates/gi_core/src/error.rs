use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Play not found: {0}")]
    PlayNotFound(String),

    #[error("No play selected")]
    NoPlaySelected,

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
