use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Store version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}
