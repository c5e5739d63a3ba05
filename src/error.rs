use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("device enumeration failed: {0}")]
    Enumeration(String),
}

#[derive(Debug, Error)]
pub enum AdaptError {
    #[error("lesson content fetch failed: {0}")]
    LessonFetch(#[from] StoreError),
}
