use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Wrap a persistence-layer failure. Transport errors carry no domain
    /// meaning and are propagated unchanged up to the HTTP layer.
    pub fn infrastructure(err: impl std::fmt::Display) -> Self {
        Self::Infrastructure(err.to_string())
    }
}
