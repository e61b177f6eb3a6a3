// src/error/types.rs
use crate::domain::{DomainError, ReferenceKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// A name could not be resolved to an id; `source` is the underlying failure
    #[error("Failed to resolve {kind} '{name}': {source}")]
    ResolutionFailed {
        kind: ReferenceKind,
        name: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl CatalogError {
    pub fn resolution_failed(kind: ReferenceKind, name: &str, source: CatalogError) -> Self {
        CatalogError::ResolutionFailed {
            kind,
            name: name.to_string(),
            source: Box::new(source),
        }
    }

    /// True for failed HTTP calls (transport failure or non-success status),
    /// looking through resolution wrappers
    pub fn is_network_or_backend(&self) -> bool {
        match self {
            CatalogError::Transport(_) | CatalogError::Backend { .. } => true,
            CatalogError::ResolutionFailed { source, .. } => source.is_network_or_backend(),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        match self {
            CatalogError::Validation(_) => true,
            CatalogError::ResolutionFailed { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

impl Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_failure_keeps_source() {
        let err = CatalogError::resolution_failed(
            ReferenceKind::Genre,
            "Noir",
            CatalogError::Backend {
                status: 500,
                message: "boom".to_string(),
            },
        );

        assert!(err.is_network_or_backend());
        assert_eq!(
            err.to_string(),
            "Failed to resolve genre 'Noir': Backend returned status 500: boom"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Backend returned status 500: boom"));
    }

    #[test]
    fn test_validation_is_not_network() {
        let err = CatalogError::Validation(DomainError::EmptyName {
            kind: ReferenceKind::CrewMember,
        });
        assert!(err.is_validation());
        assert!(!err.is_network_or_backend());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&CatalogError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }
}
