// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors to user-facing responses
// - Provides a consistent error format for JSON output
// - Logs the full error for debugging

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Standard error response for callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Backend unreachable or answered with an error (502)
    ExternalService,

    /// Bad configuration
    Configuration,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    /// Process exit code used by the CLI for this category
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorType::NotFound => 3,
            ErrorType::Validation => 2,
            ErrorType::ExternalService => 4,
            ErrorType::Configuration => 5,
            ErrorType::Internal => 1,
        }
    }
}

impl ErrorResponse {
    pub fn from_catalog_error(error: &CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::not_found("Resource"),

            CatalogError::Validation(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            CatalogError::Transport(_) | CatalogError::Backend { .. } => {
                log::error!("Backend error: {:?}", error);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Catalog backend request failed".to_string(),
                    details: Some(error.to_string()),
                }
            }

            CatalogError::ResolutionFailed { source, .. } => {
                let inner = Self::from_catalog_error(source);
                Self {
                    details: Some(error.to_string()),
                    ..inner
                }
            }

            CatalogError::Decode(_) => {
                log::error!("Decode error: {:?}", error);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Unexpected backend response".to_string(),
                    details: Some(error.to_string()),
                }
            }

            CatalogError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Invalid configuration".to_string(),
                details: Some(message.clone()),
            },

            CatalogError::Io(io_error) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message: "File system operation failed".to_string(),
                details: Some(io_error.to_string()),
            },

            CatalogError::Serialization(serde_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Malformed JSON input".to_string(),
                details: Some(serde_error.to_string()),
            },

            CatalogError::Other(message) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message: message.clone(),
                details: None,
            },
        }
    }

    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

impl From<CatalogError> for ErrorResponse {
    fn from(error: CatalogError) -> Self {
        Self::from_catalog_error(&error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}
