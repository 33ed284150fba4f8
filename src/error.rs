use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum SrfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Recipe service error (status: {status:?}): {message}")]
    Api {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SrfError {
    pub fn api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        SrfError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SrfError::Validation(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            SrfError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            SrfError::Network(e) => ErrorPayload::new(
                ErrorCategory::Network,
                e.to_string(),
                "Check that the recipe service is running and reachable, then retry.",
            ),
            SrfError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Verify the API base URL (e.g., http://127.0.0.1:5000).",
            ),
            SrfError::Api { status, message } => ErrorPayload::new(
                ErrorCategory::Api,
                format!("Recipe service error (status {:?}): {}", status, message),
                "Check the request inputs and the service logs; retry after fixing.",
            ),
            SrfError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "The service response or store file is not valid JSON; run with --verbose for details.",
            ),
            SrfError::Validation(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("rating") {
                    ErrorPayload::new(
                        ErrorCategory::Validation,
                        msg.to_string(),
                        "Use a rating between 1 and 5, e.g., --stars 4.",
                    )
                } else if lower.contains("ingredient") {
                    ErrorPayload::new(
                        ErrorCategory::Validation,
                        msg.to_string(),
                        "Pass a comma-separated list, e.g., --ingredients \"egg, milk\", or detect from an image with --image.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Validation,
                        msg.to_string(),
                        "Check the command inputs; see --help for usage.",
                    )
                }
            }
            SrfError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check the config file (TOML) and flags; SRF_API_URL overrides the configured base URL.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SrfError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Api,
    Validation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
