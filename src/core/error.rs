use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Uploaded CSV columns do not match the expected layout
    #[error("CSV columns do not match the expected layout")]
    SchemaMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    /// A monetary cell could not be converted to a number
    #[error("cannot parse '{value}' in column '{column}' at row {row}: {reason}")]
    Conversion {
        column: String,
        value: String,
        row: usize,
        reason: String,
    },

    /// Any other parsing or aggregation failure; carries a preview of the
    /// raw parsed rows for diagnosis
    #[error("CSV processing failed: {message}")]
    Processing {
        message: String,
        preview: Vec<Vec<String>>,
    },

    /// Malformed or oversized upload
    #[error("Upload error: {0}")]
    Upload(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for the HTTP error body
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SchemaMismatch { .. } => "SCHEMA_MISMATCH",
            AppError::Conversion { .. } => "CONVERSION_ERROR",
            AppError::Processing { .. } => "PROCESSING_ERROR",
            AppError::Upload(_) => "UPLOAD_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });

        // Attach variant-specific detail so the caller can show what was
        // found next to what was expected.
        match self {
            AppError::SchemaMismatch { found, expected } => {
                body["error"]["found"] = serde_json::json!(found);
                body["error"]["expected"] = serde_json::json!(expected);
            }
            AppError::Conversion {
                column, value, row, ..
            } => {
                body["error"]["column"] = serde_json::json!(column);
                body["error"]["value"] = serde_json::json!(value);
                body["error"]["row"] = serde_json::json!(row);
            }
            AppError::Processing { preview, .. } if !preview.is_empty() => {
                body["error"]["preview"] = serde_json::json!(preview);
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SchemaMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conversion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Processing { .. } => StatusCode::BAD_REQUEST,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn upload(msg: impl Into<String>) -> Self {
        AppError::Upload(msg.into())
    }

    pub fn processing(msg: impl Into<String>, preview: Vec<Vec<String>>) -> Self {
        AppError::Processing {
            message: msg.into(),
            preview,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
