use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Default cap for uploaded files; sales exports are small.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Upload handling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_upload_bytes: usize,
}

impl UploadConfig {
    /// Load upload settings from environment variables
    pub fn from_env() -> Result<Self> {
        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration("Invalid MAX_UPLOAD_BYTES".to_string()))?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self { max_upload_bytes })
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
