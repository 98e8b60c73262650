use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("could not read text from {filename}: {reason}")]
    Decode { filename: String, reason: String },

    #[error("feature extraction failed: {0}")]
    Feature(String),
}
