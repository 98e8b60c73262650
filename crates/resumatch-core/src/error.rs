//! Error taxonomy for ingestion, querying and configuration

use resumatch_extract::ExtractError;
use resumatch_index::IndexError;
use thiserror::Error;

/// Who is at fault for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable
    BadInput,
    /// The request is valid but the current state cannot serve it
    SystemState,
    /// A bug: an invariant the engine relies on does not hold
    InternalDefect,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("candidate identifier must not be empty")]
    EmptyIdentifier,

    #[error("unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("could not read text from {filename}: {reason}")]
    TextDecode { filename: String, reason: String },

    #[error("feature extraction failed for {identifier}: {source}")]
    FeatureExtraction {
        identifier: String,
        #[source]
        source: ExtractError,
    },
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyIdentifier | Self::UnsupportedFormat { .. } | Self::TextDecode { .. } => {
                ErrorKind::BadInput
            }
            Self::FeatureExtraction { .. } => ErrorKind::SystemState,
        }
    }

    pub(crate) fn from_extract(identifier: &str, err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat { filename } => Self::UnsupportedFormat { filename },
            ExtractError::Decode { filename, reason } => Self::TextDecode { filename, reason },
            source @ ExtractError::Feature(_) => Self::FeatureExtraction {
                identifier: identifier.to_string(),
                source,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no candidates have been ingested")]
    NoCandidates,

    #[error("feature extraction failed for query text: {0}")]
    FeatureExtraction(#[source] ExtractError),

    #[error("stored candidate {identifier} violates an invariant: {reason}")]
    InternalInvariant { identifier: String, reason: String },
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCandidates => ErrorKind::SystemState,
            Self::FeatureExtraction(_) => ErrorKind::BadInput,
            Self::InternalInvariant { .. } => ErrorKind::InternalDefect,
        }
    }
}

impl From<IndexError> for QueryError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::EmptyCorpus => Self::NoCandidates,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
}
