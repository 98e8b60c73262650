//! Matching and ranking engine: store, composite scorer, ranker

mod config;
mod error;
mod matcher;
pub mod ranker;
pub mod scorer;
mod store;
mod summary;
mod types;

pub use config::{MatcherConfig, ScoringWeights};
pub use error::{ConfigError, ErrorKind, IngestError, QueryError};
pub use matcher::Matcher;
pub use scorer::CompositeScorer;
pub use store::{DocumentStore, Snapshot};
pub use summary::{ExperiencePoint, MatchSummary};
pub use types::{Candidate, ExperienceMatch, MatchResult, Query};

pub use resumatch_extract::{Experience, ExtractorConfig, FeatureExtractor, RuleBasedExtractor};
