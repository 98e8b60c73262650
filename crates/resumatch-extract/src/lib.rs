//! Text and structured-feature extraction for resumes and job descriptions

mod error;
mod features;
mod skills;
mod text;

pub use error::ExtractError;
pub use features::{Experience, ExtractorConfig, FeatureExtractor, RuleBasedExtractor};
pub use skills::normalize_skill;
pub use text::{extract_text, DocumentFormat};
