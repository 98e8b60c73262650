//! Configuration for composite scoring

use crate::error::ConfigError;
use resumatch_extract::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weight of each signal in the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// TF-IDF cosine similarity of the full texts
    pub content_similarity: f64,

    /// Fraction of the query's skills the candidate has
    pub skill_match: f64,

    /// Candidate meets the stated minimum years
    pub experience_match: f64,

    /// Candidate's education mentions a requested credential
    pub education_match: f64,
}

impl ScoringWeights {
    pub fn new() -> Self {
        Self {
            content_similarity: 0.4,
            skill_match: 0.3,
            experience_match: 0.2,
            education_match: 0.1,
        }
    }

    pub fn sum(&self) -> f64 {
        self.content_similarity + self.skill_match + self.experience_match + self.education_match
    }

    /// Weights must be finite, non-negative and sum to 1 so scores stay in [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("content_similarity", self.content_similarity),
            ("skill_match", self.skill_match),
            ("experience_match", self.experience_match),
            ("education_match", self.education_match),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Matcher configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub weights: ScoringWeights,

    pub extractor: ExtractorConfig,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; omitted fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.weights.validate()?;
        Ok(config)
    }
}
