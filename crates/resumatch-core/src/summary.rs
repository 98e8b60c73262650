//! Aggregate statistics over one ranked result set

use crate::types::{MatchResult, Query};
use serde::{Deserialize, Serialize};

/// Stated and required years for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperiencePoint {
    pub identifier: String,
    pub years: f64,
    pub required: f64,
}

/// Overview of a query's results. Averages and rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_candidates: usize,
    pub average_score: f64,
    pub average_skill_match: f64,
    pub experience_match_rate: f64,
    pub education_match_rate: f64,
    pub required_years: f64,
    pub experience_distribution: Vec<ExperiencePoint>,
}

impl MatchSummary {
    /// Summarize `results` in their given order. `None` for an empty set.
    pub fn from_results(results: &[MatchResult], query: &Query) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let n = results.len() as f64;
        let required = query.experience.minimum_years;

        let score_sum: f64 = results.iter().map(|r| r.score).sum();
        let skill_sum: f64 = results.iter().map(|r| r.skill_match_fraction).sum();
        let experience_hits = results
            .iter()
            .filter(|r| r.experience_match.meets_minimum)
            .count();
        let education_hits = results.iter().filter(|r| r.education_match).count();

        let experience_distribution = results
            .iter()
            .map(|r| ExperiencePoint {
                identifier: r.identifier.clone(),
                years: required + r.experience_match.years_difference,
                required,
            })
            .collect();

        Some(Self {
            total_candidates: results.len(),
            average_score: score_sum / n * 100.0,
            average_skill_match: skill_sum / n,
            experience_match_rate: experience_hits as f64 / n * 100.0,
            education_match_rate: education_hits as f64 / n * 100.0,
            required_years: required,
            experience_distribution,
        })
    }
}
