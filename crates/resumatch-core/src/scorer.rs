//! Composite scoring of one candidate against one query

use crate::config::ScoringWeights;
use crate::error::{ConfigError, QueryError};
use crate::types::{Candidate, ExperienceMatch, MatchResult, Query};
use std::collections::BTreeSet;

/// Weighted sum of content similarity and structured-feature signals
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    weights: ScoringWeights,
}

impl CompositeScorer {
    /// Fails when the weights could push a score outside [0, 1].
    pub fn new(weights: ScoringWeights) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a candidate. The result is unranked (`rank == 0`).
    pub fn score(
        &self,
        candidate: &Candidate,
        query: &Query,
        content_similarity: f64,
    ) -> Result<MatchResult, QueryError> {
        candidate
            .validate()
            .map_err(|reason| QueryError::InternalInvariant {
                identifier: candidate.identifier.clone(),
                reason,
            })?;

        let content_similarity = content_similarity.clamp(0.0, 1.0);
        let matching_skills = matching_skills(&candidate.skills, &query.skills);
        let skill_fraction = skill_fraction(matching_skills.len(), query.skills.len());
        let experience = experience_match(
            candidate.experience.minimum_years,
            query.experience.minimum_years,
        );
        let education = education_match(&candidate.education, &query.education);

        let w = &self.weights;
        let score = content_similarity * w.content_similarity
            + skill_fraction * w.skill_match
            + indicator(experience.meets_minimum) * w.experience_match
            + indicator(education) * w.education_match;

        Ok(MatchResult {
            identifier: candidate.identifier.clone(),
            score: score.clamp(0.0, 1.0),
            content_similarity,
            matching_skills,
            skill_match_fraction: round2(skill_fraction * 100.0),
            experience_match: experience,
            education_match: education,
            rank: 0,
        })
    }
}

/// Sorted intersection of candidate and query skills.
pub fn matching_skills(candidate: &BTreeSet<String>, query: &BTreeSet<String>) -> Vec<String> {
    candidate.intersection(query).cloned().collect()
}

/// `matched / required`, 0 when nothing is required.
pub fn skill_fraction(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64
}

pub fn experience_match(candidate_years: f64, required_years: f64) -> ExperienceMatch {
    ExperienceMatch {
        meets_minimum: candidate_years >= required_years,
        years_difference: candidate_years - required_years,
    }
}

/// True when any requested credential appears, case-insensitively, inside the
/// candidate's education entries joined by spaces.
pub fn education_match(candidate: &[String], query: &[String]) -> bool {
    let haystack = candidate.join(" ").to_lowercase();
    query
        .iter()
        .map(|q| q.trim().to_lowercase())
        .any(|needle| !needle.is_empty() && haystack.contains(&needle))
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
