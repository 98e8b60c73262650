//! Core types for candidates, queries and match results

use chrono::{DateTime, Utc};
use resumatch_extract::{normalize_skill, Experience};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A processed resume held by the document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub identifier: String,
    pub raw_text: String,
    pub skills: BTreeSet<String>,
    pub experience: Experience,
    pub education: Vec<String>,
    pub ingested_at: DateTime<Utc>,
}

impl Candidate {
    pub fn new(
        identifier: impl Into<String>,
        raw_text: impl Into<String>,
        skills: impl IntoIterator<Item = String>,
        experience: Experience,
        education: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
            skills: normalize_skills(skills),
            experience,
            education,
            ingested_at: Utc::now(),
        }
    }

    /// Check the fields every stored candidate must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.identifier.is_empty() {
            return Err("identifier is empty".to_string());
        }
        let years = self.experience.minimum_years;
        if !years.is_finite() || years < 0.0 {
            return Err(format!("minimum_years must be a non-negative number, got {}", years));
        }
        if self.skills.iter().any(String::is_empty) {
            return Err("skill set contains an empty entry".to_string());
        }
        Ok(())
    }
}

/// A job description with features derived for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub skills: BTreeSet<String>,
    pub experience: Experience,
    pub education: Vec<String>,
}

impl Query {
    pub fn new(
        text: impl Into<String>,
        skills: impl IntoIterator<Item = String>,
        experience: Experience,
        education: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            skills: normalize_skills(skills),
            experience,
            education,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub meets_minimum: bool,
    /// Candidate years minus required years
    pub years_difference: f64,
}

/// Score and explanation for one candidate against one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub identifier: String,
    pub score: f64,
    pub content_similarity: f64,
    pub matching_skills: Vec<String>,
    /// Percentage 0-100, two decimals
    pub skill_match_fraction: f64,
    pub experience_match: ExperienceMatch,
    pub education_match: bool,
    /// 1-based; 0 until ranked
    pub rank: usize,
}

fn normalize_skills(skills: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    skills
        .into_iter()
        .map(|s| normalize_skill(&s))
        .filter(|s| !s.is_empty())
        .collect()
}
