//! Structured features (skills, experience, education) from free text

use crate::error::ExtractError;
use crate::skills::{find_skills, DEFAULT_SKILLS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

static YEARS_RE: OnceLock<Regex> = OnceLock::new();
static DEGREE_RE: OnceLock<Regex> = OnceLock::new();
static IN_FIELD_RE: OnceLock<Regex> = OnceLock::new();
static OF_FIELD_RE: OnceLock<Regex> = OnceLock::new();

/// Years of experience stated in a document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Experience {
    pub minimum_years: f64,
}

impl Experience {
    pub fn new(minimum_years: f64) -> Self {
        Self { minimum_years }
    }
}

/// Extraction boundary consumed by the matching engine.
pub trait FeatureExtractor: Send + Sync {
    fn extract_skills(&self, text: &str) -> Result<BTreeSet<String>, ExtractError>;

    fn extract_experience(&self, text: &str) -> Result<Experience, ExtractError>;

    fn extract_education(&self, text: &str) -> Result<Vec<String>, ExtractError>;

    fn extract_text(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
        crate::text::extract_text(bytes, filename)
    }
}

/// Extractor settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Skill terms recognized in addition to the built-in vocabulary
    pub extra_skills: Vec<String>,
}

/// Dictionary and pattern based extractor.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedExtractor {
    config: ExtractorConfig,
}

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl FeatureExtractor for RuleBasedExtractor {
    fn extract_skills(&self, text: &str) -> Result<BTreeSet<String>, ExtractError> {
        let vocabulary = DEFAULT_SKILLS
            .iter()
            .copied()
            .chain(self.config.extra_skills.iter().map(String::as_str));
        Ok(find_skills(text, vocabulary))
    }

    /// Largest year count mentioned; the lower bound of a range counts.
    fn extract_experience(&self, text: &str) -> Result<Experience, ExtractError> {
        let re = YEARS_RE.get_or_init(|| {
            Regex::new(
                r"(?i)\b(\d{1,2}(?:\.\d+)?)\s*(?:\+|(?:-|–|to)\s*\d{1,2}(?:\.\d+)?)?\s*\+?\s*(?:years?|yrs?)\b",
            )
            .unwrap()
        });

        let years = re
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse::<f64>().ok())
            .fold(0.0f64, f64::max);
        Ok(Experience::new(years))
    }

    /// One entry per line naming a degree: the field of study when one
    /// follows "in" (or "of" when no "in" does), otherwise the trimmed line.
    fn extract_education(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let degree = DEGREE_RE.get_or_init(|| {
            Regex::new(
                r"(?i)\b(bachelor['’]?s?|master['’]?s?|ph\.?d|doctorate|mba|bsc|msc|b\.?sc?\.?|m\.?sc?\.?|b\.?a\.?|m\.?a\.?|associate['’]?s? degree|degree|diploma)(?:\s|$|[,.;:)])",
            )
            .unwrap()
        });
        // "Bachelor of Science in Physics" names its field after "in".
        let in_field = IN_FIELD_RE.get_or_init(|| field_regex("in"));
        let of_field = OF_FIELD_RE.get_or_init(|| field_regex("of"));

        let mut entries = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            let Some(m) = degree.find(line) else {
                continue;
            };
            let rest = &line[m.start()..];
            let entry = in_field
                .captures(rest)
                .or_else(|| of_field.captures(rest))
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_else(|| line.to_string());
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

fn field_regex(preposition: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)\b{}\s+([a-z][a-z &/-]*?[a-z])\s*(?:$|[,.;:()]|\bor\b|\band\b|\bfrom\b|\bwith\b|\bat\b)",
        preposition
    ))
    .unwrap()
}
