//! Ingestion and query paths over an explicitly passed store

use crate::config::MatcherConfig;
use crate::error::{ConfigError, IngestError, QueryError};
use crate::ranker;
use crate::scorer::CompositeScorer;
use crate::store::DocumentStore;
use crate::types::{Candidate, MatchResult, Query};
use resumatch_extract::{ExtractError, FeatureExtractor, RuleBasedExtractor};
use resumatch_index::TfIdfSpace;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Matching engine. Stateless apart from its extractor and weights; the
/// candidate store is supplied on every call.
#[derive(Debug)]
pub struct Matcher<E = RuleBasedExtractor> {
    extractor: E,
    scorer: CompositeScorer,
}

impl Matcher<RuleBasedExtractor> {
    /// Matcher backed by the rule-based extractor.
    pub fn from_config(config: &MatcherConfig) -> Result<Self, ConfigError> {
        Self::new(
            RuleBasedExtractor::with_config(config.extractor.clone()),
            config,
        )
    }
}

impl<E: FeatureExtractor> Matcher<E> {
    pub fn new(extractor: E, config: &MatcherConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor,
            scorer: CompositeScorer::new(config.weights)?,
        })
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Extract text and features from a document and store it under
    /// `identifier`. Nothing is stored unless every step succeeds.
    pub fn ingest(
        &self,
        store: &DocumentStore,
        identifier: &str,
        raw_bytes: &[u8],
        filename: &str,
    ) -> Result<Arc<Candidate>, IngestError> {
        if identifier.is_empty() {
            return Err(IngestError::EmptyIdentifier);
        }
        let text = self
            .extractor
            .extract_text(raw_bytes, filename)
            .map_err(|e| IngestError::from_extract(identifier, e))?;
        self.ingest_text(store, identifier, text)
    }

    /// Ingest already-extracted text.
    pub fn ingest_text(
        &self,
        store: &DocumentStore,
        identifier: &str,
        text: String,
    ) -> Result<Arc<Candidate>, IngestError> {
        if identifier.is_empty() {
            return Err(IngestError::EmptyIdentifier);
        }
        let feature_err = |source| IngestError::FeatureExtraction {
            identifier: identifier.to_string(),
            source,
        };

        let skills = self.extractor.extract_skills(&text).map_err(feature_err)?;
        let experience = self
            .extractor
            .extract_experience(&text)
            .map_err(feature_err)?;
        let education = self
            .extractor
            .extract_education(&text)
            .map_err(feature_err)?;

        let candidate = Candidate::new(identifier, text, skills, experience, education);
        candidate
            .validate()
            .map_err(|reason| feature_err(ExtractError::Feature(reason)))?;

        info!(
            identifier,
            skills = candidate.skills.len(),
            years = candidate.experience.minimum_years,
            education = candidate.education.len(),
            "ingested candidate"
        );
        Ok(store.put(candidate))
    }

    /// Derive the structured features of a job description.
    pub fn analyze(&self, job_text: &str) -> Result<Query, QueryError> {
        let skills = self
            .extractor
            .extract_skills(job_text)
            .map_err(QueryError::FeatureExtraction)?;
        let experience = self
            .extractor
            .extract_experience(job_text)
            .map_err(QueryError::FeatureExtraction)?;
        let education = self
            .extractor
            .extract_education(job_text)
            .map_err(QueryError::FeatureExtraction)?;
        Ok(Query::new(job_text, skills, experience, education))
    }

    /// Score and rank every stored candidate against `job_text`.
    pub fn query(
        &self,
        store: &DocumentStore,
        job_text: &str,
    ) -> Result<Vec<MatchResult>, QueryError> {
        let query = self.analyze(job_text)?;
        self.query_with(store, &query)
    }

    /// Like [`Matcher::query`] with features already derived.
    pub fn query_with(
        &self,
        store: &DocumentStore,
        query: &Query,
    ) -> Result<Vec<MatchResult>, QueryError> {
        let start = Instant::now();
        let snapshot = store.get_all();
        if snapshot.is_empty() {
            return Err(QueryError::NoCandidates);
        }

        let space = TfIdfSpace::fit(
            &query.text,
            snapshot
                .iter()
                .map(|(id, c)| (id.as_str(), c.raw_text.as_str())),
        )?;
        debug!(
            candidates = snapshot.len(),
            vocabulary = space.vocabulary_len(),
            "built query corpus"
        );

        let results = snapshot
            .values()
            .zip(space.similarities())
            .map(|(candidate, (_, similarity))| self.scorer.score(candidate, query, similarity))
            .collect::<Result<Vec<_>, _>>()?;

        let ranked = ranker::rank(results);
        info!(
            candidates = ranked.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "ranked candidates"
        );
        Ok(ranked)
    }
}
