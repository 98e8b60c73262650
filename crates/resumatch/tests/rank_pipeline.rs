mod common;

use common::{candidate, default_matcher, sample_store, JOB_DESCRIPTION, RESUMES};
use resumatch_core::{DocumentStore, Experience, MatchSummary, Query, QueryError};

#[test]
fn test_one_result_per_candidate_with_contiguous_ranks() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);

    let results = matcher.query(&store, JOB_DESCRIPTION).unwrap();

    assert_eq!(results.len(), RESUMES.len());
    let ranks: Vec<_> = results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    for r in &results {
        assert!((0.0..=1.0).contains(&r.score), "score out of range: {}", r.score);
        assert!((0.0..=1.0).contains(&r.content_similarity));
        assert!((0.0..=100.0).contains(&r.skill_match_fraction));
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_best_fit_ranks_first() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);

    let results = matcher.query(&store, JOB_DESCRIPTION).unwrap();
    let order: Vec<_> = results.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(order, vec!["alice.txt", "carol.txt", "bob.txt"]);

    let alice = &results[0];
    assert_eq!(alice.matching_skills, vec!["docker", "python", "sql"]);
    assert_eq!(alice.skill_match_fraction, 100.0);
    assert!(alice.experience_match.meets_minimum);
    assert_eq!(alice.experience_match.years_difference, 3.0);
    assert!(alice.education_match);

    let bob = &results[2];
    assert!(bob.matching_skills.is_empty());
    assert!(!bob.experience_match.meets_minimum);
    assert!(!bob.education_match);
}

#[test]
fn test_reference_scenario_through_store() {
    let matcher = default_matcher();
    let store = DocumentStore::new();
    store.put(candidate(
        "a.txt",
        "python sql developer",
        &["Python", "SQL"],
        3.0,
        &["BSc Computer Science"],
    ));
    let query = Query::new(
        "python sql go developer",
        ["Python", "SQL", "Go"].map(String::from),
        Experience::new(2.0),
        vec!["computer science".to_string()],
    );

    let results = matcher.query_with(&store, &query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].skill_match_fraction, 66.67);
    assert!(results[0].experience_match.meets_minimum);
    assert!(results[0].education_match);
    assert_eq!(results[0].rank, 1);
}

#[test]
fn test_identical_text_has_full_content_similarity() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);
    matcher
        .ingest_text(&store, "echo.txt", "Python, SQL! Docker?".to_string())
        .unwrap();

    let results = matcher.query(&store, "python sql docker").unwrap();
    let echo = results.iter().find(|r| r.identifier == "echo.txt").unwrap();
    assert!((echo.content_similarity - 1.0).abs() < 1e-9);
}

#[test]
fn test_equal_scores_ordered_by_identifier() {
    let matcher = default_matcher();
    let store = DocumentStore::new();
    for id in ["zeta.txt", "alpha.txt"] {
        matcher
            .ingest_text(&store, id, "Rust developer, 5 years".to_string())
            .unwrap();
    }

    let results = matcher.query(&store, "Rust developer").unwrap();
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].identifier, "alpha.txt");
    assert_eq!(results[0].rank, 1);
    assert_eq!(results[1].identifier, "zeta.txt");
    assert_eq!(results[1].rank, 2);
}

#[test]
fn test_queries_are_deterministic() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);

    let first = matcher.query(&store, JOB_DESCRIPTION).unwrap();
    let second = matcher.query(&store, JOB_DESCRIPTION).unwrap();

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a.content_similarity.to_bits(), b.content_similarity.to_bits());
    }
}

#[test]
fn test_reingesting_same_document_is_idempotent() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);
    let before = matcher.query(&store, JOB_DESCRIPTION).unwrap();

    let (name, text) = RESUMES[0];
    matcher.ingest(&store, name, text.as_bytes(), name).unwrap();

    let after = matcher.query(&store, JOB_DESCRIPTION).unwrap();
    assert_eq!(store.len(), RESUMES.len());
    assert_eq!(before, after);
}

#[test]
fn test_empty_store_has_no_candidates() {
    let matcher = default_matcher();
    let store = DocumentStore::new();
    let err = matcher.query(&store, JOB_DESCRIPTION).unwrap_err();
    assert!(matches!(err, QueryError::NoCandidates));
}

#[test]
fn test_query_during_concurrent_ingestion() {
    let matcher = default_matcher();
    let store = DocumentStore::new();
    matcher
        .ingest_text(&store, "seed.txt", "Python developer".to_string())
        .unwrap();

    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..20 {
                let id = format!("cv-{}.txt", i);
                matcher
                    .ingest_text(&store, &id, format!("Python and SQL, {} years", i))
                    .unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..20 {
                let results = matcher.query(&store, "Python SQL").unwrap();
                assert!(!results.is_empty() && results.len() <= 21);
                let ranks: Vec<_> = results.iter().map(|r| r.rank).collect();
                assert_eq!(ranks, (1..=results.len()).collect::<Vec<_>>());
            }
        });
    });

    assert_eq!(store.len(), 21);
}

#[test]
fn test_summary_over_sample_results() {
    let matcher = default_matcher();
    let store = sample_store(&matcher);
    let query = matcher.analyze(JOB_DESCRIPTION).unwrap();
    let results = matcher.query_with(&store, &query).unwrap();

    let summary = MatchSummary::from_results(&results, &query).unwrap();
    assert_eq!(summary.total_candidates, 3);
    assert_eq!(summary.required_years, 3.0);
    assert!((summary.experience_match_rate - 200.0 / 3.0).abs() < 1e-9);
    assert!((summary.education_match_rate - 100.0 / 3.0).abs() < 1e-9);

    let years: Vec<_> = summary
        .experience_distribution
        .iter()
        .map(|p| (p.identifier.as_str(), p.years))
        .collect();
    assert_eq!(years, vec![("alice.txt", 6.0), ("carol.txt", 4.0), ("bob.txt", 2.0)]);
}
