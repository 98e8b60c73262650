use anyhow::Context;
use rayon::prelude::*;
use resumatch_core::{DocumentStore, MatchResult, MatchSummary, Matcher, Query};
use resumatch_extract::{extract_text, DocumentFormat};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct RankArgs {
    pub job: Option<PathBuf>,
    pub job_text: Option<String>,
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub json: bool,
}

pub fn run(args: RankArgs) -> anyhow::Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let matcher = Matcher::from_config(&config)?;

    let job_text = match (&args.job_text, &args.job) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_job(path)?,
        (None, None) => anyhow::bail!("either --job or --job-text is required"),
    };

    let files = collect_files(&args.paths)?;
    let store = DocumentStore::new();
    let failures = ingest_all(&matcher, &store, &files);
    for (path, err) in &failures {
        warn!(path = %path.display(), "skipped: {:#}", err);
    }

    let query = matcher.analyze(&job_text)?;
    let results = matcher
        .query_with(&store, &query)
        .with_context(|| format!("ranking {} ingested of {} files", store.len(), files.len()))?;
    let summary = MatchSummary::from_results(&results, &query);

    let shown = match args.top {
        Some(n) => &results[..n.min(results.len())],
        None => &results[..],
    };

    if args.json {
        let output = serde_json::json!({
            "query": query_json(&query),
            "results": shown,
            "summary": summary,
            "skipped": failures.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_table(shown));
        if let Some(summary) = &summary {
            print!("{}", render_summary(summary, &query));
        }
    }
    Ok(())
}

fn read_job(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = extract_text(&bytes, &super::identifier_for(path))
        .with_context(|| format!("extracting job description from {}", path.display()))?;
    Ok(text)
}

/// Expand directories one level deep into their supported files. Explicit
/// file arguments are kept as given so unsupported ones get reported.
/// Later files whose name repeats an earlier identifier are dropped.
fn collect_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(path)
                .with_context(|| format!("listing {}", path.display()))?
            {
                let entry = entry?.path();
                let name = super::identifier_for(&entry);
                if entry.is_file() && DocumentFormat::from_filename(&name).is_ok() {
                    entries.push(entry);
                }
            }
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    let mut seen = HashSet::new();
    files.retain(|path| {
        let fresh = seen.insert(super::identifier_for(path));
        if !fresh {
            warn!(path = %path.display(), "duplicate file name, skipping");
        }
        fresh
    });
    Ok(files)
}

/// Ingest every file in parallel; returns the ones that failed.
fn ingest_all(
    matcher: &Matcher,
    store: &DocumentStore,
    files: &[PathBuf],
) -> Vec<(PathBuf, anyhow::Error)> {
    let failures: Vec<_> = files
        .par_iter()
        .filter_map(|path| {
            ingest_file(matcher, store, path)
                .err()
                .map(|err| (path.clone(), err))
        })
        .collect();
    info!(
        ingested = files.len() - failures.len(),
        failed = failures.len(),
        "ingestion finished"
    );
    failures
}

fn ingest_file(matcher: &Matcher, store: &DocumentStore, path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let identifier = super::identifier_for(path);
    matcher.ingest(store, &identifier, &bytes, &identifier)?;
    Ok(())
}

fn query_json(query: &Query) -> serde_json::Value {
    serde_json::json!({
        "skills": query.skills,
        "experience": query.experience,
        "education": query.education,
    })
}

fn render_table(results: &[MatchResult]) -> String {
    let width = results
        .iter()
        .map(|r| r.identifier.chars().count())
        .max()
        .unwrap_or(0)
        .max("candidate".len());

    let mut out = format!(
        "{:>4}  {:<width$}  {:>6}  {:>7}  {:>6}  {:>9}  {:>3}  matching skills\n",
        "rank", "candidate", "score", "content", "skills", "years +/-", "edu",
    );
    for r in results {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>5.1}%  {:>7.3}  {:>5.1}%  {:>+9.1}  {:>3}  {}\n",
            r.rank,
            r.identifier,
            r.score * 100.0,
            r.content_similarity,
            r.skill_match_fraction,
            r.experience_match.years_difference,
            if r.education_match { "yes" } else { "no" },
            r.matching_skills.join(", "),
        ));
    }
    out
}

fn render_summary(summary: &MatchSummary, query: &Query) -> String {
    let skills: Vec<_> = query.skills.iter().map(String::as_str).collect();
    format!(
        "\nCandidates: {}\nAverage match: {:.1}%\nAverage skill match: {:.1}%\n\
         Experience match: {:.1}% (required {} years)\nEducation match: {:.1}%\n\
         Required skills: {}\n",
        summary.total_candidates,
        summary.average_score,
        summary.average_skill_match,
        summary.experience_match_rate,
        summary.required_years,
        summary.education_match_rate,
        if skills.is_empty() {
            "none found".to_string()
        } else {
            skills.join(", ")
        },
    )
}
