use resumatch_core::{Candidate, DocumentStore, Experience, Matcher, MatcherConfig};
use std::path::{Path, PathBuf};

pub const JOB_DESCRIPTION: &str = "\
Backend engineer wanted.
We need strong Python and SQL skills, Docker experience is a plus.
At least 3+ years of professional experience.
Bachelor's degree in Computer Science or related field.";

pub const RESUMES: &[(&str, &str)] = &[
    (
        "alice.txt",
        "Alice Smith\nBackend engineer with 6 years of experience.\n\
         Python, SQL, Docker, PostgreSQL.\nBSc Computer Science, 2014",
    ),
    (
        "bob.txt",
        "Bob Jones\nFrontend developer, 2 years.\nJavaScript, React, CSS.\nBA in Design",
    ),
    (
        "carol.txt",
        "Carol White\nData engineer, 4 years.\nPython, Spark, Airflow, SQL.\nMSc in Statistics",
    ),
];

pub fn default_matcher() -> Matcher {
    Matcher::from_config(&MatcherConfig::new()).unwrap()
}

/// Store holding every sample resume.
pub fn sample_store(matcher: &Matcher) -> DocumentStore {
    let store = DocumentStore::new();
    for (name, text) in RESUMES {
        matcher.ingest(&store, name, text.as_bytes(), name).unwrap();
    }
    store
}

/// Candidate with hand-picked features, bypassing extraction.
pub fn candidate(id: &str, text: &str, skills: &[&str], years: f64, education: &[&str]) -> Candidate {
    Candidate::new(
        id,
        text,
        skills.iter().map(|s| s.to_string()),
        Experience::new(years),
        education.iter().map(|s| s.to_string()).collect(),
    )
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
