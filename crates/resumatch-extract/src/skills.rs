//! Built-in skill vocabulary and boundary-aware term matching

use std::collections::BTreeSet;

pub(crate) static DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "rust", "golang", "go", "c++", "c#", "ruby",
    "php", "scala", "kotlin", "swift", "objective-c", "r", "matlab", "perl", "haskell", "elixir",
    "bash", "sql", "html", "css",
    // Frameworks and runtimes
    "react", "angular", "vue", "next.js", "node.js", "express", "django", "flask", "fastapi",
    "spring", "spring boot", "rails", ".net", "tokio", "pandas", "numpy", "scikit-learn",
    "tensorflow", "pytorch", "spark", "hadoop", "kafka", "airflow",
    // Data stores
    "postgresql", "postgres", "mysql", "sqlite", "mongodb", "redis", "elasticsearch",
    "cassandra", "dynamodb", "snowflake",
    // Infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins", "linux",
    "git", "ci/cd", "graphql", "rest", "grpc", "microservices",
    // Practices and domains
    "machine learning", "deep learning", "nlp", "computer vision", "data analysis",
    "data engineering", "devops", "agile", "scrum", "tdd", "distributed systems",
    // Professional
    "project management", "leadership", "communication", "mentoring", "stakeholder management",
];

/// Canonical form used for case-insensitive skill dedup.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Every vocabulary term occurring in `text` as a standalone term.
///
/// Whitespace in `text` is collapsed the same way as in the terms. A hit
/// counts only when the characters on either side are neither alphanumeric
/// nor '+' or '#', so "go" does not match inside "google" and "c" does not
/// match inside "c++".
pub(crate) fn find_skills<'a, I>(text: &str, vocabulary: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let haystack = normalize_skill(text);
    vocabulary
        .into_iter()
        .map(normalize_skill)
        .filter(|term| !term.is_empty() && contains_term(&haystack, term))
        .collect()
}

fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_term_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !is_term_char(c));
        before_ok && after_ok
    })
}

fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Machine   Learning "), "machine learning");
        assert_eq!(normalize_skill("SQL"), "sql");
    }

    #[test]
    fn test_find_skills_boundaries() {
        let found = find_skills(
            "Worked at Google with Go, C++ and node.js; some R.",
            DEFAULT_SKILLS.iter().copied(),
        );
        assert!(found.contains("go"));
        assert!(found.contains("c++"));
        assert!(found.contains("node.js"));
        assert!(found.contains("r"));
        assert!(!found.contains("c#"));
        assert!(!found.contains("rust"));
    }

    #[test]
    fn test_find_multi_word_skill() {
        let found = find_skills(
            "Background in Machine\u{20}Learning and distributed systems",
            DEFAULT_SKILLS.iter().copied(),
        );
        assert!(found.contains("machine learning"));
        assert!(found.contains("distributed systems"));
    }

    #[test]
    fn test_multi_word_skill_across_line_break() {
        let found = find_skills(
            "Machine\nLearning, distributed  systems",
            DEFAULT_SKILLS.iter().copied(),
        );
        assert!(found.contains("machine learning"));
        assert!(found.contains("distributed systems"));
    }

    #[test]
    fn test_plus_and_hash_are_term_chars() {
        let found = find_skills("C++ and C# only", ["c", "c++", "c#"]);
        let expected: BTreeSet<String> =
            ["c#", "c++"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_no_match_inside_words() {
        let found = find_skills("trusted gopher", ["rust", "go"]);
        assert!(found.is_empty());
    }
}
