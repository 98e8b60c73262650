use criterion::{criterion_group, criterion_main, Criterion};
use resumatch_core::{DocumentStore, Matcher, MatcherConfig};
use resumatch_index::TfIdfSpace;
use std::hint::black_box;

const SKILLS: &[&str] = &[
    "Python", "SQL", "Rust", "Docker", "Kubernetes", "React", "AWS", "Kafka", "Redis", "Go",
];

fn resume(i: usize) -> String {
    format!(
        "Candidate {i}\nSoftware engineer with {} years of experience.\n\
         Skills: {}, {}, {}.\nBSc in Computer Science",
        i % 12,
        SKILLS[i % SKILLS.len()],
        SKILLS[(i + 3) % SKILLS.len()],
        SKILLS[(i + 7) % SKILLS.len()],
    )
}

fn bench_query_100_candidates(c: &mut Criterion) {
    let matcher = Matcher::from_config(&MatcherConfig::new()).unwrap();
    let store = DocumentStore::new();
    for i in 0..100 {
        matcher
            .ingest_text(&store, &format!("cv{}.txt", i), resume(i))
            .unwrap();
    }
    let job = "Backend engineer, 5+ years. Python, SQL and Kubernetes. \
               Bachelor's degree in Computer Science";

    c.bench_function("query_100_candidates", |b| {
        b.iter(|| matcher.query(&store, black_box(job)).unwrap());
    });
}

fn bench_ingest_text(c: &mut Criterion) {
    let matcher = Matcher::from_config(&MatcherConfig::new()).unwrap();
    let store = DocumentStore::new();
    let text = resume(7);

    c.bench_function("ingest_text", |b| {
        b.iter(|| {
            matcher
                .ingest_text(&store, "cv.txt", black_box(text.clone()))
                .unwrap()
        });
    });
}

fn bench_tfidf_fit(c: &mut Criterion) {
    let docs: Vec<(String, String)> = (0..100).map(|i| (format!("cv{}.txt", i), resume(i))).collect();

    c.bench_function("tfidf_fit_100_docs", |b| {
        b.iter(|| {
            TfIdfSpace::fit(
                black_box("python sql kubernetes engineer"),
                docs.iter().map(|(id, text)| (id.as_str(), text.as_str())),
            )
            .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_query_100_candidates,
    bench_ingest_text,
    bench_tfidf_fit
);
criterion_main!(benches);
