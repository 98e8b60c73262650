use anyhow::Context;
use resumatch_core::{FeatureExtractor, RuleBasedExtractor};
use std::path::Path;

pub fn run(file: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config)?;
    let extractor = RuleBasedExtractor::with_config(config.extractor);
    let report = inspect(&extractor, file)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn inspect(extractor: &impl FeatureExtractor, file: &Path) -> anyhow::Result<serde_json::Value> {
    let identifier = super::identifier_for(file);
    let bytes =
        std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let text = extractor.extract_text(&bytes, &identifier)?;

    let skills = extractor.extract_skills(&text)?;
    let experience = extractor.extract_experience(&text)?;
    let education = extractor.extract_education(&text)?;

    Ok(serde_json::json!({
        "identifier": identifier,
        "characters": text.chars().count(),
        "skills": skills,
        "experience": experience,
        "education": education,
    }))
}
