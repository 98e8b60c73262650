use resumatch_core::MatcherConfig;

pub fn run() -> anyhow::Result<()> {
    println!("{}", default_config_json()?);
    Ok(())
}

fn default_config_json() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&MatcherConfig::new())?)
}
