pub fn run() -> anyhow::Result<()> {
    println!("resumatch {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF and feature based resume ranking");
    Ok(())
}
