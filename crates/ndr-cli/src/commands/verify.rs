use std::path::Path;

use anyhow::Result;
use ndr_config::Config;
use ndr_engine::Pipeline;

pub async fn handle(config: &Config, source: &Path, redacted: &Path) -> Result<()> {
    let pipeline = Pipeline::new(config)?;
    let verification = pipeline.verify(source, redacted).await?;

    match &verification.entry {
        Some(entry) => {
            println!("✓ Verified against hash log");
            println!("  Run: {}", entry.run_id);
            println!("  Recorded: {}", entry.created_at);
            println!("  Algorithm: {}", verification.algorithm);
            println!("  Source: {}", verification.source_hash);
            println!("  Output: {}", verification.output_hash);
            Ok(())
        }
        None => {
            eprintln!("✗ No matching entry in {}", pipeline.hash_log().path().display());
            eprintln!("  Source ({}): {}", verification.algorithm, verification.source_hash);
            eprintln!("  Output ({}): {}", verification.algorithm, verification.output_hash);
            anyhow::bail!("{} does not match a recorded redaction of {}", redacted.display(), source.display())
        }
    }
}
