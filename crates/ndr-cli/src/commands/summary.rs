use std::path::Path;

use anyhow::{Context, Result};
use ndr_security::summarize;

pub async fn handle(file: &Path, json: bool) -> Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Could not read {}", file.display()))?;
    let summary = summarize(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    Ok(())
}
