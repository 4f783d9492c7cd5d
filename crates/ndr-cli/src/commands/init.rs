use std::path::Path;

use anyhow::Result;
use ndr_config::Config;

pub fn handle(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;

    println!("✓ Created {}", path.display());
    println!("  Edit [names] default to redact the same parties on every run");

    Ok(())
}
