use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use ndr_config::Config;
use ndr_core::RedactionReport;
use ndr_engine::{Pipeline, RedactRequest, is_batch_output};
use ndr_sources::{expand_glob, is_glob};
use tracing::debug;

pub async fn handle(
    config: &Config,
    sources: Vec<String>,
    names: Vec<String>,
    name_list: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let paths = resolve_sources(&sources).await?;
    if output.is_some() && paths.len() > 1 {
        anyhow::bail!("--output only applies to a single source ({} given)", paths.len());
    }

    let mut client_names = collect_names(names, name_list.as_deref());
    if client_names.is_empty() && std::io::stdin().is_terminal() {
        client_names = prompt_for_names()?;
    }
    debug!(names = client_names.len(), sources = paths.len(), "Starting redaction");

    let pipeline = Pipeline::new(config)?;
    let reports = if let [source] = paths.as_slice() {
        let request = RedactRequest {
            source: source.clone(),
            client_names,
            output,
        };
        vec![pipeline.run(request).await?]
    } else {
        pipeline.run_batch(&paths, &client_names).await?
    };

    if json {
        match reports.as_slice() {
            [report] => println!("{}", serde_json::to_string_pretty(report)?),
            _ => println!("{}", serde_json::to_string_pretty(&reports)?),
        }
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

/// Expand globs; plain paths are passed through for the pipeline to check
///
/// Earlier batch outputs matched by a glob are skipped.
async fn resolve_sources(sources: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for source in sources {
        if is_glob(source) {
            let matched: Vec<PathBuf> = expand_glob(source)
                .await?
                .into_iter()
                .filter(|path| !is_batch_output(path))
                .collect();
            if matched.is_empty() {
                anyhow::bail!("No files match '{}'", source);
            }
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(source));
        }
    }
    Ok(paths)
}

/// Merge `--name` values with a comma-separated `--names` list
fn collect_names(names: Vec<String>, name_list: Option<&str>) -> Vec<String> {
    let mut all: Vec<String> = names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    if let Some(list) = name_list {
        all.extend(split_names(list));
    }
    all
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

fn prompt_for_names() -> Result<Vec<String>> {
    print!("Enter client names to redact (comma-separated, blank for none): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(split_names(&line))
}

fn print_report(report: &RedactionReport) {
    println!("✓ Redacted {}", report.source_path);
    println!("  Output: {}", report.output_path);
    println!("{}", report.summary);
    println!("  {} source: {}", report.algorithm, report.source_hash);
    println!("  {} output: {}", report.algorithm, report.output_hash);
}
