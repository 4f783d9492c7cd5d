use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ndr_config::{Config, OutputConfig};
use ndr_core::RedactionReport;
use ndr_security::{PatternCatalog, Redactor};
use ndr_sources::SourceHandlerRegistry;
use ndr_storage::{DigestAlgorithm, HashLog, HashLogEntry, digest_file};
use tracing::info;

/// Suffix appended to the source file name for batch outputs
pub const BATCH_OUTPUT_SUFFIX: &str = ".redacted.txt";

/// True for files written by a batch run, so they are not redacted again
pub fn is_batch_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(BATCH_OUTPUT_SUFFIX))
}

/// One document to redact
#[derive(Debug, Clone, Default)]
pub struct RedactRequest {
    pub source: PathBuf,
    pub client_names: Vec<String>,
    /// Explicit output path; otherwise derived from the config
    pub output: Option<PathBuf>,
}

/// Outcome of checking a source/output pair against the hash log
#[derive(Debug, Clone)]
pub struct Verification {
    pub algorithm: DigestAlgorithm,
    pub source_hash: String,
    pub output_hash: String,
    pub entry: Option<HashLogEntry>,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        self.entry.is_some()
    }
}

/// Build the pattern catalog described by the config
pub fn catalog_from_config(config: &Config) -> Result<PatternCatalog> {
    let mut catalog = PatternCatalog::standard();
    for tag in &config.patterns.disabled {
        catalog = catalog.without(*tag);
    }
    for extra in &config.patterns.extra {
        catalog.push(extra.tag, &extra.pattern)?;
    }
    Ok(catalog)
}

/// Extract → redact → write → hash → log
pub struct Pipeline {
    source_registry: SourceHandlerRegistry,
    redactor: Redactor,
    hash_log: HashLog,
    algorithm: DigestAlgorithm,
    default_names: Vec<String>,
    output: OutputConfig,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            source_registry: SourceHandlerRegistry::new(),
            redactor: Redactor::new(catalog_from_config(config)?),
            hash_log: HashLog::new(config.hashing.log_path.clone()),
            algorithm: config.hashing.algorithm,
            default_names: config.names.default.clone(),
            output: config.output.clone(),
        })
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    pub fn hash_log(&self) -> &HashLog {
        &self.hash_log
    }

    /// Output path for a single-document run
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        self.output_dir_for(source).join(&self.output.file_name)
    }

    /// Output path for one document of a batch: `<file name>.redacted.txt`
    ///
    /// The source extension is kept so `nda.pdf` and `nda.docx` get
    /// different outputs.
    pub fn batch_output_path_for(&self, source: &Path) -> PathBuf {
        let name = source
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.output_dir_for(source)
            .join(format!("{}{}", name, BATCH_OUTPUT_SUFFIX))
    }

    fn output_dir_for(&self, source: &Path) -> PathBuf {
        match &self.output.directory {
            Some(dir) => dir.clone(),
            None => source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Redact one document and record its digests
    ///
    /// Input and extraction errors abort before anything is written.
    pub async fn run(&self, request: RedactRequest) -> Result<RedactionReport> {
        let source = request.source;
        let text = self.source_registry.extract(&source).await?;

        let names: Vec<&str> = self
            .default_names
            .iter()
            .chain(request.client_names.iter())
            .map(String::as_str)
            .collect();
        let (redacted, summary) = self.redactor.redact_with_summary(&text, &names);

        let output = request
            .output
            .unwrap_or_else(|| self.output_path_for(&source));
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&output, redacted.as_bytes()).await?;
        info!(
            redactions = summary.total(),
            "Redacted {} -> {}",
            source.display(),
            output.display()
        );

        let source_hash = digest_file(self.algorithm, &source).await?;
        let output_hash = digest_file(self.algorithm, &output).await?;

        let report = RedactionReport::new(
            source.display().to_string(),
            output.display().to_string(),
            summary,
        )
        .with_hashes(self.algorithm.as_str(), source_hash, output_hash);

        self.hash_log.append(&HashLogEntry::from(&report)).await?;

        Ok(report)
    }

    /// Redact several documents, one batch-named output per source
    ///
    /// Fails before writing anything if two sources would share an output.
    pub async fn run_batch(
        &self,
        sources: &[PathBuf],
        client_names: &[String],
    ) -> Result<Vec<RedactionReport>> {
        let outputs: Vec<PathBuf> = sources
            .iter()
            .map(|source| self.batch_output_path_for(source))
            .collect();

        let mut seen = HashSet::new();
        for (source, output) in sources.iter().zip(&outputs) {
            if !seen.insert(output) {
                anyhow::bail!(
                    "{} would overwrite another output of this batch ({})",
                    source.display(),
                    output.display()
                );
            }
        }

        let mut reports = Vec::with_capacity(sources.len());
        for (source, output) in sources.iter().zip(outputs) {
            let request = RedactRequest {
                source: source.clone(),
                client_names: client_names.to_vec(),
                output: Some(output),
            };
            reports.push(self.run(request).await?);
        }
        Ok(reports)
    }

    /// Recompute both digests and look for a hash log entry recording them
    pub async fn verify(&self, source: &Path, redacted: &Path) -> Result<Verification> {
        let configured = self.check_with(self.algorithm, source, redacted).await?;
        if configured.is_verified() {
            return Ok(configured);
        }

        // The log may hold runs made under a different algorithm setting
        for algorithm in DigestAlgorithm::ALL {
            if algorithm == self.algorithm {
                continue;
            }
            let other = self.check_with(algorithm, source, redacted).await?;
            if other.is_verified() {
                return Ok(other);
            }
        }

        Ok(configured)
    }

    async fn check_with(
        &self,
        algorithm: DigestAlgorithm,
        source: &Path,
        redacted: &Path,
    ) -> Result<Verification> {
        let source_hash = digest_file(algorithm, source).await?;
        let output_hash = digest_file(algorithm, redacted).await?;

        let entry = self
            .hash_log
            .find(&source_hash, &output_hash)
            .await?
            .filter(|entry| entry.algorithm == algorithm.as_str());

        Ok(Verification {
            algorithm,
            source_hash,
            output_hash,
            entry,
        })
    }
}
