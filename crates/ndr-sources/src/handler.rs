//! Source handler trait and registry

use std::path::Path;

use async_trait::async_trait;
use ndr_core::{Error, Result};
use tracing::debug;

use crate::docx::DocxHandler;
use crate::pdf::PdfHandler;
use crate::text::TextHandler;

/// Lower-cased file extension, if any
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Trait for extracting plain text from one document format
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// Short format name used in logs
    fn name(&self) -> &'static str;

    /// Lower-case extensions this handler accepts
    fn extensions(&self) -> &'static [&'static str];

    /// Check if this handler can extract the given file
    fn can_handle(&self, path: &Path) -> bool {
        extension_of(path)
            .map(|ext| self.extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// Extract the full text of the file
    async fn extract(&self, path: &Path) -> Result<String>;
}

/// Dispatches a path to the handler for its extension
pub struct SourceHandlerRegistry {
    handlers: Vec<Box<dyn SourceHandler>>,
}

impl SourceHandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(TextHandler),
                Box::new(DocxHandler),
                Box::new(PdfHandler),
            ],
        }
    }

    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.handlers
            .iter()
            .flat_map(|h| h.extensions().iter().copied())
            .collect()
    }

    /// Handler for `path`, or `UnsupportedFormat`
    pub fn handler_for(&self, path: &Path) -> Result<&dyn SourceHandler> {
        self.handlers
            .iter()
            .find(|h| h.can_handle(path))
            .map(|h| &**h)
            .ok_or_else(|| {
                let ext = extension_of(path).unwrap_or_else(|| "(none)".to_string());
                Error::UnsupportedFormat(format!(
                    "'{}' (supported: {})",
                    ext,
                    self.supported_extensions().join(", ")
                ))
            })
    }

    /// Check a path is readable and has a supported extension
    pub fn check(&self, path: &Path) -> Result<&dyn SourceHandler> {
        if !path.is_file() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        self.handler_for(path)
    }

    /// Extract text from `path` with the matching handler
    pub async fn extract(&self, path: &Path) -> Result<String> {
        let handler = self.check(path)?;
        let text = handler.extract(path).await?;
        debug!(
            format = handler.name(),
            chars = text.len(),
            "Extracted text from {}",
            path.display()
        );
        Ok(text)
    }
}

impl Default for SourceHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
