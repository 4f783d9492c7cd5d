//! Page-description (.pdf) extraction

use std::path::Path;

use async_trait::async_trait;
use lopdf::Document;
use ndr_core::{Error, Result};
use tracing::debug;

use crate::handler::SourceHandler;

pub struct PdfHandler;

#[async_trait]
impl SourceHandler for PdfHandler {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        extract_pdf_text(&bytes)
    }
}

/// Extract the text of every page, in page order, one page per chunk
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| Error::Extraction(format!("Not a readable PDF: {}", e)))?;

    if doc.is_encrypted() {
        return Err(Error::Extraction(
            "Encrypted PDF documents are not supported".to_string(),
        ));
    }

    // BTreeMap keyed by page number, so already in order
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    let mut chunks = Vec::with_capacity(pages.len());

    for page in &pages {
        let text = doc
            .extract_text(&[*page])
            .map_err(|e| Error::Extraction(format!("Page {}: {}", page, e)))?;
        chunks.push(text);
    }

    debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(chunks.join("\n"))
}
