use std::path::Path;

use async_trait::async_trait;
use ndr_core::{Error, Result};

use crate::handler::SourceHandler;

const BOM: char = '\u{feff}';

/// Plain UTF-8 text files
pub struct TextHandler;

#[async_trait]
impl SourceHandler for TextHandler {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt", "text", "md"]
    }

    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        decode_text(bytes)
    }
}

fn decode_text(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::Extraction(format!("File is not valid UTF-8: {}", e)))?;
    Ok(text.strip_prefix(BOM).map(str::to_string).unwrap_or(text))
}
