//! Word-processor (.docx) extraction
//!
//! Reads `word/document.xml` out of the package and emits one line per
//! paragraph. Run text is concatenated, `w:tab` becomes a tab and
//! `w:br`/`w:cr` become newlines.

use std::io::{Cursor, Read};
use std::path::Path;

use async_trait::async_trait;
use lazy_static::lazy_static;
use ndr_core::{Error, Result};
use regex::{Captures, Regex};
use zip::ZipArchive;

use crate::handler::SourceHandler;

const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    static ref PARAGRAPH: Regex =
        Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap();
    static ref PARAGRAPH_PROPS: Regex =
        Regex::new(r"(?s)<w:pPr(?:\s[^>]*)?>.*?</w:pPr>").unwrap();
    static ref RUN_PIECE: Regex = Regex::new(
        r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:(tab|br|cr)(?:\s[^>]*)?/>"
    )
    .unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap();
}

pub struct DocxHandler;

#[async_trait]
impl SourceHandler for DocxHandler {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        extract_docx_text(bytes)
    }
}

/// Extract paragraph text from the bytes of a .docx package
pub fn extract_docx_text(bytes: Vec<u8>) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Extraction(format!("Not a valid .docx package: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| Error::Extraction(format!("Missing {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::Extraction(format!("Unreadable {}: {}", DOCUMENT_PART, e)))?;

    Ok(document_xml_to_text(&xml))
}

fn document_xml_to_text(xml: &str) -> String {
    let paragraphs: Vec<String> = PARAGRAPH
        .captures_iter(xml)
        .map(|caps| caps.get(1).map(|body| paragraph_text(body.as_str())).unwrap_or_default())
        .collect();

    paragraphs.join("\n")
}

fn paragraph_text(body: &str) -> String {
    // Tab stop definitions live in the paragraph properties
    let body = PARAGRAPH_PROPS.replace_all(body, "");
    let mut text = String::new();

    for caps in RUN_PIECE.captures_iter(&body) {
        if let Some(run) = caps.get(1) {
            text.push_str(&decode_entities(run.as_str()));
        } else if let Some(kind) = caps.get(2) {
            match kind.as_str() {
                "tab" => text.push('\t'),
                _ => text.push('\n'),
            }
        }
    }

    text
}

fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => name
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| name.strip_prefix('#').map(|dec| dec.parse::<u32>()))
                    .and_then(|n| n.ok())
                    .and_then(char::from_u32),
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
