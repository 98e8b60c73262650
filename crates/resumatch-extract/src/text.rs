//! Raw bytes to plain text, dispatched on the file extension

use crate::error::ExtractError;
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static DOCX_RUN_RE: OnceLock<Regex> = OnceLock::new();

/// Document formats accepted at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("txt") => Ok(Self::Text),
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            _ => Err(ExtractError::UnsupportedFormat {
                filename: filename.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Text => write!(f, "txt"),
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

/// Extract plain text from a document's bytes.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_filename(filename)?;
    let decode_err = |reason: String| ExtractError::Decode {
        filename: filename.to_string(),
        reason,
    };

    let text = match format {
        DocumentFormat::Text => String::from_utf8(bytes.to_vec())
            .map_err(|e| decode_err(format!("invalid UTF-8: {}", e)))?,
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| decode_err(e.to_string()))?
        }
        DocumentFormat::Docx => docx_text(bytes).map_err(decode_err)?,
    };

    debug!(filename, %format, chars = text.len(), "extracted text");
    Ok(text)
}

/// Paragraph text from `word/document.xml`, one paragraph per line.
fn docx_text(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| e.to_string())?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;

    let re = DOCX_RUN_RE.get_or_init(|| {
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:br/>").unwrap()
    });

    let mut text = String::new();
    for caps in re.captures_iter(&xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape_xml(run.as_str())),
            None if caps[0].starts_with("</w:p") || caps[0].starts_with("<w:br") => {
                text.push('\n')
            }
            None => text.push('\t'),
        }
    }
    Ok(text)
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
